//! Test support utilities
//!
//! Provides a sink that records every delegated call in memory so tests can
//! assert on exactly what reached the host logging facility.

use crate::method::Method;
use crate::sink::Sink;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One delegated call as the sink received it
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The canonical method invoked
    pub method: Method,
    /// The final argument sequence, prefix and styling already applied
    pub args: Vec<Value>,
}

impl Call {
    /// The call rendered as one line of text
    pub fn text(&self) -> String {
        self.args
            .iter()
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sink that captures all delegated calls for assertions
#[derive(Clone, Default)]
pub struct CaptureSink {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CaptureSink {
    /// Create a new capture sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured call, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of captured calls
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether any captured call contains `text` in its rendered form
    pub fn contains(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| call.text().contains(text))
    }

    /// Discard captured calls
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Sink for CaptureSink {
    fn emit(&self, method: Method, args: &[Value]) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Call {
                method,
                args: args.to_vec(),
            });
        }
    }

    fn flush(&self) {
        // No-op for in-memory sink
    }
}
