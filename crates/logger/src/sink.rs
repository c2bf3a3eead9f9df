//! The seam to the host logging facility

use crate::method::Method;
use serde_json::Value;

/// The host-supplied base logger
///
/// The wrapped logger delegates every surviving call here. Implementations
/// receive the canonical method the caller invoked and the final argument
/// sequence, prefix and styling already applied.
pub trait Sink: Send + Sync + 'static {
    /// Emit one call's argument sequence
    fn emit(&self, method: Method, args: &[Value]);

    /// Flush any buffered output
    fn flush(&self) {}
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn emit(&self, _method: Method, _args: &[Value]) {}
}
