//! The wrapped logger and its scoped instances

use crate::color::{self, ColorPolicy};
use crate::method::{Method, MethodSet};
use crate::prefix::PrefixFn;
use crate::sink::Sink;
use crate::template;
use crate::validate;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// State shared by every view of one wrapped logger
pub(crate) struct Shared {
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) enabled: AtomicBool,
    pub(crate) prefix: PrefixFn,
    pub(crate) allowed: MethodSet,
    pub(crate) colors: ColorPolicy,
}

/// Configuration captured when a scoped instance is created, immutable for
/// the instance's lifetime
struct Scope {
    class_name: Option<String>,
    enabled: Option<bool>,
    color: Option<String>,
    template: bool,
}

/// Options for creating a scoped logger instance
///
/// Every field is independent; a default value leaves the corresponding
/// behavior inherited from the wrapped logger.
#[derive(Debug, Clone, Default)]
pub struct InstanceOptions {
    /// Name included in the prefix of everything the instance emits
    pub class_name: Option<String>,
    /// Supersedes the global enabled flag for this instance's calls
    pub enabled: Option<bool>,
    /// CSS-like color declaration applied to single-string calls
    pub color: Option<String>,
    /// Expand `{dotted.path}` tokens in two-argument calls
    pub template: bool,
}

impl InstanceOptions {
    /// Options carrying only a class name
    pub fn named(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// Force this instance on or off regardless of the global flag
    pub fn with_enabled(mut self, flag: bool) -> Self {
        self.enabled = Some(flag);
        self
    }

    /// Style single-string calls with a CSS-like color declaration
    pub fn with_color(mut self, spec: impl Into<String>) -> Self {
        self.color = Some(spec.into());
        self
    }

    /// Enable template expansion for two-argument calls
    pub fn with_templates(mut self) -> Self {
        self.template = true;
        self
    }
}

/// Conversion into the argument sequence of one log call
pub trait IntoArgs {
    /// The argument sequence this value represents
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for &str {
    fn into_args(self) -> Vec<Value> {
        vec![Value::String(self.to_string())]
    }
}

impl IntoArgs for String {
    fn into_args(self) -> Vec<Value> {
        vec![Value::String(self)]
    }
}

impl IntoArgs for Value {
    fn into_args(self) -> Vec<Value> {
        vec![self]
    }
}

impl IntoArgs for Vec<Value> {
    fn into_args(self) -> Vec<Value> {
        self
    }
}

impl<'a> IntoArgs for (&'a str, Value) {
    fn into_args(self) -> Vec<Value> {
        vec![Value::String(self.0.to_string()), self.1]
    }
}

impl IntoArgs for (String, Value) {
    fn into_args(self) -> Vec<Value> {
        vec![Value::String(self.0), self.1]
    }
}

/// A view of the wrapped logger
///
/// The root view comes from [`Config::wrap`]; scoped views come from
/// [`Logger::instance`]. Every view exposes the full canonical method set;
/// methods outside the configured allow-list are silent no-ops, never
/// missing. Views are cheap to clone and share one enabled flag.
///
/// [`Config::wrap`]: crate::Config::wrap
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
    scope: Option<Arc<Scope>>,
    exposed: MethodSet,
}

impl Logger {
    pub(crate) fn wrap_root(shared: Arc<Shared>) -> Self {
        let exposed = shared.allowed;
        Self {
            shared,
            scope: None,
            exposed,
        }
    }

    /// Emit through the `log` method
    pub fn log(&self, args: impl IntoArgs) {
        self.call(Method::Log, args.into_args());
    }

    /// Emit through the `info` method
    pub fn info(&self, args: impl IntoArgs) {
        self.call(Method::Info, args.into_args());
    }

    /// Emit through the `warn` method
    pub fn warn(&self, args: impl IntoArgs) {
        self.call(Method::Warn, args.into_args());
    }

    /// Emit through the `debug` method
    pub fn debug(&self, args: impl IntoArgs) {
        self.call(Method::Debug, args.into_args());
    }

    /// Emit through the `error` method
    pub fn error(&self, args: impl IntoArgs) {
        self.call(Method::Error, args.into_args());
    }

    /// Enable or disable logging for this wrapped logger and every view of
    /// it that carries no override
    pub fn set_enabled(&self, flag: bool) {
        self.shared.enabled.store(flag, Ordering::Relaxed);
    }

    /// The current global enabled flag
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::Relaxed)
    }

    /// Flush the underlying sink
    pub fn flush(&self) {
        self.shared.sink.flush();
    }

    /// Create a scoped instance
    ///
    /// The instance captures its options immutably. When the instance's
    /// override disagrees with the global flag at creation time, one
    /// diagnostic line is emitted directly through the sink, bypassing
    /// suppression.
    pub fn instance(&self, options: InstanceOptions) -> Logger {
        let class_name = validate::clean_name(options.class_name.as_deref());
        self.print_override_diagnostic(class_name.as_deref(), options.enabled);
        let scope = Scope {
            class_name,
            enabled: options.enabled,
            color: options.color,
            template: options.template,
        };
        Logger {
            shared: self.shared.clone(),
            scope: Some(Arc::new(scope)),
            exposed: self.shared.allowed,
        }
    }

    /// Shorthand for an instance carrying only a class name
    pub fn named(&self, class_name: impl Into<String>) -> Logger {
        self.instance(InstanceOptions::named(class_name))
    }

    // The diagnostic goes through the raw sink so an override that enables a
    // single instance is announced even while logging is globally off. It is
    // still subject to the configured allow-list for `log`.
    fn print_override_diagnostic(&self, class_name: Option<&str>, enabled_override: Option<bool>) {
        if !self.shared.allowed.contains(Method::Log) {
            return;
        }
        let target = class_name.unwrap_or("this instance");
        let line = match enabled_override {
            Some(true) if !self.is_enabled() => {
                format!("[OVERRIDE] LOGGING ENABLED - logging enabled for {target}")
            }
            Some(false) if self.is_enabled() => {
                format!("[OVERRIDE] LOGGING DISABLED - logging disabled for {target}")
            }
            _ => return,
        };
        let prefix = (self.shared.prefix)(None);
        self.shared
            .sink
            .emit(Method::Log, &[Value::String(format!("{prefix}{line}"))]);
    }

    fn active(&self) -> bool {
        match self.scope.as_ref().and_then(|scope| scope.enabled) {
            Some(enabled_override) => enabled_override,
            None => self.is_enabled(),
        }
    }

    fn effective_spec(&self, method: Method) -> Option<&str> {
        self.scope
            .as_deref()
            .and_then(|scope| scope.color.as_deref())
            .or_else(|| self.shared.colors.method_spec(method))
    }

    fn call(&self, method: Method, mut args: Vec<Value>) {
        if !self.exposed.contains(method) {
            return;
        }
        if !self.active() {
            return;
        }

        let scope = self.scope.as_deref();
        let prefix = (self.shared.prefix)(scope.and_then(|s| s.class_name.as_deref()));

        if scope.is_some_and(|s| s.template) && args.len() == 2 {
            args = template::expand_pair(args);
        }

        // A lone string argument is eligible for styling; everything else
        // gets the prefix inserted ahead of the original arguments.
        if args.len() == 1 {
            if let Value::String(message) = &args[0] {
                if let Some(spec) = self.effective_spec(method) {
                    let styled =
                        color::colorify(message, spec, &prefix, self.shared.colors.supported);
                    if styled.len() == 2 {
                        self.shared.sink.emit(method, &styled);
                        return;
                    }
                }
            }
        }

        args.insert(0, Value::String(prefix));
        self.shared.sink.emit(method, &args);
    }
}
