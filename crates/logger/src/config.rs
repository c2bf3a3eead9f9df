//! Configuration surface for building a wrapped logger

use crate::color::{ColorMode, ColorPolicy};
use crate::logger::{Logger, Shared};
use crate::method::{Method, MethodSet};
use crate::prefix::{self, PrefixFn};
use crate::sink::Sink;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Setup-time configuration, consumed by the single [`Config::wrap`] call
///
/// Defaults: logging disabled, every canonical method allowed, the default
/// prefix, automatic color detection with the built-in per-method colors.
#[derive(Clone)]
pub struct Config {
    enabled: bool,
    methods: MethodSet,
    prefix: PrefixFn,
    color_mode: ColorMode,
    use_default_colors: bool,
    method_colors: HashMap<Method, String>,
}

impl Config {
    /// A configuration with the defaults above
    pub fn new() -> Self {
        Self {
            enabled: false,
            methods: MethodSet::all(),
            prefix: prefix::default_prefix_fn(),
            color_mode: ColorMode::Auto,
            use_default_colors: true,
            method_colors: HashMap::new(),
        }
    }

    /// Set the initial global enabled flag
    ///
    /// Keep this off for production deployments; [`Logger::set_enabled`]
    /// can still toggle at runtime.
    pub fn enable_globally(mut self, flag: bool) -> Self {
        self.enabled = flag;
        self
    }

    /// Replace the allow-list used by every view built afterwards
    ///
    /// Methods outside the list remain callable but do nothing.
    pub fn restrict_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Replace the prefix formatter wholesale
    ///
    /// The last replacement wins; the previous formatter is not retained.
    pub fn override_prefix(
        mut self,
        prefix: impl Fn(Option<&str>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.prefix = Arc::new(prefix);
        self
    }

    /// Control when styled output is produced
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Apply the built-in per-method colors to calls without an instance
    /// color (on by default)
    pub fn use_default_colors(mut self, flag: bool) -> Self {
        self.use_default_colors = flag;
        self
    }

    /// Override the color declaration for one canonical method
    pub fn method_color(mut self, method: Method, spec: impl Into<String>) -> Self {
        self.method_colors.insert(method, spec.into());
        self
    }

    /// Wrap the host-supplied sink, producing the enhanced logger
    ///
    /// Intended to be called exactly once per sink at application startup;
    /// configuration is frozen into the wrapped logger at this point.
    pub fn wrap(self, sink: Arc<dyn Sink>) -> Logger {
        let shared = Arc::new(Shared {
            sink,
            enabled: AtomicBool::new(self.enabled),
            prefix: self.prefix,
            allowed: self.methods,
            colors: ColorPolicy::resolve(
                self.color_mode,
                self.use_default_colors,
                self.method_colors,
            ),
        });
        let logger = Logger::wrap_root(shared);
        if logger.is_enabled() {
            logger.log("CONFIG: LOGGING ENABLED GLOBALLY");
        }
        logger
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
