//! Unobtrusive enhancement for a host-supplied logging facility
//!
//! This crate decorates an existing logger (any [`Sink`] implementation)
//! with:
//! - A global enable/disable flag, off by default, togglable at runtime
//! - Scoped instances carrying a class name for per-call-site prefixes
//! - Per-instance overrides that supersede the global flag
//! - Timestamped, replaceable message prefixes
//! - `{dotted.path}` message templating from a values object
//! - Console color hints for terminals that support styled output
//!
//! It is a decorator only: transport, persistence, and level taxonomies are
//! the sink's business. Suppressed, disallowed, or malformed calls are
//! silent no-ops; runtime logging never fails.
//!
//! # Example
//! ```
//! use murmur_logger::{Config, InstanceOptions, NoopSink};
//! use std::sync::Arc;
//!
//! let logger = Config::new().enable_globally(true).wrap(Arc::new(NoopSink));
//! logger.log("application started");
//!
//! let scoped = logger.named("Engine");
//! scoped.info("ready");
//!
//! // Forced on even while the global flag is off
//! let audit = logger.instance(InstanceOptions::named("Audit").with_enabled(true));
//! audit.warn("always recorded");
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod color;
mod config;
mod error;
mod logger;
mod macros;
mod method;
mod prefix;
mod sink;
#[cfg(feature = "stdout")]
mod stdout;
mod template;
mod validate;

pub mod test_support;

pub use color::{ColorMode, STYLE_MARKER, colorify, is_valid_spec};
pub use config::Config;
pub use error::{Error, Result};
pub use logger::{InstanceOptions, IntoArgs, Logger};
pub use method::{Method, MethodSet};
pub use prefix::{PrefixFn, SEPARATOR, default_prefix};
pub use sink::{NoopSink, Sink};
#[cfg(feature = "stdout")]
pub use stdout::StdoutSink;
pub use template::{expand, expand_with};
pub use validate::{is_non_empty, trimmed};

use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-global logger used by the crate's macros
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] when a global logger has already
/// been installed.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The process-global logger, if one has been installed
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
