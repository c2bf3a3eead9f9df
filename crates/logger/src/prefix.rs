//! Message prefix generation
//!
//! Every emitted message leads with a timestamped prefix, optionally scoped
//! to the class name of the instance that produced it. The formatter is
//! replaceable wholesale through [`Config::override_prefix`].
//!
//! [`Config::override_prefix`]: crate::Config::override_prefix

use crate::validate;
use chrono::Local;
use std::sync::Arc;

/// A replaceable prefix formatter
///
/// Receives the class name of the emitting instance, if any, and returns the
/// full prefix including the trailing separator.
pub type PrefixFn = Arc<dyn Fn(Option<&str>) -> String + Send + Sync>;

/// Separator between the prefix and the message body
pub const SEPARATOR: &str = " >> ";

// `MMM-dd-yyyy-h:mm:ssa`, e.g. `Aug-08-2026-3:04:05PM`
const TIMESTAMP_FORMAT: &str = "%b-%d-%Y-%-I:%M:%S%p";

/// The default prefix: local timestamp, then `::<class_name>` when one is
/// present and non-blank, then [`SEPARATOR`]
pub fn default_prefix(class_name: Option<&str>) -> String {
    let now = Local::now().format(TIMESTAMP_FORMAT);
    match validate::clean_name(class_name) {
        Some(name) => format!("{now}::{name}{SEPARATOR}"),
        None => format!("{now}{SEPARATOR}"),
    }
}

pub(crate) fn default_prefix_fn() -> PrefixFn {
    Arc::new(default_prefix)
}
