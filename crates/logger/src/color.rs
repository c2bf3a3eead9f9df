//! Console color hints
//!
//! A single-string log call can be rewritten into a style-tagged pair
//! `["%c<prefix><message>", "<css declaration>"]` for sinks that understand
//! the marker convention. Whether the rewrite happens is decided once at
//! wrap time from the color mode and the surrounding terminal.

use crate::method::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::env;

/// Marker prepended to a styled message, consumed by the sink's styling
/// convention
pub const STYLE_MARKER: &str = "%c";

// Terminal families that render styled output
const SUPPORTED_TERMS: &[&str] = &[
    "xterm",
    "screen",
    "tmux",
    "rxvt",
    "vt100",
    "linux",
    "ansi",
    "alacritty",
    "kitty",
    "konsole",
    "wezterm",
    "foot",
];

/// When styled output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Detect support from the `TERM` environment variable at wrap time
    #[default]
    Auto,
    /// Always produce styled pairs
    Always,
    /// Never produce styled pairs
    Never,
}

/// Whether a terminal identifier names a supported family
pub(crate) fn terminal_supported(term: &str) -> bool {
    let term = term.to_ascii_lowercase();
    SUPPORTED_TERMS.iter().any(|family| term.contains(family))
}

fn detect() -> bool {
    env::var("TERM").map_or(false, |term| terminal_supported(&term))
}

/// Minimal sanity check for a CSS-like color declaration
pub fn is_valid_spec(spec: &str) -> bool {
    spec.contains(':')
}

/// Rewrite a single-string message into a style-tagged argument pair
///
/// Returns `["%c<prefix><message>", spec]` when `supported` holds and `spec`
/// passes [`is_valid_spec`]; otherwise `[message]` alone, and the caller is
/// responsible for prepending the prefix in the unstyled branch.
pub fn colorify(message: &str, spec: &str, prefix: &str, supported: bool) -> Vec<Value> {
    if supported && is_valid_spec(spec) {
        vec![
            Value::String(format!("{STYLE_MARKER}{prefix}{message}")),
            Value::String(spec.to_string()),
        ]
    } else {
        vec![Value::String(message.to_string())]
    }
}

/// Built-in color declaration for each canonical method
pub(crate) fn default_spec(method: Method) -> &'static str {
    match method {
        Method::Log => "color: green;",
        Method::Info => "color: blue",
        Method::Warn => "color: #CC9933;",
        Method::Debug => "color: brown;",
        Method::Error => "color: red;",
    }
}

/// Color decisions frozen at wrap time
#[derive(Clone)]
pub(crate) struct ColorPolicy {
    pub(crate) supported: bool,
    use_defaults: bool,
    overrides: HashMap<Method, String>,
}

impl ColorPolicy {
    pub(crate) fn resolve(
        mode: ColorMode,
        use_defaults: bool,
        overrides: HashMap<Method, String>,
    ) -> Self {
        let supported = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => detect(),
        };
        Self {
            supported,
            use_defaults,
            overrides,
        }
    }

    /// The declaration applied to `method` calls that carry no instance spec
    pub(crate) fn method_spec(&self, method: Method) -> Option<&str> {
        if let Some(spec) = self.overrides.get(&method) {
            return Some(spec);
        }
        if self.use_defaults {
            Some(default_spec(method))
        } else {
            None
        }
    }
}
