//! Simple stdout sink for development
//!
//! Understands the style-tagged pair produced by the color rewrite and maps
//! the CSS-like declaration onto terminal colors.

use crate::color::STYLE_MARKER;
use crate::method::Method;
use crate::sink::Sink;
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Sink that writes each call as one line to stdout
pub struct StdoutSink {
    // Lock to prevent interleaving
    stdout: Arc<Mutex<StandardStream>>,
}

impl StdoutSink {
    /// Create a sink with automatic color choice
    pub fn new() -> Self {
        Self::with_choice(ColorChoice::Auto)
    }

    /// Create a sink with an explicit color choice
    pub fn with_choice(choice: ColorChoice) -> Self {
        Self {
            stdout: Arc::new(Mutex::new(StandardStream::stdout(choice))),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn emit(&self, _method: Method, args: &[Value]) {
        let Ok(mut stdout) = self.stdout.lock() else {
            return;
        };

        if let Some((styled, spec)) = styled_pair(args) {
            let text = &styled[STYLE_MARKER.len()..];
            match css_color(spec) {
                Some(color) => {
                    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
                    let _ = write!(stdout, "{text}");
                    let _ = stdout.reset();
                    let _ = writeln!(stdout);
                }
                None => {
                    let _ = writeln!(stdout, "{text}");
                }
            }
        } else {
            let line = args.iter().map(render).collect::<Vec<_>>().join(" ");
            let _ = writeln!(stdout, "{line}");
        }

        let _ = stdout.flush();
    }

    fn flush(&self) {
        if let Ok(mut stdout) = self.stdout.lock() {
            let _ = stdout.flush();
        }
    }
}

fn styled_pair(args: &[Value]) -> Option<(&str, &str)> {
    match args {
        [Value::String(styled), Value::String(spec)] if styled.starts_with(STYLE_MARKER) => {
            Some((styled, spec))
        }
        _ => None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Foreground color from the first `color:` declaration in the spec
fn css_color(spec: &str) -> Option<Color> {
    spec.split(';').find_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        if property.trim() != "color" {
            return None;
        }
        named_color(value.trim())
    })
}

fn named_color(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return hex_color(hex);
    }
    match name.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "brown" => Some(Color::Rgb(165, 42, 42)),
        _ => None,
    }
}

fn hex_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
