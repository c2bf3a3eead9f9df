//! Message templating
//!
//! Substitutes `{dotted.path}` tokens in a message with values resolved from
//! a JSON object. Resolution is tolerant: a token whose path cannot be
//! resolved, or resolves to anything other than a string or number, is left
//! in the output verbatim, braces included.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Expand `{dotted.path}` tokens in `template` from `values`
pub fn expand(template: &str, values: &Value) -> String {
    expand_with(template, values, &TOKEN)
}

/// Expand tokens matched by a caller-supplied pattern
///
/// The pattern's first capture group is taken as the lookup path. A pattern
/// without a capture group resolves nothing and leaves the template intact.
pub fn expand_with(template: &str, values: &Value, pattern: &Regex) -> String {
    pattern
        .replace_all(template, |caps: &Captures<'_>| {
            let token = caps.get(0).map_or("", |m| m.as_str());
            let path = caps.get(1).map_or("", |m| m.as_str());
            match resolve(values, path) {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Number(number)) => number.to_string(),
                _ => token.to_string(),
            }
        })
        .into_owned()
}

/// Sequential key descent: object fields by name, array elements by index
fn resolve<'a>(values: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = values;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Collapse a two-argument template call into its expansion
///
/// Expansion requires a string template and an object of values; any other
/// pairing passes through unchanged, preserving the original argument list.
pub(crate) fn expand_pair(args: Vec<Value>) -> Vec<Value> {
    match (&args[0], &args[1]) {
        (Value::String(template), values @ Value::Object(_)) => {
            vec![Value::String(expand(template, values))]
        }
        _ => args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_dotted_paths() {
        let values = json!({"a": {"b": "x"}});
        assert_eq!(expand("{a.b}", &values), "x");
    }

    #[test]
    fn unresolved_path_keeps_token() {
        let values = json!({"a": {"b": "x"}});
        assert_eq!(expand("{a.c}", &values), "{a.c}");
    }

    #[test]
    fn numbers_substitute_as_text() {
        let values = json!({"count": 42, "ratio": 1.5});
        assert_eq!(expand("{count} at {ratio}", &values), "42 at 1.5");
    }

    #[test]
    fn non_scalar_values_keep_token() {
        let values = json!({"flag": true, "list": [1], "obj": {}, "nothing": null});
        assert_eq!(
            expand("{flag} {list} {obj} {nothing}", &values),
            "{flag} {list} {obj} {nothing}"
        );
    }

    #[test]
    fn array_elements_resolve_by_index() {
        let values = json!({"names": ["ada", "lin"]});
        assert_eq!(expand("{names.1}", &values), "lin");
        assert_eq!(expand("{names.9}", &values), "{names.9}");
        assert_eq!(expand("{names.x}", &values), "{names.x}");
    }

    #[test]
    fn descent_through_scalar_keeps_token() {
        let values = json!({"a": "leaf"});
        assert_eq!(expand("{a.b}", &values), "{a.b}");
    }

    #[test]
    fn custom_pattern() {
        let pattern = Regex::new(r"<([^<>]*)>").unwrap();
        let values = json!({"who": "you"});
        assert_eq!(expand_with("hey <who>, {who}", &values, &pattern), "hey you, {who}");
    }

    #[test]
    fn pair_collapses_only_for_string_and_object() {
        let expanded = expand_pair(vec![json!("hi {a}"), json!({"a": "there"})]);
        assert_eq!(expanded, vec![json!("hi there")]);

        let passthrough = expand_pair(vec![json!("hi {a}"), json!([1, 2])]);
        assert_eq!(passthrough, vec![json!("hi {a}"), json!([1, 2])]);

        let passthrough = expand_pair(vec![json!(10), json!({"a": 1})]);
        assert_eq!(passthrough, vec![json!(10), json!({"a": 1})]);
    }
}
