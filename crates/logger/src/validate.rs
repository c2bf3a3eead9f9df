//! Normalization helpers for optional caller-supplied strings
//!
//! All helpers are total: an absent value resolves to the documented
//! fallback, never an error.

/// Whitespace-trimmed content of `value`, or an empty string when absent
pub fn trimmed(value: Option<&str>) -> String {
    value.map_or(String::new(), |s| s.trim().to_string())
}

/// Whether `value` is present and non-empty after trimming
pub fn is_non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// A present, trimmed, non-empty string; `None` otherwise
pub(crate) fn clean_name(value: Option<&str>) -> Option<String> {
    let name = trimmed(value);
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_trims_to_empty() {
        assert_eq!(trimmed(None), "");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(trimmed(Some("  engine \t")), "engine");
        assert_eq!(trimmed(Some("   ")), "");
    }

    #[test]
    fn non_empty_matches_trimmed_length() {
        for value in [None, Some(""), Some("  "), Some("x"), Some(" x ")] {
            assert_eq!(is_non_empty(value), !trimmed(value).is_empty());
        }
    }

    #[test]
    fn clean_name_drops_blank_values() {
        assert_eq!(clean_name(Some(" Engine ")), Some("Engine".to_string()));
        assert_eq!(clean_name(Some("   ")), None);
        assert_eq!(clean_name(None), None);
    }
}
