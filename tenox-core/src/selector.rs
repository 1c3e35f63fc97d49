//! Selector reduction.
//!
//! A selector is considered used when its first class token shows up in
//! markup. Everything after that token (combinators, further classes,
//! descendants) is ignored, so `.card > .title` and `.card.active` are both
//! governed by `card` alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// First `.` followed by anything that is not whitespace, a combinator,
/// or the start of the next class.
static CLASS_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([^\s>+~.]+)").expect("class token pattern is valid"));

/// Returns the class name that decides whether `selector` is used.
///
/// Only the first class token counts. Selectors without a `.` (tag or
/// attribute selectors) return `None` and can never be matched.
///
/// Pseudo-classes are not stripped: `.btn:hover` yields `btn:hover`.
pub fn derive_class_name(selector: &str) -> Option<&str> {
    CLASS_TOKEN
        .captures(selector)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        assert_eq!(derive_class_name(".foo"), Some("foo"));
    }

    #[test]
    fn test_first_class_only() {
        assert_eq!(derive_class_name("div.foo.bar"), Some("foo"));
        assert_eq!(derive_class_name(".a > .b"), Some("a"));
        assert_eq!(derive_class_name(".a+.b"), Some("a"));
        assert_eq!(derive_class_name("ul .item ~ .next"), Some("item"));
    }

    #[test]
    fn test_no_class_component() {
        assert_eq!(derive_class_name("div[data-x]"), None);
        assert_eq!(derive_class_name("body"), None);
        assert_eq!(derive_class_name(""), None);
        assert_eq!(derive_class_name("."), None);
        assert_eq!(derive_class_name(".. > div"), None);
    }

    #[test]
    fn test_pseudo_class_is_kept() {
        assert_eq!(derive_class_name(".btn:hover"), Some("btn:hover"));
    }
}
