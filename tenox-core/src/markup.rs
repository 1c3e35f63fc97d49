//! Markup scanning.
//!
//! Pulls every class token out of an HTML document. The parser is lenient:
//! unclosed tags and stray markup are recovered from rather than rejected,
//! so any text can be scanned.

use crate::error::{Result, StyleError};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Distinct class tokens found during one scan pass.
pub type UsedClassSet = HashSet<String>;

static WITH_CLASS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[class]").expect("attribute selector is valid"));

/// Collects the class tokens of every element carrying a `class` attribute.
///
/// Attribute values are split on whitespace; duplicates collapse.
pub fn collect_used_classes(markup: &str) -> UsedClassSet {
    let document = Html::parse_document(markup);
    let mut used = UsedClassSet::new();

    for element in document.select(&WITH_CLASS) {
        if let Some(value) = element.value().attr("class") {
            used.extend(value.split_whitespace().map(str::to_owned));
        }
    }

    used
}

/// Reads a markup file in full and collects its class tokens.
pub fn collect_used_classes_from_file(path: &Path) -> Result<UsedClassSet> {
    let markup = fs::read_to_string(path).map_err(|e| StyleError::io(path, e))?;
    let used = collect_used_classes(&markup);
    debug!("{} classes in {}", used.len(), path.display());
    Ok(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collects_and_splits_classes() {
        let used = collect_used_classes(
            r#"
            <html><body>
              <div class="card  shadow">
                <span class="title card">Hello</span>
                <p id="plain">no class here</p>
              </div>
            </body></html>
        "#,
        );

        let mut tokens: Vec<_> = used.into_iter().collect();
        tokens.sort();
        assert_eq!(tokens, vec!["card", "shadow", "title"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let used = collect_used_classes(r#"<div class="a"><span class="b">unterminated"#);
        assert!(used.contains("a"));
        assert!(used.contains("b"));
    }

    #[test]
    fn test_empty_class_attribute() {
        let used = collect_used_classes(r#"<div class=""></div><i class="   "></i>"#);
        assert!(used.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_used_classes_from_file(&dir.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, StyleError::IoError { .. }));
    }
}
