//! Style mapping and usage filtering.

use crate::markup::UsedClassSet;
use crate::selector::derive_class_name;
use serde_json::{Map, Value};

/// Selector-keyed style definitions. Values are passed through untouched
/// and keys keep their insertion order.
pub type StyleMap = Map<String, Value>;

/// Keeps the entries whose derived class name appears in `used`.
///
/// The result is always a subset of `styles`, in the same order.
pub fn filter_used(styles: &StyleMap, used: &UsedClassSet) -> StyleMap {
    styles
        .iter()
        .filter(|(selector, _)| {
            derive_class_name(selector.as_str()).is_some_and(|name| used.contains(name))
        })
        .map(|(selector, style)| (selector.clone(), style.clone()))
        .collect()
}
