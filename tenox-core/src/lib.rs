//! Tenox Core - selector matching and style filtering
//!
//! This crate holds the logic that decides which style entries a project
//! actually uses. It reads class tokens out of markup, reduces selectors
//! to the class name that governs them, and renders the surviving entries
//! as a JavaScript module.
//!
//! # Example
//!
//! ```
//! use tenox_core::{collect_used_classes, filter_used, StyleMap};
//! use serde_json::json;
//!
//! let mut styles = StyleMap::new();
//! styles.insert(".card".into(), json!({ "padding": "1rem" }));
//! styles.insert(".hidden".into(), json!({ "display": "none" }));
//!
//! let used = collect_used_classes(r#"<div class="card"></div>"#);
//! let kept = filter_used(&styles, &used);
//! assert!(kept.contains_key(".card"));
//! assert!(!kept.contains_key(".hidden"));
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod markup;
pub mod selector;
pub mod styles;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use emit::{render_module, write_module, CONSUMER_FN, STYLES_IDENT};
pub use error::{Result, StyleError};
pub use markup::{collect_used_classes, collect_used_classes_from_file, UsedClassSet};
pub use selector::derive_class_name;
pub use styles::{filter_used, StyleMap};
