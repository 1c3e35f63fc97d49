//! Tenox Watcher - markup scanning and regeneration
//!
//! This crate handles the file system side of things:
//! - Resolving the markup glob and scanning matched files
//! - Writing the filtered styles module
//! - Watching markup for changes and regenerating per changed file

mod error;
mod generator;
mod scanner;
mod watcher;

pub use error::{Result, WatchError};
pub use generator::{GenerationReport, StyleGenerator};
pub use scanner::{resolve_pattern, scan_files, ScanResult};
pub use watcher::{FileChange, FileWatcher};
