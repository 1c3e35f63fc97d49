//! Markup scanning.
//!
//! Resolves the configured glob and collects the class tokens used across
//! every matched file.

use crate::error::{Result, WatchError};
use std::path::PathBuf;
use std::time::Instant;
use tenox_core::{collect_used_classes_from_file, UsedClassSet};
use tracing::{debug, info};

/// Result of scanning a set of markup files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Union of class tokens across all scanned files.
    pub used: UsedClassSet,

    /// Number of files read.
    pub files_scanned: usize,

    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

/// Resolves a glob to the files it currently matches.
///
/// Directories are skipped. The glob is evaluated once per call.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| WatchError::pattern(pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_dir() {
            continue;
        }
        files.push(path);
    }

    debug!("{} matched {} files", pattern, files.len());
    Ok(files)
}

/// Scans every file and unions their class tokens.
///
/// The first unreadable file aborts the whole pass.
pub fn scan_files(paths: &[PathBuf]) -> Result<ScanResult> {
    let start = Instant::now();
    let mut used = UsedClassSet::new();

    for path in paths {
        used.extend(collect_used_classes_from_file(path)?);
    }

    let duration = start.elapsed();
    info!(
        "Scanned {} files ({} classes) in {:?}",
        paths.len(),
        used.len(),
        duration
    );

    Ok(ScanResult {
        used,
        files_scanned: paths.len(),
        duration_ms: duration.as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_skips_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        fs::write(dir.path().join("b.html"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("dir.html")).unwrap();

        let pattern = format!("{}/*.html", dir.path().display());
        let files = resolve_pattern(&pattern).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.html"), dir.path().join("b.html")]
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_pattern("src/[*.html").unwrap_err();
        assert!(matches!(err, WatchError::Pattern { .. }));
    }

    #[test]
    fn test_scan_unions_files() {
        let dir = tempdir().unwrap();
        let one = dir.path().join("one.html");
        let two = dir.path().join("two.html");
        fs::write(&one, r#"<div class="a shared"></div>"#).unwrap();
        fs::write(&two, r#"<div class="b shared"></div>"#).unwrap();

        let result = scan_files(&[one, two]).unwrap();
        assert_eq!(result.files_scanned, 2);
        for class in ["a", "b", "shared"] {
            assert!(result.used.contains(class), "missing {class}");
        }
        assert_eq!(result.used.len(), 3);
    }

    #[test]
    fn test_unreadable_file_aborts_scan() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.html");
        fs::write(&good, r#"<p class="x"></p>"#).unwrap();

        let result = scan_files(&[good, dir.path().join("gone.html")]);
        assert!(matches!(result, Err(WatchError::Style(_))));
    }

    #[test]
    fn test_scan_nothing() {
        let result = scan_files(&[]).unwrap();
        assert_eq!(result.files_scanned, 0);
        assert!(result.used.is_empty());
    }
}
