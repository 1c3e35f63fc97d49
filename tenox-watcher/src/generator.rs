//! Scan-and-emit driver.
//!
//! A [`StyleGenerator`] owns the project configuration and performs one
//! scan-filter-write cycle per call, either over every file the markup glob
//! matches or over a single changed file.
//!
//! Incremental runs only look at the changed file. A style whose class is
//! used solely in some other, untouched file is dropped from the output
//! until the next full run. Watch mode has always behaved this way.

use crate::error::Result;
use crate::scanner::{resolve_pattern, scan_files, ScanResult};
use crate::watcher::{FileChange, FileWatcher};
use std::path::{Path, PathBuf};
use tenox_core::{filter_used, write_module, Config};
use tracing::{debug, info, warn};

/// Summary of one generation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Where the module was written.
    pub output: PathBuf,

    /// Markup files read in this cycle.
    pub files_scanned: usize,

    /// Style entries written out.
    pub styles_kept: usize,

    /// Style entries in the configuration.
    pub styles_total: usize,

    /// Time spent scanning markup, in milliseconds.
    pub scan_ms: u64,
}

/// Runs style extraction for one project configuration.
pub struct StyleGenerator {
    config: Config,
}

impl StyleGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans every file matched by `inputFiles` and writes the styles they use.
    pub fn generate_all(&self) -> Result<GenerationReport> {
        let files = resolve_pattern(&self.config.input_files)?;
        let scan = scan_files(&files)?;
        self.emit(scan)
    }

    /// Scans only `changed` and overwrites the output with the styles it uses.
    pub fn generate_for(&self, changed: &Path) -> Result<GenerationReport> {
        let scan = scan_files(&[changed.to_path_buf()])?;
        self.emit(scan)
    }

    /// Regenerates once per reported change until the watcher stops.
    ///
    /// Changes are handled strictly one after another. `on_generated` runs
    /// after each successful write; the first failure ends the loop. Removed
    /// files, and changes to paths that are no longer files, leave the
    /// output alone.
    pub async fn watch<F>(&self, mut watcher: FileWatcher, mut on_generated: F) -> Result<()>
    where
        F: FnMut(&Path, &GenerationReport),
    {
        while let Some(change) = watcher.next().await {
            match change {
                FileChange::Created(path) | FileChange::Modified(path) if !path.is_file() => {
                    debug!("{} is gone, skipping", path.display());
                }
                FileChange::Created(path) | FileChange::Modified(path) => {
                    let report = self.generate_for(&path)?;
                    on_generated(&path, &report);
                }
                FileChange::Deleted(path) => {
                    warn!("{} was removed, keeping current output", path.display());
                }
            }
        }

        debug!("Watcher closed");
        Ok(())
    }

    fn emit(&self, scan: ScanResult) -> Result<GenerationReport> {
        let styles = filter_used(&self.config.input_styles, &scan.used);
        write_module(&self.config.output_styles, &styles)?;

        info!(
            "Kept {} of {} styles from {} files (scanned in {}ms)",
            styles.len(),
            self.config.input_styles.len(),
            scan.files_scanned,
            scan.duration_ms
        );

        Ok(GenerationReport {
            output: self.config.output_styles.clone(),
            files_scanned: scan.files_scanned,
            styles_kept: styles.len(),
            styles_total: self.config.input_styles.len(),
            scan_ms: scan.duration_ms,
        })
    }
}
