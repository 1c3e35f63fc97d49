//! File watcher for watch mode.
//!
//! Uses the notify crate to watch the directory a markup glob lives in and
//! turns matching events into a stream of [`FileChange`]s.

use crate::error::{Result, WatchError};
use glob::{MatchOptions, Pattern};
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Component, Path, PathBuf};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, info, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Type of file change detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Created(PathBuf),
    Modified(PathBuf),
    Deleted(PathBuf),
}

impl FileChange {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(p) | Self::Modified(p) | Self::Deleted(p) => p,
        }
    }
}

/// Watches the files matched by a glob.
///
/// Changes arrive in the order notify reports them and are handed out one
/// at a time through [`FileWatcher::next`].
pub struct FileWatcher {
    #[allow(dead_code)]
    watcher: notify::RecommendedWatcher,
    receiver: UnboundedReceiver<FileChange>,
}

impl FileWatcher {
    /// Starts watching the files matched by `pattern`.
    ///
    /// The watch is placed on the pattern's literal directory prefix
    /// (`src` for `src/**/*.html`) and events are filtered by the pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = Pattern::new(pattern).map_err(|e| WatchError::pattern(pattern, e))?;
        let cwd = std::env::current_dir()?;
        let root = cwd.join(watch_root(pattern));
        let (tx, rx) = unbounded_channel();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for (position, path) in event.paths.into_iter().enumerate() {
                        if !is_match(&matcher, &path, &cwd) {
                            continue;
                        }

                        let Some(change) = to_change(&event.kind, position, path) else {
                            continue;
                        };

                        // Directories that happen to match the glob, or files
                        // already gone again, have nothing to scan.
                        if !matches!(change, FileChange::Deleted(_)) && !change.path().is_file() {
                            debug!("Skipping non-file {}", change.path().display());
                            continue;
                        }

                        if tx.send(change).is_err() {
                            warn!("Failed to send file change event");
                        }
                    }
                }
                Err(e) => warn!("Watch error: {}", e),
            }
        })?;

        let mode = if root.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher.watch(&root, mode)?;

        info!("Watching {} for changes", root.display());

        Ok(Self {
            watcher,
            receiver: rx,
        })
    }

    /// Waits for the next change.
    pub async fn next(&mut self) -> Option<FileChange> {
        self.receiver.recv().await
    }

    /// Polls for file changes.
    ///
    /// Returns immediately with any pending changes.
    pub fn poll(&mut self) -> Vec<FileChange> {
        let mut changes = Vec::new();
        while let Ok(change) = self.receiver.try_recv() {
            changes.push(change);
        }
        changes
    }
}

/// Maps one path of a notify event to a change.
///
/// A `Both` rename lists the old path first and the new path second.
fn to_change(kind: &EventKind, position: usize, path: PathBuf) -> Option<FileChange> {
    match kind {
        EventKind::Create(_) => {
            debug!("File created: {}", path.display());
            Some(FileChange::Created(path))
        }
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            debug!("File renamed away: {}", path.display());
            Some(FileChange::Deleted(path))
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) if position == 0 => {
            debug!("File renamed away: {}", path.display());
            Some(FileChange::Deleted(path))
        }
        EventKind::Modify(_) => {
            debug!("File modified: {}", path.display());
            Some(FileChange::Modified(path))
        }
        EventKind::Remove(_) => {
            debug!("File deleted: {}", path.display());
            Some(FileChange::Deleted(path))
        }
        _ => None,
    }
}

/// Leading components of `pattern` that contain no glob syntax.
fn watch_root(pattern: &str) -> PathBuf {
    let root: PathBuf = Path::new(pattern)
        .components()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(&['*', '?', '[', '{'][..]))
        .collect();

    if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root
    }
}

/// Matches a reported path against the pattern, both as reported and
/// relative to the working directory.
fn is_match(pattern: &Pattern, path: &Path, cwd: &Path) -> bool {
    if pattern.matches_path_with(path, MATCH_OPTIONS) {
        return true;
    }

    path.strip_prefix(cwd)
        .map(|rel| {
            let rel: PathBuf = rel
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            pattern.matches_path_with(&rel, MATCH_OPTIONS)
        })
        .unwrap_or(false)
}
