use tenox_core::StyleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WatchError>;

/// Failures while resolving, scanning or watching markup files.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("watch error: {0}")]
    Notify(#[from] notify::Error),

    #[error("failed to resolve working directory: {0}")]
    Io(#[from] std::io::Error),
}

impl WatchError {
    pub(crate) fn pattern(pattern: &str, source: glob::PatternError) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}
