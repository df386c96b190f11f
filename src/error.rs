//! Typed errors for the widget engine

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the storage backend behind the draft store.
///
/// Never surfaced to the user; `DraftStore` logs and swallows it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage quota exceeded for key {0}")]
    QuotaExceeded(String),
}

/// Errors reported to whoever embeds the widget.
///
/// These are integration mistakes and are propagated, not swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("feature flags must be accessed inside a FeatureFlagProvider; pass a FlagsHandle to the widget builder")]
    MissingFlagProvider,
}
