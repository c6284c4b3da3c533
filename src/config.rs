//! Persisted provider configuration merge.
//!
//! The installed plugin owns a `providers.json` document mapping provider ids
//! to entries with at least an `active` flag. After a detection pass the
//! installer folds the probe outcomes into that document with a single
//! load-modify-store call; everything the merge does not understand is
//! preserved opaquely.

use crate::ProbeOutcome;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from the configuration merge step.
///
/// These are the only failures in the crate that surface as hard errors:
/// per-provider probe failures are data, but losing or corrupting a user's
/// configuration file is not acceptable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration at {path}: {source}")]
    Read {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    ///
    /// The merge aborts without touching the file: a document that could not
    /// be parsed is never overwritten.
    #[error("malformed configuration at {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: String,
        /// Underlying JSON error, with line and column.
        source: serde_json::Error,
    },

    /// The merged document could not be serialized.
    #[error("failed to serialize configuration for {path}: {source}")]
    Serialize {
        /// Path that was being written.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The merged document could not be written back.
    #[error("failed to write configuration at {path}: {source}")]
    Write {
        /// Path that was being written.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Merge probe outcomes into the persisted configuration at `path`.
///
/// For each outcome whose provider id matches an existing entry under the
/// top-level `providers` object, the entry's `active` field is overwritten
/// with the outcome's value. Every other field and every non-matching entry
/// is left untouched; outcomes for ids absent from the document create
/// nothing.
///
/// A missing file is a no-op, not an error: the installer may not have
/// materialized defaults yet, and this step never creates the file. The
/// document is written back pretty-printed with a trailing newline so it
/// stays diff-friendly and hand-editable between runs.
///
/// The merge is idempotent: applying the same outcomes twice produces the
/// same file content as applying them once.
pub fn merge_outcomes(path: &Path, outcomes: &[ProbeOutcome]) -> Result<(), ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no configuration file, skipping merge");
        return Ok(());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(providers) = doc.get_mut("providers").and_then(Value::as_object_mut) {
        for outcome in outcomes {
            if let Some(entry) = providers
                .get_mut(outcome.provider.id())
                .and_then(Value::as_object_mut)
            {
                entry.insert("active".to_string(), Value::Bool(outcome.active));
                debug!(
                    provider = outcome.provider.id(),
                    active = outcome.active,
                    "updated provider entry"
                );
            }
        }
    }

    let mut rendered =
        serde_json::to_string_pretty(&doc).map_err(|source| ConfigError::Serialize {
            path: path.display().to_string(),
            source,
        })?;
    rendered.push('\n');

    std::fs::write(path, rendered).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })
}
