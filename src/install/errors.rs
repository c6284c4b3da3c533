//! Error types for asset installation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while installing plugin assets.
///
/// Every variant names the path that failed so the installer can print an
/// actionable message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// An expected asset directory is missing from the source tree.
    #[error("missing asset directory: {path}")]
    MissingAsset {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// Copying an asset file or creating a destination directory failed.
    #[error("failed to copy {path}: {source}")]
    Copy {
        /// Path that was being copied or created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Marking an installed file executable failed.
    #[error("failed to set permissions on {path}: {source}")]
    Permissions {
        /// Path whose permissions were being changed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
