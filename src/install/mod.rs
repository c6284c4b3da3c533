//! Plugin asset installation.
//!
//! Copies the llm-cli-council payload (skills, lib, prompts, rules) into the
//! user's configuration directory, seeds the default provider configuration
//! when none exists, and marks shipped shell scripts executable.
//!
//! # Example
//!
//! ```rust,no_run
//! use llm_council_discovery::install::install_assets;
//! use std::path::Path;
//!
//! let summary = install_assets(Path::new("."), Path::new("/home/user/.claude"))?;
//! println!("copied {} files", summary.files_copied);
//! # Ok::<(), llm_council_discovery::install::InstallError>(())
//! ```

mod assets;
mod errors;

pub use assets::{install_assets, InstallSummary, ASSET_DIRS, PROVIDERS_CONFIG};
pub use errors::InstallError;
