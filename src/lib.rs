//! # llm-council-discovery
//!
//! Provider detection for the llm-cli-council installer.
//!
//! The review council orchestrates several LLM command-line tools (claude,
//! copilot, codex, gemini, ollama). This crate tells the installer which of
//! them are actually usable: it probes each CLI once with a bounded-lifetime
//! process, classifies the result, and folds the outcomes into the plugin's
//! persisted provider configuration. It also copies the plugin's static
//! assets into place (see [`install`]).
//!
//! ## Detection model
//!
//! - [`ProviderKind`] is the fixed registry of supported CLIs
//! - [`detect()`] probes a single provider: binary lookup, then one spawned
//!   process raced against the provider's timeout
//! - [`detect_all()`] runs every probe concurrently and returns outcomes in
//!   registry order once all have resolved
//! - [`merge_outcomes()`] applies the outcomes to an existing
//!   `providers.json` without disturbing anything else in the file
//!
//! Per-provider failures are never errors: each probe resolves to a
//! [`ProbeOutcome`] whose [`ProbeReason`] says what happened. Only
//! configuration I/O can fail hard.
//!
//! ## Example
//!
//! ```rust,no_run
//! use llm_council_discovery::{detect_all, merge_outcomes};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), llm_council_discovery::ConfigError> {
//!     let outcomes = detect_all().await;
//!     for outcome in &outcomes {
//!         println!("{}: {}", outcome.provider.display_name(), outcome.reason);
//!     }
//!     merge_outcomes(Path::new("/home/user/.claude/config/providers.json"), &outcomes)
//! }
//! ```

mod config;
mod detect;
mod outcome;
mod probing;
mod provider;

pub mod install;

pub use config::{merge_outcomes, ConfigError};
pub use detect::{detect, detect_all};
pub use outcome::{ProbeOutcome, ProbeReason};
pub use provider::ProviderKind;
