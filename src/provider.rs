//! Provider registry: the fixed set of LLM CLI tools the council can use.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::IntoEnumIterator;

/// A supported LLM command-line provider.
///
/// This enum is the provider registry: a static, read-only table of the CLI
/// tools the review council can call on. Each variant carries its probe
/// invocation (command, arguments, timeout) via accessor methods; there is no
/// runtime registration mechanism.
///
/// Variant order is the registry declaration order, which [`all`](Self::all)
/// and [`detect_all`](crate::detect_all) preserve.
///
/// # Example
///
/// ```rust
/// use llm_council_discovery::ProviderKind;
///
/// for provider in ProviderKind::all() {
///     println!("{}: {}", provider.id(), provider.display_name());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ProviderKind {
    /// Anthropic's Claude CLI (`claude`)
    Claude,
    /// GitHub Copilot CLI (`copilot`)
    Copilot,
    /// OpenAI Codex CLI (`codex`)
    Codex,
    /// Google Gemini CLI (`gemini`)
    Gemini,
    /// Local models via Ollama (`ollama`)
    Ollama,
}

impl ProviderKind {
    /// Short identifier, unique across the registry.
    ///
    /// This is the key used for the provider's entry in the persisted
    /// configuration file.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Copilot => "copilot",
            Self::Codex => "codex",
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Claude => "Anthropic Claude",
            Self::Copilot => "GitHub Copilot",
            Self::Codex => "OpenAI Codex",
            Self::Gemini => "Google Gemini",
            Self::Ollama => "Local (Ollama)",
        }
    }

    /// Name of the executable to invoke for this provider.
    pub fn command(&self) -> &'static str {
        self.id()
    }

    /// Arguments for a minimal liveness probe of the provider's CLI.
    ///
    /// Each probe is a single bounded invocation whose output is discarded;
    /// only the exit status is inspected.
    pub fn probe_args(&self) -> &'static [&'static str] {
        match self {
            Self::Claude => &["-p", "Reply with one word: ok"],
            Self::Copilot => &["--prompt", "Reply with one word: ok"],
            Self::Codex => &["Reply with one word: ok"],
            Self::Gemini => &["Reply with one word: ok"],
            Self::Ollama => &["list"],
        }
    }

    /// Maximum wall-clock time allowed for this provider's probe.
    ///
    /// Ollama only lists local models, so it gets a shorter budget than the
    /// hosted CLIs, which each answer a one-word prompt.
    pub fn probe_timeout(&self) -> Duration {
        match self {
            Self::Ollama => Duration::from_millis(3000),
            _ => Duration::from_millis(8000),
        }
    }

    /// Iterator over the registry in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
