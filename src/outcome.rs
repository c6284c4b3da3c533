//! Probe outcome types.

use crate::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single probe, mutually exclusive with all others.
///
/// The string forms (`"not found"`, `"active"`, ...) are stable: the
/// installer's report layer prints them verbatim and they serialize as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProbeReason {
    /// The provider's command is not resolvable on the search path.
    /// No process was spawned.
    #[serde(rename = "not found")]
    NotFound,

    /// The probe process exited with status 0 within its timeout.
    #[serde(rename = "active")]
    Active,

    /// The binary exists but the probe exited nonzero, read as the CLI
    /// reporting an unauthenticated or misconfigured state.
    #[serde(rename = "auth error")]
    AuthError,

    /// The probe outlived its timeout and was forcibly terminated.
    #[serde(rename = "timeout")]
    Timeout,

    /// Spawning the probe process failed after the existence check passed.
    #[serde(rename = "error")]
    Error,
}

impl ProbeReason {
    /// Stable string form of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::Active => "active",
            Self::AuthError => "auth error",
            Self::Timeout => "timeout",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ProbeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of probing one provider.
///
/// Constructed once by the prober and never mutated; consumed by the
/// configuration merger and by the installer's report layer.
///
/// Invariant: `active` is `true` exactly when `reason` is
/// [`ProbeReason::Active`]. The crate-internal constructor is the only way to
/// build one, so the invariant holds for every value callers can observe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// Which provider was probed.
    pub provider: ProviderKind,

    /// Whether the provider is ready to participate in the council.
    pub active: bool,

    /// Why `active` has the value it does.
    pub reason: ProbeReason,
}

impl ProbeOutcome {
    pub(crate) fn new(provider: ProviderKind, reason: ProbeReason) -> Self {
        Self {
            provider,
            active: matches!(reason, ProbeReason::Active),
            reason,
        }
    }

    /// Whether the provider is ready to participate in the council.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
