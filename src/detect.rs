//! Provider probing and the all-providers detection pass.

use crate::probing::{find_executable, run_probe, ProbeExit};
use crate::{ProbeOutcome, ProbeReason, ProviderKind};
use futures::future::join_all;
use tracing::{debug, warn};

/// Probe a single provider.
///
/// The probe first checks that the provider's command resolves on the search
/// path, then runs it once with the provider's probe arguments under the
/// provider's timeout. Every failure mode is folded into the returned
/// [`ProbeOutcome`]; this function never returns an error and never takes
/// longer than the provider's timeout plus a small scheduling slack.
///
/// # Example
///
/// ```rust,no_run
/// use llm_council_discovery::{detect, ProviderKind};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let outcome = detect(ProviderKind::Ollama).await;
///     println!("{}: {}", outcome.provider.id(), outcome.reason);
/// }
/// ```
pub async fn detect(provider: ProviderKind) -> ProbeOutcome {
    // Existence pre-check: a missing binary fails fast, no process spawned.
    let path = match find_executable(provider.command()) {
        Some(p) => p,
        None => {
            debug!(provider = provider.id(), "command not on search path");
            return ProbeOutcome::new(provider, ProbeReason::NotFound);
        }
    };

    let exit = run_probe(&path, provider.probe_args(), provider.probe_timeout()).await;
    let reason = classify(exit);
    debug!(provider = provider.id(), reason = reason.as_str(), "probe resolved");
    ProbeOutcome::new(provider, reason)
}

/// Map a probe's exit to its reason.
///
/// Existence was already confirmed by the locator, so a nonzero exit is read
/// as the CLI reporting an unauthenticated or misconfigured state rather than
/// a missing binary.
fn classify(exit: ProbeExit) -> ProbeReason {
    match exit {
        ProbeExit::Exited(status) if status.success() => ProbeReason::Active,
        ProbeExit::Exited(_) => ProbeReason::AuthError,
        ProbeExit::TimedOut => ProbeReason::Timeout,
        ProbeExit::SpawnFailed(e) => {
            debug!(error = %e, "probe spawn failed after existence check");
            ProbeReason::Error
        }
    }
}

/// Probe every provider in the registry concurrently.
///
/// All probes are issued as independent tasks from the calling task and
/// joined together, so the total wall-clock time is close to the slowest
/// single probe, not the sum. The returned outcomes follow registry
/// declaration order regardless of which probe resolved first, and nothing is
/// returned until every probe has resolved.
///
/// A timeout on one provider never aborts the others; each probe enforces its
/// own budget independently.
///
/// Zero active providers is not an error, but it is logged at warning level
/// since the council cannot run without at least one.
///
/// # Example
///
/// ```rust,no_run
/// use llm_council_discovery::detect_all;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     for outcome in detect_all().await {
///         println!("{}: {}", outcome.provider.display_name(), outcome.reason);
///     }
/// }
/// ```
pub async fn detect_all() -> Vec<ProbeOutcome> {
    let probes: Vec<_> = ProviderKind::all().map(detect).collect();
    let outcomes = join_all(probes).await;

    if !outcomes.iter().any(ProbeOutcome::is_active) {
        warn!(
            "no active providers detected; install and authenticate at least one \
             supported CLI (claude, copilot, codex, gemini, ollama) to run the council"
        );
    }

    outcomes
}
