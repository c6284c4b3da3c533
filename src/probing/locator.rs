//! Search-path executable lookup.

use std::path::PathBuf;

/// Find an executable by name on the current search path.
///
/// This is the pre-check that lets a probe fail fast with "not found" instead
/// of waiting on a spawn error or a timeout. It never invokes the command and
/// never fails: any lookup problem, including the lookup facility itself being
/// unavailable, is reported as `None`.
pub(crate) fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_common_executable() {
        // sh exists on any supported system
        let path = find_executable("sh");
        assert!(path.is_some());
        assert!(path.unwrap().exists());
    }

    #[test]
    fn test_find_nonexistent_executable() {
        assert!(find_executable("definitely_not_a_real_provider_cli_12345").is_none());
    }
}
