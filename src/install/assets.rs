//! Asset copying and permission fixing.

use crate::install::InstallError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Directories copied verbatim from the plugin source tree into the
/// destination configuration directory.
pub const ASSET_DIRS: &[&str] = &["skills", "lib", "prompts", "rules"];

/// Default provider configuration, seeded only when the destination copy
/// does not already exist.
pub const PROVIDERS_CONFIG: &str = "config/providers.json";

/// What an installation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallSummary {
    /// Number of files copied into the destination tree.
    pub files_copied: usize,

    /// Whether the default provider configuration was seeded.
    ///
    /// `false` means a configuration already existed at the destination and
    /// was left alone for the merge step to update.
    pub config_seeded: bool,
}

/// Install the plugin assets from `source_root` into `dest_root`.
///
/// Copies every directory in [`ASSET_DIRS`] recursively, creating destination
/// directories as needed and overwriting files that already exist (assets are
/// owned by the plugin, not the user). The provider configuration is the
/// exception: an existing `config/providers.json` at the destination is never
/// clobbered, since the user may have edited it; the detection pass updates
/// it in place instead.
///
/// After copying, `*.sh` files under the installed `lib/` tree are marked
/// executable (no-op on non-unix platforms).
pub fn install_assets(source_root: &Path, dest_root: &Path) -> Result<InstallSummary, InstallError> {
    let mut files_copied = 0;

    for dir in ASSET_DIRS {
        let source = source_root.join(dir);
        if !source.is_dir() {
            return Err(InstallError::MissingAsset { path: source });
        }
        files_copied += copy_tree(&source, &dest_root.join(dir))?;
    }

    let config_seeded = seed_config(source_root, dest_root)?;
    if config_seeded {
        files_copied += 1;
    }

    mark_scripts_executable(&dest_root.join("lib"))?;

    debug!(files_copied, config_seeded, dest = %dest_root.display(), "assets installed");
    Ok(InstallSummary {
        files_copied,
        config_seeded,
    })
}

/// Recursively copy `source` into `dest`, returning the number of files copied.
fn copy_tree(source: &Path, dest: &Path) -> Result<usize, InstallError> {
    fs::create_dir_all(dest).map_err(|e| InstallError::Copy {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let entries = fs::read_dir(source).map_err(|e| InstallError::Copy {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::Copy {
            path: source.to_path_buf(),
            source: e,
        })?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| InstallError::Copy {
                path: to.clone(),
                source: e,
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Seed the default provider configuration if the destination has none.
///
/// Returns `true` if the default was written. A missing default in the source
/// tree is tolerated: older payloads shipped without one.
fn seed_config(source_root: &Path, dest_root: &Path) -> Result<bool, InstallError> {
    let source = source_root.join(PROVIDERS_CONFIG);
    if !source.is_file() {
        return Ok(false);
    }

    let dest = dest_root.join(PROVIDERS_CONFIG);
    if dest.exists() {
        debug!(path = %dest.display(), "keeping existing provider configuration");
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| InstallError::Copy {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    fs::copy(&source, &dest).map_err(|e| InstallError::Copy {
        path: dest.clone(),
        source: e,
    })?;
    Ok(true)
}

/// Mark `*.sh` files under `root` executable, recursively.
fn mark_scripts_executable(root: &Path) -> Result<(), InstallError> {
    if !root.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(root).map_err(|e| InstallError::Permissions {
        path: root.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| InstallError::Permissions {
            path: root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            mark_scripts_executable(&path)?;
        } else if path.extension().is_some_and(|ext| ext == "sh") {
            mark_executable(&path).map_err(|e| InstallError::Permissions {
                path: path.clone(),
                source: e,
            })?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_source_tree(dir: &Path) {
        for asset in ASSET_DIRS {
            fs::create_dir_all(dir.join(asset)).unwrap();
        }
        fs::write(dir.join("skills/council.md"), "skill").unwrap();
        fs::create_dir_all(dir.join("lib/scripts")).unwrap();
        fs::write(dir.join("lib/scripts/run-council.sh"), "#!/bin/sh\n").unwrap();
        fs::write(dir.join("lib/helpers.js"), "// js").unwrap();
        fs::write(dir.join("prompts/review.md"), "prompt").unwrap();
        fs::write(dir.join("rules/council.md"), "rule").unwrap();
        fs::create_dir_all(dir.join("config")).unwrap();
        fs::write(
            dir.join(PROVIDERS_CONFIG),
            r#"{"providers":{"claude":{"active":false}}}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_install_copies_all_assets() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        make_source_tree(source.path());

        let summary = install_assets(source.path(), dest.path()).unwrap();

        assert_eq!(summary.files_copied, 6);
        assert!(summary.config_seeded);
        assert!(dest.path().join("skills/council.md").exists());
        assert!(dest.path().join("lib/scripts/run-council.sh").exists());
        assert!(dest.path().join("prompts/review.md").exists());
        assert!(dest.path().join("rules/council.md").exists());
        assert!(dest.path().join(PROVIDERS_CONFIG).exists());
    }

    #[test]
    fn test_install_preserves_existing_config() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        make_source_tree(source.path());

        let user_config = r#"{"providers":{"claude":{"active":true,"note":"mine"}}}"#;
        fs::create_dir_all(dest.path().join("config")).unwrap();
        fs::write(dest.path().join(PROVIDERS_CONFIG), user_config).unwrap();

        let summary = install_assets(source.path(), dest.path()).unwrap();

        assert!(!summary.config_seeded);
        assert_eq!(
            fs::read_to_string(dest.path().join(PROVIDERS_CONFIG)).unwrap(),
            user_config
        );
    }

    #[test]
    fn test_install_overwrites_stale_assets() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        make_source_tree(source.path());

        fs::create_dir_all(dest.path().join("skills")).unwrap();
        fs::write(dest.path().join("skills/council.md"), "old").unwrap();

        install_assets(source.path(), dest.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dest.path().join("skills/council.md")).unwrap(),
            "skill"
        );
    }

    #[test]
    fn test_install_missing_asset_dir() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        // Only some of the payload present
        fs::create_dir_all(source.path().join("skills")).unwrap();

        let err = install_assets(source.path(), dest.path()).unwrap_err();
        assert!(matches!(err, InstallError::MissingAsset { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_install_marks_scripts_executable() {
        use std::os::unix::fs::PermissionsExt;

        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        make_source_tree(source.path());

        install_assets(source.path(), dest.path()).unwrap();

        let script = dest.path().join("lib/scripts/run-council.sh");
        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0, "script should be executable");

        let helper = dest.path().join("lib/helpers.js");
        let mode = fs::metadata(&helper).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0, "non-script files keep their mode");
    }
}
