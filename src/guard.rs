//! Checks applied to the resolved binary before it is spawned.

use std::fs;
use std::path::Path;

use crate::error::LaunchError;
use crate::path::format_path_for_display;
use crate::platform::Platform;

/// `rwxr-xr-x`
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Fail with [`LaunchError::BinaryNotFound`] if nothing exists at `path`.
pub fn ensure_present(path: &Path) -> Result<(), LaunchError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LaunchError::BinaryNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Set the binary's mode to [`EXECUTABLE_MODE`].
///
/// Applied on every launch without looking at the current mode, so a narrower
/// mode is widened. Windows has no execute bit; nothing happens there.
pub fn make_executable(path: &Path, platform: Platform) -> Result<(), LaunchError> {
    if platform.is_windows() {
        return Ok(());
    }
    log::debug!("chmod {EXECUTABLE_MODE:o} {}", format_path_for_display(path));
    set_mode(path).map_err(|source| LaunchError::PermissionUpdate {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_mode(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
}

#[cfg(not(unix))]
fn set_mode(path: &Path) -> std::io::Result<()> {
    // No mode bits on this host; only check that the entry is still there
    fs::metadata(path).map(|_| ())
}
