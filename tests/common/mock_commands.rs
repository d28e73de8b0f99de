// Mock IpAddr binaries for integration tests
//
// On Unix the mock is a `#!/bin/sh` script placed where the launcher expects
// the real binary. There is no Windows equivalent: `CreateProcessW` will not
// run a script under an `.exe` name, so script-based tests are `#[cfg(unix)]`.

#![cfg_attr(not(unix), allow(dead_code))]

use std::fs;
use std::path::Path;

/// Write a mock binary at `path` running `body` under `/bin/sh`.
///
/// `mode` is the permission set the file starts with; the launcher is
/// expected to widen it.
#[cfg(unix)]
pub fn create_mock_binary(path: &Path, body: &str, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

/// Script body that writes each argument on its own line to `out`.
pub fn record_args(out: &Path) -> String {
    format!("printf '%s\\n' \"$@\" > {}", quote(out))
}

/// Script body that copies stdin to `out`.
pub fn record_stdin(out: &Path) -> String {
    format!("cat > {}", quote(out))
}

fn quote(path: &Path) -> String {
    let escaped = path.display().to_string().replace('\'', "'\"'\"'");
    format!("'{escaped}'")
}

/// Create an entry at `path` that exists but cannot be executed.
pub fn create_unlaunchable(path: &Path) {
    fs::create_dir_all(path).unwrap();
}
