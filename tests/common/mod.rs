pub mod mock_commands;

use std::path::{Path, PathBuf};
use std::process::Command;

use ipaddr_launcher::{Layout, Platform};
use rstest::fixture;
use tempfile::TempDir;

/// A scratch working directory the launcher is run from.
///
/// The launcher resolves the binary relative to its working directory, so each
/// test gets its own tree and never sees another test's binary.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Where the launcher will look for the binary on this host.
    pub fn binary_path(&self) -> PathBuf {
        self.root().join(Layout::get().resolve(host_platform()))
    }

    /// Scratch file outside the app directory, for mocks to write into.
    #[cfg_attr(not(unix), allow(dead_code))]
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Command running the launcher from this workspace.
    ///
    /// Colors are disabled and the log filter is cleared so stdout and stderr
    /// only carry diagnostics and the child's own output.
    pub fn launcher_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ipaddr-launch"));
        cmd.current_dir(self.root())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("IPADDR_LAUNCHER_LOG");
        cmd
    }
}

#[fixture]
pub fn workspace() -> TestWorkspace {
    TestWorkspace::new()
}

pub fn host_platform() -> Platform {
    Platform::detect().expect("tests run on a supported platform")
}
