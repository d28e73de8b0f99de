//! Where the prebuilt IpAddr binary is expected to live.
//!
//! The packaging step drops the binary into a fixed directory relative to the
//! working directory, named `IpAddr.exe` on Windows and `IpAddr` elsewhere.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::platform::Platform;

/// Directory holding the binary, relative to the working directory.
pub const APP_DIR: &str = "IpAddr/bin/Debug/net8.0";

/// Application name; the platform suffix is appended to form the filename.
pub const APP_NAME: &str = "IpAddr";

static DEFAULT_LAYOUT: OnceLock<Layout> = OnceLock::new();

/// Base directory plus application name, from which the per-platform binary
/// path is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    app_dir: PathBuf,
    app_name: String,
}

impl Layout {
    /// The layout used by the launcher binary.
    ///
    /// Built once per process from [`APP_DIR`] and [`APP_NAME`].
    pub fn get() -> &'static Layout {
        DEFAULT_LAYOUT.get_or_init(|| {
            // Re-join component-wise so Windows gets native separators
            let app_dir: PathBuf = Path::new(APP_DIR).components().collect();
            Layout::new(app_dir, APP_NAME)
        })
    }

    pub fn new(app_dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            app_dir: app_dir.into(),
            app_name: app_name.into(),
        }
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Filename of the binary for `platform` (`IpAddr.exe`, `IpAddr`).
    pub fn binary_name(&self, platform: Platform) -> String {
        format!("{}{}", self.app_name, platform.executable_suffix())
    }

    /// Path of the binary for `platform`. Nothing is checked on disk.
    pub fn resolve(&self, platform: Platform) -> PathBuf {
        self.app_dir.join(self.binary_name(platform))
    }
}
