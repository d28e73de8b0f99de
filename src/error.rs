//! Launcher error types and formatting
//!
//! - **`LaunchError`** - A typed enum for every way a launch can go wrong.
//!   Use `.into()` to convert to `anyhow::Error` while preserving the type for
//!   pattern matching; `main` downcasts to pick the exit code and render it.
//!
//! Only [`LaunchError::SpawnFailed`] is non-fatal: it is reported and the
//! launcher still exits 0. Everything else exits 1.

use std::path::PathBuf;

use color_print::cformat;
use strum::IntoEnumIterator;

use crate::path::format_path_for_display;
use crate::platform::Platform;
use crate::styling::{error_message, hint_message};

/// Exit code for fatal launch errors.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Domain errors for the launch pipeline.
///
/// ```ignore
/// if let Some(LaunchError::BinaryNotFound { path }) = err.downcast_ref() {
///     println!("missing {}", path.display());
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// OS identifier is not one of Windows, Linux, Darwin
    #[error("unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// Resolved binary path does not exist
    #[error("executable not found: {}", format_path_for_display(.path))]
    BinaryNotFound { path: PathBuf },

    /// chmod on the binary failed
    #[error("cannot make {} executable: {source}", format_path_for_display(.path))]
    PermissionUpdate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process creation (or the wait on it) failed
    #[error("error launching {}: {source}", format_path_for_display(.path))]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Whether the launcher should stop with [`FAILURE_EXIT_CODE`].
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::SpawnFailed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() { FAILURE_EXIT_CODE } else { 0 }
    }

    /// Styled message for the terminal, with a hint line where one helps.
    pub fn render(&self) -> String {
        let message = error_message(self.to_string());
        match self.hint() {
            Some(hint) => format!("{message}\n{}", hint_message(hint)),
            None => message,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            Self::UnsupportedPlatform { .. } => {
                let supported: Vec<String> = Platform::iter().map(|p| p.to_string()).collect();
                Some(format!("Supported platforms: {}", supported.join(", ")))
            }
            Self::BinaryNotFound { path } if path.is_relative() => Some(cformat!(
                "The path is resolved from the working directory; run from the folder containing <bold>{}</>",
                first_component(path)
            )),
            _ => None,
        }
    }
}

fn first_component(path: &std::path::Path) -> String {
    path.components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Exit code for an error that reached `main`.
///
/// Errors that are not a [`LaunchError`] are treated as fatal.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LaunchError>()
        .map_or(FAILURE_EXIT_CODE, LaunchError::exit_code)
}
