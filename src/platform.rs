//! Host platform detection.
//!
//! Only three platforms have a prebuilt binary. The identifier normally comes
//! from [`std::env::consts::OS`] (`windows`, `linux`, `macos`), but the
//! `uname`-style names (`Windows`, `Linux`, `Darwin`) parse too, in any case.

use std::str::FromStr;

use crate::error::LaunchError;

/// Platform tag used to pick the binary filename.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    Windows,
    Linux,
    /// macOS
    #[strum(to_string = "Darwin", serialize = "macos")]
    Darwin,
}

impl Platform {
    /// Detect the platform of the running process.
    pub fn detect() -> Result<Self, LaunchError> {
        let os = current_name();
        let platform = Self::from_os_name(os)?;
        log::debug!("Detected platform {platform} (os={os})");
        Ok(platform)
    }

    /// Map an OS identifier to a platform tag.
    ///
    /// Anything outside the known set is [`LaunchError::UnsupportedPlatform`].
    pub fn from_os_name(os: &str) -> Result<Self, LaunchError> {
        Self::from_str(os).map_err(|_| LaunchError::UnsupportedPlatform { os: os.to_string() })
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Suffix appended to the application name to form the binary filename.
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::Darwin => "",
        }
    }
}

/// OS identifier of the running process, as Rust reports it.
pub fn current_name() -> &'static str {
    std::env::consts::OS
}
