//! Spawning the target binary.
//!
//! The pipeline is linear: detect the platform, resolve the binary path, check
//! it exists, set its mode, spawn it with the forwarded arguments, and wait.
//! Failures before the spawn are fatal and come back as `Err`. A failed spawn
//! is reported through [`Outcome::SpawnFailed`] instead; the caller prints it
//! and carries on.
//!
//! The child inherits stdin, stdout and stderr, so its output interleaves with
//! the terminal exactly as if it were run directly. There is no timeout: a hung
//! child hangs the launcher.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::LaunchError;
use crate::guard::{ensure_present, make_executable};
use crate::layout::Layout;
use crate::path::{absolute_for_log, format_path_for_display};
use crate::platform::Platform;

/// How a launch that got as far as the spawn ended.
#[derive(Debug)]
pub enum Outcome {
    /// The child ran; its status is informational only.
    Exited(ExitStatus),
    /// The child could not be started. Always a [`LaunchError::SpawnFailed`].
    SpawnFailed(LaunchError),
}

/// Runs the binary from `layout` that matches `platform`.
#[derive(Debug, Clone, Copy)]
pub struct Launcher<'a> {
    platform: Platform,
    layout: &'a Layout,
}

impl<'a> Launcher<'a> {
    pub fn new(platform: Platform, layout: &'a Layout) -> Self {
        Self { platform, layout }
    }

    /// Launcher for the platform of the running process.
    pub fn detect(layout: &'a Layout) -> Result<Self, LaunchError> {
        Ok(Self::new(Platform::detect()?, layout))
    }

    /// Launcher for an explicit OS identifier (see [`Platform::from_os_name`]).
    pub fn for_os(os: &str, layout: &'a Layout) -> Result<Self, LaunchError> {
        Ok(Self::new(Platform::from_os_name(os)?, layout))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn binary_path(&self) -> PathBuf {
        self.layout.resolve(self.platform)
    }

    /// Check, chmod, spawn, and wait.
    ///
    /// `args` are forwarded to the child verbatim and in order.
    pub fn run<I, S>(&self, args: I) -> Result<Outcome, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let path = self.binary_path();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Resolved binary {}", absolute_for_log(&path).display());
        }

        ensure_present(&path)?;
        make_executable(&path, self.platform)?;

        match spawn_and_wait(&path, args) {
            Ok(status) => {
                log::debug!("{} exited with {status}", format_path_for_display(&path));
                Ok(Outcome::Exited(status))
            }
            Err(err) => {
                log::debug!("Spawn failed: {err}");
                Ok(Outcome::SpawnFailed(err))
            }
        }
    }
}

/// Spawn `path` with `args`, inheriting stdio, and block until it exits.
///
/// One attempt only. Errors from the spawn and from the wait both map to
/// [`LaunchError::SpawnFailed`].
pub fn spawn_and_wait<I, S>(path: &Path, args: I) -> Result<ExitStatus, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args
        .into_iter()
        .map(|arg| arg.as_ref().to_os_string())
        .collect();
    let program = command_path(path);
    log::debug!("$ {}", format_command_line(&program, &args));

    let spawn_failed = |source| LaunchError::SpawnFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(spawn_failed)?;

    child.wait().map_err(spawn_failed)
}

/// Path handed to `Command::new`.
///
/// A bare filename would be looked up on `PATH`; prefix `./` so it always
/// means the file relative to the working directory.
fn command_path(path: &Path) -> PathBuf {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}

fn format_command_line(program: &Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| shell_escape::escape(part.to_string_lossy()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
