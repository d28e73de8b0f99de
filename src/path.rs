use std::path::{Path, PathBuf};

/// Format a filesystem path for user-facing output.
///
/// Relative paths (the launcher's normal case) are shown as given, since they
/// read naturally against the working directory. Absolute paths under the home
/// directory get a `~` prefix (e.g., `/Users/alex/tools/IpAddr` -> `~/tools/IpAddr`).
pub fn format_path_for_display(path: &Path) -> String {
    if path.is_relative() {
        return path.display().to_string();
    }

    if let Some(home) = home::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return if stripped.as_os_str().is_empty() {
            "~".to_string()
        } else {
            Path::new("~").join(stripped).display().to_string()
        };
    }

    path.display().to_string()
}

/// Absolute form of `path` for debug logs.
///
/// Canonicalizes when the path exists (without the Windows `\\?\` prefix, via
/// `dunce`); otherwise joins it onto the working directory.
pub fn absolute_for_log(path: &Path) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }
    match std::env::current_dir() {
        Ok(cwd) if path.is_relative() => cwd.join(path),
        _ => path.to_path_buf(),
    }
}
