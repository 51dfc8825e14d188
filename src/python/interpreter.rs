//! Python interpreter resolution.
//!
//! Finds a usable interpreter before any probe runs. Candidates are tried in
//! a fixed order, `python3` then `python`, by iterating PATH entries and
//! taking the first existing executable file. Does NOT shell out to `which`
//! — `which` behavior varies across systems and is sometimes a shell builtin
//! with inconsistent error handling.
//!
//! An explicit override (flag or `CLIP_DOCTOR_PYTHON`) skips discovery: a
//! value containing a path separator is used as-is, a bare name is looked up
//! on PATH.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DoctorError, Result};

/// Interpreter names probed on PATH, in order.
pub const CANDIDATES: [&str; 2] = ["python3", "python"];

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    path: PathBuf,
    version: Option<String>,
}

impl PythonInterpreter {
    /// Resolve an interpreter, honoring an explicit override.
    pub fn resolve(override_path: Option<&Path>) -> Result<Self> {
        let entries = parse_system_path();
        match override_path {
            Some(requested) => resolve_override(requested, &entries),
            None => resolve_candidates(&entries),
        }
        .map(|path| {
            let version = detect_version(&path);
            tracing::debug!(path = %path.display(), version = ?version, "resolved interpreter");
            Self { path, version }
        })
    }

    /// Wrap a known interpreter path without PATH discovery or version
    /// detection. Used by tests driving fake interpreters.
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            version: None,
        }
    }

    /// Path of the interpreter binary.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version string parsed from `--version`, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Resolve an explicit interpreter override.
fn resolve_override(requested: &Path, entries: &[PathBuf]) -> Result<PathBuf> {
    let has_separator = requested.components().count() > 1;
    if has_separator {
        if requested.is_file() && is_executable(requested) {
            return Ok(requested.to_path_buf());
        }
    } else if let Some(found) = resolve_tool_path(&requested.to_string_lossy(), entries) {
        return Ok(found);
    }

    Err(DoctorError::InterpreterNotFound {
        tried: requested.display().to_string(),
    })
}

/// Walk the candidate list against PATH.
fn resolve_candidates(entries: &[PathBuf]) -> Result<PathBuf> {
    for candidate in CANDIDATES {
        if let Some(found) = resolve_tool_path(candidate, entries) {
            return Ok(found);
        }
    }
    Err(DoctorError::InterpreterNotFound {
        tried: CANDIDATES.join(", "),
    })
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Ask the interpreter for its version.
///
/// Python 2 printed the banner to stderr, Python 3 prints it to stdout, so
/// both streams are scanned.
fn detect_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    extract_version(&combined)
}

/// Extract a version number from `--version` output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"Python\s+(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
