//! Output vocabulary and the machine-readable run report.
//!
//! The human transcript is a compatibility contract: downstream scripts grep
//! for these exact strings, so every banner and hint lives here as a `const`
//! and nothing else in the crate writes its own variants. `StatusKind`
//! provides the single canonical pass/fail icon pair used for every probe
//! line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::checks::capability::CapabilityStatus;
use crate::python::interpreter::PythonInterpreter;

/// Opening banner, first line of every run.
pub const BANNER: &str = "=== CLIP Installation Test ===";

/// Section header for the import probe.
pub const IMPORTS_HEADER: &str = "Testing imports...";

/// Section header for the model smoke test.
pub const MODEL_HEADER: &str = "Testing CLIP model loading...";

/// Verdict banner when any import probe fails.
pub const DEPS_MISSING_BANNER: &str = "❌ Some dependencies are missing";

/// Verdict banner when the smoke test fails.
pub const MODEL_FAILED_BANNER: &str = "❌ Model loading failed";

/// Verdict banner on full success.
pub const SUCCESS_BANNER: &str = "✅ All tests passed! CLIP is ready to use.";

/// Remediation command shown under the dependency-failure banner.
pub const INSTALL_HINT: &str = "pip install open_clip_torch pillow torch";

/// Next-step command shown under the success banner.
pub const USAGE_HINT: &str = "same-same ingest -e clip images:./your_photos";

/// Canonical status kinds for probe lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Probe passed.
    Pass,
    /// Probe failed.
    Fail,
}

impl StatusKind {
    /// Unicode icon for the transcript.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
        }
    }

    /// Format a probe line: icon + message.
    pub fn format(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

/// Machine-readable result of one diagnostic run, emitted by `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorReport {
    /// When this run was performed.
    pub checked_at: DateTime<Utc>,
    /// Resolved interpreter, or None if resolution failed.
    pub python: Option<InterpreterReport>,
    /// Probed capabilities, in probe order. Short-circuiting truncates
    /// this list at the first failure.
    pub capabilities: Vec<CapabilityReport>,
    /// Smoke test result, or None if it never ran.
    pub model: Option<ModelReport>,
    /// Whether the whole run passed.
    pub ok: bool,
}

impl DoctorReport {
    /// Start an empty (failing) report stamped with the current time.
    pub fn new() -> Self {
        Self {
            checked_at: Utc::now(),
            python: None,
            capabilities: Vec::new(),
            model: None,
            ok: false,
        }
    }
}

impl Default for DoctorReport {
    fn default() -> Self {
        Self::new()
    }
}

/// The interpreter a run resolved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterReport {
    /// Absolute path of the interpreter binary.
    pub path: PathBuf,
    /// Version string parsed from `--version`, if any.
    pub version: Option<String>,
}

impl From<&PythonInterpreter> for InterpreterReport {
    fn from(py: &PythonInterpreter) -> Self {
        Self {
            path: py.path().to_path_buf(),
            version: py.version().map(String::from),
        }
    }
}

/// One probed capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityReport {
    /// Stable capability name (e.g. "pytorch").
    pub name: String,
    /// Whether the import succeeded.
    pub available: bool,
    /// Version string, for capabilities whose probe reports one.
    pub version: Option<String>,
    /// Diagnostic from the failed import, if any.
    pub error: Option<String>,
}

impl From<&CapabilityStatus> for CapabilityReport {
    fn from(status: &CapabilityStatus) -> Self {
        Self {
            name: status.capability.name().to_string(),
            available: status.available,
            version: status.version.clone(),
            error: status.error.clone(),
        }
    }
}

/// Result of the model smoke test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReport {
    /// Architecture name as passed to the loader (e.g. "ViT-B-32").
    pub model: String,
    /// Pretrained weight tag (e.g. "openai").
    pub pretrained: String,
    /// Whether the end-to-end pipeline succeeded.
    pub loaded: bool,
    /// Embedding tensor shape on success.
    pub shape: Option<Vec<usize>>,
    /// Second shape dimension on success.
    pub embedding_dim: Option<usize>,
    /// Failure message, if any.
    pub error: Option<String>,
}

impl ModelReport {
    /// Report a successful smoke test.
    pub fn loaded(model: &str, pretrained: &str, shape: Vec<usize>, dim: usize) -> Self {
        Self {
            model: model.to_string(),
            pretrained: pretrained.to_string(),
            loaded: true,
            shape: Some(shape),
            embedding_dim: Some(dim),
            error: None,
        }
    }

    /// Report a failed smoke test.
    pub fn failed(model: &str, pretrained: &str, message: &str) -> Self {
        Self {
            model: model.to_string(),
            pretrained: pretrained.to_string(),
            loaded: false,
            shape: None,
            embedding_dim: None,
            error: Some(message.to_string()),
        }
    }
}
