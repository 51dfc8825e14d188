//! The capabilities the import probe checks, in their fixed order.
//!
//! A capability is a Python library the embedding pipeline cannot run
//! without. The probe order is part of the output contract: PyTorch, then
//! Pillow, then OpenCLIP, stopping at the first failure.

/// A named Python capability required by the CLIP pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The tensor runtime (`torch`).
    PyTorch,
    /// The image loader (`PIL`).
    Pillow,
    /// The embedding-model library (`open_clip`).
    OpenClip,
}

/// Probe order. Fixed; the transcript and the short-circuit property both
/// depend on it.
pub const PROBE_ORDER: [Capability; 3] =
    [Capability::PyTorch, Capability::Pillow, Capability::OpenClip];

impl Capability {
    /// Stable lowercase name used in the JSON report.
    pub fn name(self) -> &'static str {
        match self {
            Self::PyTorch => "pytorch",
            Self::Pillow => "pillow",
            Self::OpenClip => "open_clip",
        }
    }

    /// Name used on the `✗ … not installed` line.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::PyTorch => "PyTorch",
            Self::Pillow => "Pillow",
            Self::OpenClip => "OpenCLIP",
        }
    }

    /// Label used on the `✓` line. Pillow carries its import name alongside.
    pub fn success_label(self) -> &'static str {
        match self {
            Self::PyTorch => "PyTorch",
            Self::Pillow => "Pillow (PIL)",
            Self::OpenClip => "OpenCLIP",
        }
    }

    /// One-line probe program. PyTorch's prints the version so the transcript
    /// can show it; the others only need the import to succeed.
    pub fn import_snippet(self) -> &'static str {
        match self {
            Self::PyTorch => "import torch; print(torch.__version__)",
            Self::Pillow => "from PIL import Image",
            Self::OpenClip => "import open_clip",
        }
    }

    /// Whether this capability's probe prints a version worth capturing.
    /// Only the PyTorch snippet does; stdout from the others is noise (a
    /// chatty import must not leak into the success line).
    pub fn reports_version(self) -> bool {
        matches!(self, Self::PyTorch)
    }
}

/// Result of probing one capability.
#[derive(Debug, Clone)]
pub struct CapabilityStatus {
    /// Which capability was probed.
    pub capability: Capability,
    /// Whether the import succeeded.
    pub available: bool,
    /// Version printed by the probe, if any.
    pub version: Option<String>,
    /// Diagnostic from the failed import (exception summary), if any.
    pub error: Option<String>,
}

impl CapabilityStatus {
    /// Transcript line for this status.
    pub fn line(&self) -> String {
        use crate::report::StatusKind;

        if self.available {
            match &self.version {
                Some(version) => {
                    StatusKind::Pass.format(&format!("{} {}", self.capability.success_label(), version))
                }
                None => StatusKind::Pass.format(self.capability.success_label()),
            }
        } else {
            StatusKind::Fail.format(&format!("{} not installed", self.capability.display_name()))
        }
    }
}
