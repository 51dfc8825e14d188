//! Import Probe: check each capability in order, stopping at the first miss.
//!
//! Availability is data, not an error — a failed import is recorded and the
//! probe simply stops. The driver turns the first miss into a
//! [`DoctorError::MissingDependency`] when it needs one.

use crate::checks::capability::{Capability, CapabilityStatus, PROBE_ORDER};
use crate::error::DoctorError;
use crate::python::{script, PythonInterpreter};

/// Outcome of the import probe.
#[derive(Debug, Clone)]
pub struct ImportProbe {
    statuses: Vec<CapabilityStatus>,
}

impl ImportProbe {
    /// Probed capabilities, in probe order. Short-circuiting means a failed
    /// probe is the last entry.
    pub fn statuses(&self) -> &[CapabilityStatus] {
        &self.statuses
    }

    /// True iff every capability resolved.
    pub fn all_available(&self) -> bool {
        self.statuses.len() == PROBE_ORDER.len() && self.statuses.iter().all(|s| s.available)
    }

    /// The first missing capability as a tagged error, if any.
    pub fn missing(&self) -> Option<DoctorError> {
        self.statuses
            .iter()
            .find(|s| !s.available)
            .map(|s| DoctorError::MissingDependency {
                capability: s.capability.display_name().to_string(),
                message: s
                    .error
                    .clone()
                    .unwrap_or_else(|| "import failed".to_string()),
            })
    }
}

/// Probe all capabilities in order, short-circuiting on the first failure.
pub fn probe_all(py: &PythonInterpreter) -> ImportProbe {
    let mut statuses = Vec::with_capacity(PROBE_ORDER.len());

    for capability in PROBE_ORDER {
        let status = probe_capability(py, capability);
        let available = status.available;
        statuses.push(status);
        if !available {
            break;
        }
    }

    ImportProbe { statuses }
}

/// Probe a single capability by running its import snippet.
fn probe_capability(py: &PythonInterpreter, capability: Capability) -> CapabilityStatus {
    match script::run_snippet(py, capability.import_snippet()) {
        Ok(output) if output.success => {
            let version = if capability.reports_version() {
                output.last_stdout_line().map(String::from)
            } else {
                None
            };
            tracing::debug!(
                capability = capability.name(),
                version = ?version,
                duration_ms = output.duration.as_millis() as u64,
                "import ok"
            );
            CapabilityStatus {
                capability,
                available: true,
                version,
                error: None,
            }
        }
        Ok(output) => {
            let error = output.stderr_tail().map(String::from);
            tracing::debug!(
                capability = capability.name(),
                exit_code = ?output.exit_code,
                error = ?error,
                "import failed"
            );
            CapabilityStatus {
                capability,
                available: false,
                version: None,
                error,
            }
        }
        Err(e) => {
            tracing::debug!(capability = capability.name(), error = %e, "probe did not run");
            CapabilityStatus {
                capability,
                available: false,
                version: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    mod with_fake_interpreter {
        use super::*;
        use std::fs;
        use std::path::{Path, PathBuf};
        use tempfile::TempDir;

        /// Write a fake interpreter script and make it executable.
        fn fake_python(dir: &Path, body: &str) -> PythonInterpreter {
            let path = dir.join("python3");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            PythonInterpreter::at(path)
        }

        /// A fake interpreter that succeeds on every snippet and prints a
        /// version for the torch one. `$2` is the snippet (after `-c`).
        fn all_ok(dir: &Path) -> PythonInterpreter {
            fake_python(
                dir,
                r#"case "$2" in
  *torch.__version__*) echo "2.3.1"; exit 0 ;;
  *) exit 0 ;;
esac"#,
            )
        }

        #[test]
        fn all_capabilities_available() {
            let temp = TempDir::new().unwrap();
            let py = all_ok(temp.path());

            let probe = probe_all(&py);

            assert!(probe.all_available());
            assert!(probe.missing().is_none());
            assert_eq!(probe.statuses().len(), 3);
            assert_eq!(probe.statuses()[0].version.as_deref(), Some("2.3.1"));
            assert!(probe.statuses()[1].version.is_none());
        }

        #[test]
        fn chatty_imports_do_not_record_versions() {
            let temp = TempDir::new().unwrap();
            let py = fake_python(
                temp.path(),
                r#"case "$2" in
  *torch.__version__*) echo "2.3.1"; exit 0 ;;
  *PIL*) echo "Pillow import advisory"; exit 0 ;;
  *open_clip*) echo "open_clip 3.2.0 ready"; exit 0 ;;
  *) exit 0 ;;
esac"#,
            );

            let probe = probe_all(&py);

            assert!(probe.all_available());
            assert_eq!(probe.statuses()[0].version.as_deref(), Some("2.3.1"));
            assert!(probe.statuses()[1].version.is_none());
            assert!(probe.statuses()[2].version.is_none());
            assert_eq!(probe.statuses()[1].line(), "✓ Pillow (PIL)");
            assert_eq!(probe.statuses()[2].line(), "✓ OpenCLIP");
        }

        #[test]
        fn short_circuits_on_first_failure() {
            let temp = TempDir::new().unwrap();
            let log = temp.path().join("invocations.log");
            let py = fake_python(
                temp.path(),
                &format!(
                    r#"echo "$2" >> {}
case "$2" in
  *torch.__version__*) echo "2.3.1"; exit 0 ;;
  *PIL*) echo "ModuleNotFoundError: No module named 'PIL'" >&2; exit 1 ;;
  *) exit 0 ;;
esac"#,
                    log.display()
                ),
            );

            let probe = probe_all(&py);

            assert!(!probe.all_available());
            assert_eq!(probe.statuses().len(), 2);
            assert!(probe.statuses()[0].available);
            assert!(!probe.statuses()[1].available);

            // The OpenCLIP snippet was never invoked.
            let invocations = fs::read_to_string(&log).unwrap();
            assert_eq!(invocations.lines().count(), 2);
            assert!(!invocations.contains("open_clip"));
        }

        #[test]
        fn missing_carries_capability_and_diagnostic() {
            let temp = TempDir::new().unwrap();
            let py = fake_python(
                temp.path(),
                r#"case "$2" in
  *torch*) echo "ModuleNotFoundError: No module named 'torch'" >&2; exit 1 ;;
  *) exit 0 ;;
esac"#,
            );

            let probe = probe_all(&py);
            let err = probe.missing().unwrap();

            assert_eq!(err.to_string(), "PyTorch not installed");
            assert_eq!(err.message(), Some("ModuleNotFoundError: No module named 'torch'"));
            assert_eq!(probe.statuses().len(), 1);
        }

        #[test]
        fn unreachable_interpreter_reads_as_unavailable() {
            let py = PythonInterpreter::at(PathBuf::from("/nonexistent/python3"));

            let probe = probe_all(&py);

            assert_eq!(probe.statuses().len(), 1);
            assert!(!probe.statuses()[0].available);
            assert!(probe.missing().is_some());
        }
    }

    #[test]
    fn missing_defaults_message_when_no_diagnostic() {
        let probe = ImportProbe {
            statuses: vec![CapabilityStatus {
                capability: Capability::OpenClip,
                available: false,
                version: None,
                error: None,
            }],
        };

        let err = probe.missing().unwrap();
        assert_eq!(err.message(), Some("import failed"));
    }

    #[test]
    fn partial_probe_is_not_all_available() {
        let probe = ImportProbe {
            statuses: vec![CapabilityStatus {
                capability: Capability::PyTorch,
                available: true,
                version: Some("2.3.1".to_string()),
                error: None,
            }],
        };

        assert!(!probe.all_available());
        assert!(probe.missing().is_none());
    }
}
