//! Report/Exit driver.
//!
//! Sequences the two diagnostic stages, writes the human transcript, and
//! assembles the [`DoctorReport`]. The transcript is an exact-output
//! contract: every line below is either a literal from [`crate::report`] or
//! a `StatusKind`-formatted probe line, and nothing else is ever written to
//! the given writer.
//!
//! Diagnostic failures (a missing dependency, a failed smoke test) are not
//! `Err` — they come back as a report with `ok == false`. Only writer errors
//! propagate.

use std::io::Write;
use std::path::PathBuf;

use crate::checks::{imports, smoke};
use crate::cli::Cli;
use crate::error::Result;
use crate::python::PythonInterpreter;
use crate::report::{
    DoctorReport, InterpreterReport, ModelReport, StatusKind, BANNER, DEPS_MISSING_BANNER,
    IMPORTS_HEADER, INSTALL_HINT, MODEL_FAILED_BANNER, MODEL_HEADER, SUCCESS_BANNER, USAGE_HINT,
};

/// The installation test, configured and ready to run.
#[derive(Debug, Clone)]
pub struct Doctor {
    python: Option<PathBuf>,
    model: String,
    pretrained: String,
}

impl Doctor {
    /// Build a doctor from parsed CLI arguments.
    pub fn new(cli: &Cli) -> Self {
        Self {
            python: cli.python.clone(),
            model: cli.model.clone(),
            pretrained: cli.pretrained.clone(),
        }
    }

    /// Run the full test, writing the transcript to `out`.
    ///
    /// Returns the report; `report.ok` decides the exit code.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<DoctorReport> {
        let mut report = DoctorReport::new();

        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;
        writeln!(out, "{}", IMPORTS_HEADER)?;

        let py = match PythonInterpreter::resolve(self.python.as_deref()) {
            Ok(py) => py,
            Err(err) => {
                writeln!(out, "{}", StatusKind::Fail.format(&err.to_string()))?;
                self.write_missing_deps(out)?;
                return Ok(report);
            }
        };
        report.python = Some(InterpreterReport::from(&py));
        writeln!(out, "{}", StatusKind::Pass.format(&python_line(&py)))?;

        let probe = imports::probe_all(&py);
        for status in probe.statuses() {
            writeln!(out, "{}", status.line())?;
        }
        report.capabilities = probe.statuses().iter().map(Into::into).collect();

        if let Some(err) = probe.missing() {
            tracing::debug!(error = %err, detail = ?err.message(), "import probe failed");
            self.write_missing_deps(out)?;
            return Ok(report);
        }

        writeln!(out)?;
        writeln!(out, "{}", MODEL_HEADER)?;

        match smoke::run(&py, &self.model, &self.pretrained) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "{}",
                    StatusKind::Pass.format(&format!(
                        "{} model loaded successfully",
                        smoke::display_model_name(&self.model)
                    ))
                )?;
                writeln!(
                    out,
                    "{}",
                    StatusKind::Pass.format(&format!("Text embedding shape: {:?}", outcome.shape))
                )?;
                writeln!(
                    out,
                    "{}",
                    StatusKind::Pass.format(&format!("Embedding dimension: {}", outcome.dim))
                )?;

                report.model = Some(ModelReport::loaded(
                    &self.model,
                    &self.pretrained,
                    outcome.shape,
                    outcome.dim,
                ));
                report.ok = true;

                writeln!(out)?;
                writeln!(out, "{}", SUCCESS_BANNER)?;
                writeln!(out)?;
                writeln!(out, "You can now use: {}", USAGE_HINT)?;
            }
            Err(err) => {
                writeln!(out, "{}", StatusKind::Fail.format(&err.to_string()))?;
                report.model = Some(ModelReport::failed(
                    &self.model,
                    &self.pretrained,
                    err.message().unwrap_or("model loading failed"),
                ));

                writeln!(out)?;
                writeln!(out, "{}", MODEL_FAILED_BANNER)?;
            }
        }

        Ok(report)
    }

    /// The dependency-failure block: verdict banner plus install hint.
    fn write_missing_deps<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", DEPS_MISSING_BANNER)?;
        writeln!(out)?;
        writeln!(out, "Install with:")?;
        writeln!(out, "  {}", INSTALL_HINT)?;
        Ok(())
    }
}

/// The interpreter's probe line body: `Python <version> (<path>)`.
fn python_line(py: &PythonInterpreter) -> String {
    match py.version() {
        Some(version) => format!("Python {} ({})", version, py.path().display()),
        None => format!("Python ({})", py.path().display()),
    }
}
