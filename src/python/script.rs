//! Running short Python programs and capturing their output.
//!
//! Everything goes through `python -c <program> [args…]`: import probes pass
//! a one-line snippet, the smoke test passes an embedded program plus
//! positional arguments (argv after `-c` shows up as `sys.argv[1:]`). The
//! interpreter is invoked directly — no login shell in between — because the
//! binary was already resolved and nothing here depends on the user's shell
//! configuration.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::python::interpreter::PythonInterpreter;

/// Captured result of one interpreter invocation.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the invocation succeeded (exit code 0).
    pub success: bool,
}

impl ScriptOutput {
    /// Last non-empty stdout line, trimmed.
    ///
    /// The interesting line (a version number, a JSON document) is the final
    /// one; libraries are free to print warnings above it.
    pub fn last_stdout_line(&self) -> Option<&str> {
        last_non_empty_line(&self.stdout)
    }

    /// Last non-empty stderr line, trimmed. Usually the exception summary.
    pub fn stderr_tail(&self) -> Option<&str> {
        last_non_empty_line(&self.stderr)
    }
}

fn last_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).last()
}

/// Run a one-line snippet: `python -c <snippet>`.
pub fn run_snippet(py: &PythonInterpreter, snippet: &str) -> Result<ScriptOutput> {
    run(py, snippet, &[])
}

/// Run a program with positional arguments: `python -c <program> [args…]`.
pub fn run_program(py: &PythonInterpreter, program: &str, args: &[&str]) -> Result<ScriptOutput> {
    run(py, program, args)
}

fn run(py: &PythonInterpreter, program: &str, args: &[&str]) -> Result<ScriptOutput> {
    let start = Instant::now();

    let output = Command::new(py.path())
        .arg("-c")
        .arg(program)
        .args(args)
        .stdin(Stdio::null())
        .output()?;

    let duration = start.elapsed();

    Ok(ScriptOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn output_with(stdout: &str, stderr: &str) -> ScriptOutput {
        ScriptOutput {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration: Duration::from_millis(1),
            success: true,
        }
    }

    #[test]
    fn last_stdout_line_skips_trailing_blanks() {
        let out = output_with("warning: slow\n2.3.1\n\n", "");
        assert_eq!(out.last_stdout_line(), Some("2.3.1"));
    }

    #[test]
    fn last_stdout_line_none_when_empty() {
        let out = output_with("\n  \n", "");
        assert!(out.last_stdout_line().is_none());
    }

    #[test]
    fn stderr_tail_takes_final_line() {
        let out = output_with(
            "",
            "Traceback (most recent call last):\nModuleNotFoundError: No module named 'torch'\n",
        );
        assert_eq!(
            out.stderr_tail(),
            Some("ModuleNotFoundError: No module named 'torch'")
        );
    }

    // The remaining tests drive a real subprocess; `sh -c` stands in for the
    // interpreter since both take a program after `-c`.
    #[cfg(unix)]
    fn sh() -> PythonInterpreter {
        PythonInterpreter::at(PathBuf::from("/bin/sh"))
    }

    #[cfg(unix)]
    #[test]
    fn run_snippet_captures_stdout() {
        let result = run_snippet(&sh(), "echo hello").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.last_stdout_line(), Some("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_snippet_reports_failure() {
        let result = run_snippet(&sh(), "echo broken >&2; exit 1").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert_eq!(result.stderr_tail(), Some("broken"));
    }

    #[cfg(unix)]
    #[test]
    fn run_program_passes_positional_args() {
        // sh numbers the trailing args from $0 where Python starts at
        // sys.argv[1]; either way they arrive in order after the program.
        let result = run_program(&sh(), "echo \"$0 $1\"", &["ViT-B-32", "openai"]).unwrap();
        assert!(result.success);
        assert_eq!(result.last_stdout_line(), Some("ViT-B-32 openai"));
    }

    #[cfg(unix)]
    #[test]
    fn run_tracks_duration() {
        let result = run_snippet(&sh(), "true").unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn run_errors_for_missing_interpreter() {
        let py = PythonInterpreter::at(PathBuf::from("/nonexistent/python3"));
        assert!(run_snippet(&py, "print('hi')").is_err());
    }
}
