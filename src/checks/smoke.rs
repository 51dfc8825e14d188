//! Model Smoke Test: load the model on CPU and encode one sentence.
//!
//! The whole pipeline (instantiate, tokenize, encode under `no_grad`) runs
//! inside one embedded Python program that prints a single JSON line:
//! `{"shape": [1, D], "dim": D}` on success, `{"error": "…"}` otherwise.
//! Every failure mode on either side of that pipe collapses into
//! [`DoctorError::ModelFailure`]; a failed load and a failed encode read
//! the same to the user, who fixes both the same way.

use serde::Deserialize;

use crate::error::{DoctorError, Result};
use crate::python::{script, PythonInterpreter, ScriptOutput};

/// Default model architecture.
pub const MODEL_NAME: &str = "ViT-B-32";

/// Default pretrained weight tag.
pub const PRETRAINED: &str = "openai";

/// Compute device. The smoke test is CPU-only.
pub const DEVICE: &str = "cpu";

/// The fixed sentence the smoke test encodes.
pub const SMOKE_PROMPT: &str = "a photo of a cat";

/// Embedded probe program; argv: model, pretrained, device, prompt.
const ENCODE_PROBE: &str = include_str!("encode_probe.py");

/// Wire response printed by the probe program.
#[derive(Debug, Clone, Deserialize)]
struct EncodeResponse {
    #[serde(default)]
    shape: Vec<usize>,
    #[serde(default)]
    dim: usize,
    #[serde(default)]
    error: Option<String>,
}

/// Successful smoke test result.
#[derive(Debug, Clone)]
pub struct SmokeOutcome {
    /// Embedding tensor shape, `[1, dim]`.
    pub shape: Vec<usize>,
    /// Embedding dimension (second shape component).
    pub dim: usize,
}

/// Run the smoke test end-to-end.
pub fn run(py: &PythonInterpreter, model: &str, pretrained: &str) -> Result<SmokeOutcome> {
    let args = [model, pretrained, DEVICE, SMOKE_PROMPT];
    let output = script::run_program(py, ENCODE_PROBE, &args).map_err(|e| failure(e.to_string()))?;

    tracing::debug!(
        model,
        pretrained,
        exit_code = ?output.exit_code,
        duration_ms = output.duration.as_millis() as u64,
        "encode probe finished"
    );

    let response = parse_response(&output)?;
    if let Some(message) = response.error {
        return Err(failure(message));
    }

    validate(response)
}

/// Render an architecture name the way the banner does: the final `-`
/// becomes `/` (`ViT-B-32` → `ViT-B/32`).
pub fn display_model_name(model: &str) -> String {
    match model.rsplit_once('-') {
        Some((head, tail)) => format!("{}/{}", head, tail),
        None => model.to_string(),
    }
}

fn failure(message: String) -> DoctorError {
    DoctorError::ModelFailure { message }
}

/// Pull the JSON document off the last stdout line. Libraries print progress
/// bars and warnings above it; those are not part of the wire format.
fn parse_response(output: &ScriptOutput) -> Result<EncodeResponse> {
    let line = output.last_stdout_line().ok_or_else(|| {
        failure(match output.stderr_tail() {
            Some(tail) => tail.to_string(),
            None => format!(
                "python exited with code {} and no output",
                output.exit_code.unwrap_or(-1)
            ),
        })
    })?;

    serde_json::from_str(line).map_err(|_| {
        failure(match output.stderr_tail() {
            Some(tail) => tail.to_string(),
            None => format!("unexpected output from encode probe: {}", line),
        })
    })
}

/// Check the response describes a usable text embedding: one batch row and a
/// positive dimension.
fn validate(response: EncodeResponse) -> Result<SmokeOutcome> {
    let EncodeResponse { shape, dim, .. } = response;

    if shape.len() != 2 || shape[0] != 1 || dim != shape[1] || dim == 0 {
        return Err(failure(format!("unexpected embedding shape {:?}", shape)));
    }

    Ok(SmokeOutcome { shape, dim })
}
