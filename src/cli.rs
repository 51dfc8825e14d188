//! CLI argument definitions.
//!
//! A single flat command: running `clip-doctor` with no arguments performs
//! the full installation test. Every flag is optional and defaults to the
//! stock behavior.

use clap::Parser;
use std::path::PathBuf;

use crate::checks::smoke;

/// clip-doctor - Check that the Python OpenCLIP stack is installed and working.
#[derive(Debug, Parser)]
#[command(name = "clip-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter to use (default: first of python3, python on PATH)
    #[arg(long, env = "CLIP_DOCTOR_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Model architecture to smoke-test
    #[arg(long, value_name = "NAME", default_value = smoke::MODEL_NAME)]
    pub model: String,

    /// Pretrained weight tag to load
    #[arg(long, value_name = "TAG", default_value = smoke::PRETRAINED)]
    pub pretrained: String,

    /// Print a machine-readable JSON report instead of the test transcript
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_run() {
        let cli = Cli::try_parse_from(["clip-doctor"]).unwrap();
        assert!(cli.python.is_none());
        assert_eq!(cli.model, "ViT-B-32");
        assert_eq!(cli.pretrained, "openai");
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn python_override_parses() {
        let cli =
            Cli::try_parse_from(["clip-doctor", "--python", "/opt/venv/bin/python"]).unwrap();
        assert_eq!(cli.python, Some(PathBuf::from("/opt/venv/bin/python")));
    }

    #[test]
    fn model_and_pretrained_parse() {
        let cli = Cli::try_parse_from([
            "clip-doctor",
            "--model",
            "ViT-L-14",
            "--pretrained",
            "laion2b",
        ])
        .unwrap();
        assert_eq!(cli.model, "ViT-L-14");
        assert_eq!(cli.pretrained, "laion2b");
    }

    #[test]
    fn json_and_debug_flags_parse() {
        let cli = Cli::try_parse_from(["clip-doctor", "--json", "--debug"]).unwrap();
        assert!(cli.json);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["clip-doctor", "--frobnicate"]).is_err());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["clip-doctor", "extra"]).is_err());
    }
}
