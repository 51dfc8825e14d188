//! clip-doctor - Installation test for the Python OpenCLIP stack.
//!
//! Answers one question: can this machine produce a CLIP text embedding?
//! The tool probes three Python capabilities in a fixed order (PyTorch,
//! Pillow, OpenCLIP), then loads a pretrained model on CPU and encodes one
//! fixed sentence, reporting pass/fail lines to stdout and exiting 0 only on
//! full success.
//!
//! # Modules
//!
//! - [`checks`] - The import probe and the model smoke test
//! - [`cli`] - Command-line interface and argument parsing
//! - [`doctor`] - Run sequencing, transcript rendering, exit decision
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery and subprocess execution
//! - [`report`] - Output vocabulary and the `--json` report types
//!
//! # Example
//!
//! ```no_run
//! use clip_doctor::cli::Cli;
//! use clip_doctor::doctor::Doctor;
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["clip-doctor"]);
//! let report = Doctor::new(&cli).run(&mut std::io::stdout())?;
//! assert!(report.ok);
//! # Ok::<(), clip_doctor::DoctorError>(())
//! ```

pub mod checks;
pub mod cli;
pub mod doctor;
pub mod error;
pub mod python;
pub mod report;

pub use error::{DoctorError, Result};
