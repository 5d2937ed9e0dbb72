//! Command Line Interface (CLI) layer for assetfit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves a job from presets,
//! job files and flags before handing it to `assetfit::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
