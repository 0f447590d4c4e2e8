//! Command Line Interface (CLI) layer for ytcrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that checks for the input file,
//! runs the crop, and prints the user-facing result banners.
//!
//! If you are embedding ytcrop into another application, prefer the
//! `ytcrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
