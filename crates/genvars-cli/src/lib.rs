//! Command-line adapter for the runtime variables generator.
//!
//! There is no functional command line: the binary either prints usage or
//! runs the generation pipeline once. `main.rs` is the composition root.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Git resolver is wired in main.rs
use genvars_runtime as _;

pub mod args;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use args::{Invocation, PROGRAM_NAME, usage};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
