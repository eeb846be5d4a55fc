//! Services that orchestrate the core pieces.

mod generator;

pub use generator::{GenerateError, Generator};
