//! Handlers invoked from `main.rs`.

pub mod generate;
