//! Adapters that implement `genvars-core` ports by running external programs.
#![deny(unused_crate_dependencies)]

pub mod git;

pub use git::GitRepoRootResolver;
