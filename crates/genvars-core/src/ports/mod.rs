//! Port definitions for genvars-core.
//!
//! Ports are the seams where infrastructure plugs into the generator.
//! Implementations live in adapter crates (`genvars-runtime`) or in tests.

mod repo_root;

pub use repo_root::{RepoRootError, RepoRootResolver, StaticRepoRoot};
