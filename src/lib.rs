//! Memory-match (workspace facade crate).
//!
//! This package keeps the public `memory_match::{core,types}` API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use memory_match_core as core;
pub use memory_match_types as types;
