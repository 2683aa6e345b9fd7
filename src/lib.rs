//! Playfield (workspace facade crate).
//!
//! Exposes the engine as `playfield::{core, types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use playfield_core as core;
pub use playfield_types as types;
