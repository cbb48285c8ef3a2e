//! merge2048 (workspace facade crate).
//!
//! Re-exports the engine crates as `merge2048::{core, store, types}` so
//! tools and tests depend on one package while the implementation lives in
//! dedicated crates under `crates/`.

pub use merge2048_core as core;
pub use merge2048_store as store;
pub use merge2048_types as types;
