//! Match-3 board engine (workspace facade crate).
//!
//! Re-exports the member crates under one name: `match3::{types, core, sim}`. The engine
//! itself lives in `crates/core`; `crates/sim` is a headless caller used by the
//! `match3` binary.

pub use match3_core as core;
pub use match3_sim as sim;
pub use match3_types as types;
