//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable `tui_blockfall::{core,input,term,types}`
//! paths and owns the runtime configuration used by the binary.

pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub use config::GameConfig;
