//! Terminal input module (board-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and turns
//! held movement keys into actions repeated at a fixed interval, including on
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
