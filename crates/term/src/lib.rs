//! Terminal rendering for the falling-block game.
//!
//! No widget toolkit: the view draws a [`core::Board`] into a plain
//! framebuffer, and the renderer flushes that framebuffer to the terminal,
//! re-emitting only what changed since the previous frame.
//!
//! Grid cells are drawn two characters wide so blocks look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
