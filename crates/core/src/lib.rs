//! Core game logic - the board and the pieces that fall through it
//!
//! This crate holds every game rule and nothing else: no terminal, no timers,
//! no input devices. A driving loop calls into [`Board`] one request at a time
//! and reads the result back for rendering.
//!
//! # Module Structure
//!
//! - [`piece`]: shape matrices with translation and quarter-turn rotation
//! - [`factory`]: uniform, seeded or scripted piece production
//! - [`grid`]: fixed-size cell storage with gravity-style row clearing
//! - [`board`]: move/rotate legality, wall kicks, locking, clearing and reset
//!
//! # Rules
//!
//! - Pieces spawn with their bounding box at (5, 0) and fall one row per
//!   gravity step.
//! - A blocked piece locks into the grid; complete rows disappear and the rows
//!   above fall to fill the space.
//! - A rotation that pushes the piece through a side wall is clamped back
//!   inside once; there is no vertical kick.
//! - A piece that cannot leave row 0 ends the game, and the board starts over.
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Board, PieceFactory};
//! use tui_blockfall_types::{GravityOutcome, MoveDirection, PieceKind};
//!
//! let mut board = Board::with_factory(22, 10, PieceFactory::sequence([PieceKind::I]));
//! assert!(board.try_move(MoveDirection::Left));
//! assert_eq!(board.advance_gravity(), GravityOutcome::Fell);
//! assert_eq!(board.hard_drop(), GravityOutcome::Locked { rows_cleared: 0 });
//! assert_eq!(board.cell(21, 4), Some(PieceKind::I.cell()));
//! ```

pub mod board;
pub mod factory;
pub mod grid;
pub mod piece;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use factory::PieceFactory;
pub use grid::Grid;
pub use piece::Piece;
