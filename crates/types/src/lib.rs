//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the core, the
//! terminal view and the input layer can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Rows**: 22 by default (indexed 0-21, top to bottom)
//! - **Columns**: 10 by default (indexed 0-9, left to right)
//! - **Spawn offset**: (5, 0), the top-left of the new piece's bounding box
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 250 | Interval between automatic one-row drops |
//! | `INPUT_REPEAT_MS` | 100 | Interval between repeats of a held key |
//! | `FRAME_MS` | 16 | Input poll / redraw cadence of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(PieceKind::from_cell(kind.cell()), Some(PieceKind::T));
//!
//! assert_eq!(DEFAULT_ROWS, 22);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 22;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 10;

/// Smallest grid the board accepts in either dimension.
///
/// Four is the longest side of any canonical shape.
pub const MIN_DIMENSION: usize = 4;

/// Largest grid the terminal frontend accepts in either dimension.
///
/// Keeps every on-screen coordinate of the board inside `u16`.
pub const MAX_DIMENSION: usize = 1_000;

/// Default spawn offset (x, y) of a new piece's bounding box.
pub const SPAWN_POSITION: (i32, i32) = (5, 0);

/// Number of upcoming pieces visible besides the active one.
pub const PREVIEW_DEPTH: usize = 1;

/// Gravity interval in milliseconds.
pub const GRAVITY_MS: u32 = 250;

/// Held-key repeat interval in milliseconds.
pub const INPUT_REPEAT_MS: u32 = 100;

/// Terminal loop frame interval in milliseconds (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// A cell of the grid.
///
/// `0` is empty; any other value is occupied. Locked cells carry the
/// [`PieceKind::cell`] code of the piece that filled them.
pub type Cell = u8;

/// Value of an empty grid cell.
pub const EMPTY: Cell = 0;

/// The seven canonical piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in cell-code order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Nonzero grid code written when this kind locks.
    pub fn cell(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::cell`]. Unknown codes map to `None`.
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// One-cell translation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Offset (dx, dy) applied by this translation.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// Quarter-turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Requests the driving loop can make of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance gravity by one row immediately
    SoftDrop,
    /// Drop to the lowest reachable row and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Throw the current game away and start over
    Restart,
}

impl GameAction {
    /// Whether this action should restart the loop's gravity timer.
    pub fn restarts_gravity(&self) -> bool {
        matches!(
            self,
            GameAction::SoftDrop
                | GameAction::HardDrop
                | GameAction::RotateCw
                | GameAction::RotateCcw
                | GameAction::Restart
        )
    }
}

/// What one gravity step did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// The active piece moved down one row.
    Fell,
    /// The piece was blocked, locked into the grid and replaced.
    Locked { rows_cleared: u32 },
    /// The piece was blocked on row 0: the board was wiped and restarted.
    Reset,
}

impl GravityOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, GravityOutcome::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_loop_timing_defaults() {
        assert_eq!(GRAVITY_MS, 250);
        assert_eq!(INPUT_REPEAT_MS, 100);
        assert_eq!(SPAWN_POSITION, (5, 0));
        assert_eq!(PREVIEW_DEPTH, 1);
    }

    #[test]
    fn cell_codes_are_nonzero_and_round_trip() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.cell(), EMPTY);
            assert_eq!(PieceKind::from_cell(kind.cell()), Some(kind));
        }
        assert_eq!(PieceKind::from_cell(EMPTY), None);
        assert_eq!(PieceKind::from_cell(42), None);
    }

    #[test]
    fn move_deltas() {
        assert_eq!(MoveDirection::Left.delta(), (-1, 0));
        assert_eq!(MoveDirection::Right.delta(), (1, 0));
        assert_eq!(MoveDirection::Down.delta(), (0, 1));
    }

    #[test]
    fn horizontal_moves_keep_gravity_timer() {
        assert!(!GameAction::MoveLeft.restarts_gravity());
        assert!(!GameAction::MoveRight.restarts_gravity());
        assert!(GameAction::RotateCw.restarts_gravity());
        assert!(GameAction::SoftDrop.restarts_gravity());
    }
}
