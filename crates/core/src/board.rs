//! Board module - the playfield and the piece falling through it
//!
//! The board owns the grid, the active piece and a one-piece preview queue.
//! Every move or rotation is tried on a copy of the active piece first and only
//! committed once the copy is known to be legal, so a rejected request never
//! leaves the board half-changed.

use std::collections::VecDeque;

use log::{debug, info};

use crate::factory::PieceFactory;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{
    Cell, GameAction, GravityOutcome, MoveDirection, RotateDirection, DEFAULT_COLS, DEFAULT_ROWS,
    MIN_DIMENSION, PREVIEW_DEPTH, SPAWN_POSITION,
};

/// Grid, active piece, preview queue and cleared-row counter.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: Piece,
    next_queue: VecDeque<Piece>,
    factory: PieceFactory,
    spawn: (i32, i32),
    cleared_rows: u32,
    /// Monotonic game counter (increments on every reset).
    episode: u32,
}

impl Board {
    /// Create a board with random pieces and spawn the first one.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_factory(rows, cols, PieceFactory::new())
    }

    /// Create a board drawing pieces from `factory` and spawn the first one.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below [`MIN_DIMENSION`].
    pub fn with_factory(rows: usize, cols: usize, mut factory: PieceFactory) -> Self {
        assert!(
            rows >= MIN_DIMENSION && cols >= MIN_DIMENSION,
            "board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {rows}x{cols}"
        );

        // Keep the widest shape (4 columns) inside the grid at spawn.
        let max_x = (cols - MIN_DIMENSION) as i32;
        let spawn = (SPAWN_POSITION.0.min(max_x), SPAWN_POSITION.1);

        let mut next_queue = VecDeque::with_capacity(PREVIEW_DEPTH + 1);
        let active = draw_next(&mut next_queue, &mut factory, spawn);

        Self {
            grid: Grid::new(rows, cols),
            active,
            next_queue,
            factory,
            spawn,
            cleared_rows: 0,
            episode: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Grid value at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.grid.get(col as i32, row as i32)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The piece currently under player control.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The piece that will become active after the next lock.
    pub fn preview(&self) -> Option<&Piece> {
        self.next_queue.front()
    }

    /// Total rows cleared in the current game.
    pub fn cleared_rows(&self) -> u32 {
        self.cleared_rows
    }

    /// Where new pieces appear (x, y).
    pub fn spawn_position(&self) -> (i32, i32) {
        self.spawn
    }

    /// Number of resets (game overs and restarts) so far.
    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Top the preview queue up and promote its front piece to active.
    pub fn spawn_next(&mut self) {
        self.active = draw_next(&mut self.next_queue, &mut self.factory, self.spawn);
    }

    /// Bounding box lies entirely inside the grid.
    pub fn is_in_bounds(&self, piece: &Piece) -> bool {
        let (x, y) = piece.position();
        x >= 0
            && y >= 0
            && x as usize + piece.cols() <= self.cols()
            && y as usize + piece.rows() <= self.rows()
    }

    /// No filled shape cell sits on an occupied grid cell.
    ///
    /// Cells outside the grid never collide; pair with [`Board::is_in_bounds`].
    pub fn is_collision_free(&self, piece: &Piece) -> bool {
        piece
            .filled_cells()
            .all(|(x, y)| !self.grid.is_occupied(x, y))
    }

    fn fits(&self, piece: &Piece) -> bool {
        self.is_in_bounds(piece) && self.is_collision_free(piece)
    }

    /// Move the active piece one cell if the destination is legal.
    pub fn try_move(&mut self, direction: MoveDirection) -> bool {
        let moved = self.active.translated(direction);
        if !self.fits(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece, clamping it back inside the side walls if the
    /// turn pushed it out horizontally.
    pub fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        let mut rotated = self.active.rotated(direction);

        if !self.is_in_bounds(&rotated) {
            let max_x = self.cols() as i32 - rotated.cols() as i32;
            if rotated.x() < 0 {
                rotated.set_x(0);
            } else if rotated.x() > max_x {
                rotated.set_x(max_x);
            }
            // No vertical kick: still out of bounds means rejected.
            if !self.is_in_bounds(&rotated) {
                return false;
            }
        }

        if !self.is_collision_free(&rotated) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// One gravity step.
    ///
    /// Moves the piece down a row if it can. A blocked piece is locked, full
    /// rows are cleared and the next piece spawns; a blocked piece still on
    /// row 0 means the stack reached the top, and the board is reset.
    pub fn advance_gravity(&mut self) -> GravityOutcome {
        if self.try_move(MoveDirection::Down) {
            return GravityOutcome::Fell;
        }

        if self.active.y() == 0 {
            info!(
                "board full: {:?} blocked at spawn, resetting after {} cleared rows",
                self.active.kind(),
                self.cleared_rows
            );
            self.reset();
            return GravityOutcome::Reset;
        }

        self.lock();
        let rows_cleared = self.clear_completed_rows() as u32;
        self.spawn_next();
        GravityOutcome::Locked { rows_cleared }
    }

    /// Drop the active piece as far as it goes, then take the gravity step
    /// that locks it.
    pub fn hard_drop(&mut self) -> GravityOutcome {
        while self.try_move(MoveDirection::Down) {}
        self.advance_gravity()
    }

    /// Copy the active piece's filled cells into empty grid cells.
    ///
    /// Cells that are already occupied are left as they are.
    pub fn lock(&mut self) {
        let value = self.active.kind().cell();
        for (x, y) in self.active.filled_cells() {
            if self.grid.is_empty_at(x, y) {
                self.grid.set(x, y, value);
            }
        }
        debug!(
            "locked {:?} at {:?}",
            self.active.kind(),
            self.active.position()
        );
    }

    /// Remove full rows and add them to the running total.
    pub fn clear_completed_rows(&mut self) -> usize {
        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            self.cleared_rows += cleared as u32;
            debug!("cleared {} rows ({} total)", cleared, self.cleared_rows);
        }
        cleared
    }

    /// Start a fresh game on the same-sized board.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.cleared_rows = 0;
        self.next_queue.clear();
        self.episode = self.episode.wrapping_add(1);
        self.spawn_next();
    }

    /// Apply a loop request. Returns whether the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(MoveDirection::Left),
            GameAction::MoveRight => self.try_move(MoveDirection::Right),
            GameAction::RotateCw => self.try_rotate(RotateDirection::Clockwise),
            GameAction::RotateCcw => self.try_rotate(RotateDirection::CounterClockwise),
            GameAction::SoftDrop => {
                self.advance_gravity();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Take the next piece (generating it when the queue is empty), then top the
/// queue back up to the preview depth.
fn draw_next(queue: &mut VecDeque<Piece>, factory: &mut PieceFactory, spawn: (i32, i32)) -> Piece {
    let next = match queue.pop_front() {
        Some(piece) => piece,
        None => factory.generate(spawn.0, spawn.1),
    };
    while queue.len() < PREVIEW_DEPTH {
        queue.push_back(factory.generate(spawn.0, spawn.1));
    }
    next
}
