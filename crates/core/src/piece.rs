//! Piece module - shape matrices, translation and rotation
//!
//! A piece is a small boolean matrix plus the grid offset of its top-left
//! corner. The matrix is stored inline (row-major) so a piece can be copied
//! freely when the board needs to test a hypothetical move.
//!
//! Rotation turns the matrix about its bounding-box origin: the offset does
//! not change, only the matrix and its dimensions. Keeping the piece inside
//! the grid afterwards is the board's job.

use arrayvec::ArrayVec;

use crate::types::{MoveDirection, PieceKind, RotateDirection};

/// Largest bounding box any shape can occupy (4x4).
pub const MAX_SHAPE_CELLS: usize = 16;

/// Canonical spawn matrix for a piece kind: (rows, cols, row-major cells).
pub fn spawn_shape(kind: PieceKind) -> (usize, usize, &'static [bool]) {
    const X: bool = true;
    const O: bool = false;
    match kind {
        PieceKind::I => (1, 4, &[X, X, X, X]),
        PieceKind::O => (2, 2, &[X, X, X, X]),
        PieceKind::Z => (2, 3, &[X, X, O, O, X, X]),
        PieceKind::S => (2, 3, &[O, X, X, X, X, O]),
        PieceKind::L => (3, 2, &[X, O, X, O, X, X]),
        PieceKind::J => (3, 2, &[O, X, O, X, X, X]),
        PieceKind::T => (2, 3, &[O, X, O, X, X, X]),
    }
}

/// A falling piece: shape matrix and grid offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rows: usize,
    cols: usize,
    shape: ArrayVec<bool, MAX_SHAPE_CELLS>,
    x: i32,
    y: i32,
}

impl Piece {
    /// Create a piece of the given kind in its spawn orientation at (x, y).
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        let (rows, cols, cells) = spawn_shape(kind);
        Self {
            kind,
            rows,
            cols,
            shape: cells.iter().copied().collect(),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Number of rows in the bounding box.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the bounding box.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape cells, row-major, `rows() * cols()` long.
    pub fn shape(&self) -> &[bool] {
        &self.shape
    }

    /// Iterate the shape one row at a time.
    pub fn shape_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.shape.chunks(self.cols)
    }

    /// Shape cell at (row, col) of the bounding box; `false` outside it.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.shape[row * self.cols + col]
    }

    /// Grid coordinates (x, y) of every filled cell at the current offset.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols;
        self.shape
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| {
                (
                    self.x + (i % cols) as i32,
                    self.y + (i / cols) as i32,
                )
            })
    }

    /// Shift by exactly one cell. No bounds checking.
    pub fn translate(&mut self, direction: MoveDirection) {
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
    }

    /// Turn the matrix a quarter turn, swapping its dimensions.
    ///
    /// Clockwise sends old (r, c) to new (c, rows-1-r); counter-clockwise
    /// sends it to (cols-1-c, r). The offset is left alone.
    pub fn rotate(&mut self, direction: RotateDirection) {
        let (rows, cols) = (self.rows, self.cols);
        // New matrix is cols x rows, so its row stride is `rows`.
        let mut turned: ArrayVec<bool, MAX_SHAPE_CELLS> =
            std::iter::repeat(false).take(rows * cols).collect();

        for r in 0..rows {
            for c in 0..cols {
                let (nr, nc) = match direction {
                    RotateDirection::Clockwise => (c, rows - 1 - r),
                    RotateDirection::CounterClockwise => (cols - 1 - c, r),
                };
                turned[nr * rows + nc] = self.shape[r * cols + c];
            }
        }

        self.shape = turned;
        std::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Copy of this piece shifted by one cell.
    pub fn translated(&self, direction: MoveDirection) -> Self {
        let mut moved = self.clone();
        moved.translate(direction);
        moved
    }

    /// Copy of this piece turned a quarter turn.
    pub fn rotated(&self, direction: RotateDirection) -> Self {
        let mut turned = self.clone();
        turned.rotate(direction);
        turned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(piece: &Piece) -> Vec<Vec<u8>> {
        piece
            .shape_rows()
            .map(|row| row.iter().map(|&b| b as u8).collect())
            .collect()
    }

    #[test]
    fn test_spawn_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind, 0, 0);
            assert_eq!(piece.shape().len(), piece.rows() * piece.cols());
            assert_eq!(piece.filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_t_piece_matrix() {
        let t = Piece::new(PieceKind::T, 0, 0);
        assert_eq!(rows_of(&t), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_translate() {
        let mut p = Piece::new(PieceKind::O, 5, 0);
        p.translate(MoveDirection::Left);
        assert_eq!(p.position(), (4, 0));
        p.translate(MoveDirection::Right);
        p.translate(MoveDirection::Right);
        assert_eq!(p.position(), (6, 0));
        p.translate(MoveDirection::Down);
        assert_eq!(p.position(), (6, 1));
    }

    #[test]
    fn test_translate_has_no_bounds() {
        let mut p = Piece::new(PieceKind::I, 0, 0);
        p.translate(MoveDirection::Left);
        assert_eq!(p.x(), -1);
    }

    #[test]
    fn test_rotate_clockwise_l() {
        // 10      111
        // 10  ->  100
        // 11
        let mut l = Piece::new(PieceKind::L, 3, 4);
        l.rotate(RotateDirection::Clockwise);
        assert_eq!((l.rows(), l.cols()), (2, 3));
        assert_eq!(rows_of(&l), vec![vec![1, 1, 1], vec![1, 0, 0]]);
        assert_eq!(l.position(), (3, 4));
    }

    #[test]
    fn test_rotate_counter_clockwise_l() {
        // 10      001
        // 10  ->  111
        // 11
        let mut l = Piece::new(PieceKind::L, 0, 0);
        l.rotate(RotateDirection::CounterClockwise);
        assert_eq!(rows_of(&l), vec![vec![0, 0, 1], vec![1, 1, 1]]);
    }

    #[test]
    fn test_rotate_i_cycles_bounding_box() {
        let mut i = Piece::new(PieceKind::I, 0, 0);
        i.rotate(RotateDirection::Clockwise);
        assert_eq!((i.rows(), i.cols()), (4, 1));
        i.rotate(RotateDirection::Clockwise);
        assert_eq!((i.rows(), i.cols()), (1, 4));
    }

    #[test]
    fn test_opposite_rotations_cancel() {
        for kind in PieceKind::ALL {
            let p = Piece::new(kind, 2, 2);
            let back = p
                .rotated(RotateDirection::Clockwise)
                .rotated(RotateDirection::CounterClockwise);
            assert_eq!(back, p);
        }
    }

    #[test]
    fn test_filled_cells_are_offset() {
        let o = Piece::new(PieceKind::O, 3, 7);
        let cells: Vec<_> = o.filled_cells().collect();
        assert_eq!(cells, vec![(3, 7), (4, 7), (3, 8), (4, 8)]);
    }

    #[test]
    fn test_is_filled_outside_box() {
        let i = Piece::new(PieceKind::I, 0, 0);
        assert!(i.is_filled(0, 3));
        assert!(!i.is_filled(0, 4));
        assert!(!i.is_filled(1, 0));
    }
}
