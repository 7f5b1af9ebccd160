//! Active falling piece logic

use crate::board::{Board, BOARD_WIDTH, TOTAL_HEIGHT};
use crate::tetromino::{PieceKind, Rotation};

/// An active falling piece
#[derive(Debug, Clone)]
pub struct Piece {
    /// The kind of tetromino
    pub kind: PieceKind,
    /// Current rotation state
    pub rotation: Rotation,
    /// Position (row, col) of the piece's anchor cell
    /// Row 0 is the top of the hidden buffer, increases downward
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Get the absolute positions of all 4 cells
    pub fn cells(&self) -> [(i32, i32); 4] {
        let offsets = self.kind.shape(self.rotation);
        offsets.map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Try to move left, returns true if successful
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.col -= 1;
        if self.hits_left(board) {
            self.col += 1;
            false
        } else {
            true
        }
    }

    /// Try to move right, returns true if successful
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.col += 1;
        if self.hits_right(board) {
            self.col -= 1;
            false
        } else {
            true
        }
    }

    /// Try to move down one row, returns false when the piece is blocked
    /// and must lock
    pub fn move_down(&mut self, board: &Board) -> bool {
        self.row += 1;
        if self.hits_bottom(board) {
            self.row -= 1;
            false
        } else {
            true
        }
    }

    /// Try to rotate clockwise, returns true if successful. No wall kicks:
    /// a colliding rotation is simply reverted.
    pub fn rotate(&mut self, board: &Board) -> bool {
        self.rotation = self.rotation.cw();
        if self.hits_any(board) {
            self.rotation = self.rotation.ccw();
            false
        } else {
            true
        }
    }

    // A leftward move can only newly violate the left wall or run into
    // locked cells, so only those are checked. Same for the other sides.

    fn hits_left(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .any(|&(row, col)| col < 0 || board.is_occupied(row, col))
    }

    fn hits_right(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .any(|&(row, col)| col >= BOARD_WIDTH as i32 || board.is_occupied(row, col))
    }

    fn hits_bottom(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .any(|&(row, col)| row >= TOTAL_HEIGHT as i32 || board.is_occupied(row, col))
    }

    // Rotation can push cells toward any side at once, so every bound is
    // checked. The top stays unbounded; the hidden buffer is up there.
    fn hits_any(&self, board: &Board) -> bool {
        self.cells().iter().any(|&(row, col)| {
            row >= TOTAL_HEIGHT as i32
                || col < 0
                || col >= BOARD_WIDTH as i32
                || board.is_occupied(row, col)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_at(kind: PieceKind, row: i32, col: i32) -> Piece {
        Piece {
            kind,
            rotation: Rotation::North,
            row,
            col,
        }
    }

    #[test]
    fn test_cells_are_anchor_plus_offsets() {
        let piece = piece_at(PieceKind::O, 5, 3);
        assert_eq!(piece.cells(), [(5, 3), (5, 4), (6, 3), (6, 4)]);
    }

    #[test]
    fn test_left_then_right_restores_column() {
        let board = Board::new();
        let mut piece = piece_at(PieceKind::T, 10, 8);
        assert!(piece.move_left(&board));
        assert!(piece.move_right(&board));
        assert_eq!(piece.col, 8);
    }

    #[test]
    fn test_move_rejected_at_walls() {
        let board = Board::new();

        // T North spans cols -1..=1 around the anchor
        let mut piece = piece_at(PieceKind::T, 10, 1);
        assert!(!piece.move_left(&board));
        assert_eq!(piece.col, 1);

        let mut piece = piece_at(PieceKind::T, 10, BOARD_WIDTH as i32 - 2);
        assert!(!piece.move_right(&board));
        assert_eq!(piece.col, BOARD_WIDTH as i32 - 2);
    }

    #[test]
    fn test_move_rejected_by_locked_cells() {
        let mut board = Board::new();
        board.place_cells(&[(10, 5)], PieceKind::I);

        // O at (10, 6) occupies cols 6-7; moving left would land on (10, 5)
        let mut piece = piece_at(PieceKind::O, 10, 6);
        assert!(!piece.move_left(&board));
        assert_eq!(piece.col, 6);
    }

    #[test]
    fn test_move_down_blocked_at_floor() {
        let board = Board::new();
        // O spans rows anchor..=anchor+1
        let mut piece = piece_at(PieceKind::O, TOTAL_HEIGHT as i32 - 2, 5);
        assert!(!piece.move_down(&board));
        assert_eq!(piece.row, TOTAL_HEIGHT as i32 - 2);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let board = Board::new();
        for kind in PieceKind::all() {
            let mut piece = piece_at(kind, 10, 8);
            for _ in 0..4 {
                assert!(piece.rotate(&board));
            }
            assert_eq!(piece.rotation, Rotation::North);
            assert_eq!((piece.row, piece.col), (10, 8));
        }
    }

    #[test]
    fn test_rotate_rejected_at_wall() {
        let board = Board::new();
        // I East at col 0 would go South, spanning cols -2..=1
        let mut piece = Piece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            row: 10,
            col: 0,
        };
        assert!(!piece.rotate(&board));
        assert_eq!(piece.rotation, Rotation::East);
    }

    #[test]
    fn test_rotate_rejected_at_floor() {
        let board = Board::new();
        // I North on the bottom row would go East, spanning rows +1, +2
        // below the floor
        let mut piece = Piece {
            kind: PieceKind::I,
            rotation: Rotation::North,
            row: TOTAL_HEIGHT as i32 - 1,
            col: 8,
        };
        assert!(!piece.rotate(&board));
        assert_eq!(piece.rotation, Rotation::North);
    }
}
