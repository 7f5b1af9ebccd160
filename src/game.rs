//! Core game state and logic

use crate::board::{Board, BUFFER_HEIGHT};
use crate::generator::PieceGen;
use crate::piece::Piece;

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Quit,
}

/// The main game struct
pub struct Game {
    /// The game board
    pub board: Board,
    /// Current falling piece
    pub current: Piece,
    /// Piece generator
    generator: PieceGen,
    /// Set once the stack reaches the top visible row
    game_over: bool,
}

impl Game {
    /// Create a new game
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a new game with a fixed seed (for deterministic tests)
    pub fn with_seed(seed: u64) -> Self {
        let mut generator = PieceGen::with_seed(seed);
        let current = generator.next();
        Self {
            board: Board::new(),
            current,
            generator,
            game_over: false,
        }
    }

    /// Process an action
    pub fn process_action(&mut self, action: Action) {
        if self.game_over {
            return;
        }
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Rotate => self.rotate(),
            Action::SoftDrop => self.tick(),
            Action::Quit => self.game_over = true,
        }
    }

    /// Shift the falling piece one column left if nothing is in the way
    pub fn move_left(&mut self) {
        self.current.move_left(&self.board);
    }

    /// Shift the falling piece one column right if nothing is in the way
    pub fn move_right(&mut self) {
        self.current.move_right(&self.board);
    }

    /// Rotate the falling piece clockwise if the result fits
    pub fn rotate(&mut self) {
        self.current.rotate(&self.board);
    }

    /// Advance the falling piece one row; locks it when it cannot descend.
    /// The gravity timer and manual soft drop both come through here.
    pub fn tick(&mut self) {
        if !self.current.move_down(&self.board) {
            self.lock_piece();
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Lock the current piece, clear rows, and spawn the next piece
    fn lock_piece(&mut self) {
        self.board.place_cells(&self.current.cells(), self.current.kind);

        let cleared = self.board.compact();
        if cleared > 0 {
            tracing::debug!("cleared {} rows", cleared);
        }

        // The stack reaching the first visible row ends the game
        if !self.board.is_row_empty(BUFFER_HEIGHT) {
            self.game_over = true;
            tracing::info!("game over: stack reached the top visible row");
        }

        // A new piece spawns either way; the shell stops driving us once
        // is_game_over reports true
        self.current = self.generator.next();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
