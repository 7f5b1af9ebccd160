//! Tetromino definitions and shapes
//!
//! All 7 piece kinds with their 4 rotation states as authored offset data.

use ratatui::style::Color;

/// The 7 tetromino types
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
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Rgb(57, 197, 187),
            PieceKind::O => Color::Rgb(255, 165, 0),
            PieceKind::T => Color::Rgb(255, 255, 0),
            PieceKind::S => Color::Rgb(0, 128, 0),
            PieceKind::Z => Color::Rgb(255, 0, 0),
            PieceKind::J => Color::Rgb(0, 0, 255),
            PieceKind::L => Color::Rgb(128, 0, 128),
        }
    }

    /// Get all piece kinds for random generation
    pub fn all() -> [PieceKind; 7] {
        [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ]
    }

    /// Get the shape offsets for this tetromino at a given rotation
    /// Returns 4 (row, col) offsets relative to the piece's anchor cell
    /// Row increases downward, col increases rightward
    pub fn shape(&self, rotation: Rotation) -> [(i32, i32); 4] {
        match self {
            PieceKind::I => match rotation {
                Rotation::North => [(0, 0), (0, -1), (0, 1), (0, 2)],
                Rotation::East => [(0, 0), (-1, 0), (1, 0), (2, 0)],
                Rotation::South => [(0, 0), (0, 1), (0, -1), (0, -2)],
                Rotation::West => [(0, 0), (1, 0), (-1, 0), (-2, 0)],
            },
            PieceKind::O => {
                // O piece doesn't rotate
                [(0, 0), (0, 1), (1, 0), (1, 1)]
            }
            PieceKind::T => match rotation {
                Rotation::North => [(0, 0), (0, -1), (0, 1), (1, 0)],
                Rotation::East => [(0, 0), (-1, 0), (1, 0), (0, -1)],
                Rotation::South => [(0, 0), (0, 1), (0, -1), (-1, 0)],
                Rotation::West => [(0, 0), (1, 0), (-1, 0), (0, 1)],
            },
            // S piece - row-down coordinate system
            // North: S.    East: .SS   South: S.    West: .SS
            //        SS          SS.          SS          SS.
            //        .S                       .S
            PieceKind::S => match rotation {
                Rotation::North => [(-1, -1), (0, -1), (0, 0), (1, 0)],
                Rotation::East => [(-1, 1), (-1, 0), (0, 0), (0, -1)],
                Rotation::South => [(1, 1), (0, 1), (0, 0), (-1, 0)],
                Rotation::West => [(1, -1), (1, 0), (0, 0), (0, 1)],
            },
            // Z piece - row-down coordinate system
            // North: .Z    East: ZZ.   South: .Z    West: ZZ.
            //        ZZ          .ZZ          ZZ          .ZZ
            //        Z.                       Z.
            PieceKind::Z => match rotation {
                Rotation::North => [(-1, 0), (0, 0), (0, -1), (1, -1)],
                Rotation::East => [(0, 1), (0, 0), (-1, 0), (-1, -1)],
                Rotation::South => [(1, 0), (0, 0), (0, 1), (-1, 1)],
                Rotation::West => [(0, -1), (0, 0), (1, 0), (1, 1)],
            },
            PieceKind::J => match rotation {
                Rotation::North => [(0, 0), (-1, 0), (-2, 0), (0, -1)],
                Rotation::East => [(0, 0), (0, 1), (0, 2), (-1, 0)],
                Rotation::South => [(0, 0), (1, 0), (2, 0), (0, 1)],
                Rotation::West => [(0, 0), (0, -1), (0, -2), (1, 0)],
            },
            PieceKind::L => match rotation {
                Rotation::North => [(0, 0), (-1, 0), (-2, 0), (0, 1)],
                Rotation::East => [(0, 0), (0, 1), (0, 2), (1, 0)],
                Rotation::South => [(0, 0), (1, 0), (2, 0), (0, -1)],
                Rotation::West => [(0, 0), (0, -1), (0, -2), (-1, 0)],
            },
        }
    }
}

/// Rotation states, a quarter turn apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    North, // Spawn state
    East,  // Clockwise from North
    South, // 180 from North
    West,  // Counter-clockwise from North
}

impl Rotation {
    /// Rotate clockwise: North → East → South → West → North
    pub fn cw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise: North → West → South → East → North
    pub fn ccw(&self) -> Rotation {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Get all rotation states in clockwise order
    pub fn all() -> [Rotation; 4] {
        [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_distinct_cells() {
        for kind in PieceKind::all() {
            for rotation in Rotation::all() {
                let shape = kind.shape(rotation);
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(shape[i], shape[j], "{:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_o_piece_never_rotates() {
        let spawn = PieceKind::O.shape(Rotation::North);
        for rotation in Rotation::all() {
            assert_eq!(PieceKind::O.shape(rotation), spawn);
        }
    }

    #[test]
    fn test_i_piece_east_is_vertical() {
        let shape = PieceKind::I.shape(Rotation::East);
        assert_eq!(shape, [(0, 0), (-1, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_cw_cycles_through_all_states() {
        let mut rotation = Rotation::North;
        for expected in [
            Rotation::East,
            Rotation::South,
            Rotation::West,
            Rotation::North,
        ] {
            rotation = rotation.cw();
            assert_eq!(rotation, expected);
        }
    }
}
