use PieceType::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    // For arrays indexed by piece kind (piece-square tables, piece values)
    pub const fn to_index(self) -> usize {
        match self {
            Pawn => 0,
            Knight => 1,
            Bishop => 2,
            Rook => 3,
            Queen => 4,
            King => 5,
        }
    }

    // Centipawn material value, per spec.md 4.2
    pub const fn value(self) -> i32 {
        match self {
            Pawn => 100,
            Knight => 320,
            Bishop => 330,
            Rook => 500,
            Queen => 900,
            King => 20_000,
        }
    }

    pub fn as_char(self, color: crate::Color) -> char {
        use crate::Color::*;
        match (color, self) {
            (White, Pawn) => 'P',
            (White, Knight) => 'N',
            (White, Bishop) => 'B',
            (White, Rook) => 'R',
            (White, Queen) => 'Q',
            (White, King) => 'K',
            (Black, Pawn) => 'p',
            (Black, Knight) => 'n',
            (Black, Bishop) => 'b',
            (Black, Rook) => 'r',
            (Black, Queen) => 'q',
            (Black, King) => 'k',
        }
    }

    pub const fn from_char(ch: char) -> Option<(crate::Color, Self)> {
        use crate::Color::*;
        Some(match ch {
            'P' => (White, Pawn),
            'N' => (White, Knight),
            'B' => (White, Bishop),
            'R' => (White, Rook),
            'Q' => (White, Queen),
            'K' => (White, King),
            'p' => (Black, Pawn),
            'n' => (Black, Knight),
            'b' => (Black, Bishop),
            'r' => (Black, Rook),
            'q' => (Black, Queen),
            'k' => (Black, King),
            _ => return None,
        })
    }
}
