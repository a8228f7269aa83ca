use std::fmt::{Display, Formatter};

use super::{PieceType, PieceType::*, Square};
use crate::PositionError;

// A move is a (from, to, optional promotion) triple. It carries no
// information about capture/castling/en-passant; those are derived from the
// position it is applied to, per spec.md 3 ("Move").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
}

impl Move {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceType>) -> Self {
        Self { from, to, promotion }
    }

    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    pub const fn from(self) -> Square {
        self.from
    }

    pub const fn to(self) -> Square {
        self.to
    }

    pub const fn promotion(self) -> Option<PieceType> {
        self.promotion
    }

    // True for castling moves: the king moves two files on its home rank.
    pub fn is_castle(self) -> bool {
        let is_king_home_rank = self.from.rank() == 0 || self.from.rank() == 7;
        is_king_home_rank && self.from.file() == 4 && self.to.file().abs_diff(4) == 2
    }

    pub fn is_kingside_castle(self) -> bool {
        self.is_castle() && self.to.file() == 6
    }

    // Compact UCI-style move notation, e.g. "e2e4" or "e7e8q" (spec.md 6).
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(p) => format!(
                "{}{}{}",
                self.from,
                self.to,
                match p {
                    Queen => 'q',
                    Rook => 'r',
                    Bishop => 'b',
                    Knight => 'n',
                    _ => unreachable!("pawns only promote to minor/major pieces"),
                }
            ),
            None => format!("{}{}", self.from, self.to),
        }
    }

    pub fn from_uci(text: &str) -> Result<Self, PositionError> {
        if text.len() != 4 && text.len() != 5 {
            return Err(PositionError::MalformedMove(text.to_owned()));
        }

        let from = Square::from_notation(&text[0..2])?;
        let to = Square::from_notation(&text[2..4])?;
        let promotion = match text.get(4..5) {
            None => None,
            Some("q") => Some(Queen),
            Some("r") => Some(Rook),
            Some("b") => Some(Bishop),
            Some("n") => Some(Knight),
            Some(_) => return Err(PositionError::MalformedMove(text.to_owned())),
        };

        Ok(Self::new(from, to, promotion))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uci())
    }
}
