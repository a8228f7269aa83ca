mod tables;

use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg, Sub};

use tutor_chess_core::{Board, Color::*, GameStatus, PieceType};

// Centipawn bonus for the side to move, mirroring spec.md 4.2's "tempo" term.
const TEMPO_BONUS: i32 = 20;

// Absolute score assigned to a checkmate, before the depth-proportional
// adjustment that prefers quicker mates (spec.md 4.2, 4.6).
pub const MATE_SCORE: i32 = 100_000;

// The score of a position, from the perspective of the side to move
// (negamax convention: positive always favors whoever is about to play).
//
// A struct instead of a bare i32 so mate scores can be displayed as
// "+M3"/"-M2" instead of raw centipawn numbers (spec.md 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Evaluation {
    score: i32,
}

impl Evaluation {
    pub const fn new(score: i32) -> Self {
        Self { score }
    }

    // min_val() is one above i32::MIN so that negating it never overflows
    // and -min_val() == max_val() exactly.
    pub fn min_val() -> Self {
        Self::new(-MATE_SCORE - 1)
    }

    pub fn max_val() -> Self {
        Self::new(MATE_SCORE + 1)
    }

    pub fn draw() -> Self {
        Self::new(0)
    }

    pub fn score(self) -> i32 {
        self.score
    }

    pub fn is_mate(self) -> bool {
        self.score.abs() > MATE_SCORE - 1000
    }

    // Checkmate score for the side to move, adjusted so that shallower mates
    // (found closer to the root) score higher than deeper ones. Mirrors the
    // Python original's `-MATE_SCORE + (100 - depth)`, keyed off the
    // remaining search depth rather than root-relative ply.
    pub fn mated_in(remaining_depth: u8) -> Self {
        Self::new(-MATE_SCORE + (100 - remaining_depth as i32))
    }
}

impl Neg for Evaluation {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.score)
    }
}

impl Add<i32> for Evaluation {
    type Output = Self;
    fn add(self, rhs: i32) -> Self::Output {
        Self::new(self.score + rhs)
    }
}

impl Sub<i32> for Evaluation {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self::Output {
        Self::new(self.score - rhs)
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_mate() {
            let adjustment = MATE_SCORE - self.score.abs();
            let plies = (100 - adjustment).max(1);
            let moves_to_mate = (plies + 1) / 2;
            if self.score > 0 {
                write!(f, "+M{moves_to_mate}")
            } else {
                write!(f, "-M{moves_to_mate}")
            }
        } else {
            write!(f, "{:+.2}", self.score as f32 / 100.0)
        }
    }
}

// Evaluates `board` from the perspective of the side to move: material,
// piece-square tables and a small tempo bonus (spec.md 4.2). Terminal
// conditions (checkmate/stalemate/draws) are the caller's responsibility --
// this function assumes the position still has legal moves to consider, or
// is being used as the quiescence stand-pat score.
pub fn evaluate(board: &Board) -> Evaluation {
    let mut score = 0;

    for index in 0..64u8 {
        let square = tutor_chess_core::Square::new(index);
        let Some((color, piece)) = board.piece_at(square) else { continue };

        let material = piece.value();
        let table = tables::table_for(piece);
        let positional = if color == White {
            table[square.index() as usize]
        } else {
            table[square.mirror().index() as usize]
        };

        let contribution = material + positional;
        score += if color == White { contribution } else { -contribution };
    }

    score += if board.turn() == White { TEMPO_BONUS } else { -TEMPO_BONUS };

    // Flip to the side-to-move's perspective (negamax convention).
    Evaluation::new(score * board.turn().sign())
}

// Terminal-position evaluation, used by negamax before falling back to
// `evaluate` (spec.md 4.2/4.6).
pub fn evaluate_terminal(status: GameStatus, remaining_depth: u8) -> Evaluation {
    match status {
        GameStatus::Checkmate => Evaluation::mated_in(remaining_depth),
        GameStatus::Stalemate | GameStatus::InsufficientMaterial | GameStatus::FiftyMoveRule => {
            Evaluation::draw()
        }
        GameStatus::InProgress => unreachable!("evaluate_terminal called on a non-terminal position"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::starting_position();
        // Only the tempo bonus should show up: material and PST are symmetric.
        assert_eq!(evaluate(&board).score(), TEMPO_BONUS);
    }

    #[test]
    fn material_advantage_favors_the_side_up_material() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4Q3/4K3 w - - 0 1").unwrap();
        assert!(evaluate(&board).score() > 0);
    }

    #[test]
    fn mate_score_outranks_any_material_score() {
        let mate = Evaluation::mated_in(99);
        assert!(mate.is_mate());
        assert!(mate.score() < Evaluation::new(-9000).score());
    }

    #[test]
    fn negating_min_val_does_not_overflow() {
        let flipped = -Evaluation::min_val();
        assert_eq!(flipped, Evaluation::max_val());
    }
}
