use tutor_chess_core::{Board, Color, Move, PieceType::*};

use crate::evaluation::tables;

// Heuristic values of different kinds of moves (spec.md 4.5).
const QUEEN_PROMOTION: i32 = 2000;
const OTHER_PROMOTION: i32 = 1000;
const CAPTURE_BASE: i32 = 1000;
const GIVES_CHECK: i32 = 500;

// A move paired with its move-ordering heuristic score. Higher sorts first.
pub struct RatedMove {
    pub mv: Move,
    pub score: i32,
}

// Orders `moves` so that the principled best candidates are searched first,
// maximizing alpha-beta cutoffs (spec.md 4.5). `tt_move`, if present, is
// always placed first regardless of its heuristic score.
pub fn order_moves(board: &Board, moves: Vec<Move>, tt_move: Option<Move>) -> Vec<RatedMove> {
    let mut rated: Vec<RatedMove> = moves.into_iter().map(|mv| rate_move(board, mv)).collect();
    rated.sort_unstable_by(|a, b| b.score.cmp(&a.score));

    if let Some(tt_move) = tt_move {
        if let Some(pos) = rated.iter().position(|rm| rm.mv == tt_move) {
            let best = rated.remove(pos);
            rated.insert(0, best);
        }
    }

    rated
}

fn rate_move(board: &Board, mv: Move) -> RatedMove {
    let mut score = 0;

    if let Some(promotion) = mv.promotion() {
        score += if promotion == Queen { QUEEN_PROMOTION } else { OTHER_PROMOTION };
    }

    if let Some(victim) = board.piece_captured(mv) {
        let (_, attacker) = board.piece_at(mv.from()).expect("move origin must hold a piece");
        score += CAPTURE_BASE + victim.value() * 10 - attacker.value();
    }

    let after = board.make_move(mv);
    if after.is_check(after.turn()) {
        score += GIVES_CHECK;
    }

    score += positional_delta(board, mv);

    RatedMove { mv, score }
}

// Only pawns, knights and bishops get a positional move-ordering bonus
// (spec.md 4.5) -- rooks/queens/kings don't, matching the original engine.
fn positional_delta(board: &Board, mv: Move) -> i32 {
    let Some((color, piece)) = board.piece_at(mv.from()) else { return 0 };
    if !matches!(piece, Pawn | Knight | Bishop) {
        return 0;
    }

    let table = tables::table_for(piece);
    let value_at = |square: tutor_chess_core::Square, color: Color| {
        if color == Color::White {
            table[square.index() as usize]
        } else {
            table[square.mirror().index() as usize]
        }
    };

    value_at(mv.to(), color) - value_at(mv.from(), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_chess_core::Board;

    #[test]
    fn prioritizes_queen_promotion_over_quiet_moves() {
        let board = Board::from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
        let moves = board.legal_moves();
        let ordered = order_moves(&board, moves, None);
        let queen_promo = Move::from_uci("a7a8q").unwrap();
        assert_eq!(ordered[0].mv, queen_promo);
    }

    #[test]
    fn tt_move_is_always_ranked_first() {
        let board = Board::starting_position();
        let moves = board.legal_moves();
        let quiet_move = Move::from_uci("a2a3").unwrap();
        let ordered = order_moves(&board, moves, Some(quiet_move));
        assert_eq!(ordered[0].mv, quiet_move);
    }
}
