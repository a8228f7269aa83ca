use std::fs;
use std::path::Path;

use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rustc_hash::FxHashMap;
use tracing::warn;
use tutor_chess_core::{Board, Move, PieceType::*, Square};

use super::zobrist::polyglot_key;
use crate::error::EngineError;

// A loaded Polyglot-format opening book (spec.md 6). Keyed by the standard
// Polyglot Zobrist hash (`polyglot_key`), which is deliberately a different
// hash from `tutor_chess_core::Board::zobrist_key` (used for the
// transposition table) -- see `polyglot::zobrist` and DESIGN.md.
pub struct OpeningBook {
    entries: FxHashMap<u64, Vec<WeightedMove>>,
}

struct WeightedMove {
    mv: Move,
    weight: u16,
}

impl OpeningBook {
    pub fn empty() -> Self {
        Self { entries: FxHashMap::default() }
    }

    // Loads a Polyglot-format book from disk. Every entry is 16 bytes:
    // zobrist key (8), move (2), weight (2), "learn" data (4, ignored).
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let bytes = fs::read(path).map_err(|source| EngineError::BookUnavailable {
            reason: format!("failed to read {}: {source}", path.display()),
        })?;

        let mut entries: FxHashMap<u64, Vec<WeightedMove>> = FxHashMap::default();
        for (offset, chunk) in bytes.chunks(16).enumerate() {
            if chunk.len() != 16 {
                return Err(EngineError::BookUnavailable {
                    reason: format!("entry at byte offset {} is truncated", offset * 16),
                });
            }

            let zobrist = u64::from_be_bytes(chunk[0..8].try_into().unwrap());
            let move_bits = u16::from_be_bytes(chunk[8..10].try_into().unwrap());
            let weight = u16::from_be_bytes(chunk[10..12].try_into().unwrap());

            entries.entry(zobrist).or_default().push(WeightedMove { mv: decode_move(move_bits), weight });
        }

        entries.values_mut().for_each(|moves| moves.sort_by(|a, b| b.weight.cmp(&a.weight)));
        Ok(Self { entries })
    }

    // Tries to load `path`, logging and falling back to an empty (silently
    // inert) book on failure, mirroring the original engine's
    // try/except-and-continue-without-a-book behavior (spec.md 6).
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(book) => book,
            Err(err) => {
                warn!(%err, "opening book unavailable, continuing without one");
                Self::empty()
            }
        }
    }

    // Returns a move for `board`, if this book has an entry for its
    // position. `only_best` selects the highest-weighted move deterministically;
    // otherwise a move is sampled with probability proportional to its weight.
    pub fn get_move(&self, board: &Board, only_best: bool) -> Option<Move> {
        let candidates = self.entries.get(&polyglot_key(board))?;

        let index = if only_best {
            0
        } else {
            let dist = WeightedIndex::new(candidates.iter().map(|entry| entry.weight)).ok()?;
            dist.sample(&mut thread_rng())
        };

        Some(resolve_castling(board, candidates[index].mv))
    }
}

// Polyglot packs a move into 16 bits:
// bits 0-2: to file, 3-5: to rank, 6-8: from file, 9-11: from rank,
// 12-14: promotion piece (0 = none, 1=N, 2=B, 3=R, 4=Q).
fn decode_move(bits: u16) -> Move {
    let to_file = (bits & 0x7) as u8;
    let to_rank = ((bits >> 3) & 0x7) as u8;
    let from_file = ((bits >> 6) & 0x7) as u8;
    let from_rank = ((bits >> 9) & 0x7) as u8;
    let promotion_id = (bits >> 12) & 0x7;

    let from = Square::from_file_rank(from_file, from_rank);
    let to = Square::from_file_rank(to_file, to_rank);
    let promotion = match promotion_id {
        1 => Some(Knight),
        2 => Some(Bishop),
        3 => Some(Rook),
        4 => Some(Queen),
        _ => None,
    };

    Move::new(from, to, promotion)
}

// Some Polyglot books encode castling as the king capturing its own rook
// (e.g. e1h1 for White short castle) rather than as the king's actual
// two-square move. If `mv` looks like that, translate it into this engine's
// castling representation (spec.md 3, "Move"): an ordinary king move of two
// files, which `Move::is_castle` then recognizes.
fn resolve_castling(board: &Board, mv: Move) -> Move {
    if !matches!(board.piece_at(mv.from()), Some((_, King))) {
        return mv;
    }

    let rank = mv.from().rank();
    if mv.from().file() != 4 {
        return mv;
    }

    match mv.to().file() {
        7 => Move::quiet(mv.from(), Square::from_file_rank(6, rank)),
        0 => Move::quiet(mv.from(), Square::from_file_rank(2, rank)),
        _ => mv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_simple_knight_development_move() {
        // g1f3: from g1 (file 6, rank 0), to f3 (file 5, rank 2), no promotion.
        let bits = (0u16) | (5 << 0) | (2 << 3) | (6 << 6) | (0 << 9);
        let mv = decode_move(bits);
        assert_eq!(mv, Move::from_uci("g1f3").unwrap());
    }

    #[test]
    fn translates_rook_capture_encoding_into_a_castle() {
        let board = Board::starting_position();
        let king_takes_rook = Move::new(Square::from_notation("e1").unwrap(), Square::from_notation("h1").unwrap(), None);
        let resolved = resolve_castling(&board, king_takes_rook);
        assert_eq!(resolved, Move::from_uci("e1g1").unwrap());
    }
}
