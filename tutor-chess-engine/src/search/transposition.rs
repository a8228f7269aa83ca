use tracing::trace;
use tutor_chess_core::Move;

use crate::evaluation::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Clone, Copy)]
pub struct TTEntry {
    zobrist: u64,
    depth: u8,
    score: Evaluation,
    node_type: NodeType,
    best_move: Option<Move>,
}

// A safe, always-replace transposition table (spec.md 4.4 explicitly allows
// "a simple always-replace scheme" rather than aging/depth-preferred
// replacement). Unlike the teacher's lock-less `Vec<MaybeUninit<TTEntry>>`
// table, this one stores `Option<TTEntry>` -- a small cost in memory
// density, paid to avoid the `unsafe` required for concurrent-safe
// uninitialized reads.
pub struct TTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TTable {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self { entries: vec![None; size], size }
    }

    fn index(&self, zobrist_key: u64) -> usize {
        (zobrist_key as usize) % self.size
    }

    // Returns the stored score if the entry is for this exact position, was
    // searched to at least `depth`, and its bound type is compatible with
    // the current [alpha, beta] window. Also reports the stored best move
    // (regardless of depth), to seed move ordering at shallower re-searches.
    pub fn probe(
        &self,
        zobrist_key: u64,
        depth: u8,
        alpha: Evaluation,
        beta: Evaluation,
        tt_move: &mut Option<Move>,
    ) -> Option<Evaluation> {
        let entry = self.entries[self.index(zobrist_key)].as_ref()?;
        if entry.zobrist != zobrist_key {
            return None;
        }

        *tt_move = entry.best_move;

        if entry.depth < depth {
            trace!(zobrist_key, stored_depth = entry.depth, depth, "tt probe miss: stored depth too shallow");
            return None;
        }

        let cutoff = match entry.node_type {
            NodeType::Exact => Some(entry.score),
            NodeType::UpperBound if entry.score <= alpha => Some(entry.score),
            NodeType::LowerBound if entry.score >= beta => Some(entry.score),
            _ => None,
        };

        if let Some(score) = cutoff {
            trace!(zobrist_key, depth, score = %score, node_type = ?entry.node_type, "tt probe hit");
        }
        cutoff
    }

    pub fn store(&mut self, zobrist_key: u64, depth: u8, score: Evaluation, node_type: NodeType, best_move: Option<Move>) {
        trace!(zobrist_key, depth, score = %score, node_type = ?node_type, "tt store");
        let index = self.index(zobrist_key);
        self.entries[index] = Some(TTEntry { zobrist: zobrist_key, depth, score, node_type, best_move });
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|slot| *slot = None);
    }
}
