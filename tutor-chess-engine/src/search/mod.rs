mod clock;
mod move_ordering;
mod negamax;
mod transposition;

use std::time::Duration;

use rand::Rng;
use tracing::{debug, trace};
use tutor_chess_core::{Board, Move};

use crate::config::SearchConfig;
use crate::evaluation::Evaluation;
use clock::SearchClock;
use move_ordering::order_moves;
pub use transposition::TTable;

// Default number of slots in the transposition table (spec.md 4.4),
// overridable via `EngineConfig::tt_size`. Owned by the long-lived
// `ChessEngine` handle and carried across calls, per spec.md 9's
// "process-wide mutable cache" re-architecture note.
pub const TRANSPOSITION_TABLE_SIZE: usize = 1 << 20;

// skill_level >= this threshold searches at full strength with no blunders
// and is allowed to consult the opening book (spec.md 4.7).
const FULL_STRENGTH_SKILL_LEVEL: u8 = 15;
const BOOK_ELIGIBLE_SKILL_LEVEL: u8 = 5;

// Distinguishes the three root-level shapes a `SearchResult` can take
// (spec.md 4.7, step 1 and step 9's formatting rules): an actual search, a
// single-legal-move short-circuit ("Forced"), and the degenerate timeout
// recovery path (first legal move, neutral score). `depth_reached == 0` is
// common to both `Forced` and `TimedOutBeforeFirstDepth`, so callers must
// match on `outcome` rather than infer it from the depth alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOutcome {
    Searched,
    Forced,
    TimedOutBeforeFirstDepth,
}

pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Evaluation,
    /// Deepest iterative-deepening depth that finished before the time budget ran out.
    pub depth_reached: u8,
    pub outcome: RootOutcome,
}

// Maps a 0..=20 skill level to a search depth ceiling and a blunder
// probability, per spec.md 4.7. Higher skill searches deeper and never
// deliberately plays a sub-optimal move.
pub fn skill_level_params(skill_level: u8, configured_max_depth: u8) -> (u8, f64) {
    match skill_level {
        0..=4 => (2, 0.3),
        5..=9 => (3, 0.15),
        10..=14 => (4, 0.05),
        _ => (configured_max_depth, 0.0),
    }
}

pub fn book_is_eligible(skill_level: u8) -> bool {
    skill_level > BOOK_ELIGIBLE_SKILL_LEVEL
}

// Runs iterative-deepening negamax from `board`, respecting `config`'s depth
// ceiling, time budget and skill level (spec.md 4.6, 4.7). `history` holds
// the zobrist keys of positions already reached earlier in the game, so
// in-search repetition detection sees the whole game, not just this search.
// `tt` is owned by the caller's long-lived `ChessEngine` and carried across
// calls (spec.md 4.4, 9), so repeated searches of the same position benefit
// from earlier work instead of starting from an empty table every time.
pub fn find_best_move(board: &Board, history: &[u64], config: &SearchConfig, tt: &mut TTable) -> SearchResult {
    let legal_moves = board.legal_moves();

    if legal_moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: Evaluation::draw(),
            depth_reached: 0,
            outcome: RootOutcome::Searched,
        };
    }
    if legal_moves.len() == 1 {
        return SearchResult {
            best_move: Some(legal_moves[0]),
            score: Evaluation::draw(),
            depth_reached: 0,
            outcome: RootOutcome::Forced,
        };
    }

    let (max_depth, blunder_chance) = skill_level_params(config.skill_level, config.max_depth);
    let clock = SearchClock::new(Duration::from_secs_f64(config.time_limit_secs));

    // Order the root move list itself (spec.md 4.7 step 5), not just the
    // recursive calls below it: MVV-LVA/promotion/check/PST heuristics give
    // alpha-beta a better chance of an early cutoff at the very first depth,
    // before any depth has completed and produced a move to hoist.
    let mut ordered_moves: Vec<Move> = order_moves(board, legal_moves, None).into_iter().map(|rated| rated.mv).collect();

    let mut best_move_global = None;
    let mut best_score_global = Evaluation::min_val();
    let mut depth_reached = 0;
    // (move, score) pairs from the deepest depth fully completed, used to
    // pick a deliberately-suboptimal move when simulating a weaker player.
    let mut top_moves: Vec<(Move, Evaluation)> = Vec::new();

    for depth in 1..=max_depth {
        if clock.expired() {
            break;
        }

        let alpha = Evaluation::min_val();
        let beta = Evaluation::max_val();
        let mut this_depth_moves = Vec::with_capacity(ordered_moves.len());
        let mut best_this_depth = Evaluation::min_val();
        let mut best_move_this_depth = None;
        let mut current_alpha = alpha;

        for &mv in &ordered_moves {
            if clock.expired() {
                break;
            }

            let mut path = history.to_vec();
            let child = board.make_move(mv);
            let score = -negamax::negamax(&child, depth - 1, -beta, -current_alpha, tt, &mut path);
            this_depth_moves.push((mv, score));

            if score > best_this_depth {
                best_this_depth = score;
                best_move_this_depth = Some(mv);
            }
            current_alpha = current_alpha.max(score);
        }

        if let Some(mv) = best_move_this_depth {
            best_move_global = Some(mv);
            best_score_global = best_this_depth;
            depth_reached = depth;

            this_depth_moves.sort_unstable_by(|a, b| b.1.cmp(&a.1));
            top_moves = this_depth_moves;

            // Put the best move from this depth first for the next depth's
            // move ordering, matching the original engine's iterative
            // deepening move-ordering hint.
            if let Some(pos) = ordered_moves.iter().position(|&m| m == mv) {
                let best = ordered_moves.remove(pos);
                ordered_moves.insert(0, best);
            }

            debug!(depth, score = %best_score_global, "completed iterative deepening pass");
        }

        if best_score_global.is_mate() {
            break;
        }
    }

    if best_move_global.is_none() {
        trace!("search timed out before completing a single move at depth 1");
        return SearchResult {
            best_move: Some(ordered_moves[0]),
            score: Evaluation::draw(),
            depth_reached: 0,
            outcome: RootOutcome::TimedOutBeforeFirstDepth,
        };
    }

    let final_move = simulate_blunder(best_move_global, best_score_global, &top_moves, config.skill_level, blunder_chance);

    SearchResult { best_move: final_move, score: best_score_global, depth_reached, outcome: RootOutcome::Searched }
}

// With probability `blunder_chance`, replaces the true best move with one of
// the next few best alternatives from the final completed depth, so weaker
// skill levels play recognizably (but not randomly) worse (spec.md 4.7).
fn simulate_blunder(
    best_move: Option<Move>,
    best_score: Evaluation,
    top_moves: &[(Move, Evaluation)],
    skill_level: u8,
    blunder_chance: f64,
) -> Option<Move> {
    if skill_level >= FULL_STRENGTH_SKILL_LEVEL || top_moves.len() < 2 {
        return best_move;
    }

    if rand::thread_rng().gen_bool(blunder_chance) {
        let upper = (top_moves.len() - 1).min(3);
        let index = rand::thread_rng().gen_range(1..=upper);
        return Some(top_moves[index].0);
    }

    let _ = best_score;
    best_move
}
