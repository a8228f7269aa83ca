use std::time::Duration;

use tracing::{debug, info};
use tutor_chess_core::Board;

use crate::config::{EngineConfig, SearchConfig};
use crate::polyglot::OpeningBook;
use crate::search::{self, RootOutcome, SearchResult, TTable};

// The response to a single `find_best_move` call (spec.md 6): the chosen
// move in UCI notation, a human-readable score, and the principal variation
// known so far (here, just the chosen move itself -- this engine doesn't
// extract a full PV beyond the root, per spec.md 9's open question).
pub struct EngineResponse {
    pub best_move: Option<String>,
    pub search_score: String,
    pub principal_variation: String,
}

// The engine's public entry point: owns an opening book, a transposition
// table and static configuration across calls, running a fresh search (but
// not a fresh table) per call. Grounded on the teacher's `ShakmatEngine`
// (shakmat-engine/src/engine.rs), re-architected per spec.md 9's note that
// the TT belongs to a long-lived engine handle rather than to each search.
pub struct ChessEngine {
    book: OpeningBook,
    config: EngineConfig,
    tt: TTable,
}

impl ChessEngine {
    pub fn new(config: EngineConfig) -> Self {
        let book = match &config.opening_book_path {
            Some(path) => OpeningBook::load_or_empty(path),
            None => OpeningBook::empty(),
        };
        let tt = TTable::new(config.tt_size);
        Self { book, config, tt }
    }

    // Finds the best move for `board`, consulting the opening book first
    // (only above `skill_level` 5), then falling back to iterative-deepening
    // search (spec.md 4.7). The transposition table persists across calls,
    // so a later search of a position already visited by an earlier call can
    // reuse that work (spec.md 8.4, 9).
    pub fn find_best_move(&mut self, board: &Board, history: &[u64], search_config: &SearchConfig) -> EngineResponse {
        if search::book_is_eligible(search_config.skill_level) {
            if let Some(mv) = self.book.get_move(board, self.config.only_best_book_moves) {
                debug!(mv = %mv, "playing opening book move");
                // Matches the original engine's flat placeholder score for
                // book moves: book theory isn't assigned a search evaluation.
                return EngineResponse {
                    best_move: Some(mv.to_uci()),
                    search_score: "0.25".to_owned(),
                    principal_variation: "Opening Theory".to_owned(),
                };
            }
        }

        let result = search::find_best_move(board, history, search_config, &mut self.tt);
        info!(
            depth = result.depth_reached,
            score = %result.score,
            "search completed"
        );
        respond(board, result)
    }

    // Drops all entries from the transposition table, per spec.md 4.4's
    // lifecycle contract (e.g. starting a new game).
    pub fn clear(&mut self) {
        self.tt.clear();
    }
}

impl Default for ChessEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn respond(board: &Board, result: SearchResult) -> EngineResponse {
    let SearchResult { best_move, score, outcome, .. } = result;

    let Some(mv) = best_move else {
        return EngineResponse {
            best_move: None,
            search_score: "Game Over".to_owned(),
            principal_variation: String::new(),
        };
    };

    match outcome {
        RootOutcome::Forced => EngineResponse {
            best_move: Some(mv.to_uci()),
            search_score: "Forced".to_owned(),
            principal_variation: mv.to_uci(),
        },
        // No root move completed before the time budget ran out (a
        // pathologically tiny time_limit): fall back to the first legal
        // move with a neutral score, matching the original engine's
        // `best_score_global == -inf` branch.
        RootOutcome::TimedOutBeforeFirstDepth => EngineResponse {
            best_move: Some(mv.to_uci()),
            search_score: "0.00".to_owned(),
            principal_variation: String::new(),
        },
        RootOutcome::Searched => {
            let display_score = if board.turn() == tutor_chess_core::Color::Black { -score } else { score };
            EngineResponse {
                best_move: Some(mv.to_uci()),
                search_score: display_score.to_string(),
                principal_variation: mv.to_uci(),
            }
        }
    }
}

pub fn search_config_with_time_limit(max_depth: u8, time_limit: Duration, skill_level: u8) -> SearchConfig {
    SearchConfig::new(max_depth, time_limit.as_secs_f64(), skill_level)
}
