// Per-call search parameters (spec.md 4.7): how deep to search at full
// strength, how long to spend, and how strong to play. Grounded on the
// teacher's `SearchOptions` (shakmat-engine/src/search.rs), simplified to
// the four knobs this engine's contract actually exposes.
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_limit_secs: f64,
    pub skill_level: u8,
}

impl SearchConfig {
    pub fn new(max_depth: u8, time_limit_secs: f64, skill_level: u8) -> Self {
        Self { max_depth, time_limit_secs, skill_level: skill_level.min(20) }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 6, time_limit_secs: 3.0, skill_level: 10 }
    }
}

// Default transposition table size in slots, used when `EngineConfig`
// doesn't override it. Matches the teacher's `TRASPOSITION_TABLE_SIZE`.
const DEFAULT_TT_SIZE: usize = 1 << 20;

// Engine-wide configuration, independent of any single search call
// (spec.md 6). Grounded on the teacher's `EngineConfig`
// (shakmat-engine/src/engine.rs).
pub struct EngineConfig {
    /// Always play the highest-weighted book move rather than sampling
    /// according to the weights recorded in the opening book.
    pub only_best_book_moves: bool,
    /// Path to a Polyglot-format opening book file. `None` disables book
    /// probing entirely, regardless of skill level.
    pub opening_book_path: Option<std::path::PathBuf>,
    /// Number of slots in the transposition table owned by `ChessEngine`
    /// for its lifetime.
    pub tt_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { only_best_book_moves: false, opening_book_path: None, tt_size: DEFAULT_TT_SIZE }
    }
}
