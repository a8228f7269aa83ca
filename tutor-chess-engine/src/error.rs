use thiserror::Error;
use tutor_chess_core::PositionError;

// The five error kinds of spec.md 7. `NoLegalMoves` and `BookUnavailable`
// are not surfaced to `find_best_move`'s caller -- they're absorbed into
// ordinary `SearchResult`/book-probe control flow -- but are still named
// here since internal plumbing (the book loader, the root controller's
// legality short-circuit) needs a value to construct and match on.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),

    #[error("position has no legal moves")]
    NoLegalMoves,

    #[error("opening book unavailable: {reason}")]
    BookUnavailable { reason: String },

    #[error("search timed out before completing depth 1")]
    Timeout,

    #[error("internal engine error: {0}")]
    Internal(String),
}
