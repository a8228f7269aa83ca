use thiserror::Error;

// Surfaced to the caller when a textual position fails validation
// (spec.md 7, "InvalidPosition").
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position text must have exactly 6 fields, found {0}")]
    WrongFieldCount(usize),
    #[error("board description must have 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("invalid character '{0}' in board description")]
    InvalidPiecePlacement(char),
    #[error("white has no king")]
    MissingWhiteKing,
    #[error("black has no king")]
    MissingBlackKing,
    #[error("a side has more than one king")]
    TooManyKings,
    #[error("a pawn is on the first or last rank")]
    PawnOnBackRank,
    #[error("'{0}' is not a valid side to move (expected 'w' or 'b')")]
    InvalidTurn(String),
    #[error("'{0}' is not a valid castling rights field")]
    InvalidCastlingRights(String),
    #[error("'{0}' is not a valid square")]
    MalformedSquare(String),
    #[error("'{0}' is not a valid halfmove/fullmove counter")]
    InvalidMoveCounter(String),
    #[error("'{0}' is not a valid move in compact algebraic notation")]
    MalformedMove(String),
    #[error("the side not to move is in check")]
    OpponentInCheck,
}
