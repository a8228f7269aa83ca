use tutor_chess_core::{Board, Move};
use tutor_chess_engine::search::{find_best_move, TRANSPOSITION_TABLE_SIZE};
use tutor_chess_engine::{RootOutcome, SearchConfig, TTable};

fn config(max_depth: u8) -> SearchConfig {
    SearchConfig::new(max_depth, 5.0, 20)
}

fn fresh_tt() -> TTable {
    TTable::new(TRANSPOSITION_TABLE_SIZE)
}

#[test]
fn finds_the_only_legal_move_without_searching() {
    // Black king on a8 is in check from the rook on a1 with only one
    // legal reply: capturing it isn't possible, the king must step aside.
    let board = Board::from_fen("k7/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
    let result = find_best_move(&board, &[], &config(6), &mut fresh_tt());

    assert!(result.best_move.is_some());
    assert_eq!(result.depth_reached, 0);
    assert_eq!(result.outcome, RootOutcome::Forced);
}

#[test]
fn reports_no_move_in_checkmate() {
    // Fool's mate.
    let board = Board::starting_position()
        .make_move(Move::from_uci("f2f3").unwrap())
        .make_move(Move::from_uci("e7e5").unwrap())
        .make_move(Move::from_uci("g2g4").unwrap())
        .make_move(Move::from_uci("d8h4").unwrap());

    let result = find_best_move(&board, &[], &config(6), &mut fresh_tt());
    assert!(result.best_move.is_none());
}

#[test]
fn finds_a_back_rank_mate() {
    // Black's own pawns box in the king on g8; Ra1-a8 is mate.
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let result = find_best_move(&board, &[], &config(4), &mut fresh_tt());
    assert!(result.score.is_mate());
    assert!(result.score.score() > 0);
}

#[test]
fn negamax_at_fixed_depth_does_not_depend_on_move_ordering_hints() {
    // Window-invariance (spec.md 8): searching the same position twice with
    // independent transposition tables at a fixed depth must agree exactly,
    // since no time-based pruning can make the outcome path-dependent.
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();

    let first = find_best_move(&board, &[], &config(3), &mut fresh_tt());
    let second = find_best_move(&board, &[], &config(3), &mut fresh_tt());

    assert_eq!(first.score, second.score);
}

#[test]
fn carrying_the_transposition_table_over_does_not_change_the_score() {
    // spec.md 8.4: find_best_move with an empty TT, and again with the TT
    // carried over from a prior call, must return moves of equal score.
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();

    let empty_tt_result = find_best_move(&board, &[], &config(3), &mut fresh_tt());

    let mut carried_tt = fresh_tt();
    find_best_move(&board, &[], &config(2), &mut carried_tt);
    let carried_tt_result = find_best_move(&board, &[], &config(3), &mut carried_tt);

    assert_eq!(empty_tt_result.score, carried_tt_result.score);
}

#[test]
fn finds_no_move_in_stalemate() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(board.legal_moves().is_empty());
    assert!(!board.is_check(board.turn()));

    let result = find_best_move(&board, &[], &config(6), &mut fresh_tt());
    assert!(result.best_move.is_none());
    assert_eq!(result.score, tutor_chess_engine::Evaluation::draw());
}
