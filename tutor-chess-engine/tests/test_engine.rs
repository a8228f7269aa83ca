use tutor_chess_core::Board;
use tutor_chess_engine::{ChessEngine, EngineConfig, SearchConfig};

#[test]
fn plays_a_move_with_no_book_configured() {
    let mut engine = ChessEngine::new(EngineConfig::default());
    let board = Board::starting_position();
    let config = SearchConfig::new(3, 5.0, 20);

    let response = engine.find_best_move(&board, &[], &config);
    assert!(response.best_move.is_some());
    assert_ne!(response.search_score, "Game Over");
}

#[test]
fn reports_game_over_with_no_legal_moves() {
    use tutor_chess_core::Move;

    let mut engine = ChessEngine::default();
    let board = Board::starting_position()
        .make_move(Move::from_uci("f2f3").unwrap())
        .make_move(Move::from_uci("e7e5").unwrap())
        .make_move(Move::from_uci("g2g4").unwrap())
        .make_move(Move::from_uci("d8h4").unwrap());

    let response = engine.find_best_move(&board, &[], &SearchConfig::new(4, 5.0, 20));
    assert_eq!(response.best_move, None);
    assert_eq!(response.search_score, "Game Over");
}

#[test]
fn reports_forced_for_a_single_legal_move() {
    // Black king boxed into a corner in check, with exactly one legal reply.
    let board = Board::from_fen("k7/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
    let mut engine = ChessEngine::default();

    let response = engine.find_best_move(&board, &[], &SearchConfig::new(6, 5.0, 20));
    assert_eq!(response.search_score, "Forced");
    assert_eq!(response.best_move, Some(board.legal_moves()[0].to_uci()));
}

#[test]
fn carries_the_transposition_table_across_calls() {
    // spec.md 8.4: a position searched twice with the TT carried over
    // between calls must agree with a position searched once from an empty
    // TT -- the persistent table changes performance, not the result.
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
    let config = SearchConfig::new(3, 5.0, 20);

    let mut fresh_engine = ChessEngine::default();
    let fresh_result = fresh_engine.find_best_move(&board, &[], &config);

    let mut warmed_engine = ChessEngine::default();
    warmed_engine.find_best_move(&board, &[], &config);
    let warmed_result = warmed_engine.find_best_move(&board, &[], &config);

    assert_eq!(fresh_result.search_score, warmed_result.search_score);
}

#[test]
fn clear_drops_transposition_table_entries() {
    let mut engine = ChessEngine::default();
    let board = Board::starting_position();
    let config = SearchConfig::new(3, 5.0, 20);

    engine.find_best_move(&board, &[], &config);
    engine.clear();
    let response = engine.find_best_move(&board, &[], &config);
    assert!(response.best_move.is_some());
}

#[test]
fn low_skill_level_searches_a_shallow_depth() {
    use tutor_chess_engine::search::skill_level_params;

    let (depth, blunder_chance) = skill_level_params(0, 6);
    assert_eq!(depth, 2);
    assert!(blunder_chance > 0.0);

    let (full_depth, full_blunder_chance) = skill_level_params(20, 6);
    assert_eq!(full_depth, 6);
    assert_eq!(full_blunder_chance, 0.0);
}

#[test]
fn book_is_only_consulted_above_the_eligibility_threshold() {
    use tutor_chess_engine::search::book_is_eligible;

    assert!(!book_is_eligible(5));
    assert!(book_is_eligible(6));
}

#[test]
fn missing_opening_book_falls_back_to_search_without_erroring() {
    let config = EngineConfig {
        only_best_book_moves: true,
        opening_book_path: Some(std::path::PathBuf::from("/nonexistent/book.bin")),
        ..EngineConfig::default()
    };
    let mut engine = ChessEngine::new(config);
    let board = Board::starting_position();

    let response = engine.find_best_move(&board, &[], &SearchConfig::new(2, 5.0, 20));
    assert!(response.best_move.is_some());
}
