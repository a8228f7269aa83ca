use tutor_chess_core::{Board, GameStatus, Move};

fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves.iter().map(|&mv| perft(&board.make_move(mv), depth - 1)).sum()
}

// Standard perft reference values, see chessprogramming.org/Perft_Results.
#[test]
fn perft_starting_position() {
    let board = Board::starting_position();
    assert_eq!(perft(&board, 1), 20);
    assert_eq!(perft(&board, 2), 400);
    assert_eq!(perft(&board, 3), 8_902);
}

#[test]
fn perft_kiwipete() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(perft(&board, 1), 48);
    assert_eq!(perft(&board, 2), 2_039);
}

#[test]
fn perft_position_with_en_passant_and_pins() {
    let board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&board, 1), 14);
    assert_eq!(perft(&board, 2), 191);
    assert_eq!(perft(&board, 3), 2_812);
}

#[test]
fn castling_is_blocked_by_attacked_squares() {
    // White king on e1, rooks on a1/h1, but a black rook on f8 x-rays f1,
    // so kingside castling must not be offered; queenside remains legal.
    let board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = board.legal_moves();
    assert!(!moves.contains(&Move::from_uci("e1g1").unwrap()));
    assert!(moves.contains(&Move::from_uci("e1c1").unwrap()));
}

#[test]
fn en_passant_capture_is_generated_and_applied() {
    let board = Board::starting_position()
        .make_move(Move::from_uci("e2e4").unwrap())
        .make_move(Move::from_uci("a7a6").unwrap())
        .make_move(Move::from_uci("e4e5").unwrap())
        .make_move(Move::from_uci("d7d5").unwrap());

    let ep_capture = Move::from_uci("e5d6").unwrap();
    assert!(board.legal_moves().contains(&ep_capture));

    let after = board.make_move(ep_capture);
    assert!(after.piece_at(tutor_chess_core::Square::from_notation("d5").unwrap()).is_none());
    assert!(after.piece_at(tutor_chess_core::Square::from_notation("d6").unwrap()).is_some());
}

#[test]
fn detects_checkmate() {
    // Fool's mate
    let board = Board::starting_position()
        .make_move(Move::from_uci("f2f3").unwrap())
        .make_move(Move::from_uci("e7e5").unwrap())
        .make_move(Move::from_uci("g2g4").unwrap())
        .make_move(Move::from_uci("d8h4").unwrap());

    assert_eq!(board.game_status(), GameStatus::Checkmate);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn detects_stalemate() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(board.game_status(), GameStatus::Stalemate);
}

#[test]
fn detects_insufficient_material() {
    let board = Board::from_fen("8/8/8/4k3/8/8/3NK3/8 w - - 0 1").unwrap();
    assert_eq!(board.game_status(), GameStatus::InsufficientMaterial);
}

#[test]
fn zobrist_key_is_path_independent() {
    // e2e4, c7c5, g1f3 vs a different interleaving that transposes to the
    // same position should produce identical zobrist keys.
    let a = Board::starting_position()
        .make_move(Move::from_uci("e2e4").unwrap())
        .make_move(Move::from_uci("c7c5").unwrap())
        .make_move(Move::from_uci("g1f3").unwrap());

    let b = Board::starting_position()
        .make_move(Move::from_uci("g1f3").unwrap())
        .make_move(Move::from_uci("c7c5").unwrap())
        .make_move(Move::from_uci("e2e4").unwrap());

    assert_eq!(a.zobrist_key(), b.zobrist_key());
    assert_eq!(a.to_fen(), b.to_fen());
}
