use tutor_chess_core::fen::DEFAULT_FEN;
use tutor_chess_core::Board;

#[test]
fn round_trips_known_fens() {
    let fens = [
        DEFAULT_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];

    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(fen, board.to_fen());
    }
}

#[test]
fn tracks_en_passant_target_after_double_push() {
    let board = Board::starting_position();
    let after_e4 = board.apply_move(tutor_chess_core::Move::from_uci("e2e4").unwrap()).unwrap();
    assert_eq!(
        after_e4.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    let after_c5 = after_e4.apply_move(tutor_chess_core::Move::from_uci("c7c5").unwrap()).unwrap();
    assert_eq!(
        after_c5.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
    );
}

#[test]
fn rejects_wrong_field_count() {
    let err = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0").unwrap_err();
    assert!(matches!(err, tutor_chess_core::PositionError::WrongFieldCount(5)));
}

#[test]
fn rejects_missing_king() {
    let err = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err();
    assert!(matches!(err, tutor_chess_core::PositionError::MissingBlackKing));
}

#[test]
fn rejects_pawn_on_back_rank() {
    let err = Board::from_fen("rnbqkbnP/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap_err();
    assert!(matches!(err, tutor_chess_core::PositionError::PawnOnBackRank));
}

#[test]
fn rejects_position_where_opponent_is_in_check() {
    // Black to move, but White's king sits on an open file facing a black
    // queen -- a position that can never arise from a legal game, since the
    // side not to move cannot be left in check.
    let err = Board::from_fen("4k3/8/8/4q3/8/8/8/4K3 b - - 0 1").unwrap_err();
    assert!(matches!(err, tutor_chess_core::PositionError::OpponentInCheck));
}
