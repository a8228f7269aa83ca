use super::Board;
use crate::game_elements::{Color, Color::*, Move, PieceType, PieceType::*, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1),
];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1), (1, 0), (-1, 0), (0, 1), (0, -1),
];

fn offset(square: Square, df: i8, dr: i8) -> Option<Square> {
    let file = square.file() as i8 + df;
    let rank = square.rank() as i8 + dr;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::from_file_rank(file as u8, rank as u8))
    } else {
        None
    }
}

// All pseudolegal moves for the side to move: obeys piece movement rules and
// "can't capture own piece", but does not check whether the move leaves the
// mover's own king in check (except for castling, validated fully here since
// that's cheap and simplifies the caller). Used internally by `legal_moves`.
pub fn pseudolegal_moves(board: &Board) -> Vec<Move> {
    let color = board.turn();
    let mut moves = Vec::with_capacity(48);

    for index in 0..64u8 {
        let square = Square::new(index);
        let Some((piece_color, piece)) = board.piece_at(square) else { continue };
        if piece_color != color {
            continue;
        }

        match piece {
            Pawn => gen_pawn_moves(board, square, color, &mut moves),
            Knight => gen_stepping_moves(board, square, color, &KNIGHT_DELTAS, &mut moves),
            King => gen_stepping_moves(board, square, color, &KING_DELTAS, &mut moves),
            Bishop => gen_sliding_moves(board, square, color, &BISHOP_DIRS, &mut moves),
            Rook => gen_sliding_moves(board, square, color, &ROOK_DIRS, &mut moves),
            Queen => gen_sliding_moves(board, square, color, &QUEEN_DIRS, &mut moves),
        }
    }

    gen_castling_moves(board, color, &mut moves);
    moves
}

fn gen_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward: i8 = if color == White { 1 } else { -1 };
    let start_rank = if color == White { 1 } else { 6 };
    let promo_rank = if color == White { 7 } else { 0 };

    let push_options = [Knight, Bishop, Rook, Queen];

    if let Some(one) = offset(from, 0, forward) {
        if board.piece_at(one).is_none() {
            push_move(moves, from, one, promo_rank, &push_options);

            if from.rank() == start_rank {
                if let Some(two) = offset(from, 0, 2 * forward) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::quiet(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = offset(from, df, forward) else { continue };
        let is_ep = Some(to) == board.en_passant_target();
        match board.piece_at(to) {
            Some((victim_color, _)) if victim_color != color => push_move(moves, from, to, promo_rank, &push_options),
            None if is_ep => moves.push(Move::quiet(from, to)),
            _ => {}
        }
    }
}

fn push_move(moves: &mut Vec<Move>, from: Square, to: Square, promo_rank: u8, promo_pieces: &[PieceType; 4]) {
    if to.rank() == promo_rank {
        for &p in promo_pieces {
            moves.push(Move::new(from, to, Some(p)));
        }
    } else {
        moves.push(Move::quiet(from, to));
    }
}

fn gen_stepping_moves(board: &Board, from: Square, color: Color, deltas: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(df, dr) in deltas {
        let Some(to) = offset(from, df, dr) else { continue };
        if !matches!(board.piece_at(to), Some((c, _)) if c == color) {
            moves.push(Move::quiet(from, to));
        }
    }
}

fn gen_sliding_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut current = from;
        loop {
            let Some(to) = offset(current, df, dr) else { break };
            match board.piece_at(to) {
                Some((c, _)) if c == color => break,
                Some(_) => {
                    moves.push(Move::quiet(from, to));
                    break;
                }
                None => {
                    moves.push(Move::quiet(from, to));
                    current = to;
                }
            }
        }
    }
}

fn gen_castling_moves(board: &Board, color: Color, moves: &mut Vec<Move>) {
    let rank = if color == White { 0 } else { 7 };
    let king_sq = Square::from_file_rank(4, rank);

    if board.piece_at(king_sq) != Some((color, King)) || board.is_check(color) {
        return;
    }

    let rights = board.castling_rights();
    if rights.can_castle_kingside(color) {
        let f = Square::from_file_rank(5, rank);
        let g = Square::from_file_rank(6, rank);
        if board.piece_at(f).is_none()
            && board.piece_at(g).is_none()
            && !is_square_attacked(board, f, !color)
            && !is_square_attacked(board, g, !color)
        {
            moves.push(Move::quiet(king_sq, g));
        }
    }

    if rights.can_castle_queenside(color) {
        let d = Square::from_file_rank(3, rank);
        let c = Square::from_file_rank(2, rank);
        let b = Square::from_file_rank(1, rank);
        if board.piece_at(d).is_none()
            && board.piece_at(c).is_none()
            && board.piece_at(b).is_none()
            && !is_square_attacked(board, d, !color)
            && !is_square_attacked(board, c, !color)
        {
            moves.push(Move::quiet(king_sq, c));
        }
    }
}

// Whether `square` is attacked by any piece of color `by`.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    // Pawns: look from `square` in the *opposite* direction a `by`-colored
    // pawn would attack from.
    let pawn_dir: i8 = if by == White { -1 } else { 1 };
    for df in [-1, 1] {
        if let Some(from) = offset(square, df, pawn_dir) {
            if board.piece_at(from) == Some((by, Pawn)) {
                return true;
            }
        }
    }

    if KNIGHT_DELTAS
        .iter()
        .filter_map(|&(df, dr)| offset(square, df, dr))
        .any(|sq| board.piece_at(sq) == Some((by, Knight)))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .filter_map(|&(df, dr)| offset(square, df, dr))
        .any(|sq| board.piece_at(sq) == Some((by, King)))
    {
        return true;
    }

    for &(df, dr) in &BISHOP_DIRS {
        if ray_hits(board, square, df, dr, by, &[Bishop, Queen]) {
            return true;
        }
    }
    for &(df, dr) in &ROOK_DIRS {
        if ray_hits(board, square, df, dr, by, &[Rook, Queen]) {
            return true;
        }
    }

    false
}

fn ray_hits(board: &Board, from: Square, df: i8, dr: i8, by: Color, targets: &[PieceType]) -> bool {
    let mut current = from;
    while let Some(to) = offset(current, df, dr) {
        match board.piece_at(to) {
            Some((c, p)) if c == by && targets.contains(&p) => return true,
            Some(_) => return false,
            None => current = to,
        }
    }
    false
}

// Filters pseudolegal moves down to those that don't leave the mover's own
// king in check. Castling moves are already fully validated in
// `gen_castling_moves`, so they pass through unchanged (spec.md 4.1).
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let color = board.turn();
    pseudolegal_moves(board)
        .into_iter()
        .filter(|mv| mv.is_castle() || !board.make_move(*mv).is_check(color))
        .collect()
}

pub fn game_status(board: &Board) -> GameStatus {
    if board.halfmove_clock() >= 100 {
        return GameStatus::FiftyMoveRule;
    }

    if is_insufficient_material(board) {
        return GameStatus::InsufficientMaterial;
    }

    if legal_moves(board).is_empty() {
        return if board.is_check(board.turn()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    GameStatus::InProgress
}

fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::new(); // (color, piece, square) for bishops/knights
    for index in 0..64u8 {
        let square = Square::new(index);
        match board.piece_at(square) {
            None | Some((_, King)) => {}
            Some((_, Bishop | Knight)) => minors.push((square, board.piece_at(square).unwrap())),
            Some(_) => return false, // pawn, rook, or queen on the board: sufficient material
        }
    }

    match minors.len() {
        0 => true,                // K vs K
        1 => true,                // K+minor vs K
        2 => {
            // K+B vs K+B is a draw only if the bishops are the same color complex
            let all_bishops = minors.iter().all(|(_, (_, p))| *p == Bishop);
            let same_colored_squares = minors[0].0.file().wrapping_add(minors[0].0.rank()) % 2
                == minors[1].0.file().wrapping_add(minors[1].0.rank()) % 2;
            all_bishops && same_colored_squares && minors[0].1 .0 != minors[1].1 .0
        }
        _ => false,
    }
}
