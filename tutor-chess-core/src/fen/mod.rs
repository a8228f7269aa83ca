use crate::board::Board;
use crate::game_elements::{CastlingRights, Color, Color::*, PieceType, Square};
use crate::PositionError;

pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Parses a position in Forsyth-Edwards Notation (spec.md 3, "Position" /
// spec.md 6, external interface). Mirrors the six space-separated fields of
// standard FEN: piece placement, side to move, castling availability,
// en-passant target, halfmove clock, fullmove number.
pub fn read_fen(fen: &str) -> Result<Board, PositionError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(PositionError::WrongFieldCount(fields.len()));
    }

    let squares = read_piece_placement(fields[0])?;
    let turn = read_turn(fields[1])?;
    let castling_rights = read_castling_rights(fields[2])?;
    let en_passant = read_en_passant(fields[3])?;
    let halfmove_clock = read_counter(fields[4])?;
    let fullmove_number = read_counter(fields[5])?;

    validate_kings(&squares)?;
    validate_pawn_placement(&squares)?;

    let board = Board::from_raw_parts(squares, turn, castling_rights, en_passant, halfmove_clock, fullmove_number);

    if board.is_check(!turn) {
        return Err(PositionError::OpponentInCheck);
    }

    Ok(board)
}

fn read_piece_placement(field: &str) -> Result<[Option<(Color, PieceType)>; 64], PositionError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::WrongRankCount(ranks.len()));
    }

    let mut squares = [None; 64];
    // FEN ranks run 8 down to 1, so the first chunk is rank index 7.
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top as u8;
        let mut file = 0u8;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
                continue;
            }
            if file >= 8 {
                return Err(PositionError::InvalidPiecePlacement(ch));
            }
            let (color, piece) =
                PieceType::from_char(ch).ok_or(PositionError::InvalidPiecePlacement(ch))?;
            squares[Square::from_file_rank(file, rank).index() as usize] = Some((color, piece));
            file += 1;
        }
        if file != 8 {
            return Err(PositionError::InvalidPiecePlacement('?'));
        }
    }

    Ok(squares)
}

fn read_turn(field: &str) -> Result<Color, PositionError> {
    match field {
        "w" => Ok(White),
        "b" => Ok(Black),
        other => Err(PositionError::InvalidTurn(other.to_owned())),
    }
}

fn read_castling_rights(field: &str) -> Result<CastlingRights, PositionError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }

    if field.is_empty() || field.len() > 4 || !field.chars().all(|c| "KQkq".contains(c)) {
        return Err(PositionError::InvalidCastlingRights(field.to_owned()));
    }

    let mut rights = CastlingRights::none();
    for c in field.chars() {
        match c {
            'K' => rights.set_kingside(White, true),
            'Q' => rights.set_queenside(White, true),
            'k' => rights.set_kingside(Black, true),
            'q' => rights.set_queenside(Black, true),
            _ => unreachable!("validated above"),
        }
    }
    Ok(rights)
}

fn read_en_passant(field: &str) -> Result<Option<Square>, PositionError> {
    if field == "-" {
        Ok(None)
    } else {
        Square::from_notation(field).map(Some)
    }
}

fn read_counter(field: &str) -> Result<u16, PositionError> {
    field.parse().map_err(|_| PositionError::InvalidMoveCounter(field.to_owned()))
}

fn validate_kings(squares: &[Option<(Color, PieceType)>; 64]) -> Result<(), PositionError> {
    let white_kings = squares.iter().filter(|p| **p == Some((White, PieceType::King))).count();
    let black_kings = squares.iter().filter(|p| **p == Some((Black, PieceType::King))).count();

    if white_kings > 1 || black_kings > 1 {
        return Err(PositionError::TooManyKings);
    }
    if white_kings == 0 {
        return Err(PositionError::MissingWhiteKing);
    }
    if black_kings == 0 {
        return Err(PositionError::MissingBlackKing);
    }
    Ok(())
}

fn validate_pawn_placement(squares: &[Option<(Color, PieceType)>; 64]) -> Result<(), PositionError> {
    for index in 0..8u8 {
        let back = Square::from_file_rank(index, 0);
        let eighth = Square::from_file_rank(index, 7);
        if matches!(squares[back.index() as usize], Some((_, PieceType::Pawn)))
            || matches!(squares[eighth.index() as usize], Some((_, PieceType::Pawn)))
        {
            return Err(PositionError::PawnOnBackRank);
        }
    }
    Ok(())
}

pub fn write_fen(board: &Board) -> String {
    let mut placement = String::new();
    for rank_from_top in 0..8u8 {
        let rank = 7 - rank_from_top;
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            match board.piece_at(Square::from_file_rank(file, rank)) {
                Some((color, piece)) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.as_char(color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
        if rank_from_top != 7 {
            placement.push('/');
        }
    }

    let turn = if board.turn() == White { "w" } else { "b" };
    let en_passant = match board.en_passant_target() {
        Some(sq) => sq.to_string(),
        None => "-".to_owned(),
    };

    format!(
        "{} {} {} {} {} {}",
        placement,
        turn,
        board.castling_rights().as_fen(),
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number(),
    )
}
