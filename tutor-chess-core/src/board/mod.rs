mod movegen;

use crate::fen::{read_fen, write_fen, DEFAULT_FEN};
use crate::game_elements::{CastlingRights, Color, Color::*, Move, PieceType, PieceType::*, Square};
use crate::zobrist;
use crate::PositionError;

pub use movegen::GameStatus;

// A chess position: piece placement, side to move, castling rights, en-passant
// target, halfmove clock and fullmove counter (spec.md 3, "Position").
//
// Board is Copy, and `make_move` returns a new Board rather than mutating
// in place. This makes "undo" trivial: the caller simply keeps the previous
// Board value around, so §4.1's "undoing restores the exact prior Zobrist
// key and all state" holds by construction rather than by bookkeeping.
#[derive(Clone, Copy)]
pub struct Board {
    squares: [Option<(Color, PieceType)>; 64],
    turn: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    zobrist_key: u64,
}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        read_fen(fen)
    }

    pub fn starting_position() -> Self {
        Self::from_fen(DEFAULT_FEN).expect("default FEN is always valid")
    }

    pub fn to_fen(&self) -> String {
        write_fen(self)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceType)> {
        self.squares[square.index() as usize]
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.squares
            .iter()
            .position(|p| *p == Some((color, King)))
            .map(|i| Square::new(i as u8))
            .expect("a validated board always has exactly one king per side")
    }

    // Whether `color`'s king is currently attacked (spec.md 4.1).
    pub fn is_check(&self, color: Color) -> bool {
        movegen::is_square_attacked(self, self.king_square(color), !color)
    }

    // All fully legal moves for the side to move (spec.md 4.1: "legal-move
    // enumeration returns only moves that leave own king not in check").
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    // Terminal-position classification, ignoring repetition (which needs
    // history external to a single Board — spec.md 4.1).
    pub fn game_status(&self) -> GameStatus {
        movegen::game_status(self)
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        if self.piece_at(mv.to()).is_some() {
            return true;
        }
        self.is_en_passant_capture(mv)
    }

    pub fn piece_captured(&self, mv: Move) -> Option<PieceType> {
        if let Some((_, piece)) = self.piece_at(mv.to()) {
            return Some(piece);
        }
        self.is_en_passant_capture(mv).then_some(Pawn)
    }

    fn is_en_passant_capture(&self, mv: Move) -> bool {
        matches!(self.piece_at(mv.from()), Some((_, Pawn)))
            && Some(mv.to()) == self.en_passant
            && mv.to().file() != mv.from().file()
    }

    // Applies a move assumed to already be legal (e.g. one returned by
    // `legal_moves`). Used on the hot path inside the search, where
    // re-validating legality on every node would be wasteful.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut board = *self;
        let (color, piece) = self
            .piece_at(mv.from())
            .expect("make_move called with a move whose origin square is empty");

        // Clear the old en-passant zobrist contribution, if any
        if let Some(ep) = board.en_passant {
            board.zobrist_key ^= zobrist::key_ep_file(ep.file());
        }
        board.en_passant = None;

        let is_capture = self.is_capture(mv);
        let is_pawn_move = piece == Pawn;
        let is_en_passant = self.is_en_passant_capture(mv);

        if is_en_passant {
            let captured_square = Square::from_file_rank(mv.to().file(), mv.from().rank());
            board.remove_piece(captured_square);
        } else if let Some((victim_color, victim_piece)) = board.piece_at(mv.to()) {
            board.remove_piece(mv.to());
            let _ = (victim_color, victim_piece);
        }

        board.remove_piece(mv.from());
        let placed_piece = mv.promotion().unwrap_or(piece);
        board.place_piece(mv.to(), color, placed_piece);

        if mv.is_castle() {
            let rank = mv.from().rank();
            let (rook_from_file, rook_to_file) = if mv.is_kingside_castle() { (7, 5) } else { (0, 3) };
            let rook_from = Square::from_file_rank(rook_from_file, rank);
            let rook_to = Square::from_file_rank(rook_to_file, rank);
            board.remove_piece(rook_from);
            board.place_piece(rook_to, color, Rook);
        }

        // Set a fresh en-passant target after a double pawn push
        if is_pawn_move && mv.from().rank().abs_diff(mv.to().rank()) == 2 {
            let ep_square = Square::from_file_rank(mv.from().file(), (mv.from().rank() + mv.to().rank()) / 2);
            board.en_passant = Some(ep_square);
            board.zobrist_key ^= zobrist::key_ep_file(ep_square.file());
        }

        // Update castling rights
        board.zobrist_key ^= zobrist::key_castling(board.castling_rights);
        if piece == King {
            board.castling_rights.disable_all(color);
        }
        update_rook_rights(&mut board.castling_rights, mv.from());
        update_rook_rights(&mut board.castling_rights, mv.to());
        board.zobrist_key ^= zobrist::key_castling(board.castling_rights);

        // Halfmove clock and fullmove counter
        if is_capture || is_pawn_move {
            board.halfmove_clock = 0;
        } else {
            board.halfmove_clock += 1;
        }

        if board.turn == Black {
            board.fullmove_number += 1;
        }

        board.turn = !board.turn;
        board.zobrist_key ^= zobrist::key_side_to_move();

        board
    }

    // Applies `mv` only if it is present in `legal_moves()`, per spec.md 4.1:
    // "applying any other move fails". Intended for caller-supplied moves.
    pub fn apply_move(&self, mv: Move) -> Result<Board, PositionError> {
        if self.legal_moves().contains(&mv) {
            Ok(self.make_move(mv))
        } else {
            Err(PositionError::MalformedMove(mv.to_uci()))
        }
    }

    fn remove_piece(&mut self, square: Square) {
        if let Some((color, piece)) = self.squares[square.index() as usize].take() {
            self.zobrist_key ^= zobrist::key_for_piece(color, piece, square.index());
        }
    }

    fn place_piece(&mut self, square: Square, color: Color, piece: PieceType) {
        self.squares[square.index() as usize] = Some((color, piece));
        self.zobrist_key ^= zobrist::key_for_piece(color, piece, square.index());
    }

    pub(crate) fn from_raw_parts(
        squares: [Option<(Color, PieceType)>; 64],
        turn: Color,
        castling_rights: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut board = Self {
            squares,
            turn,
            castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            zobrist_key: 0,
        };
        board.zobrist_key = board.compute_zobrist_key();
        board
    }

    fn compute_zobrist_key(&self) -> u64 {
        let mut key = 0u64;
        for (i, slot) in self.squares.iter().enumerate() {
            if let Some((color, piece)) = slot {
                key ^= zobrist::key_for_piece(*color, *piece, i as u8);
            }
        }
        key ^= zobrist::key_castling(self.castling_rights);
        if let Some(ep) = self.en_passant {
            key ^= zobrist::key_ep_file(ep.file());
        }
        if self.turn == White {
            key ^= zobrist::key_side_to_move();
        }
        key
    }
}

fn update_rook_rights(rights: &mut CastlingRights, square: Square) {
    match (square.file(), square.rank()) {
        (0, 0) => rights.set_queenside(White, false),
        (7, 0) => rights.set_kingside(White, false),
        (0, 7) => rights.set_queenside(Black, false),
        (7, 7) => rights.set_kingside(Black, false),
        (4, 0) => rights.disable_all(White),
        (4, 7) => rights.disable_all(Black),
        _ => {}
    }
}
