// Piece-square tables, indexed a1..h8 (spec.md 4.2). White pieces read the
// table directly; Black pieces read it mirrored via `Square::mirror`.
pub const PAWN_TABLE: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    4, 4, -24, -30, -30, 8, 8, 8,
    12, 8, 0, -10, -10, 0, 4, 6,
    8, 14, 12, 20, 20, 8, 6, 4,
    10, 16, 16, 30, 30, 12, 10, 8,
    20, 40, 40, 60, 60, 40, 40, 20,
    40, 60, 60, 80, 80, 60, 60, 40,
    0, 0, 0, 0, 0, 0, 0, 0,
];

pub const KNIGHT_TABLE: [i32; 64] = [
    0, -10, 12, 12, 12, 12, -10, 0,
    6, 12, 24, 30, 26, 24, 12, 6,
    12, 24, 30, 36, 36, 38, 24, 12,
    12, 24, 36, 40, 40, 36, 24, 12,
    12, 24, 36, 42, 42, 36, 24, 12,
    12, 24, 36, 40, 40, 36, 24, 12,
    6, 12, 24, 36, 36, 24, 12, 6,
    0, 6, 12, 12, 12, 12, 6, 0,
];

pub const BISHOP_TABLE: [i32; 64] = [
    6, 0, 0, 0, 0, 0, 0, 6,
    10, 30, 12, 12, 12, 12, 30, 10,
    0, 20, 30, 12, 12, 30, 20, 0,
    16, 12, 32, 32, 32, 32, 12, 16,
    0, 30, 24, 32, 32, 24, 30, 0,
    0, 12, 30, 24, 24, 30, 12, 0,
    0, 18, 20, 20, 20, 20, 18, 0,
    6, 0, 0, 0, 0, 0, 0, 6,
];

pub const ROOK_TABLE: [i32; 64] = [
    6, 10, 12, 14, 14, 12, 10, 6,
    8, 10, 10, 16, 16, 10, 10, 8,
    6, 8, 10, 12, 12, 10, 8, 6,
    4, 6, 8, 10, 10, 8, 6, 4,
    4, 6, 8, 10, 10, 8, 6, 4,
    6, 8, 10, 12, 12, 10, 8, 6,
    20, 20, 20, 20, 20, 20, 20, 20,
    18, 18, 18, 18, 18, 18, 18, 18,
];

pub const QUEEN_TABLE: [i32; 64] = [
    14, 14, 14, 14, 14, 14, 14, 14,
    14, 16, 16, 16, 16, 16, 16, 14,
    14, 16, 18, 18, 18, 18, 16, 14,
    14, 16, 18, 18, 18, 18, 16, 14,
    16, 18, 20, 20, 20, 20, 18, 16,
    16, 18, 20, 20, 20, 20, 18, 16,
    18, 20, 20, 20, 20, 20, 20, 18,
    18, 18, 18, 18, 18, 18, 18, 18,
];

pub const KING_TABLE: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -30, -30, -30, -30, -30, -30, -30,
    -20, -20, -20, -20, -20, -20, -20, -20,
    -10, 0, 20, 20, 20, 20, 0, -10,
    -10, 0, 20, 40, 40, 20, 0, -10,
    -10, 0, 20, 20, 20, 20, 0, -10,
    -10, 0, 0, 0, 0, 0, 0, -10,
    -10, -10, -10, -10, -10, -10, -10, -10,
];

pub fn table_for(piece: tutor_chess_core::PieceType) -> &'static [i32; 64] {
    use tutor_chess_core::PieceType::*;
    match piece {
        Pawn => &PAWN_TABLE,
        Knight => &KNIGHT_TABLE,
        Bishop => &BISHOP_TABLE,
        Rook => &ROOK_TABLE,
        Queen => &QUEEN_TABLE,
        King => &KING_TABLE,
    }
}
