use std::sync::OnceLock;

use crate::game_elements::{CastlingRights, Color, PieceType};

// 768 keys for (color, piece, square), 16 for castling rights combinations,
// 8 for the en-passant file, 1 for side to move. See §3 ("Zobrist Key").
const PIECE_KEYS: usize = 768;
const CASTLING_KEYS: usize = 16;
const EP_KEYS: usize = 8;
const TOTAL_KEYS: usize = PIECE_KEYS + CASTLING_KEYS + EP_KEYS + 1;

struct ZobristTable {
    keys: [u64; TOTAL_KEYS],
}

static TABLE: OnceLock<ZobristTable> = OnceLock::new();

fn table() -> &'static ZobristTable {
    TABLE.get_or_init(ZobristTable::new)
}

impl ZobristTable {
    fn new() -> Self {
        // A fixed seed keeps keys identical across process runs, which matters
        // for reproducible tests; the values themselves are not meant to agree
        // with any external Zobrist convention (spec.md 6 notes the engine's
        // internal Zobrist is independent from the Polyglot book's).
        let mut state: u64 = 0x9E3779B97F4A7C15;
        let mut keys = [0u64; TOTAL_KEYS];
        for key in keys.iter_mut() {
            *key = splitmix64(&mut state);
        }
        Self { keys }
    }
}

// A standard splitmix64 step, used only to seed the Zobrist table deterministically.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

pub fn key_for_piece(color: Color, piece: PieceType, square_index: u8) -> u64 {
    let piece_slot = color.to_index() * 6 + piece.to_index();
    table().keys[piece_slot * 64 + square_index as usize]
}

pub fn key_castling(rights: CastlingRights) -> u64 {
    table().keys[PIECE_KEYS + rights.index()]
}

pub fn key_ep_file(file: u8) -> u64 {
    table().keys[PIECE_KEYS + CASTLING_KEYS + (file as usize % 8)]
}

pub fn key_side_to_move() -> u64 {
    table().keys[PIECE_KEYS + CASTLING_KEYS + EP_KEYS]
}
