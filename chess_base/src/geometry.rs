//! Piece movement offsets as `(delta_file, delta_rank)` pairs
//!
//! Rank deltas follow the rank index, so a negative `delta_rank` moves towards the eighth rank.

use crate::types::Color;

pub const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

pub const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub const fn pawn_attack_offsets(c: Color) -> [(isize, isize); 2] {
    let d = pawn_forward_delta(c);
    [(-1, d), (1, d)]
}
