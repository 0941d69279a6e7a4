//! Attack generators for pawns, knights and kings
//!
//! All of them work by shifting a single-bit board. Shifting by `8 * k` never wraps across
//! files, while any other shift may move a piece from one edge file onto the opposite edge.
//! Such results are dropped by masking the shifted board with the matching `NOT_*_FILE`
//! constant. Shifts that leave the board vertically lose their bits by themselves.

use crate::bitboard::Bitboard;
use crate::bitboard_consts::{NOT_AB_FILE, NOT_A_FILE, NOT_HG_FILE, NOT_H_FILE};
use crate::types::{Color, Coord};

pub fn pawn_attacks(color: Color, coord: Coord) -> Bitboard {
    let b = Bitboard::from_coord(coord);
    match color {
        Color::White => (b.shr(7) & NOT_A_FILE) | (b.shr(9) & NOT_H_FILE),
        Color::Black => (b.shl(7) & NOT_H_FILE) | (b.shl(9) & NOT_A_FILE),
    }
}

pub fn knight_attacks(coord: Coord) -> Bitboard {
    let b = Bitboard::from_coord(coord);
    (b.shr(17) & NOT_H_FILE)
        | (b.shr(15) & NOT_A_FILE)
        | (b.shr(10) & NOT_HG_FILE)
        | (b.shr(6) & NOT_AB_FILE)
        | (b.shl(17) & NOT_A_FILE)
        | (b.shl(15) & NOT_H_FILE)
        | (b.shl(10) & NOT_AB_FILE)
        | (b.shl(6) & NOT_HG_FILE)
}

pub fn king_attacks(coord: Coord) -> Bitboard {
    let b = Bitboard::from_coord(coord);
    b.shr(8)
        | b.shl(8)
        | (b.shr(1) & NOT_H_FILE)
        | (b.shr(7) & NOT_A_FILE)
        | (b.shr(9) & NOT_H_FILE)
        | (b.shl(1) & NOT_A_FILE)
        | (b.shl(7) & NOT_H_FILE)
        | (b.shl(9) & NOT_A_FILE)
}

/// Builds the attack set by moving the coordinate itself, without any bit tricks
#[cfg(any(test, feature = "selftest"))]
pub(crate) fn walk_offsets(coord: Coord, offsets: &[(isize, isize)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(delta_file, delta_rank)| coord.try_shift(delta_file, delta_rank))
        .collect()
}
