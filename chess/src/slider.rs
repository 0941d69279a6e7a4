//! Ray-casting attack generators for bishops, rooks and queens
//!
//! Rays walk the rank and file indices directly and stop at the board bounds, so no file
//! masks are needed here.
//!
//! There are two flavours. The occupancy-aware one walks up to the board edge and includes
//! the first occupied square of each ray, but nothing behind it. The unobstructed one
//! ignores occupancy and stops one square before the edge: the edge square can never hide
//! anything behind it, so the result is the set of squares whose occupancy matters for the
//! piece (the "relevant occupancy" mask used by indexing schemes such as magic bitboards).

use crate::bitboard::Bitboard;
use crate::types::Coord;

#[derive(Copy, Clone)]
struct Bounds {
    lo: isize,
    hi: isize,
}

impl Bounds {
    const BOARD: Bounds = Bounds { lo: 0, hi: 7 };
    const INNER: Bounds = Bounds { lo: 1, hi: 6 };

    /// Checks only the coordinates which actually move along the ray
    #[inline]
    fn allows(&self, val: isize, delta: isize) -> bool {
        delta == 0 || (self.lo <= val && val <= self.hi)
    }
}

#[inline]
fn check_for_blocker(occupied: Bitboard, coord: Coord) -> bool {
    occupied.has(coord)
}

fn cast_ray(
    coord: Coord,
    delta_rank: isize,
    delta_file: isize,
    bounds: Bounds,
    occupied: Bitboard,
) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    let mut rank = coord.rank().index() as isize + delta_rank;
    let mut file = coord.file().index() as isize + delta_file;
    while bounds.allows(rank, delta_rank) && bounds.allows(file, delta_file) {
        let target = Coord::from_index((rank * 8 + file) as usize);
        res.set(target);
        if check_for_blocker(occupied, target) {
            break;
        }
        rank += delta_rank;
        file += delta_file;
    }
    res
}

fn cast_bishop(coord: Coord, bounds: Bounds, occupied: Bitboard) -> Bitboard {
    cast_ray(coord, 1, 1, bounds, occupied)
        | cast_ray(coord, -1, 1, bounds, occupied)
        | cast_ray(coord, 1, -1, bounds, occupied)
        | cast_ray(coord, -1, -1, bounds, occupied)
}

fn cast_rook(coord: Coord, bounds: Bounds, occupied: Bitboard) -> Bitboard {
    cast_ray(coord, 1, 0, bounds, occupied)
        | cast_ray(coord, -1, 0, bounds, occupied)
        | cast_ray(coord, 0, 1, bounds, occupied)
        | cast_ray(coord, 0, -1, bounds, occupied)
}

/// Bishop attacks from `coord`, given the set of `occupied` squares
///
/// Whether `coord` itself is occupied does not matter.
pub fn bishop_attacks(coord: Coord, occupied: Bitboard) -> Bitboard {
    cast_bishop(coord, Bounds::BOARD, occupied)
}

/// Rook attacks from `coord`, given the set of `occupied` squares
pub fn rook_attacks(coord: Coord, occupied: Bitboard) -> Bitboard {
    cast_rook(coord, Bounds::BOARD, occupied)
}

pub fn queen_attacks(coord: Coord, occupied: Bitboard) -> Bitboard {
    bishop_attacks(coord, occupied) | rook_attacks(coord, occupied)
}

/// Bishop rays from `coord` on an empty board, without the outermost ring of squares
pub fn unobstructed_bishop_attacks(coord: Coord) -> Bitboard {
    cast_bishop(coord, Bounds::INNER, Bitboard::EMPTY)
}

/// Rook rays from `coord` on an empty board, without the last square of each ray
pub fn unobstructed_rook_attacks(coord: Coord) -> Bitboard {
    cast_rook(coord, Bounds::INNER, Bitboard::EMPTY)
}
