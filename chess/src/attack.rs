//! Process-wide attack lookups
//!
//! Leaper attacks are read from a single [`AttackTables`] instance, which must be built by
//! [`init()`] before the first lookup. Slider attacks are computed on every call.
//!
//! # Example
//!
//! ```
//! use bitchess::{attack, Bitboard, Color, Coord};
//!
//! attack::init();
//!
//! let h2: Coord = "h2".parse().unwrap();
//! let g3: Coord = "g3".parse().unwrap();
//! assert_eq!(attack::pawn(Color::White, h2), Bitboard::from_coord(g3));
//!
//! let d4: Coord = "d4".parse().unwrap();
//! assert_eq!(attack::rook(d4, Bitboard::EMPTY).popcount(), 14);
//! ```

use crate::bitboard::Bitboard;
use crate::slider;
use crate::tables::AttackTables;
use crate::types::{Color, Coord, Piece};

use std::sync::OnceLock;

use thiserror::Error;

#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum AttackError {
    #[error("attack tables are not initialized, call `attack::init()` first")]
    Uninitialized,
}

static TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Builds the process-wide attack tables
///
/// Only the first call does the work, subsequent ones (from any thread) return the same
/// tables. All the lookups made after this function returns observe fully built tables.
pub fn init() -> &'static AttackTables {
    TABLES.get_or_init(AttackTables::new)
}

pub fn try_tables() -> Result<&'static AttackTables, AttackError> {
    TABLES.get().ok_or(AttackError::Uninitialized)
}

#[inline]
fn tables() -> &'static AttackTables {
    match TABLES.get() {
        Some(t) => t,
        None => panic!("{}", AttackError::Uninitialized),
    }
}

/// Squares attacked by a pawn of color `color` standing on `coord`
///
/// # Panics
///
/// Panics if [`init()`] was not called before.
#[inline]
pub fn pawn(color: Color, coord: Coord) -> Bitboard {
    tables().pawn(color, coord)
}

/// # Panics
///
/// Panics if [`init()`] was not called before.
#[inline]
pub fn knight(coord: Coord) -> Bitboard {
    tables().knight(coord)
}

/// # Panics
///
/// Panics if [`init()`] was not called before.
#[inline]
pub fn king(coord: Coord) -> Bitboard {
    tables().king(coord)
}

#[inline]
pub fn bishop(coord: Coord, occupied: Bitboard) -> Bitboard {
    slider::bishop_attacks(coord, occupied)
}

#[inline]
pub fn rook(coord: Coord, occupied: Bitboard) -> Bitboard {
    slider::rook_attacks(coord, occupied)
}

#[inline]
pub fn queen(coord: Coord, occupied: Bitboard) -> Bitboard {
    slider::queen_attacks(coord, occupied)
}

#[inline]
pub fn unobstructed_bishop(coord: Coord) -> Bitboard {
    slider::unobstructed_bishop_attacks(coord)
}

#[inline]
pub fn unobstructed_rook(coord: Coord) -> Bitboard {
    slider::unobstructed_rook_attacks(coord)
}

/// Squares attacked by `piece` of color `color` from `coord`
///
/// `color` matters only for pawns, and `occupied` only for sliders.
pub fn of(piece: Piece, color: Color, coord: Coord, occupied: Bitboard) -> Bitboard {
    match piece {
        Piece::Pawn => pawn(color, coord),
        Piece::King => king(coord),
        Piece::Knight => knight(coord),
        Piece::Bishop => bishop(coord, occupied),
        Piece::Rook => rook(coord, occupied),
        Piece::Queen => queen(coord, occupied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaper;
    use crate::types::{File, Rank};
    use std::thread;

    #[test]
    fn test_init_idempotent() {
        let first = init();
        let second = init();
        assert!(std::ptr::eq(first, second));
        assert!(*first == AttackTables::new());
        assert!(try_tables().is_ok());
    }

    #[test]
    fn test_concurrent_init() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| init() as *const AttackTables as usize))
            .collect();
        let ptrs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_lookups() {
        init();
        let h2 = Coord::from_parts(File::H, Rank::R2);
        assert_eq!(pawn(Color::White, h2).popcount(), 1);
        assert_eq!(
            pawn(Color::White, h2),
            Bitboard::EMPTY.with2(File::G, Rank::R3)
        );
        assert_eq!(
            pawn(Color::Black, h2),
            Bitboard::EMPTY.with2(File::G, Rank::R1)
        );
        for coord in Coord::iter() {
            assert_eq!(knight(coord), leaper::knight_attacks(coord));
            assert_eq!(king(coord), leaper::king_attacks(coord));
        }
    }

    #[test]
    fn test_of() {
        init();
        let e4 = Coord::from_parts(File::E, Rank::R4);
        let occupied = Bitboard::EMPTY.with2(File::E, Rank::R6).with2(File::C, Rank::R2);
        for color in Color::iter() {
            assert_eq!(of(Piece::Pawn, color, e4, occupied), pawn(color, e4));
        }
        assert_eq!(of(Piece::Knight, Color::White, e4, occupied), knight(e4));
        assert_eq!(of(Piece::King, Color::Black, e4, occupied), king(e4));
        assert_eq!(
            of(Piece::Queen, Color::White, e4, occupied),
            bishop(e4, occupied) | rook(e4, occupied)
        );
        let e7 = Coord::from_parts(File::E, Rank::R7);
        let b1 = Coord::from_parts(File::B, Rank::R1);
        assert!(!of(Piece::Rook, Color::White, e4, occupied).has(e7));
        assert!(!of(Piece::Bishop, Color::White, e4, occupied).has(b1));
    }

    #[test]
    fn test_unobstructed() {
        let d4 = Coord::from_parts(File::D, Rank::R4);
        assert_eq!(unobstructed_rook(d4).popcount(), 10);
        assert_eq!(unobstructed_bishop(d4).popcount(), 9);
    }
}
