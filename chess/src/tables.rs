use crate::bitboard::Bitboard;
use crate::leaper;
use crate::types::{Color, Coord};

/// Precomputed attacks of pawns, knights and kings for every square
///
/// Slider attacks depend on the board occupancy, so they are not stored here and are
/// computed on demand by the [`slider`](crate::slider) module instead.
///
/// The tables can be owned and passed around directly, or shared process-wide through
/// [`attack::init()`](crate::attack::init).
#[derive(Clone, PartialEq, Eq)]
pub struct AttackTables {
    pawn: [[Bitboard; Coord::COUNT]; Color::COUNT],
    knight: [Bitboard; Coord::COUNT],
    king: [Bitboard; Coord::COUNT],
}

impl AttackTables {
    /// Creates zero-filled tables, where every lookup yields an empty bitboard
    pub const fn empty() -> AttackTables {
        AttackTables {
            pawn: [[Bitboard::EMPTY; Coord::COUNT]; Color::COUNT],
            knight: [Bitboard::EMPTY; Coord::COUNT],
            king: [Bitboard::EMPTY; Coord::COUNT],
        }
    }

    pub fn new() -> AttackTables {
        let mut res = Self::empty();
        res.init();
        res
    }

    /// Fills all the tables
    ///
    /// Calling it again recomputes the same values.
    pub fn init(&mut self) {
        for coord in Coord::iter() {
            let i = coord.index();
            for color in Color::iter() {
                self.pawn[color.index()][i] = leaper::pawn_attacks(color, coord);
            }
            self.knight[i] = leaper::knight_attacks(coord);
            self.king[i] = leaper::king_attacks(coord);
        }

        #[cfg(feature = "selftest")]
        self.selftest();
    }

    #[cfg(feature = "selftest")]
    fn selftest(&self) {
        use crate::geometry;

        for coord in Coord::iter() {
            assert_eq!(
                self.knight(coord),
                leaper::walk_offsets(coord, &geometry::KNIGHT_OFFSETS),
                "bad knight attacks from {}",
                coord
            );
            assert_eq!(
                self.king(coord),
                leaper::walk_offsets(coord, &geometry::KING_OFFSETS),
                "bad king attacks from {}",
                coord
            );
            for color in Color::iter() {
                assert_eq!(
                    self.pawn(color, coord),
                    leaper::walk_offsets(coord, &geometry::pawn_attack_offsets(color)),
                    "bad {:?} pawn attacks from {}",
                    color,
                    coord
                );
            }
        }
    }

    #[inline]
    pub fn pawn(&self, color: Color, coord: Coord) -> Bitboard {
        unsafe {
            *self
                .pawn
                .get_unchecked(color.index())
                .get_unchecked(coord.index())
        }
    }

    #[inline]
    pub fn knight(&self, coord: Coord) -> Bitboard {
        unsafe { *self.knight.get_unchecked(coord.index()) }
    }

    #[inline]
    pub fn king(&self, coord: Coord) -> Bitboard {
        unsafe { *self.king.get_unchecked(coord.index()) }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}
