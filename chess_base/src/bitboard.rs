use crate::types::{Coord, File, Rank};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::fmt;
use std::iter::IntoIterator;

/// Set of squares packed into a 64-bit integer
///
/// Bit `i` corresponds to the square with index `i` (see [`Coord`]). Any `u64` value is a
/// valid bitboard.
#[derive(
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const fn from_raw(val: u64) -> Bitboard {
        Bitboard(val)
    }

    pub const fn from_coord(coord: Coord) -> Bitboard {
        Bitboard(1_u64 << coord.index())
    }

    pub const fn with(self, coord: Coord) -> Bitboard {
        Bitboard(self.0 | (1_u64 << coord.index()))
    }

    pub const fn with2(self, file: File, rank: Rank) -> Bitboard {
        self.with(Coord::from_parts(file, rank))
    }

    pub const fn without(self, coord: Coord) -> Bitboard {
        Bitboard(self.0 & !(1_u64 << coord.index()))
    }

    /// Shifts towards higher square indices, i.e. towards rank 1
    ///
    /// Bits moved past square 63 are lost. No file masking is applied.
    pub const fn shl(self, by: usize) -> Bitboard {
        Bitboard(self.0 << by)
    }

    /// Shifts towards lower square indices, i.e. towards rank 8
    pub const fn shr(self, by: usize) -> Bitboard {
        Bitboard(self.0 >> by)
    }

    /// Sets the bit for `coord`. Does nothing if it is already set.
    pub fn set(&mut self, coord: Coord) {
        *self = self.with(coord);
    }

    /// Clears the bit for `coord`. Does nothing if it is already clear.
    pub fn unset(&mut self, coord: Coord) {
        *self = self.without(coord);
    }

    pub const fn has(&self, coord: Coord) -> bool {
        ((self.0 >> coord.index()) & 1) != 0
    }

    /// Returns the bit for `coord` as `0` or `1`
    pub const fn get_bit(&self, coord: Coord) -> u8 {
        ((self.0 >> coord.index()) & 1) as u8
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    pub const fn popcount(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_nonempty(&self) -> bool {
        self.0 != 0
    }

    /// Wraps the bitboard to print it as an 8x8 grid
    ///
    /// # Example
    ///
    /// ```
    /// # use bitchess_base::bitboard::Bitboard;
    /// # use bitchess_base::types::{File, Rank};
    /// #
    /// let b = Bitboard::EMPTY.with2(File::E, Rank::R4).with2(File::H, Rank::R8);
    ///
    /// let res = r#"
    /// 8|.......x
    /// 7|........
    /// 6|........
    /// 5|........
    /// 4|....x...
    /// 3|........
    /// 2|........
    /// 1|........
    /// -+--------
    ///  |abcdefgh
    /// bitboard: 0x0000001000000080
    /// "#;
    /// assert_eq!(b.pretty().to_string().trim(), res.trim());
    /// ```
    pub fn pretty(&self) -> Pretty {
        Pretty(*self)
    }
}

impl From<Bitboard> for u64 {
    fn from(b: Bitboard) -> u64 {
        b.0
    }
}

impl From<u64> for Bitboard {
    fn from(u: u64) -> Bitboard {
        Bitboard(u)
    }
}

impl From<Coord> for Bitboard {
    fn from(c: Coord) -> Bitboard {
        Bitboard::from_coord(c)
    }
}

impl FromIterator<Coord> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Bitboard({})", self)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let v = self.0.reverse_bits();
        write!(
            f,
            "{:08b}/{:08b}/{:08b}/{:08b}/{:08b}/{:08b}/{:08b}/{:08b}",
            (v >> 56) & 0xff,
            (v >> 48) & 0xff,
            (v >> 40) & 0xff,
            (v >> 32) & 0xff,
            (v >> 24) & 0xff,
            (v >> 16) & 0xff,
            (v >> 8) & 0xff,
            v & 0xff,
        )
    }
}

/// Wrapper to pretty-print the bitboard
///
/// Created with [`Bitboard::pretty()`].
pub struct Pretty(Bitboard);

impl fmt::Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}|", rank.as_char())?;
            for file in File::iter() {
                let c = if self.0.has(Coord::from_parts(file, rank)) {
                    'x'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "-+--------")?;
        writeln!(f, " |abcdefgh")?;
        writeln!(f, "bitboard: {:#018x}", self.0.as_raw())
    }
}

pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0.wrapping_sub(1_u64);
        unsafe { Some(Coord::from_index_unchecked(bit as usize)) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for Bitboard {
    type Item = Coord;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, File, Rank};

    #[test]
    fn test_iter() {
        let bb = Bitboard::EMPTY
            .with(Coord::from_parts(File::A, Rank::R4))
            .with(Coord::from_parts(File::E, Rank::R2))
            .with(Coord::from_parts(File::F, Rank::R3));
        assert_eq!(bb.into_iter().len(), 3);
        assert_eq!(
            bb.into_iter().collect::<Vec<_>>(),
            vec![
                Coord::from_parts(File::A, Rank::R4),
                Coord::from_parts(File::F, Rank::R3),
                Coord::from_parts(File::E, Rank::R2)
            ],
        );
        assert_eq!(bb.into_iter().collect::<Bitboard>(), bb);
    }

    #[test]
    fn test_bit_primitives() {
        let c = Coord::from_parts(File::C, Rank::R6);
        let mut bb = Bitboard::EMPTY;
        assert_eq!(bb.get_bit(c), 0);

        bb.set(c);
        assert_eq!(bb.get_bit(c), 1);
        assert!(bb.has(c));
        bb.set(c);
        assert_eq!(bb, Bitboard::from_coord(c));

        bb.unset(c);
        assert_eq!(bb.get_bit(c), 0);
        bb.unset(c);
        assert_eq!(bb, Bitboard::EMPTY);

        let full = Bitboard::FULL.without(c);
        assert_eq!(full.popcount(), 63);
        assert!(!full.has(c));
    }

    #[test]
    fn test_corner_bits() {
        let a8 = Coord::from_index(0);
        let h1 = Coord::from_index(63);
        assert_eq!(Bitboard::from_coord(a8).as_raw(), 1);
        assert_eq!(Bitboard::from_coord(h1).as_raw(), 1 << 63);
        assert_eq!(Bitboard::from_coord(h1).shl(1), Bitboard::EMPTY);
        assert_eq!(Bitboard::from_coord(a8).shr(1), Bitboard::EMPTY);
    }

    #[test]
    fn test_bitops() {
        let ca = Coord::from_parts(File::A, Rank::R4);
        let cb = Coord::from_parts(File::E, Rank::R2);
        let cc = Coord::from_parts(File::F, Rank::R3);

        let bb1 = Bitboard::EMPTY.with(ca).with(cb);
        let bb2 = Bitboard::EMPTY.with(cb).with(cc);
        assert_eq!(bb1 & bb2, Bitboard::EMPTY.with(cb));
        assert_eq!(bb1 | bb2, Bitboard::EMPTY.with(ca).with(cb).with(cc));
        assert_eq!(bb1 ^ bb2, Bitboard::EMPTY.with(ca).with(cc));

        assert_eq!((!bb1).into_iter().count(), 62);
        assert_eq!((!bb1).popcount(), 62);
    }

    #[test]
    fn test_format() {
        let bb = Bitboard::EMPTY
            .with(Coord::from_parts(File::A, Rank::R4))
            .with(Coord::from_parts(File::E, Rank::R2))
            .with(Coord::from_parts(File::F, Rank::R3))
            .with(Coord::from_parts(File::H, Rank::R8));
        assert_eq!(
            bb.to_string(),
            "00000001/00000000/00000000/00000000/10000000/00000100/00001000/00000000"
        );
    }

    #[test]
    fn test_pretty() {
        let bb = Bitboard::EMPTY.with2(File::A, Rank::R1);
        let s = bb.pretty().to_string();
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "8|........");
        assert_eq!(lines[7], "1|x.......");
        assert_eq!(lines[10], "bitboard: 0x0100000000000000");
    }
}
