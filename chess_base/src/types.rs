use std::fmt;
use std::hint;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Error converting a raw square index into [`Coord`]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("square index {0} is out of range 0..64")]
    OutOfRange(usize),
}

/// Error converting a raw side value into [`Color`]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("side value {0} is neither 0 (white) nor 1 (black)")]
    OutOfRange(u8),
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(unsafe {
                Self::from_index_unchecked((u32::from(c) - u32::from('a')) as usize)
            }),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board rank
///
/// Ranks are indexed from the top of the printed board, so [`Rank::R8`] has index 0
/// and [`Rank::R1`] has index 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R8 = 0,
    R7 = 1,
    R6 = 2,
    R5 = 3,
    R4 = 4,
    R3 = 5,
    R2 = 6,
    R1 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R8,
            1 => Rank::R7,
            2 => Rank::R6,
            3 => Rank::R5,
            4 => Rank::R4,
            5 => Rank::R3,
            6 => Rank::R2,
            7 => Rank::R1,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(unsafe {
                Self::from_index_unchecked((u32::from('8') - u32::from(c)) as usize)
            }),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'8' - *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Square on the board
///
/// The index is `rank * 8 + file`, where rank 0 is the eighth rank. So, `a8` has index 0,
/// `h8` has index 7 and `h1` has index 63. A `Coord` always holds an index in `0..64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const COUNT: usize = 64;

    pub const fn from_index(val: usize) -> Coord {
        assert!(val < 64, "coord must be between 0 and 63");
        Coord(val as u8)
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Coord {
        Coord(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord(((rank as u8) << 3) | file as u8)
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn diag1(&self) -> usize {
        self.file().index() + self.rank().index()
    }

    pub const fn diag2(&self) -> usize {
        7 - self.rank().index() + self.file().index()
    }

    /// Moves the coordinate by `delta_file` files and `delta_rank` ranks
    ///
    /// Returns `None` if the result leaves the board. Positive `delta_rank` moves
    /// towards the first rank.
    pub fn try_shift(self, delta_file: isize, delta_rank: isize) -> Option<Coord> {
        let new_file = self.file().index().wrapping_add(delta_file as usize);
        let new_rank = self.rank().index().wrapping_add(delta_rank as usize);
        if new_file >= 8 || new_rank >= 8 {
            return None;
        }
        unsafe {
            Some(Coord::from_parts(
                File::from_index_unchecked(new_file),
                Rank::from_index_unchecked(new_rank),
            ))
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Coord)
    }
}

impl TryFrom<usize> for Coord {
    type Error = CoordError;

    fn try_from(val: usize) -> Result<Self, Self::Error> {
        if val >= Self::COUNT {
            return Err(CoordError::OutOfRange(val));
        }
        Ok(Coord(val as u8))
    }
}

impl From<Coord> for usize {
    fn from(c: Coord) -> usize {
        c.index()
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Coord({})", self);
        }
        write!(f, "Coord(?{:?})", self.0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(CoordParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let (file_ch, rank_ch) = (bytes[0] as char, bytes[1] as char);
        Ok(Coord::from_parts(
            File::from_char(file_ch).ok_or(CoordParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CoordParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

/// Side to move
///
/// White pawns attack towards the eighth rank (decreasing rank index), black pawns
/// towards the first one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;

    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black].into_iter()
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = ColorError;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(Color::White),
            1 => Ok(Color::Black),
            _ => Err(ColorError::OutOfRange(val)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl Piece {
    pub const fn is_slider(&self) -> bool {
        matches!(*self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Piece::Pawn,
            Piece::King,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
            assert_eq!(File::from_char(file.as_char()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
        assert_eq!(Rank::R8.as_char(), '8');
        assert_eq!(Rank::R1.as_char(), '1');
    }

    #[test]
    fn test_coord() {
        let mut coords = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let coord = Coord::from_parts(file, rank);
                assert_eq!(coord.file(), file);
                assert_eq!(coord.rank(), rank);
                assert_eq!(coord.index(), rank.index() * 8 + file.index());
                coords.push(coord);
            }
        }
        assert_eq!(coords, Coord::iter().collect::<Vec<_>>());
        assert_eq!(Coord::from_parts(File::A, Rank::R8).index(), 0);
        assert_eq!(Coord::from_parts(File::H, Rank::R1).index(), 63);
    }

    #[test]
    fn test_coord_range() {
        assert_eq!(Coord::try_from(63_usize), Ok(Coord::from_parts(File::H, Rank::R1)));
        assert_eq!(Coord::try_from(64_usize), Err(CoordError::OutOfRange(64)));
        assert_eq!(
            Coord::try_from(usize::MAX),
            Err(CoordError::OutOfRange(usize::MAX))
        );
    }

    #[test]
    #[should_panic(expected = "coord must be between 0 and 63")]
    fn test_coord_from_index_out_of_range() {
        let _ = Coord::from_index(64);
    }

    #[test]
    fn test_coord_shift() {
        let d4 = Coord::from_parts(File::D, Rank::R4);
        assert_eq!(d4.try_shift(1, -1), Some(Coord::from_parts(File::E, Rank::R5)));
        assert_eq!(d4.try_shift(-3, 3), Some(Coord::from_parts(File::A, Rank::R1)));
        assert_eq!(d4.try_shift(-4, 0), None);
        assert_eq!(d4.try_shift(0, 4), None);
        let h8 = Coord::from_parts(File::H, Rank::R8);
        assert_eq!(h8.try_shift(1, 0), None);
        assert_eq!(h8.try_shift(0, -1), None);
    }

    #[test]
    fn test_coord_str() {
        assert_eq!(
            Coord::from_parts(File::B, Rank::R4).to_string(),
            "b4".to_string()
        );
        assert_eq!(
            Coord::from_str("a1"),
            Ok(Coord::from_parts(File::A, Rank::R1))
        );
        assert_eq!(
            Coord::from_str("h9"),
            Err(CoordParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Coord::from_str("i4"),
            Err(CoordParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Coord::from_str("e44"), Err(CoordParseError::BadLength));
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::try_from(0_u8), Ok(Color::White));
        assert_eq!(Color::try_from(1_u8), Ok(Color::Black));
        assert_eq!(Color::try_from(2_u8), Err(ColorError::OutOfRange(2)));
        assert_eq!(Color::White.inv(), Color::Black);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn test_piece() {
        let sliders: Vec<_> = Piece::iter().filter(Piece::is_slider).collect();
        assert_eq!(sliders, vec![Piece::Bishop, Piece::Rook, Piece::Queen]);
    }
}
