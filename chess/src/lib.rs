//! # bitchess
//!
//! Attack masks for chess move generation, built on 64-bit bitboards.
//!
//! Squares are indexed from `a8` (index 0) to `h1` (index 63), rank by rank. Pawns, knights and
//! kings have their attacks precomputed into [`AttackTables`]. Bishops, rooks and queens are
//! ray-cast on every call, taking the board occupancy into account.
//!
//! The tables can be used either directly:
//!
//! ```
//! use bitchess::{AttackTables, Coord, Color};
//!
//! let tables = AttackTables::new();
//! let a1: Coord = "a1".parse().unwrap();
//! assert_eq!(tables.knight(a1).popcount(), 2);
//! assert!(tables.pawn(Color::White, a1).is_nonempty());
//! ```
//!
//! or through the process-wide instance in [`attack`], after calling [`attack::init()`].

pub mod attack;
pub mod leaper;
pub mod slider;
pub mod tables;

pub use bitchess_base::{bitboard, bitboard_consts, geometry, types};

pub use attack::AttackError;
pub use bitboard::Bitboard;
pub use tables::AttackTables;
pub use types::{Color, Coord, File, Piece, Rank};
