//! # Base types for bitchess
//!
//! This is an auxiliary crate for `bitchess`, which contains squares, sides and bitboards
//! together with the bit primitives and boundary masks the attack generators are built on.
//!
//! Normally you don't want to use this crate directly. Use `bitchess` instead, which
//! re-exports everything needed.

pub mod bitboard;
pub mod bitboard_consts;
pub mod geometry;
pub mod types;
