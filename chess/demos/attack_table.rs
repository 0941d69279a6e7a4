// Prints the attack masks of every piece standing on the given square

use bitchess::{attack, Bitboard, Color, Coord, Piece};
use std::env;
use std::process;

fn main() {
    let arg = env::args().nth(1).unwrap_or_else(|| "d4".to_string());
    let coord: Coord = match arg.parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Bad square {:?}: {}", arg, e);
            process::exit(1);
        }
    };
    let occupied = match env::args().nth(2) {
        Some(s) => match u64::from_str_radix(s.trim_start_matches("0x"), 16) {
            Ok(v) => Bitboard::from_raw(v),
            Err(e) => {
                eprintln!("Bad occupancy {:?}: {}", s, e);
                process::exit(1);
            }
        },
        None => Bitboard::EMPTY,
    };

    attack::init();

    println!("Occupancy:");
    println!("{}", occupied.pretty());
    for color in [Color::White, Color::Black] {
        println!("{:?} pawn on {}:", color, coord);
        println!("{}", attack::pawn(color, coord).pretty());
    }
    for piece in [Piece::Knight, Piece::King, Piece::Bishop, Piece::Rook, Piece::Queen] {
        println!("{:?} on {}:", piece, coord);
        println!("{}", attack::of(piece, Color::White, coord, occupied).pretty());
    }
    println!("Relevant bishop occupancy for {}:", coord);
    println!("{}", attack::unobstructed_bishop(coord).pretty());
    println!("Relevant rook occupancy for {}:", coord);
    println!("{}", attack::unobstructed_rook(coord).pretty());
}
