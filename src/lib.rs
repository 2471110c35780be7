//! Board geometry and move legality for crossword tile games.
//! <br>
//! This crate keeps the state of a Scrabble-like board, checks whether the tiles a
//! player puts down this turn form a legal move, scores the move, and commits it.
//! It also computes the regions of the board a rack of tiles can reach, which a move
//! generator can use to limit its search.
//! It can use the `rayon` crate to compute regions in parallel.
//!
//! # How to use `wordboard`
//! Start by creating a board. By default the standard 15x15 bonus layout is used,
//! but you can specify your own grid and [`Rules`].
//! Tiles placed during a turn are collected in a [`Move`]. The board validates the
//! move against a [`Dictionary`], and only a validated [`Play`] can be committed.
//! A [`Wordlist`] is a simple dictionary; it can be read from a utf-8 file with one
//! word per line.
//!
//! # Basic usage
//!  ```
//! use wordboard::{Board, Move, Offset, TileSet, Wordlist};
//!
//! let mut board = Board::default();
//! let wordlist = Wordlist::from_words(&["rust", "rusts", "trust"]);
//! let tileset = TileSet::default();
//!
//! let mut mv = Move::new(tileset.word("rustt")?);
//! for column in 6..10 {
//!     mv.place(&board, 0, Offset::new(column, 7))?;
//! }
//! let play = board.play(&mut mv, &wordlist)?;
//! assert_eq!(play.main().text(), "RUST");
//! assert_eq!(play.score(), 4);
//!
//! mv.place(&board, 0, Offset::new(5, 7))?;
//! let play = board.play(&mut mv, &wordlist)?;
//! assert_eq!(play.main().text(), "TRUST");
//! println!("{}", board);
//!
//! for region in board.playable_regions(2) {
//!     println!("{}", region);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! Squares are addressed by [`Offset`], or by [`Position`] when a line is walked
//! along an [`Axis`]. The tiles of one line are kept in a 32 bit set, so a board has
//! at most 32 squares per side.
//! Pending tiles never touch the board: the validator reads the board through an
//! [`Overlay`] that lays a move on top of the fixed tiles.
mod board;
mod coords;
mod error;
mod grid;
mod lineset;
mod moves;
mod regions;
mod rules;
mod tiles;
mod tilesets;
mod validator;
mod word;
mod wordlist;

pub use board::{Board, Overlay, Square, TileSource};
pub use coords::{Axis, Boundary, Direction, Offset, Position};
pub use error::{Error, MoveError};
pub use grid::{Bonus, Grid};
pub use lineset::{LineSet, MAX_DIM};
pub use moves::Move;
pub use rules::Rules;
pub use tiles::{Placement, Tile, BLANK};
pub use tilesets::TileSet;
pub use validator::Play;
pub use word::{extract, Cell, Word};
pub use wordlist::{Dictionary, Wordlist};
