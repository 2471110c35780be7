//! Basic types for working with letter tiles.
mod tile;

pub use tile::{Placement, Tile, BLANK};
