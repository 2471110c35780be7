use std::fmt;

/// Letter shown by a blank that has not been assigned yet.
pub const BLANK: char = '*';

/// A letter tile with its point value.
///
/// A blank can stand for any letter. It must be [`assign`](Tile::assign)ed a letter
/// before it is committed to the board, and always scores 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    letter: char,
    value: u32,
    blank: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self::blank()
    }
}

impl Tile {
    /// Create a regular tile. The letter is stored in upper case.
    pub fn new(letter: char, value: u32) -> Tile {
        Tile {
            letter: letter.to_ascii_uppercase(),
            value,
            blank: false,
        }
    }

    /// Return a new unassigned blank tile.
    pub fn blank() -> Tile {
        Tile {
            letter: BLANK,
            value: 0,
            blank: true,
        }
    }

    /// Assign `letter` to a blank. Regular tiles are returned unchanged.
    /// ## Example
    /// ```
    /// use wordboard::Tile;
    /// let tile = Tile::blank().assign('q');
    /// assert_eq!(tile.letter(), 'Q');
    /// assert_eq!(tile.value(), 0);
    /// assert!(tile.is_wildcard());
    /// assert!(!tile.is_blank());
    /// ```
    pub fn assign(self, letter: char) -> Tile {
        if self.blank {
            Tile {
                letter: letter.to_ascii_uppercase(),
                ..self
            }
        } else {
            self
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Check if the tile is a blank without an assigned letter.
    pub fn is_blank(&self) -> bool {
        self.blank && self.letter == BLANK
    }

    /// Check if the tile is a blank, assigned or not.
    pub fn is_wildcard(&self) -> bool {
        self.blank
    }
}

/// Board state notation: lower case for a regular tile, upper case for an
/// assigned blank, `*` for an unassigned blank.
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ch = if self.blank {
            self.letter
        } else {
            self.letter.to_ascii_lowercase()
        };
        write!(f, "{}", ch)
    }
}

/// Where a tile is during a game. `Fixed` is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// On the player's rack
    Rack,
    /// Placed on the board this turn, not yet committed
    Pending,
    /// Committed to the board in an earlier turn
    Fixed,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Fixed
    }
}
