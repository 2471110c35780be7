use crate::tiles::{Tile, BLANK};
use crate::Error;

/// letter, count, points
type TileInfo = (char, u32, u32);

const ENGLISH: &[TileInfo] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK, 2, 0),
];

/// Tile distribution and letter values, and the translation between
/// tiles and the board state notation.
///
/// In board state strings `.` or a space is an empty square, a lower case letter a
/// regular tile, an upper case letter a blank assigned to that letter and `*` an
/// unassigned blank.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: &'static [TileInfo],
}

impl Default for TileSet {
    /// The standard English distribution.
    fn default() -> Self {
        TileSet { tiles: ENGLISH }
    }
}

impl TileSet {
    fn info(&self, letter: char) -> Option<&TileInfo> {
        let letter = letter.to_ascii_uppercase();
        self.tiles.iter().find(|info| info.0 == letter)
    }

    /// Return the points for letter, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |info| info.2)
    }

    /// Return the number of tiles with this letter in the set, or 0 if not found
    pub fn count(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |info| info.1)
    }

    /// Return the full distribution as a list of tiles.
    pub fn tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .flat_map(|&(letter, count, points)| {
                let tile = if letter == BLANK {
                    Tile::blank()
                } else {
                    Tile::new(letter, points)
                };
                std::iter::repeat(tile).take(count as usize)
            })
            .collect()
    }

    /// Decode one token of board state notation.
    /// ## Errors
    /// If `ch` is not a letter of this set.
    /// ## Examples
    /// ```
    /// # use wordboard::{TileSet, Error};
    /// let tileset = TileSet::default();
    /// let tile = tileset.tile('q')?.unwrap();
    /// assert_eq!(tile.value(), 10);
    /// let blank = tileset.tile('Q')?.unwrap();
    /// assert_eq!((blank.letter(), blank.value()), ('Q', 0));
    /// assert_eq!(tileset.tile('.')?, None);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn tile(&self, ch: char) -> Result<Option<Tile>, Error> {
        match ch {
            '.' | ' ' => Ok(None),
            BLANK => Ok(Some(Tile::blank())),
            _ => match self.info(ch) {
                Some(&(letter, _, points)) if letter != BLANK => {
                    if ch.is_lowercase() {
                        Ok(Some(Tile::new(letter, points)))
                    } else {
                        Ok(Some(Tile::blank().assign(letter)))
                    }
                }
                _ => Err(Error::EncodeInvalidToken(ch.to_string())),
            },
        }
    }

    /// Encode a row of board state notation.
    /// ## Errors
    /// An error is returned if the string can not be encoded with this tileset.
    pub fn encode(&self, row: &str) -> Result<Vec<Option<Tile>>, Error> {
        row.chars().map(|ch| self.tile(ch)).collect()
    }

    /// Encode a word of regular tiles, ignoring case.
    /// ## Errors
    /// If the word contains a character that is not a letter of this set.
    pub fn word(&self, word: &str) -> Result<Vec<Tile>, Error> {
        word.chars()
            .map(|ch| match self.tile(ch.to_ascii_lowercase())? {
                Some(tile) => Ok(tile),
                None => Err(Error::EncodeInvalidToken(ch.to_string())),
            })
            .collect()
    }
}
