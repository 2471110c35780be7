use crate::coords::{Axis, Boundary, Offset, Position};
use crate::grid::{Bonus, Grid};
use crate::lineset::LineSet;
use crate::moves::Move;
use crate::rules::Rules;
use crate::tiles::{Placement, Tile};
use crate::tilesets::TileSet;
use crate::Error;
use std::fmt;

/// Read access to the tiles on a board.
///
/// Implemented by [`Board`] for the fixed tiles, and by [`Overlay`] for the fixed
/// tiles plus the pending tiles of one move. Word extraction and validation only
/// read through this trait.
pub trait TileSource {
    /// Number of squares along each side.
    fn dim(&self) -> usize;

    /// Return tile at `offset`, or `None` if the square is empty or outside the board.
    fn tile_at(&self, offset: Offset) -> Option<Tile>;

    /// Return the placement state of the tile at `offset`, or `None` if there is no tile.
    fn placement_at(&self, offset: Offset) -> Option<Placement>;

    /// Check if the square at `position` holds no tile.
    fn is_empty(&self, position: Position) -> bool {
        self.tile_at(position.offset()).is_none()
    }

    /// Return the occupied indices of the line at `fixed` along `axis`.
    fn line(&self, axis: Axis, fixed: usize) -> LineSet {
        let dim = self.dim();
        (0..dim)
            .filter(|&i| {
                let p = Position {
                    axis,
                    iterable: i,
                    fixed,
                };
                !self.is_empty(p)
            })
            .collect()
    }
}

/// One square of the board: its bonus type and the tile on it, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Square {
    pub bonus: Bonus,
    pub tile: Option<Tile>,
}

impl Square {
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }
}

/// Display the board state as N lines of N squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .squares
            .chunks(self.dim())
            .map(|row| {
                row.iter()
                    .map(|square| square.map_or(String::from("."), |tile| tile.to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

/// Represents the state of a board.
/// * A grid of N x N squares with possible letter/word bonus,
/// * The rules used for scoring and region search,
/// * The fixed tiles, stored row-major, and the boundaries of the words played so far.
///
/// The board owns every fixed tile. Tiles placed during a turn live in a [`Move`]
/// until [`commit`](Board::commit) makes them fixed.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    rules: Rules,
    tileset: TileSet,
    squares: Vec<Option<Tile>>,
    played: Vec<Boundary>,
}

impl Board {
    /// Create a new empty board with the bonus layout of `grid` and default [`Rules`].
    ///
    /// ## Examples
    ///```
    /// use wordboard::{Board, Grid};
    ///
    /// let board = Board::new(Grid::default());
    /// assert_eq!(board.dim(), 15);
    ///```
    /// Additional builder functions can be used to set the rules, grid and state of the board.
    /// See also:
    /// - [`with_rules`](Board::with_rules)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    #[must_use]
    pub fn new(grid: Grid) -> Board {
        let dim = grid.dim();
        Board {
            grid,
            rules: Rules::default(),
            tileset: TileSet::default(),
            squares: vec![None; dim * dim],
            played: Vec::new(),
        }
    }

    /// Specify the rules, and return the modified board.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Board {
        self.rules = rules;
        self
    }

    /// Specify the tile set used to parse board state strings.
    #[must_use]
    pub fn with_tileset(mut self, tileset: TileSet) -> Board {
        self.tileset = tileset;
        self
    }

    /// Set board bonus squares from string representation.
    /// If the dimension changes, all tiles are removed.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        let grid = Grid::from_strings(grid)?;
        if grid.dim() != self.dim() {
            self.squares = vec![None; grid.dim() * grid.dim()];
            self.played.clear();
        }
        self.grid = grid;
        Ok(self)
    }

    /// Parse board state from a list of strings.
    /// The list must contain N rows of N characters.
    /// The boundaries of all words on the board are recorded as played.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    ///
    /// ## Examples
    /// ```
    /// use wordboard::Board;
    /// let state = &[
    ///     "...............",
    ///     "...............",
    ///     ".........r.....",
    ///     ".........e.....",
    ///     ".........s.....",
    ///     ".........u.....",
    ///     ".........m.....",
    ///     ".....archers...",
    ///     ".....r.a.s.....",
    ///     ".....i.r.......",
    ///     "....deadEr.....",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert_eq!(board.played().len(), 5);
    /// # Ok::<(), wordboard::Error>(())
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        let dim = self.dim();
        if rows.len() != dim {
            return Err(Error::InvalidRowCount(rows.len(), dim));
        }
        let mut squares = Vec::with_capacity(dim * dim);
        for &row in rows {
            let tiles = self.tileset.encode(row)?;
            if tiles.len() != dim {
                return Err(Error::InvalidRowLength(String::from(row), tiles.len(), dim));
            }
            squares.extend(tiles);
        }
        self.squares = squares;
        self.played = self.scan_boundaries();
        Ok(self)
    }

    /// Find the boundaries of all runs of two or more tiles.
    fn scan_boundaries(&self) -> Vec<Boundary> {
        let mut boundaries = Vec::new();
        for &axis in &Axis::BOTH {
            for fixed in 0..self.dim() {
                let line = self.line(axis, fixed);
                let mut run: Option<(usize, usize)> = None;
                for i in 0..=self.dim() {
                    if line.contains(i) {
                        run = Some(run.map_or((i, i), |(s, _)| (s, i)));
                    } else if let Some((s, e)) = run.take() {
                        if e > s {
                            let start = Position {
                                axis,
                                iterable: s,
                                fixed,
                            };
                            boundaries.push(Boundary {
                                start,
                                end: start.with_iterable(e),
                            });
                        }
                    }
                }
            }
        }
        boundaries
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Number of squares along each side.
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Boundaries of the words played so far.
    pub fn played(&self) -> &[Boundary] {
        &self.played
    }

    /// Return the square at `position`, which must be on the board.
    pub fn square_at(&self, position: Position) -> Square {
        let offset = position.offset();
        Square {
            bonus: self.grid.bonus(offset),
            tile: self.tile_at(offset),
        }
    }

    /// Check if cell at `offset` is occupied by a fixed tile.
    pub fn is_occupied(&self, offset: Offset) -> bool {
        self.tile_at(offset).is_some()
    }

    /// Number of fixed tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.squares.iter().filter(|square| square.is_some()).count()
    }

    /// Check if no tile has been fixed yet.
    pub fn has_no_tiles(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// View this board with the pending tiles of `mv` laid on top.
    pub fn overlay<'a>(&'a self, mv: &'a Move) -> Overlay<'a> {
        Overlay { board: self, mv }
    }

    /// Fix `tile` at `offset`. The square must be on the board and empty.
    pub(crate) fn fix(&mut self, offset: Offset, tile: Tile) {
        let index = offset.index(self.dim());
        debug_assert!(self.squares[index].is_none());
        self.squares[index] = Some(tile);
    }

    /// Record a played word, dropping played boundaries it covers.
    pub(crate) fn record(&mut self, boundary: Boundary) {
        self.played.retain(|b| !boundary.contains(b));
        self.played.push(boundary);
    }
}

impl TileSource for Board {
    fn dim(&self) -> usize {
        self.grid.dim()
    }

    fn tile_at(&self, offset: Offset) -> Option<Tile> {
        if offset.is_valid(self.dim()) {
            return self.squares[offset.index(self.dim())];
        }
        None
    }

    fn placement_at(&self, offset: Offset) -> Option<Placement> {
        self.tile_at(offset).map(|_| Placement::Fixed)
    }
}

/// A board with the pending tiles of one move laid on top of its fixed tiles.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    board: &'a Board,
    mv: &'a Move,
}

impl<'a> Overlay<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }
}

impl<'a> TileSource for Overlay<'a> {
    fn dim(&self) -> usize {
        self.board.dim()
    }

    fn tile_at(&self, offset: Offset) -> Option<Tile> {
        self.board.tile_at(offset).or_else(|| self.mv.tile(offset))
    }

    fn placement_at(&self, offset: Offset) -> Option<Placement> {
        if self.board.is_occupied(offset) {
            Some(Placement::Fixed)
        } else {
            self.mv.tile(offset).map(|_| Placement::Pending)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::coords::Direction;

    pub(crate) const TEST_STATE: &[&str] = &[
        "...............",
        "...............",
        ".........r.....",
        ".........e.....",
        ".........s.....",
        ".........u.....",
        ".........m.....",
        ".....archers...",
        ".....r.a.s.....",
        ".....i.r.......",
        "....deadEr.....",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    #[test]
    fn test_state() -> Result<(), Error> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        assert!(board.is_occupied(Offset::new(9, 2)));
        assert!(!board.is_occupied(Offset::new(0, 0)));
        assert!(!board.is_occupied(Offset::new(15, 2)));
        assert_eq!(board.tile_count(), 23);
        let blank = board.tile_at(Offset::new(8, 10)).unwrap();
        assert!(blank.is_wildcard());
        assert_eq!(blank.value(), 0);
        assert_eq!(board.to_string().lines().nth(10), Some("....deadEr....."));
        Ok(())
    }

    #[test]
    fn test_played_boundaries() -> Result<(), Error> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let words: Vec<String> = board
            .played()
            .iter()
            .map(|b| b.to_string())
            .collect();
        assert_eq!(
            words,
            vec![
                "(5, 7) - (11, 7)",
                "(4, 10) - (9, 10)",
                "(5, 7) - (5, 10)",
                "(7, 7) - (7, 10)",
                "(9, 2) - (9, 8)",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_square_at() -> Result<(), Error> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let p = Position::new(Axis::Vertical, 7, 7, 15).unwrap();
        let square = board.square_at(p);
        assert_eq!(square.bonus, Bonus::Center);
        assert_eq!(square.tile.map(|t| t.letter()), Some('C'));
        let above = p.step(Direction::Backward, 15).unwrap();
        assert!(board.is_empty(above));
        Ok(())
    }

    #[test]
    fn test_line() -> Result<(), Error> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let row = board.line(Axis::Horizontal, 10);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 9]);
        let column = board.line(Axis::Vertical, 9);
        assert_eq!(column.len(), 8);
        Ok(())
    }

    #[test]
    fn test_overlay() -> Result<(), Error> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let s = board.tileset().tile('s')?.unwrap();
        let mv = Move::from_placements(vec![(Offset::new(10, 10), s)]);
        let overlay = board.overlay(&mv);
        assert_eq!(overlay.tile_at(Offset::new(10, 10)), Some(s));
        assert_eq!(overlay.placement_at(Offset::new(10, 10)), Some(Placement::Pending));
        assert_eq!(overlay.placement_at(Offset::new(9, 10)), Some(Placement::Fixed));
        assert_eq!(overlay.placement_at(Offset::new(11, 10)), None);
        assert!(!board.is_occupied(Offset::new(10, 10)));
        Ok(())
    }

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let board = Board::default().with_grid_from_strings(&["-- --", "-- ss"])?;
        assert_eq!(board.dim(), 2);
        assert_eq!(board.grid().center(), Offset::new(1, 1));
        assert_eq!(board.to_string(), "..\n..");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidRowCount(2, 15)")]
    fn test_invalid_row_count() {
        Board::default().with_state_from_strings(&["", ""]).unwrap();
    }
}
