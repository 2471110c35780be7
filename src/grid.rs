use crate::coords::Offset;
use crate::lineset::MAX_DIM;
use crate::Error;
use lazy_static::lazy_static;
use std::fmt;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

lazy_static! {
    static ref DEFAULT_GRID: Grid =
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD).expect("default quarter board is valid");
}

/// Bonus type of a square. Assigned when the grid is built and never changed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    None,
    Letterx2,
    Letterx3,
    Center,
    Wordx2,
    Wordx3,
}

impl Bonus {
    /// Multiplier applied to a new tile's value on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Bonus::Letterx2 => 2,
            Bonus::Letterx3 => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Bonus::None => "--",
            Bonus::Center => "ss",
            Bonus::Letterx2 => "2l",
            Bonus::Letterx3 => "3l",
            Bonus::Wordx2 => "2w",
            Bonus::Wordx3 => "3w",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Bonus::None),
            "ss" => Ok(Bonus::Center),
            "2l" => Ok(Bonus::Letterx2),
            "3l" => Ok(Bonus::Letterx3),
            "2w" => Ok(Bonus::Wordx2),
            "3w" => Ok(Bonus::Wordx3),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// Board layout: N x N squares with their bonus type, stored row-major.
///
/// The square marked [`Bonus::Center`] must be covered by the first word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dim: usize,
    cells: Vec<Bonus>,
}

impl Default for Grid {
    /// The standard 15 x 15 layout.
    /// ## Example
    /// ```
    /// # use wordboard::{Bonus, Grid, Offset};
    /// let grid = Grid::default();
    /// assert_eq!(grid.dim(), 15);
    /// assert_eq!(grid.bonus(Offset::new(7, 7)), Bonus::Center);
    /// assert_eq!(grid.bonus(Offset::new(14, 14)), Bonus::Wordx3);
    /// ```
    fn default() -> Grid {
        DEFAULT_GRID.clone()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Create a grid of `dim` x `dim` squares without bonus.
    /// ## Errors
    /// If `dim` is 0 or larger than 32.
    pub fn empty(dim: usize) -> Result<Grid, Error> {
        if dim == 0 || dim > MAX_DIM {
            return Err(Error::InvalidDimension(dim));
        }
        Ok(Grid {
            dim,
            cells: vec![Bonus::None; dim * dim],
        })
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Result<Grid, Error> {
        let mut grid = Grid::empty(N)?;
        for (i, row) in qb.iter().enumerate() {
            let row = row.split(' ').collect::<Vec<&str>>();
            if row.len() != Q {
                return Err(Error::InvalidRowLength(qb[i].to_string(), row.len(), Q));
            }
            for (j, c) in row.iter().enumerate() {
                let val: Bonus = c.parse()?;
                grid.set(i, j, val);
                grid.set(N - i - 1, j, val);
                grid.set(i, N - j - 1, val);
                grid.set(N - i - 1, N - j - 1, val);
            }
        }
        Ok(grid)
    }

    fn set(&mut self, row: usize, column: usize, bonus: Bonus) {
        let index = Offset::new(column, row).index(self.dim);
        self.cells[index] = bonus;
    }

    /// Number of squares along each side.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bonus of the square at `offset`, which must be on the grid.
    pub fn bonus(&self, offset: Offset) -> Bonus {
        self.cells[offset.index(self.dim)]
    }

    /// The square the first word must cover: the first [`Bonus::Center`] square,
    /// or the middle of the grid if none is marked.
    pub fn center(&self) -> Offset {
        self.cells
            .iter()
            .position(|&b| b == Bonus::Center)
            .map_or(Offset::new(self.dim / 2, self.dim / 2), |i| {
                Offset::new(i % self.dim, i / self.dim)
            })
    }

    /// Get board cells as a vec of N strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.dim)
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Each row consists of N tokens joined by spaces; the number of rows sets N.
    ///
    /// ## Errors
    /// If `grid` is not square, is too large, or a token can not be parsed as a [`Bonus`].
    /// ## Examples
    /// ```
    /// # use wordboard::{Bonus, Grid, Offset, Error};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 3w",
    ///     "-- ss --",
    ///     "3w -- 2l",
    /// ])?;
    /// assert_eq!(grid.dim(), 3);
    /// assert_eq!(grid.center(), Offset::new(1, 1));
    /// assert_eq!(grid.bonus(Offset::new(2, 2)), Bonus::Letterx2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let dim = grid.len();
        let mut board = Grid::empty(dim)?;
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != dim {
                return Err(Error::InvalidRowLength(
                    row.as_ref().to_string(),
                    cells.len(),
                    dim,
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board.set(i, j, cell.parse()?);
            }
        }
        Ok(board)
    }
}
