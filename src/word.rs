//! Reconstructing words from the tiles on a board.
use crate::board::TileSource;
use crate::coords::{Axis, Boundary, Direction, Offset, Position};
use crate::grid::Grid;
use crate::lineset::MAX_DIM;
use crate::rules::Rules;
use crate::tiles::{Placement, Tile};
use crate::Error;
use std::fmt;
use tinyvec::ArrayVec;

/// A tile in a word, with its square and placement state.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub offset: Offset,
    pub tile: Tile,
    pub placement: Placement,
}

impl Cell {
    /// Check if the tile was placed this turn.
    pub fn is_new(&self) -> bool {
        self.placement == Placement::Pending
    }
}

type Cells = ArrayVec<[Cell; MAX_DIM]>;

/// A non-empty run of tiles along one axis, without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    axis: Axis,
    cells: Cells,
}

impl Word {
    /// Read the tiles inside `boundary`.
    /// Returns `None` if any square in the boundary is empty or off the board,
    /// or if the boundary is inverted.
    pub fn from_boundary<S: TileSource + ?Sized>(source: &S, boundary: &Boundary) -> Option<Word> {
        Boundary::new(boundary.start, boundary.end)?;
        let cells = boundary
            .offsets()
            .map(|offset| {
                let tile = source.tile_at(offset)?;
                let placement = source.placement_at(offset)?;
                Some(Cell {
                    offset,
                    tile,
                    placement,
                })
            })
            .collect::<Option<Cells>>()?;
        Some(Word {
            axis: boundary.axis(),
            cells,
        })
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Offset of the first letter.
    pub fn start(&self) -> Offset {
        self.cells[0].offset
    }

    /// Offset of the last letter.
    pub fn end(&self) -> Offset {
        self.cells[self.cells.len() - 1].offset
    }

    /// Inclusive extent of the word.
    pub fn boundary(&self) -> Boundary {
        Boundary {
            start: Position::from_offset(self.axis, self.start()),
            end: Position::from_offset(self.axis, self.end()),
        }
    }

    /// The letters of the word, in upper case.
    pub fn text(&self) -> String {
        self.cells.iter().map(|cell| cell.tile.letter()).collect()
    }

    /// Check if the word covers `offset`.
    pub fn encompasses(&self, offset: Offset) -> bool {
        self.boundary().encompasses(offset)
    }

    /// Number of tiles placed this turn.
    pub fn new_tiles(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_new()).count()
    }

    /// Check if the word consists of fixed tiles only.
    pub fn is_immutable(&self) -> bool {
        self.new_tiles() == 0
    }

    /// Points for this word.
    ///
    /// Letter bonuses apply to new tiles only. The highest word multiplier under a
    /// new tile applies to the whole letter sum; bonus squares under fixed tiles
    /// do not count again.
    pub fn points(&self, grid: &Grid, rules: &Rules) -> u32 {
        let mut multiplier = 1;
        let mut sum = 0;
        for cell in &self.cells {
            let mut value = cell.tile.value();
            if cell.is_new() {
                let bonus = grid.bonus(cell.offset);
                value *= bonus.letter_multiplier();
                multiplier = multiplier.max(rules.word_multiplier(bonus));
            }
            sum += value;
        }
        sum * multiplier
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl Boundary {
    /// Return the letters inside the boundary, or `None` if there is a gap.
    ///
    /// ## Examples
    /// ```
    /// # use wordboard::{Board, Axis, Boundary, Position, Error};
    /// let mut state = vec!["..............."; 15];
    /// state[7] = ".....archers...";
    /// let board = Board::default().with_state_from_strings(&state)?;
    /// let start = Position::new(Axis::Horizontal, 5, 7, 15).unwrap();
    /// let end = Position::new(Axis::Horizontal, 9, 7, 15).unwrap();
    /// let arche = Boundary::new(start, end).unwrap();
    /// assert_eq!(arche.readable(&board), Some(String::from("ARCHE")));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn readable<S: TileSource + ?Sized>(&self, source: &S) -> Option<String> {
        Word::from_boundary(source, self).map(|word| word.text())
    }
}

/// Walk from `from` in `direction` while the next square holds a tile.
/// Returns the last occupied position reached.
fn walk<S: TileSource + ?Sized>(source: &S, from: Position, direction: Direction) -> Position {
    let dim = source.dim();
    let mut current = from;
    for _ in 0..dim {
        match current.step(direction, dim) {
            Some(next) if !source.is_empty(next) => current = next,
            _ => break,
        }
    }
    current
}

/// Extract the maximal gap-free run of tiles through `position` along its axis.
///
/// ## Errors
/// - [`Error::OutOfRange`] if `position` is off the board.
/// - [`Error::EmptyStart`] if the square at `position` has no tile.
pub fn extract<S: TileSource + ?Sized>(source: &S, position: Position) -> Result<Word, Error> {
    let offset = position.offset();
    if !offset.is_valid(source.dim()) {
        return Err(Error::out_of_range(offset));
    }
    if source.is_empty(position) {
        return Err(Error::EmptyStart {
            column: offset.column,
            row: offset.row,
        });
    }
    let boundary = Boundary {
        start: walk(source, position, Direction::Backward),
        end: walk(source, position, Direction::Forward),
    };
    Word::from_boundary(source, &boundary).ok_or(Error::EmptyStart {
        column: offset.column,
        row: offset.row,
    })
}
