//! Axis, direction and offset arithmetic on an N x N board.
//!
//! An [`Offset`] addresses a square by `(column, row)`. A [`Position`] is the same
//! square seen from an [`Axis`]: `iterable` is the coordinate that changes while
//! walking along the axis, `fixed` is the one that stays put. For a horizontal
//! position `iterable` is the column and `fixed` the row, for a vertical position
//! it is the other way around.
use std::fmt;

/// Line along which a word reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Return the orthogonal axis.
    pub fn inverse(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Stepping direction along an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards index 0
    Backward,
    /// Towards index N - 1
    Forward,
}

impl Direction {
    /// Both directions, backward first.
    pub const BOTH: [Direction; 2] = [Direction::Backward, Direction::Forward];

    /// Return the opposite direction.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Forward => Direction::Backward,
        }
    }
}

/// A square on the board, addressed as `(column, row)`.
///
/// An offset is only meaningful for a board of dimension `n` if both coordinates
/// are below `n`; check with [`Offset::is_valid`] before indexing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub column: usize,
    pub row: usize,
}

impl Offset {
    pub const fn new(column: usize, row: usize) -> Offset {
        Offset { column, row }
    }

    /// Check if the offset lies on a board of dimension `dim`.
    pub fn is_valid(&self, dim: usize) -> bool {
        self.column < dim && self.row < dim
    }

    /// Row-major index into a flat `dim * dim` array.
    pub(crate) fn index(&self, dim: usize) -> usize {
        self.row * dim + self.column
    }

    /// Return the neighbouring offset along `axis`, or `None` at the board edge.
    pub fn neighbor(&self, axis: Axis, direction: Direction, dim: usize) -> Option<Offset> {
        Position::from_offset(axis, *self)
            .step(direction, dim)
            .map(|p| p.offset())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A square seen along an axis. Compared by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub axis: Axis,
    pub iterable: usize,
    pub fixed: usize,
}

impl Position {
    /// Create a position, or `None` if it falls outside a board of dimension `dim`.
    ///
    /// ## Examples
    /// ```
    /// use wordboard::{Axis, Offset, Position};
    /// let p = Position::new(Axis::Horizontal, 3, 7, 15).unwrap();
    /// assert_eq!(p.offset(), Offset::new(3, 7));
    /// assert!(Position::new(Axis::Vertical, 15, 0, 15).is_none());
    /// ```
    pub fn new(axis: Axis, iterable: usize, fixed: usize, dim: usize) -> Option<Position> {
        if iterable < dim && fixed < dim {
            Some(Position {
                axis,
                iterable,
                fixed,
            })
        } else {
            None
        }
    }

    /// View `offset` along `axis`.
    pub fn from_offset(axis: Axis, offset: Offset) -> Position {
        match axis {
            Axis::Horizontal => Position {
                axis,
                iterable: offset.column,
                fixed: offset.row,
            },
            Axis::Vertical => Position {
                axis,
                iterable: offset.row,
                fixed: offset.column,
            },
        }
    }

    /// The square this position refers to.
    pub fn offset(&self) -> Offset {
        match self.axis {
            Axis::Horizontal => Offset::new(self.iterable, self.fixed),
            Axis::Vertical => Offset::new(self.fixed, self.iterable),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.axis == Axis::Horizontal
    }

    /// Return the adjacent position in `direction`, or `None` if that would leave the board.
    pub fn step(&self, direction: Direction, dim: usize) -> Option<Position> {
        let iterable = match direction {
            Direction::Backward => self.iterable.checked_sub(1)?,
            Direction::Forward => self.iterable + 1,
        };
        Position::new(self.axis, iterable, self.fixed, dim)
    }

    /// Like [`step`](Position::step), but stays on the same position at the board edge.
    pub fn step_or_stay(&self, direction: Direction, dim: usize) -> Position {
        self.step(direction, dim).unwrap_or(*self)
    }

    /// The same square seen along the orthogonal axis.
    pub fn other_axis(&self) -> Position {
        Position {
            axis: self.axis.inverse(),
            iterable: self.fixed,
            fixed: self.iterable,
        }
    }

    /// Position on the same line at index `iterable`.
    pub(crate) fn with_iterable(&self, iterable: usize) -> Position {
        Position { iterable, ..*self }
    }
}

/// Inclusive extent of a word or candidate region along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    pub start: Position,
    pub end: Position,
}

impl Boundary {
    /// Create a boundary from `start` to `end`.
    /// Returns `None` unless both are on the same line and `start` does not come after `end`.
    pub fn new(start: Position, end: Position) -> Option<Boundary> {
        if start.axis == end.axis && start.fixed == end.fixed && start.iterable <= end.iterable {
            Some(Boundary { start, end })
        } else {
            None
        }
    }

    /// A boundary covering a single square.
    pub fn single(position: Position) -> Boundary {
        Boundary {
            start: position,
            end: position,
        }
    }

    pub fn axis(&self) -> Axis {
        self.start.axis
    }

    pub fn fixed(&self) -> usize {
        self.start.fixed
    }

    /// Number of squares covered, 0 if `start` comes after `end`.
    pub fn len(&self) -> usize {
        (self.end.iterable + 1).saturating_sub(self.start.iterable)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the boundary is one line segment on a board of dimension `dim`.
    pub fn is_valid(&self, dim: usize) -> bool {
        Boundary::new(self.start, self.end).is_some() && self.end.iterable < dim && self.end.fixed < dim
    }

    /// Check if `offset` lies inside the boundary.
    pub fn encompasses(&self, offset: Offset) -> bool {
        let p = Position::from_offset(self.axis(), offset);
        p.fixed == self.fixed() && p.iterable >= self.start.iterable && p.iterable <= self.end.iterable
    }

    /// Check if `other` lies entirely inside this boundary.
    pub fn contains(&self, other: &Boundary) -> bool {
        other.axis() == self.axis()
            && other.fixed() == self.fixed()
            && other.start.iterable >= self.start.iterable
            && other.end.iterable <= self.end.iterable
    }

    /// Iterate over the squares from start to end.
    pub fn offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        (self.start.iterable..=self.end.iterable).map(move |i| self.start.with_iterable(i).offset())
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.start.offset(), self.end.offset())
    }
}
