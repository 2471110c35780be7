use crate::board::Board;
use crate::coords::Offset;
use crate::tiles::{Placement, Tile};
use crate::Error;
use std::collections::BTreeMap;

/// The tiles of one player's turn in progress.
///
/// Holds the player's rack and the tiles tentatively placed on the board this turn.
/// Placing moves a tile from the rack to a square ([`Placement::Rack`] to
/// [`Placement::Pending`]), withdrawing moves it back. The board is never touched;
/// pending tiles become fixed only through [`Board::commit`](crate::Board::commit).
///
/// ## Examples
/// ```
/// # use wordboard::{Board, Move, Offset, Placement, TileSet, Error};
/// let board = Board::default();
/// let tiles = TileSet::default().word("cat")?;
/// let mut mv = Move::new(tiles);
/// mv.place(&board, 0, Offset::new(6, 7))?;
/// assert_eq!(mv.placement(Offset::new(6, 7)), Some(Placement::Pending));
/// assert_eq!(mv.rack().len(), 2);
/// mv.withdraw(Offset::new(6, 7))?;
/// assert_eq!(mv.rack().len(), 3);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Move {
    rack: Vec<Tile>,
    pending: BTreeMap<Offset, Tile>,
}

impl Move {
    /// Start a turn with the tiles on `rack`.
    pub fn new<I: IntoIterator<Item = Tile>>(rack: I) -> Move {
        Move {
            rack: rack.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Create a move from tiles already placed, without a rack.
    /// Later placements at the same offset replace earlier ones.
    pub fn from_placements<I: IntoIterator<Item = (Offset, Tile)>>(placements: I) -> Move {
        Move {
            rack: Vec::new(),
            pending: placements.into_iter().collect(),
        }
    }

    /// Place the rack tile at `index` on the empty square at `offset`.
    /// ## Errors
    /// - If `offset` is outside the board.
    /// - If the square holds a fixed or pending tile.
    /// - If the rack has no tile at `index`.
    pub fn place(&mut self, board: &Board, index: usize, offset: Offset) -> Result<(), Error> {
        if !offset.is_valid(board.dim()) {
            return Err(Error::out_of_range(offset));
        }
        if board.is_occupied(offset) || self.pending.contains_key(&offset) {
            return Err(Error::TileReplaceError {
                x: offset.column,
                y: offset.row,
            });
        }
        if index >= self.rack.len() {
            return Err(Error::RackIndexError(index));
        }
        let tile = self.rack.remove(index);
        self.pending.insert(offset, tile);
        Ok(())
    }

    /// Return the pending tile at `offset` to the rack.
    /// An assigned blank goes back as an unassigned blank.
    /// ## Errors
    /// If there is no pending tile at `offset`.
    pub fn withdraw(&mut self, offset: Offset) -> Result<Tile, Error> {
        let tile = self.pending.remove(&offset).ok_or(Error::NotPending {
            x: offset.column,
            y: offset.row,
        })?;
        let tile = if tile.is_wildcard() { Tile::blank() } else { tile };
        self.rack.push(tile);
        Ok(tile)
    }

    /// Assign `letter` to the pending blank at `offset`.
    /// ## Errors
    /// If there is no pending tile at `offset`.
    pub fn assign_blank(&mut self, offset: Offset, letter: char) -> Result<(), Error> {
        let tile = self.pending.get_mut(&offset).ok_or(Error::NotPending {
            x: offset.column,
            y: offset.row,
        })?;
        *tile = tile.assign(letter);
        Ok(())
    }

    /// Tiles still on the rack.
    pub fn rack(&self) -> &[Tile] {
        &self.rack
    }

    /// Pending tile at `offset`.
    pub fn tile(&self, offset: Offset) -> Option<Tile> {
        self.pending.get(&offset).copied()
    }

    /// `Pending` if a tile of this move is at `offset`.
    pub fn placement(&self, offset: Offset) -> Option<Placement> {
        self.pending.get(&offset).map(|_| Placement::Pending)
    }

    /// Pending tiles, sorted by offset.
    pub fn placements(&self) -> impl Iterator<Item = (Offset, Tile)> + '_ {
        self.pending.iter().map(|(&offset, &tile)| (offset, tile))
    }

    /// Offsets of the pending tiles, sorted.
    pub fn offsets(&self) -> Vec<Offset> {
        self.pending.keys().copied().collect()
    }

    /// Number of pending tiles.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forget the pending tiles after they were committed. The rack is kept.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileSet;
    use anyhow::Result;

    #[test]
    fn test_place_withdraw() -> Result<()> {
        let board = Board::default();
        let mut mv = Move::new(TileSet::default().word("dog")?);
        mv.place(&board, 2, Offset::new(7, 7))?;
        mv.place(&board, 0, Offset::new(5, 7))?;
        assert_eq!(mv.len(), 2);
        assert_eq!(mv.rack().len(), 1);
        assert_eq!(mv.rack()[0].letter(), 'O');
        assert_eq!(mv.offsets(), vec![Offset::new(5, 7), Offset::new(7, 7)]);

        let tile = mv.withdraw(Offset::new(7, 7))?;
        assert_eq!(tile.letter(), 'G');
        assert_eq!(mv.rack().len(), 2);
        assert!(mv.withdraw(Offset::new(7, 7)).is_err());
        Ok(())
    }

    #[test]
    fn test_place_errors() -> Result<()> {
        let board = Board::default().with_state_from_strings(crate::board::tests::TEST_STATE)?;
        let mut mv = Move::new(TileSet::default().word("ab")?);
        assert!(matches!(
            mv.place(&board, 0, Offset::new(15, 0)),
            Err(Error::OutOfRange { column: 15, row: 0 })
        ));
        assert!(matches!(
            mv.place(&board, 0, Offset::new(7, 7)),
            Err(Error::TileReplaceError { x: 7, y: 7 })
        ));
        assert!(matches!(
            mv.place(&board, 5, Offset::new(0, 0)),
            Err(Error::RackIndexError(5))
        ));
        mv.place(&board, 0, Offset::new(0, 0))?;
        assert!(matches!(
            mv.place(&board, 0, Offset::new(0, 0)),
            Err(Error::TileReplaceError { x: 0, y: 0 })
        ));
        Ok(())
    }

    #[test]
    fn test_blank() -> Result<()> {
        let board = Board::default();
        let mut mv = Move::new(vec![Tile::blank()]);
        mv.place(&board, 0, Offset::new(7, 7))?;
        mv.assign_blank(Offset::new(7, 7), 'x')?;
        assert_eq!(mv.tile(Offset::new(7, 7)).map(|t| t.letter()), Some('X'));
        mv.withdraw(Offset::new(7, 7))?;
        assert!(mv.rack()[0].is_blank());
        Ok(())
    }
}
