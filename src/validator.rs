//! Checking a proposed move against the rules, scoring it, and committing it.
use crate::board::{Board, TileSource};
use crate::coords::{Axis, Direction, Offset, Position};
use crate::error::{Error, MoveError};
use crate::moves::Move;
use crate::tiles::Tile;
use crate::word::{extract, Word};
use crate::wordlist::Dictionary;
use tracing::{debug, info};

/// A validated move, ready to be committed.
///
/// Only [`Board::validate`] creates a `Play`, so it always holds at least the main word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    words: Vec<Word>,
    placed: Vec<(Offset, Tile)>,
    score: u32,
    bingo: bool,
}

impl Play {
    /// The word read along the axis of the placement.
    pub fn main(&self) -> &Word {
        &self.words[0]
    }

    /// Every word that contains a new tile: the main word first, then the
    /// crossing words in placement order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The new tiles, sorted by offset.
    pub fn placed(&self) -> &[(Offset, Tile)] {
        &self.placed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Check if the move used a full rack.
    pub fn is_bingo(&self) -> bool {
        self.bingo
    }
}

/// Reject placements that no rule check could accept.
fn check_squares<I: IntoIterator<Item = (Offset, Tile)>>(board: &Board, placements: I) -> Result<(), Error> {
    for (offset, tile) in placements {
        if !offset.is_valid(board.dim()) {
            return Err(Error::out_of_range(offset));
        }
        if board.is_occupied(offset) {
            return Err(Error::TileReplaceError {
                x: offset.column,
                y: offset.row,
            });
        }
        if tile.is_blank() {
            return Err(Error::UnresolvedBlank {
                x: offset.column,
                y: offset.row,
            });
        }
    }
    Ok(())
}

/// Read the main word through the first new tile along `axis`, then every crossing
/// word longer than one tile.
fn words_formed<S: TileSource + ?Sized>(source: &S, axis: Axis, offsets: &[Offset]) -> Result<Vec<Word>, Error> {
    let main = extract(source, Position::from_offset(axis, offsets[0]))?;
    let mut words = vec![main];
    for &offset in offsets {
        let crossing = extract(source, Position::from_offset(axis.inverse(), offset))?;
        if crossing.len() > 1 {
            words.push(crossing);
        }
    }
    Ok(words)
}

/// Infer the axis of the placement from its sorted offsets.
///
/// A single tile reads horizontally if it has a horizontal neighbour on the board.
fn orientation(board: &Board, offsets: &[Offset]) -> Option<Axis> {
    let first = offsets[0];
    if offsets.len() == 1 {
        let dim = board.dim();
        let touches = Direction::BOTH.iter().any(|&direction| {
            first
                .neighbor(Axis::Horizontal, direction, dim)
                .map_or(false, |n| board.is_occupied(n))
        });
        return Some(if touches {
            Axis::Horizontal
        } else {
            Axis::Vertical
        });
    }
    if offsets.iter().all(|o| o.row == first.row) {
        Some(Axis::Horizontal)
    } else if offsets.iter().all(|o| o.column == first.column) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

impl Board {
    /// Check the pending tiles of `mv` against the rules and score the result.
    ///
    /// The board is not modified. The gates run in a fixed order and the first one
    /// that fails is reported:
    /// 1. the tiles lie on one line (orientation),
    /// 2. there is no empty square between the first and last tile,
    /// 3. the first word covers the center, or a later move touches the board,
    /// 4. the main word and every crossing word are defined in `dictionary`.
    ///
    /// ## Errors
    /// - [`MoveError::NoTiles`] if nothing is placed.
    /// - [`MoveError::Precondition`] if a tile is off the board, on a fixed tile or
    ///   an unassigned blank.
    /// - The rule violation of the first failing gate.
    ///
    /// ## Examples
    /// ```
    /// use wordboard::{Board, Move, Offset, TileSet, Wordlist};
    /// let board = Board::default();
    /// let wordlist = Wordlist::from_words(&["cat"]);
    /// let tileset = TileSet::default();
    /// let tiles = tileset.word("cat")?;
    /// let mv = Move::from_placements((6..9).map(|c| Offset::new(c, 7)).zip(tiles));
    /// let play = board.validate(&mv, &wordlist)?;
    /// assert_eq!(play.main().text(), "CAT");
    /// assert_eq!(play.score(), 5);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn validate<D: Dictionary + ?Sized>(&self, mv: &Move, dictionary: &D) -> Result<Play, MoveError> {
        let result = self.try_validate(mv, dictionary);
        if let Err(err) = &result {
            debug!("Move rejected: {}", err);
        }
        result
    }

    fn try_validate<D: Dictionary + ?Sized>(&self, mv: &Move, dictionary: &D) -> Result<Play, MoveError> {
        if mv.is_empty() {
            return Err(MoveError::NoTiles);
        }
        check_squares(self, mv.placements())?;
        let offsets = mv.offsets();
        let axis = orientation(self, &offsets).ok_or_else(|| MoveError::Arrangement(offsets.clone()))?;
        debug!("Placement {:?} reads {:?}", offsets, axis);

        let overlay = self.overlay(mv);
        let first = Position::from_offset(axis, offsets[0]);
        let last = Position::from_offset(axis, offsets[offsets.len() - 1]);
        if !overlay
            .line(axis, first.fixed)
            .is_full_between(first.iterable, last.iterable)
        {
            return Err(MoveError::Arrangement(offsets));
        }

        let words = words_formed(&overlay, axis, &offsets)?;
        debug!(
            "Words formed: {}",
            words.iter().map(Word::text).collect::<Vec<_>>().join(", ")
        );

        if self.has_no_tiles() {
            let center = self.grid().center();
            if !words[0].encompasses(center) {
                return Err(MoveError::CenterRuleViolation { center });
            }
        } else {
            let extends = words[0].new_tiles() < words[0].len();
            if !extends && words.len() == 1 {
                return Err(MoveError::DisconnectedPlacement(offsets));
            }
        }

        if let Some(word) = words.iter().find(|word| !dictionary.is_defined(&word.text())) {
            return Err(MoveError::UndefinedWord {
                word: word.text(),
                start: word.start(),
            });
        }

        let bingo = mv.len() == self.rules().rack_size;
        let mut score = words
            .iter()
            .filter(|word| !word.is_immutable())
            .map(|word| word.points(self.grid(), self.rules()))
            .sum::<u32>();
        if bingo {
            score += self.rules().bingo_bonus;
        }
        debug!("Score {} (bingo: {})", score, bingo);
        Ok(Play {
            words,
            placed: mv.placements().collect(),
            score,
            bingo,
        })
    }

    /// Fix the tiles of a validated `play` on the board and record its words.
    /// Returns the score of the play.
    ///
    /// The words of `play` are read again with its tiles laid on the current board.
    /// Another play committed since validation may have changed them, and then
    /// nothing is written.
    /// ## Errors
    /// - If a tile is off the board, lands on a fixed tile, or is an unassigned blank.
    /// - [`Error::StalePlay`] if the tiles no longer form exactly the validated words.
    pub fn commit(&mut self, play: &Play) -> Result<u32, Error> {
        check_squares(self, play.placed.iter().copied())?;
        let pending = Move::from_placements(play.placed.iter().copied());
        let offsets = pending.offsets();
        let words = words_formed(&self.overlay(&pending), play.main().axis(), &offsets)?;
        if words != play.words {
            let start = play.main().start();
            return Err(Error::StalePlay {
                column: start.column,
                row: start.row,
            });
        }
        for &(offset, tile) in &play.placed {
            self.fix(offset, tile);
        }
        for word in &play.words {
            if word.len() > 1 {
                self.record(word.boundary());
            }
        }
        info!(
            "Played {} at {} for {} points",
            play.main(),
            play.main().start(),
            play.score
        );
        Ok(play.score)
    }

    /// Validate `mv`, commit it, and clear its pending tiles.
    /// The tiles left on the rack stay in `mv`.
    /// ## Errors
    /// See [`validate`](Board::validate). A rejected move leaves both the board and
    /// `mv` unchanged.
    pub fn play<D: Dictionary + ?Sized>(&mut self, mv: &mut Move, dictionary: &D) -> Result<Play, MoveError> {
        let play = self.validate(mv, dictionary)?;
        self.commit(&play)?;
        mv.clear();
        Ok(play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::TEST_STATE;
    use crate::{TileSet, Wordlist};
    use anyhow::Result;

    fn placed(word: &str, start: Offset, axis: Axis) -> Result<Move> {
        let tiles = TileSet::default().word(word)?;
        let p = Position::from_offset(axis, start);
        Ok(Move::from_placements(
            tiles
                .into_iter()
                .enumerate()
                .map(|(i, tile)| (p.with_iterable(p.iterable + i).offset(), tile)),
        ))
    }

    fn cat_board() -> Result<Board> {
        let mut board = Board::default();
        let mv = placed("cat", Offset::new(6, 7), Axis::Horizontal)?;
        board.play(&mut mv.clone(), &Wordlist::from_words(&["cat"]))?;
        Ok(board)
    }

    #[test]
    fn test_first_move() -> Result<()> {
        let board = Board::default();
        let mv = placed("cat", Offset::new(6, 7), Axis::Horizontal)?;
        let play = board.validate(&mv, &Wordlist::from_words(&["cat"]))?;
        assert_eq!(play.words().len(), 1);
        assert_eq!(play.main().axis(), Axis::Horizontal);
        // c3 a1 t1, the center square has no multiplier
        assert_eq!(play.score(), 5);
        assert!(!play.is_bingo());
        assert!(board.has_no_tiles());
        Ok(())
    }

    #[test]
    fn test_center_rule() -> Result<()> {
        let board = Board::default();
        let mv = placed("cat", Offset::new(0, 0), Axis::Vertical)?;
        let err = board.validate(&mv, &Wordlist::from_words(&["cat"])).unwrap_err();
        assert!(matches!(
            err,
            MoveError::CenterRuleViolation {
                center: Offset { column: 7, row: 7 }
            }
        ));
        assert!(err.is_rule_violation());
        Ok(())
    }

    #[test]
    fn test_not_collinear() -> Result<()> {
        let board = Board::default();
        let tiles = TileSet::default().word("at")?;
        let mv = Move::from_placements(vec![(Offset::new(7, 7), tiles[0]), (Offset::new(8, 8), tiles[1])]);
        let err = board.validate(&mv, &Wordlist::from_words(&["at"])).unwrap_err();
        assert!(matches!(err, MoveError::Arrangement(_)));
        Ok(())
    }

    #[test]
    fn test_gap() -> Result<()> {
        let board = Board::default();
        let tiles = TileSet::default().word("cat")?;
        let mv = Move::from_placements(vec![
            (Offset::new(6, 7), tiles[0]),
            (Offset::new(7, 7), tiles[1]),
            (Offset::new(9, 7), tiles[2]),
        ]);
        let err = board.validate(&mv, &Wordlist::from_words(&["cat", "ca"])).unwrap_err();
        assert!(matches!(err, MoveError::Arrangement(offsets) if offsets.len() == 3));
        Ok(())
    }

    #[test]
    fn test_gap_filled_by_fixed_tile() -> Result<()> {
        let board = cat_board()?;
        let tiles = TileSet::default().word("cs")?;
        // "s" and "c" around the fixed "a": SAC reads vertically through (7, 7)
        let mv = Move::from_placements(vec![(Offset::new(7, 6), tiles[1]), (Offset::new(7, 8), tiles[0])]);
        let play = board.validate(&mv, &Wordlist::from_words(&["sac"]))?;
        assert_eq!(play.main().text(), "SAC");
        assert_eq!(play.main().axis(), Axis::Vertical);
        Ok(())
    }

    #[test]
    fn test_disconnected() -> Result<()> {
        let board = cat_board()?;
        let s = TileSet::default().word("s")?[0];
        // no neighbour: (8, 8) between "t" and (8, 9) stays empty
        let mv = Move::from_placements(vec![(Offset::new(8, 9), s)]);
        let err = board.validate(&mv, &Wordlist::from_words(&["s"])).unwrap_err();
        assert!(matches!(err, MoveError::DisconnectedPlacement(_)));
        Ok(())
    }

    #[test]
    fn test_single_tile_crossing() -> Result<()> {
        let board = cat_board()?;
        let s = TileSet::default().word("s")?[0];
        // "s" below "t" forms TS vertically
        let mv = Move::from_placements(vec![(Offset::new(8, 8), s)]);
        let err = board.validate(&mv, &Wordlist::from_words(&["cat"])).unwrap_err();
        assert!(matches!(err, MoveError::UndefinedWord { ref word, .. } if word == "TS"));
        let mv = Move::from_placements(vec![(Offset::new(9, 7), s)]);
        let play = board.validate(&mv, &Wordlist::from_words(&["cats"]))?;
        assert_eq!(play.main().text(), "CATS");
        assert_eq!(play.main().axis(), Axis::Horizontal);
        Ok(())
    }

    #[test]
    fn test_undefined_word() -> Result<()> {
        let mut board = Board::default();
        let mut mv = placed("dog", Offset::new(7, 5), Axis::Vertical)?;
        let err = board.play(&mut mv, &Wordlist::from_words(&["cat"])).unwrap_err();
        assert!(matches!(
            err,
            MoveError::UndefinedWord { ref word, start } if word == "DOG" && start == Offset::new(7, 5)
        ));
        assert!(board.has_no_tiles());
        assert_eq!(mv.len(), 3);
        Ok(())
    }

    #[test]
    fn test_crossing_words() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        // "a" at (10, 8) and "s" at (10, 9) under "r" of ARCHERS: RAS vertically,
        // with crossing word "SA" in row 8
        let tiles = TileSet::default().word("as")?;
        let mv = Move::from_placements(vec![(Offset::new(10, 8), tiles[0]), (Offset::new(10, 9), tiles[1])]);
        let dictionary = Wordlist::from_words(&["ras", "sa"]);
        let play = board.validate(&mv, &dictionary)?;
        let words: Vec<String> = play.words().iter().map(Word::text).collect();
        assert_eq!(words, vec!["RAS", "SA"]);
        let missing = Wordlist::from_words(&["ras"]);
        let err = board.validate(&mv, &missing).unwrap_err();
        assert!(matches!(err, MoveError::UndefinedWord { ref word, .. } if word == "SA"));
        Ok(())
    }

    #[test]
    fn test_preconditions() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let dictionary = Wordlist::default();
        assert!(matches!(board.validate(&Move::default(), &dictionary), Err(MoveError::NoTiles)));
        let x = TileSet::default().word("x")?[0];
        let mv = Move::from_placements(vec![(Offset::new(5, 7), x)]);
        let err = board.validate(&mv, &dictionary).unwrap_err();
        assert!(matches!(err, MoveError::Precondition(Error::TileReplaceError { x: 5, y: 7 })));
        assert!(!err.is_rule_violation());
        let mv = Move::from_placements(vec![(Offset::new(11, 8), Tile::blank())]);
        let err = board.validate(&mv, &dictionary).unwrap_err();
        assert!(matches!(err, MoveError::Precondition(Error::UnresolvedBlank { .. })));
        Ok(())
    }

    #[test]
    fn test_commit() -> Result<()> {
        let mut board = Board::default();
        let dictionary = Wordlist::from_words(&["cat", "cats"]);
        let mut mv = Move::new(TileSet::default().word("catsx")?);
        for (i, column) in (6..9).enumerate() {
            mv.place(&board, 0, Offset::new(column, 7))?;
            assert_eq!(mv.rack().len(), 4 - i);
        }
        assert_eq!(board.play(&mut mv, &dictionary)?.score(), 5);
        assert!(mv.is_empty());
        assert_eq!(mv.rack().len(), 2);
        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.played().len(), 1);

        mv.place(&board, 0, Offset::new(9, 7))?;
        let play = board.play(&mut mv, &dictionary)?;
        assert_eq!(play.main().text(), "CATS");
        // CAT was absorbed into CATS
        assert_eq!(board.played().len(), 1);
        assert_eq!(board.played()[0].to_string(), "(6, 7) - (9, 7)");

        let stale = play;
        assert!(matches!(board.commit(&stale), Err(Error::TileReplaceError { x: 9, y: 7 })));
        assert_eq!(board.tile_count(), 4);
        Ok(())
    }

    #[test]
    fn test_bonus_not_reapplied() -> Result<()> {
        let mut state = vec!["..............."; 15];
        state[10] = "...........t...";
        let mut board = Board::default().with_state_from_strings(&state)?;
        let dictionary = Wordlist::from_words(&["at", "cat"]);
        // "a" on the 2w square (10, 10): (a1 t1) x 2
        let play = board.play(&mut placed("a", Offset::new(10, 10), Axis::Horizontal)?, &dictionary)?;
        assert_eq!(play.score(), 4);
        // the 2w square is now under a fixed tile: c3 a1 t1
        let play = board.play(&mut placed("c", Offset::new(9, 10), Axis::Horizontal)?, &dictionary)?;
        assert_eq!(play.main().text(), "CAT");
        assert_eq!(play.score(), 5);
        Ok(())
    }

    #[test]
    fn test_stale_play() -> Result<()> {
        let mut board = cat_board()?;
        let dictionary = Wordlist::from_words(&["cats", "scat"]);
        // both validated against CAT, neither knows about the other
        let cats = board.validate(&placed("s", Offset::new(9, 7), Axis::Horizontal)?, &dictionary)?;
        let scat = board.validate(&placed("s", Offset::new(5, 7), Axis::Horizontal)?, &dictionary)?;
        assert_eq!(board.commit(&cats)?, 6);
        let before = board.to_string();
        // (5, 7) is still empty, but the tile would now form SCATS
        assert!(matches!(
            board.commit(&scat),
            Err(Error::StalePlay { column: 5, row: 7 })
        ));
        assert_eq!(board.to_string(), before);
        assert_eq!(board.tile_count(), 4);
        let played: Vec<Option<String>> = board.played().iter().map(|b| b.readable(&board)).collect();
        assert_eq!(played, vec![Some(String::from("CATS"))]);
        Ok(())
    }

    #[test]
    fn test_letter_multiplier() -> Result<()> {
        let mut state = vec!["..............."; 15];
        state[0] = "....a..........";
        state[1] = "....a..........";
        let board = Board::default().with_state_from_strings(&state)?;
        let dictionary = Wordlist::from_words(&["cat", "ax", "aa"]);
        // "c" on the 2l square (3, 0): c3 x 2 + a1 + t1
        let tiles = TileSet::default().word("ct")?;
        let mv = Move::from_placements(vec![(Offset::new(3, 0), tiles[0]), (Offset::new(5, 0), tiles[1])]);
        let play = board.validate(&mv, &dictionary)?;
        assert_eq!(play.main().text(), "CAT");
        assert_eq!(play.score(), 8);
        // "x" on the 3l square (5, 1): a1 + x8 x 3
        let play = board.validate(&placed("x", Offset::new(5, 1), Axis::Horizontal)?, &dictionary)?;
        assert_eq!(play.main().text(), "AX");
        assert_eq!(play.score(), 25);
        Ok(())
    }

    #[test]
    fn test_highest_word_multiplier() -> Result<()> {
        let board = Board::default()
            .with_grid_from_strings(&[
                "3w -- -- -- 2w",
                "-- -- -- -- --",
                "-- -- ss -- --",
                "-- -- -- -- --",
                "-- -- -- -- --",
            ])?
            .with_state_from_strings(&["..a..", ".....", ".....", ".....", "....."])?;
        let tiles = TileSet::default().word("best")?;
        let mv = Move::from_placements(vec![
            (Offset::new(0, 0), tiles[0]),
            (Offset::new(1, 0), tiles[1]),
            (Offset::new(3, 0), tiles[2]),
            (Offset::new(4, 0), tiles[3]),
        ]);
        let play = board.validate(&mv, &Wordlist::from_words(&["beast"]))?;
        assert_eq!(play.main().text(), "BEAST");
        // (b3 e1 a1 s1 t1) x 3; the 2w square does not multiply again
        assert_eq!(play.score(), 21);
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let board = Board::default().with_rules(crate::Rules::default().with_rack_size(3));
        let mv = placed("cat", Offset::new(6, 7), Axis::Horizontal)?;
        let play = board.validate(&mv, &Wordlist::from_words(&["cat"]))?;
        assert!(play.is_bingo());
        assert_eq!(play.score(), 55);
        Ok(())
    }
}
