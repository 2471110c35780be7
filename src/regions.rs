//! Candidate play areas around the words on the board.
//!
//! Region enumeration narrows a move search from every empty square down to the
//! line segments a rack of `k` tiles can reach from an existing word. A word of at
//! most `k` new tiles that contains a played word along its axis, or crosses one of
//! its squares, lies inside some region. Plays parallel to a word, or hooked onto
//! one of its ends from the other axis, touch it without crossing it and are not
//! covered. A region is only a hint and does not guarantee that a word fits.
use crate::board::{Board, TileSource};
use crate::coords::{Axis, Boundary, Position};
use crate::lineset::LineSet;
use std::collections::HashSet;
use tracing::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Walk from `from` away from the root span while the budget allows.
/// Occupied squares are passed for free, each empty square costs one tile.
/// Returns the farthest index reached.
fn reach(line: LineSet, dim: usize, from: usize, forward: bool, budget: usize) -> usize {
    let mut current = from;
    let mut budget = budget;
    for _ in 0..dim {
        let next = if forward {
            if current + 1 >= dim {
                break;
            }
            current + 1
        } else {
            match current.checked_sub(1) {
                Some(next) => next,
                None => break,
            }
        };
        if !line.contains(next) {
            if budget == 0 {
                break;
            }
            budget -= 1;
        }
        current = next;
    }
    current
}

impl Board {
    /// Regions on the line through `root` along its axis that contain `root` and
    /// need between 1 and `k` new tiles.
    fn extend_span(&self, root: Boundary, k: usize, regions: &mut Vec<Boundary>) {
        let dim = self.dim();
        let line = self.line(root.axis(), root.fixed());
        let lo = reach(line, dim, root.start.iterable, false, k);
        let hi = reach(line, dim, root.end.iterable, true, k);
        let max_len = self.rules().max_region_length;
        for s in lo..=root.start.iterable {
            // a word can not start right after a tile
            if s > 0 && line.contains(s - 1) {
                continue;
            }
            for e in root.end.iterable..=hi {
                if line.contains(e + 1) {
                    continue;
                }
                let len = e + 1 - s;
                if len > max_len {
                    break;
                }
                let empty = len - line.count_between(s, e);
                if empty >= 1 && empty <= k {
                    regions.push(Boundary {
                        start: root.start.with_iterable(s),
                        end: root.start.with_iterable(e),
                    });
                }
            }
        }
    }

    /// Regions in line with `boundary`, and across each of its squares.
    /// A boundary that is inverted or leaves the board yields nothing.
    fn regions_around(&self, boundary: &Boundary, k: usize) -> Vec<Boundary> {
        let mut regions = Vec::new();
        if !boundary.is_valid(self.dim()) {
            trace!("skip malformed boundary {}", boundary);
            return regions;
        }
        self.extend_span(*boundary, k, &mut regions);
        for offset in boundary.offsets() {
            let p = Position::from_offset(boundary.axis().inverse(), offset);
            self.extend_span(Boundary::single(p), k, &mut regions);
        }
        trace!("{} regions around {}", regions.len(), boundary);
        regions
    }

    /// Compute the candidate regions for a rack of `rack_capacity` tiles around
    /// each of `boundaries`.
    ///
    /// A region runs along the axis of a boundary and contains it, or crosses one
    /// of its squares on the other axis. It needs at least one and at most
    /// `rack_capacity` new tiles, is at most [`Rules::max_region_length`](crate::Rules)
    /// squares long, and does not end next to a tile. Squares holding a tile do not
    /// count against the capacity. Duplicates are removed, the first occurrence
    /// is kept. Boundaries that are inverted or not on the board are skipped.
    ///
    /// Words that only touch a boundary, alongside it or at one of its ends from
    /// the other axis, are not covered by any region.
    ///
    /// ## Examples
    /// ```
    /// use wordboard::Board;
    /// let mut state = vec!["..............."; 15];
    /// state[7] = "......cat......";
    /// let board = Board::default().with_state_from_strings(&state)?;
    /// let regions = board.enumerate_playable_regions(board.played(), 1);
    /// let regions: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
    /// assert!(regions.contains(&String::from("(5, 7) - (8, 7)")));
    /// assert!(regions.contains(&String::from("(7, 6) - (7, 7)")));
    /// # Ok::<(), wordboard::Error>(())
    /// ```
    pub fn enumerate_playable_regions(&self, boundaries: &[Boundary], rack_capacity: usize) -> Vec<Boundary> {
        #[cfg(feature = "rayon")]
        let regions = boundaries
            .par_iter()
            .map(|boundary| self.regions_around(boundary, rack_capacity))
            .collect::<Vec<_>>();
        #[cfg(not(feature = "rayon"))]
        let regions = boundaries
            .iter()
            .map(|boundary| self.regions_around(boundary, rack_capacity))
            .collect::<Vec<_>>();
        dedup(regions.into_iter().flatten())
    }

    /// Candidate regions around the words played on this board.
    pub fn playable_regions(&self, rack_capacity: usize) -> Vec<Boundary> {
        self.enumerate_playable_regions(self.played(), rack_capacity)
    }

    /// Every line segment a move of at most `rack_capacity` tiles could fill.
    ///
    /// On an empty board these are the segments of 2 to `rack_capacity` squares
    /// covering the center. Otherwise a segment must hold at least one tile, and
    /// between 1 and `rack_capacity` empty squares.
    pub fn runs(&self, rack_capacity: usize) -> Vec<Boundary> {
        let dim = self.dim();
        let mut runs = Vec::new();
        if self.has_no_tiles() {
            let center = self.grid().center();
            for &axis in &Axis::BOTH {
                let c = Position::from_offset(axis, center);
                for len in 2..=rack_capacity.min(dim) {
                    let first = c.iterable.saturating_sub(len - 1);
                    for s in first..=c.iterable {
                        if s + len > dim {
                            break;
                        }
                        runs.push(Boundary {
                            start: c.with_iterable(s),
                            end: c.with_iterable(s + len - 1),
                        });
                    }
                }
            }
            return runs;
        }
        for &axis in &Axis::BOTH {
            for fixed in 0..dim {
                let line = self.line(axis, fixed);
                if line.is_empty() {
                    continue;
                }
                let origin = Position {
                    axis,
                    iterable: 0,
                    fixed,
                };
                for s in 0..dim {
                    for e in s..dim {
                        let filled = line.count_between(s, e);
                        let empty = e + 1 - s - filled;
                        if empty > rack_capacity {
                            break;
                        }
                        if filled > 0 && empty > 0 {
                            runs.push(Boundary {
                                start: origin.with_iterable(s),
                                end: origin.with_iterable(e),
                            });
                        }
                    }
                }
            }
        }
        runs
    }
}

fn dedup<I: IntoIterator<Item = Boundary>>(regions: I) -> Vec<Boundary> {
    let mut seen = HashSet::new();
    regions
        .into_iter()
        .filter(|region| seen.insert(*region))
        .collect()
}
