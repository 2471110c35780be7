use bitintr::{Bzhi, Popcnt};
use std::fmt;
use std::iter::FromIterator;

/// Widest board line a `LineSet` can hold.
pub const MAX_DIM: usize = 32;

/// A bitset of the occupied indices along one board line
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSet(u32);

impl LineSet {
    pub fn new() -> LineSet {
        LineSet(0)
    }

    pub fn contains(&self, i: usize) -> bool {
        i < MAX_DIM && self.0 & (1 << i) != 0
    }

    pub fn insert(&mut self, i: usize) -> bool {
        assert!(i < MAX_DIM);
        let r = self.contains(i);
        self.0 |= 1 << i;
        r
    }

    pub fn len(&self) -> usize {
        self.0.popcnt() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLineSet {
        IteratorLineSet::new(self.0)
    }

    /// Return the number of occupied indices in `start..=end`.
    pub fn count_between(&self, start: usize, end: usize) -> usize {
        if start > end || start >= MAX_DIM {
            return 0;
        }
        let upto = if end + 1 >= MAX_DIM {
            self.0
        } else {
            self.0.bzhi(end as u32 + 1)
        };
        (upto >> start).popcnt() as usize
    }

    /// Check if every index in `start..=end` is occupied.
    pub fn is_full_between(&self, start: usize, end: usize) -> bool {
        start <= end && self.count_between(start, end) == end + 1 - start
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLineSet {
    count: usize,
    value: u32,
}

impl IteratorLineSet {
    pub fn new(value: u32) -> IteratorLineSet {
        IteratorLineSet { count: 0, value }
    }
}

impl Iterator for IteratorLineSet {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        while self.count < MAX_DIM {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i);
            }
        }
        None
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut c = LineSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}
