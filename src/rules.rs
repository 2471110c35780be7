use crate::grid::Bonus;

/// Scoring and search parameters of a game.
///
/// ## Examples
/// ```
/// use wordboard::Rules;
/// let rules = Rules::default().with_bingo_bonus(40);
/// assert_eq!(rules.bingo_bonus, 40);
/// assert_eq!(rules.rack_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Points added when a move uses a full rack
    pub bingo_bonus: u32,
    /// Number of tiles on a full rack
    pub rack_size: usize,
    /// Longest candidate region emitted by region enumeration
    pub max_region_length: usize,
    /// Word multiplier of the center square
    pub center_word_multiplier: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            bingo_bonus: 50,
            rack_size: 7,
            max_region_length: 11,
            center_word_multiplier: 1,
        }
    }
}

impl Rules {
    pub fn with_bingo_bonus(mut self, bonus: u32) -> Rules {
        self.bingo_bonus = bonus;
        self
    }

    pub fn with_rack_size(mut self, size: usize) -> Rules {
        self.rack_size = size;
        self
    }

    pub fn with_max_region_length(mut self, len: usize) -> Rules {
        self.max_region_length = len;
        self
    }

    pub fn with_center_word_multiplier(mut self, n: u32) -> Rules {
        self.center_word_multiplier = n;
        self
    }

    /// Word multiplier for a new tile placed on a square with `bonus`.
    pub fn word_multiplier(&self, bonus: Bonus) -> u32 {
        match bonus {
            Bonus::Wordx2 => 2,
            Bonus::Wordx3 => 3,
            Bonus::Center => self.center_word_multiplier,
            _ => 1,
        }
    }
}
