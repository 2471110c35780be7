use crate::coords::Offset;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that indicate a bad configuration or a caller bug.
pub enum Error {
    /// Word extraction was started on a square without a tile
    #[error("Extraction started on empty square at x={column}, y={row}")]
    EmptyStart { column: usize, row: usize },

    /// A coordinate outside the board was used
    #[error("Offset x={column}, y={row} is outside the board")]
    OutOfRange { column: usize, row: usize },

    /// Board dimension must be in 1..=32
    #[error("Invalid board dimension {0} (expect 1..=32)")]
    InvalidDimension(usize),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect {1})")]
    InvalidRowCount(usize, usize),

    /// Parsing a row on the board needs N cells
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Token can not be encoded as a tile
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at x:{x}, y:{y}")]
    TileReplaceError { x: usize, y: usize },

    /// The board changed since the play was validated and its tiles now form other words
    #[error("Play starting at x={column}, y={row} no longer forms the validated words")]
    StalePlay { column: usize, row: usize },

    /// No pending tile at this square
    #[error("No pending tile at x:{x}, y:{y}")]
    NotPending { x: usize, y: usize },

    /// Rack has no tile at this index
    #[error("Rack index {0} out of range")]
    RackIndexError(usize),

    /// A blank was placed without assigning a letter
    #[error("Blank tile at x:{x}, y:{y} has no letter assigned")]
    UnresolvedBlank { x: usize, y: usize },

    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordlistDeserializeError(String),
}

impl Error {
    pub(crate) fn out_of_range(offset: Offset) -> Error {
        Error::OutOfRange {
            column: offset.column,
            row: offset.row,
        }
    }
}

/// Reasons a proposed move is rejected.
///
/// Every variant leaves the board unchanged. Rule violations are caused by the
/// player's placement; [`MoveError::Precondition`] wraps an [`Error`] that points
/// at a bug in the caller.
#[derive(Error, Debug)]
pub enum MoveError {
    /// The move places no tiles
    #[error("No tiles placed")]
    NoTiles,

    /// Tiles are not on one line, or leave a gap in their span
    #[error("Tiles are not placed in one unbroken line: {0:?}")]
    Arrangement(Vec<Offset>),

    /// The first word must cover the center square
    #[error("First word must cover the center square {center}")]
    CenterRuleViolation { center: Offset },

    /// A later move must touch a tile already on the board
    #[error("Tiles do not connect to a word on the board: {0:?}")]
    DisconnectedPlacement(Vec<Offset>),

    /// A formed word is not in the dictionary
    #[error("Word \"{word}\" at {start} is not defined")]
    UndefinedWord { word: String, start: Offset },

    /// The caller violated a precondition
    #[error(transparent)]
    Precondition(#[from] Error),
}

impl MoveError {
    /// True for rejections caused by the player's placement, false for caller bugs.
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, MoveError::Precondition(_))
    }
}
