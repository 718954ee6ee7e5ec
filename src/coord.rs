//! Board positions and the parser for user-facing coordinates like `B3`.

use core::fmt;

use crate::common::CoordError;

/// Zero-indexed (column, row) pair. Column `0` is `A`, row `0` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Parse `raw` against a board of `board_size`. See [`parse`].
    pub fn parse(raw: &str, board_size: usize) -> Result<Self, CoordError> {
        parse(raw, board_size)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row + 1)
    }
}

/// Letter shown for a zero-indexed column.
pub fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Convert a coordinate string into an in-bounds position.
///
/// Leading and trailing whitespace is ignored and letters are case-folded.
/// What remains must be exactly one column letter followed by one row digit.
pub fn parse(raw: &str, board_size: usize) -> Result<Position, CoordError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars().map(|c| c.to_ascii_uppercase());
    let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None) => (letter, digit),
        _ => return Err(CoordError::BadLength),
    };

    if !letter.is_ascii_uppercase() {
        return Err(CoordError::BadColumn);
    }
    let col = (letter as u8 - b'A') as usize;
    if col >= board_size {
        return Err(CoordError::BadColumn);
    }

    let row = digit.to_digit(10).ok_or(CoordError::BadRow)? as usize;
    if row < 1 || row > board_size {
        return Err(CoordError::BadRow);
    }

    Ok(Position::new(col, row - 1))
}
