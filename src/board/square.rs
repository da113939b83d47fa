use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 8;

/// Bounds predicate checked before any board access built from offsets.
#[inline]
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// A board square. Row 0 is White's back rank, column 0 is the a-file.
/// Ordering is row-major, which is the scan order the search relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square ({row}, {col}) off board");
        Self { row, col }
    }

    /// Square at a signed coordinate, or None when it falls off the board.
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if in_bounds(row, col) { Some(Self { row: row as usize, col: col as usize }) } else { None }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::checked(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 { return Err(ParseError::Square(s.to_string())); }
        let file = b[0].to_ascii_lowercase();
        let rank = b[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::Square(s.to_string()));
        }
        Ok(Position::new((rank - b'1') as usize, (file - b'a') as usize))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() { return Err(ParseError::Move(s.to_string())); }
        let from = s[0..2].parse().map_err(|_| ParseError::Move(s.to_string()))?;
        let to = s[2..4].parse().map_err(|_| ParseError::Move(s.to_string()))?;
        Ok(Move { from, to })
    }
}
