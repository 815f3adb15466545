//! PolybiusSquare: fixed 5x5 letter grid with `i`/`j` merged.
//!
//! The grid holds the 25 remaining Latin letters in alphabetical reading
//! order. Storage is 0-indexed; every public lookup is 1-indexed to match
//! the traditional row/column numbering of the cipher.

use crate::error::BifidError;

/// Grid rows in reading order. `j` shares the `i` cell and is never stored.
const GRID: [[char; PolybiusSquare::SIZE]; PolybiusSquare::SIZE] = [
    ['a', 'b', 'c', 'd', 'e'],
    ['f', 'g', 'h', 'i', 'k'],
    ['l', 'm', 'n', 'o', 'p'],
    ['q', 'r', 's', 't', 'u'],
    ['v', 'w', 'x', 'y', 'z'],
];

/// Immutable 5x5 Polybius square with an O(1) reverse index.
///
/// The reverse index maps `letter - 'a'` to the 0-indexed cell of that
/// letter. It is built once in [`new`](Self::new) and never mutated, so a
/// square can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    grid: [[char; Self::SIZE]; Self::SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl Default for PolybiusSquare {
    fn default() -> Self {
        Self::new()
    }
}

impl PolybiusSquare {
    /// Number of rows and columns.
    pub const SIZE: usize = 5;

    /// Builds the standard alphabetical square.
    pub fn new() -> Self {
        let mut positions = [None; 26];
        for (row, letters) in GRID.iter().enumerate() {
            for (col, &letter) in letters.iter().enumerate() {
                positions[(letter as u8 - b'a') as usize] = Some((row, col));
            }
        }
        PolybiusSquare {
            grid: GRID,
            positions,
        }
    }

    /// Returns the 1-indexed `(row, col)` cell holding `letter`.
    ///
    /// `letter` must already be lowercase and folded (`j` -> `i`).
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidLetter`] if `letter` is not one of the
    /// 25 letters of the square.
    pub fn letter_to_numbers(&self, letter: char) -> Result<(usize, usize), BifidError> {
        if !letter.is_ascii_lowercase() {
            return Err(BifidError::InvalidLetter(letter));
        }
        self.positions[(letter as u8 - b'a') as usize]
            .map(|(row, col)| (row + 1, col + 1))
            .ok_or(BifidError::InvalidLetter(letter))
    }

    /// Returns the letter at the 1-indexed cell `(row, col)`.
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidCoordinate`] if either axis is outside
    /// `1..=5`.
    pub fn numbers_to_letter(&self, row: usize, col: usize) -> Result<char, BifidError> {
        let range = 1..=Self::SIZE;
        if !range.contains(&row) || !range.contains(&col) {
            return Err(BifidError::InvalidCoordinate { row, col });
        }
        Ok(self.grid[row - 1][col - 1])
    }

    /// Iterates the 25 letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flat_map(|row| row.iter().copied())
    }
}
