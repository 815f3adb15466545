//! Bifid fractionation cipher.
//!
//! The Bifid cipher maps every letter to its `(row, col)` cell on a 5x5
//! Polybius square, interleaves the coordinate streams of the whole
//! message, and maps the resulting pairs back to letters. A change in one
//! plaintext letter therefore spreads over several ciphertext letters.
//!
//! The square is fixed: alphabetical reading order with `j` merged into `i`.
//!
//! # Architecture
//!
//! ```text
//! PolybiusSquare (5x5 grid + reverse index, 1-indexed lookups)
//!     ↕ letter_to_numbers / numbers_to_letter
//! BifidCipher    (normalize → coordinate stream → reshape → letters)
//!     ↕ TextCipher
//! caller
//! ```
//!
//! # Examples
//!
//! Encode and decode a message:
//!
//! ```
//! use bifid::BifidCipher;
//!
//! let cipher = BifidCipher::new();
//!
//! let encoded = cipher.encode("Attack at dawn").unwrap();
//! assert_eq!(encoded, "dqbdaxdqpdqh");
//!
//! let decoded = cipher.decode(&encoded).unwrap();
//! assert_eq!(decoded, "attackatdawn");
//! ```
//!
//! Invalid input is reported, not substituted:
//!
//! ```
//! use bifid::{BifidCipher, BifidError};
//!
//! let cipher = BifidCipher::new();
//! assert_eq!(cipher.encode("r2d2"), Err(BifidError::InvalidLetter('2')));
//! assert_eq!(
//!     cipher.numbers_to_letter(6, 1),
//!     Err(BifidError::InvalidCoordinate { row: 6, col: 1 })
//! );
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod config;
pub mod error;
pub mod square;

mod bifid;
pub(crate) mod utils;

pub use bifid::BifidCipher;
pub use cipher::TextCipher;
pub use config::{BifidConfig, DecodeSpaces};
pub use error::BifidError;
pub use square::PolybiusSquare;
