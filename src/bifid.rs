//! BifidCipher: fractionation cipher over a Polybius square.
//!
//! Each letter is split into its `(row, col)` coordinates. Encoding lays
//! all rows of the message down first and all columns after them, then
//! reads the stream back two values at a time. Decoding performs the
//! inverse reshape.

use log::{debug, trace};

use crate::cipher::TextCipher;
use crate::config::BifidConfig;
use crate::error::BifidError;
use crate::square::PolybiusSquare;
use crate::utils::text::{normalize_ciphertext, normalize_plaintext};

/// Bifid cipher bound to the standard alphabetical square.
///
/// The square is built once in the constructor and only read afterwards,
/// so a single `BifidCipher` can be shared across threads by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BifidCipher {
    square: PolybiusSquare,
    config: BifidConfig,
}

impl Default for BifidCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl BifidCipher {
    /// Creates a cipher with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bifid::BifidCipher;
    ///
    /// let cipher = BifidCipher::new();
    /// assert_eq!(cipher.encode("hello").unwrap(), "fnnvd");
    /// ```
    pub fn new() -> Self {
        Self::with_config(BifidConfig::default())
    }

    /// Creates a cipher with an explicit configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bifid::{BifidCipher, BifidConfig};
    ///
    /// let cipher = BifidCipher::with_config(BifidConfig::legacy());
    /// assert!(cipher.decode("fn nvd").is_err());
    /// ```
    pub fn with_config(config: BifidConfig) -> Self {
        BifidCipher {
            square: PolybiusSquare::new(),
            config,
        }
    }

    /// Returns the square this cipher looks letters up in.
    pub fn square(&self) -> &PolybiusSquare {
        &self.square
    }

    /// Returns the active configuration.
    pub fn config(&self) -> BifidConfig {
        self.config
    }

    /// Returns the 1-indexed `(row, col)` of `letter` in the square.
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidLetter`] for `j` and for anything that
    /// is not a lowercase ASCII letter.
    pub fn letter_to_numbers(&self, letter: char) -> Result<(usize, usize), BifidError> {
        self.square.letter_to_numbers(letter)
    }

    /// Returns the letter at the 1-indexed `(row, col)`.
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidCoordinate`] if either axis is outside
    /// `1..=5`.
    pub fn numbers_to_letter(&self, row: usize, col: usize) -> Result<char, BifidError> {
        self.square.numbers_to_letter(row, col)
    }

    /// Encodes `message`.
    ///
    /// The message is lowercased, stripped of spaces and `j` is folded into
    /// `i`. The output has one letter per normalized input letter.
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidLetter`] for the first character left
    /// after normalization that is not in the square.
    pub fn encode(&self, message: &str) -> Result<String, BifidError> {
        let letters = normalize_plaintext(message);
        trace!("encode: {} letters", letters.len());
        let coords = self.coordinates(&letters)?;

        // Row-major flatten of the 2xN matrix: all rows, then all columns.
        let mut stream = Vec::with_capacity(2 * coords.len());
        stream.extend(coords.iter().map(|&(row, _)| row));
        stream.extend(coords.iter().map(|&(_, col)| col));

        stream
            .chunks_exact(2)
            .map(|pair| self.square.numbers_to_letter(pair[0], pair[1]))
            .collect()
    }

    /// Decodes `message`.
    ///
    /// The message is lowercased; spaces are handled according to
    /// [`BifidConfig::decode_spaces`].
    ///
    /// # Errors
    /// Returns [`BifidError::InvalidLetter`] for the first character that is
    /// not in the square, including `j`.
    pub fn decode(&self, message: &str) -> Result<String, BifidError> {
        let letters = normalize_ciphertext(message, self.config.decode_spaces);
        trace!("decode: {} letters", letters.len());
        let coords = self.coordinates(&letters)?;

        let n = coords.len();
        let stream: Vec<usize> = coords.iter().flat_map(|&(row, col)| [row, col]).collect();

        // First half of the stream holds the row of every letter, second half
        // the columns.
        (0..n)
            .map(|k| self.square.numbers_to_letter(stream[k], stream[n + k]))
            .collect()
    }

    /// Looks up every letter, stopping at the first one outside the square.
    fn coordinates(&self, letters: &[char]) -> Result<Vec<(usize, usize)>, BifidError> {
        letters
            .iter()
            .map(|&letter| {
                self.square
                    .letter_to_numbers(letter)
                    .inspect_err(|err| debug!("rejected input: {}", err))
            })
            .collect()
    }
}

impl TextCipher for BifidCipher {
    fn encode(&self, message: &str) -> Result<String, BifidError> {
        BifidCipher::encode(self, message)
    }

    fn decode(&self, message: &str) -> Result<String, BifidError> {
        BifidCipher::decode(self, message)
    }
}
