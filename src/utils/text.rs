//! Message normalization applied before square lookups.

use crate::config::DecodeSpaces;

/// Normalizes plaintext for encoding.
///
/// Lowercases, removes every `' '` and folds `j` into `i`. Other whitespace
/// and non-letters are left in place for the square lookup to reject.
pub fn normalize_plaintext(message: &str) -> Vec<char> {
    message
        .to_lowercase()
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| if c == 'j' { 'i' } else { c })
        .collect()
}

/// Normalizes ciphertext for decoding.
///
/// Lowercases and, under [`DecodeSpaces::Strip`], removes every `' '`.
/// No `j` folding: encoded output never contains `j`.
pub fn normalize_ciphertext(message: &str, spaces: DecodeSpaces) -> Vec<char> {
    let lowered = message.to_lowercase();
    match spaces {
        DecodeSpaces::Strip => lowered.chars().filter(|&c| c != ' ').collect(),
        DecodeSpaces::Reject => lowered.chars().collect(),
    }
}
