//! TextCipher trait for string-to-string ciphers.

use crate::error::BifidError;

/// A reversible transformation between plaintext and ciphertext strings.
///
/// Implementations are pure: the same input always yields the same output,
/// and `&self` access makes a shared instance usable from many threads.
pub trait TextCipher {
    /// Encodes `message` into ciphertext.
    fn encode(&self, message: &str) -> Result<String, BifidError>;

    /// Decodes `message` back into plaintext.
    fn decode(&self, message: &str) -> Result<String, BifidError>;
}
