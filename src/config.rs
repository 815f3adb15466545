//! Cipher configuration.

/// How [`BifidCipher::decode`](crate::BifidCipher::decode) treats spaces in
/// ciphertext.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeSpaces {
    /// Remove spaces before decoding, the same way encode does.
    #[default]
    Strip,
    /// Keep spaces, so any space fails with
    /// [`BifidError::InvalidLetter`](crate::error::BifidError::InvalidLetter).
    ///
    /// Matches the historical decoder, which accepted spaces on encode but
    /// not on decode.
    Reject,
}

/// Options for a [`BifidCipher`](crate::BifidCipher).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BifidConfig {
    /// Space policy applied to ciphertext.
    pub decode_spaces: DecodeSpaces,
}

impl BifidConfig {
    /// Configuration reproducing the historical encode/decode asymmetry.
    pub fn legacy() -> Self {
        BifidConfig {
            decode_spaces: DecodeSpaces::Reject,
        }
    }
}
