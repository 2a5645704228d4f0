//! Decode failure kinds.

use thiserror::Error;

/// Error type for base64 decoding.
///
/// Encoding is total and cannot fail on data. Every variant here is produced
/// by [`decode_to_bytes`](crate::decode_to_bytes), except
/// [`DecodeError::InvalidUtf8`], which [`decode_to_text`](crate::decode_to_text)
/// produces when the decoded bytes are not valid UTF-8.
///
/// Positions are byte indexes into the input after whitespace removal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The cleaned input length is 1 mod 4, which no amount of padding can
    /// make decodable.
    #[error("base64 length must not be 1 mod 4")]
    InvalidLength,

    /// Both standard-only (`+`, `/`) and URL-safe-only (`-`, `_`) characters
    /// appear in the same input.
    #[error("mixed standard and url-safe alphabets")]
    MixedAlphabet,

    /// A `=` appears somewhere other than a 1- or 2-character suffix.
    #[error("misplaced padding at position {position}")]
    InvalidPaddingPlacement { position: usize },

    /// A character outside the selected alphabet that is not `=` in a
    /// padding position.
    #[error("invalid character at position {position}")]
    InvalidCharacter { position: usize },

    /// Unpadded input whose canonical re-encoding does not reproduce the
    /// input, i.e. the omitted padding hid non-zero trailing bits.
    #[error("non-canonical unpadded input")]
    NonCanonicalInput,

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
