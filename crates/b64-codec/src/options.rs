//! Encoder and decoder option types.

use crate::constants::{
    ALPHABET_BYTES, ALPHABET_URL_BYTES, PAIR_TABLE, PAIR_TABLE_URL, REVERSE_TABLE,
    REVERSE_TABLE_URL,
};

/// RFC 4648 alphabet variant.
///
/// Both variants share the same 62 alphanumeric symbols and ordering; they
/// differ only in the last two symbols (`+`/`/` vs `-`/`_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Standard alphabet ending in `+` and `/`.
    #[default]
    Standard,
    /// URL-safe alphabet ending in `-` and `_`.
    Url,
}

impl Alphabet {
    pub(crate) fn chars(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => ALPHABET_BYTES,
            Alphabet::Url => ALPHABET_URL_BYTES,
        }
    }

    pub(crate) fn pair_table(self) -> &'static [[u8; 2]; 4096] {
        match self {
            Alphabet::Standard => &PAIR_TABLE,
            Alphabet::Url => &PAIR_TABLE_URL,
        }
    }

    pub(crate) fn reverse_table(self) -> &'static [i16; 256] {
        match self {
            Alphabet::Standard => &REVERSE_TABLE,
            Alphabet::Url => &REVERSE_TABLE_URL,
        }
    }
}

/// Trailing `=` policy for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Emit trailing `=` so the output length is a multiple of 4.
    #[default]
    Preserve,
    /// Omit trailing `=`.
    Strip,
}

/// Unicode normalization form applied to text before encoding or after
/// decoding. [`Normalization::None`] leaves the text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    None,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// Output form produced by [`decode_to_text`](crate::decode_to_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeOutput {
    /// Decode the bytes as UTF-8 text.
    #[default]
    Text,
    /// Return the raw bytes.
    Bytes,
}

/// Options for [`encode_bytes`](crate::encode_bytes) and
/// [`encode_text`](crate::encode_text).
///
/// The default encodes with the standard alphabet, preserves padding, does
/// not wrap, and does not normalize.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub variant: Alphabet,
    pub padding: Padding,
    /// Insert a line break after every `wrap` characters of output; 0
    /// disables wrapping.
    pub wrap: usize,
    /// Normalization applied to string input before UTF-8 conversion.
    /// Only [`encode_text`](crate::encode_text) consults this field.
    pub normalize: Normalization,
}

/// Options for [`decode_to_bytes`](crate::decode_to_bytes) and
/// [`decode_to_text`](crate::decode_to_text).
///
/// The default decodes strictly to text with no normalization.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Only [`decode_to_text`](crate::decode_to_text) consults this field.
    pub output: DecodeOutput,
    /// Normalization applied after UTF-8 conversion when `output` is
    /// [`DecodeOutput::Text`].
    pub normalize: Normalization,
    /// Accept unpadded input without canonical-form verification. Loose mode
    /// only rejects inputs whose cleaned length is 1 mod 4, which no padding
    /// can repair.
    pub loose: bool,
}

/// Result of [`decode_to_text`](crate::decode_to_text), per
/// [`DecodeOptions::output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Bytes(Vec<u8>),
}

impl Decoded {
    /// Returns the text form, if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(s) => Some(s),
            Decoded::Bytes(_) => None,
        }
    }

    /// Consumes the value and returns the underlying bytes of either form.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Text(s) => s.into_bytes(),
            Decoded::Bytes(b) => b,
        }
    }
}
