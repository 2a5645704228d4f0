//! Base64 transcoding core.
//!
//! This crate encodes bytes to base64 text and decodes base64 text back to
//! bytes, per RFC 4648, with support for:
//! - Standard and URL-safe alphabets, auto-detected on decode
//! - Padding preservation or stripping
//! - Fixed-width line wrapping
//! - Strict (canonical-form) or loose input validation
//! - Unicode normalization on the text entry points
//!
//! All operations are pure functions over in-memory buffers; encoding is
//! total, decoding reports malformed input through [`DecodeError`].
//!
//! # Example
//!
//! ```
//! use b64_codec::{decode_to_bytes, encode_bytes, DecodeOptions, EncodeOptions};
//!
//! let encoded = encode_bytes(b"hello", &EncodeOptions::default());
//! assert_eq!(encoded, "aGVsbG8=");
//!
//! let decoded = decode_to_bytes(&encoded, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded, b"hello");
//! ```

mod constants;
mod decode_to_bytes;
mod decode_to_text;
mod encode_bytes;
mod encode_bytes_into;
mod encode_text;
mod encoded_len;
mod error;
mod normalize;
mod options;
mod wrap;

pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use decode_to_bytes::decode_to_bytes;
pub use decode_to_text::decode_to_text;
pub use encode_bytes::encode_bytes;
pub use encode_bytes_into::encode_bytes_into;
pub use encode_text::encode_text;
pub use encoded_len::encoded_len;
pub use error::DecodeError;
pub use options::{
    Alphabet, DecodeOptions, DecodeOutput, Decoded, EncodeOptions, Normalization, Padding,
};
pub use wrap::wrap;
