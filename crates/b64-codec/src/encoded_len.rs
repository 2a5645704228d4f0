//! Encoded-output length arithmetic.

use crate::options::{EncodeOptions, Padding};

/// Returns the exact length of the text produced by
/// [`encode_bytes`](crate::encode_bytes) for an input of `input_len` bytes,
/// accounting for the padding policy and wrap width of `options`.
///
/// # Example
///
/// ```
/// use b64_codec::{encode_bytes, encoded_len, EncodeOptions};
///
/// let opts = EncodeOptions::default();
/// assert_eq!(encoded_len(5, &opts), encode_bytes(b"hello", &opts).len());
/// ```
pub fn encoded_len(input_len: usize, options: &EncodeOptions) -> usize {
    let extra = input_len % 3;
    let mut len = (input_len / 3) * 4;
    len += match (extra, options.padding) {
        (0, _) => 0,
        (_, Padding::Preserve) => 4,
        (1, Padding::Strip) => 2,
        (_, Padding::Strip) => 3,
    };
    if options.wrap > 0 && len > 0 {
        len += (len - 1) / options.wrap;
    }
    len
}
