//! Byte encoder.

use crate::constants::PAD;
use crate::options::{EncodeOptions, Padding};
use crate::wrap::wrap;

/// Encodes a byte slice to a base64 string.
///
/// Total over all inputs, including the empty slice (which yields an empty
/// string). Complete 3-byte groups map to 4 characters through a
/// pre-computed two-character table; a tail of 1 or 2 bytes maps to 2 or 3
/// characters, followed by `==` or `=` when padding is preserved.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
/// * `options` - Alphabet variant, padding policy, and wrap width.
///
/// # Example
///
/// ```
/// use b64_codec::{encode_bytes, EncodeOptions};
///
/// let encoded = encode_bytes(b"hello world", &EncodeOptions::default());
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode_bytes(uint8: &[u8], options: &EncodeOptions) -> String {
    let pair_table = options.variant.pair_table();
    let chars = options.variant.chars();

    let length = uint8.len();
    let mut out = String::with_capacity((length * 4 / 3) + 4);

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let o1 = uint8[i];
        let o2 = uint8[i + 1];
        let o3 = uint8[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        out.push(pair_table[v1][0] as char);
        out.push(pair_table[v1][1] as char);
        out.push(pair_table[v2][0] as char);
        out.push(pair_table[v2][1] as char);
        i += 3;
    }

    if extra_length == 1 {
        let o1 = uint8[base_length];
        let v1 = (o1 as usize) << 4;
        out.push(pair_table[v1][0] as char);
        out.push(pair_table[v1][1] as char);
        if options.padding == Padding::Preserve {
            out.push(PAD);
            out.push(PAD);
        }
    } else if extra_length == 2 {
        let o1 = uint8[base_length];
        let o2 = uint8[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        out.push(pair_table[v1][0] as char);
        out.push(pair_table[v1][1] as char);
        out.push(chars[v2] as char);
        if options.padding == Padding::Preserve {
            out.push(PAD);
        }
    }

    if options.wrap > 0 {
        return wrap(&out, options.wrap);
    }

    out
}
