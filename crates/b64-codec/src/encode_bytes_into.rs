//! Buffer-writing byte encoder.

use crate::options::{EncodeOptions, Padding};

const PAD_BYTE: u8 = b'=';

/// Encodes a byte slice directly into a caller-provided byte buffer.
///
/// Writes base64 ASCII into `dest` and returns the number of bytes written.
/// The padding policy of `options` applies; the wrap width does not (line
/// wrapping is a text-output concern, see [`wrap`](crate::wrap)).
///
/// Size `dest` with [`encoded_len`](crate::encoded_len); a too-small
/// destination panics on the out-of-bounds write like any slice indexing.
///
/// # Example
///
/// ```
/// use b64_codec::{encode_bytes_into, encoded_len, EncodeOptions};
///
/// let opts = EncodeOptions::default();
/// let mut dest = vec![0u8; encoded_len(5, &opts)];
/// let written = encode_bytes_into(b"hello", &mut dest, &opts);
/// assert_eq!(&dest[..written], b"aGVsbG8=");
/// ```
pub fn encode_bytes_into(uint8: &[u8], dest: &mut [u8], options: &EncodeOptions) -> usize {
    let pair_table = options.variant.pair_table();
    let chars = options.variant.chars();
    let add_padding = options.padding == Padding::Preserve;

    let length = uint8.len();
    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut offset = 0;
    let mut i = 0;
    while i < base_length {
        let o1 = uint8[i];
        let o2 = uint8[i + 1];
        let o3 = uint8[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        dest[offset] = pair_table[v1][0];
        dest[offset + 1] = pair_table[v1][1];
        dest[offset + 2] = pair_table[v2][0];
        dest[offset + 3] = pair_table[v2][1];
        offset += 4;
        i += 3;
    }

    if extra_length == 1 {
        let o1 = uint8[base_length];
        let v1 = (o1 as usize) << 4;
        dest[offset] = pair_table[v1][0];
        dest[offset + 1] = pair_table[v1][1];
        offset += 2;
        if add_padding {
            dest[offset] = PAD_BYTE;
            dest[offset + 1] = PAD_BYTE;
            offset += 2;
        }
    } else if extra_length == 2 {
        let o1 = uint8[base_length];
        let o2 = uint8[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        dest[offset] = pair_table[v1][0];
        dest[offset + 1] = pair_table[v1][1];
        dest[offset + 2] = chars[v2];
        offset += 3;
        if add_padding {
            dest[offset] = PAD_BYTE;
            offset += 1;
        }
    }

    offset
}
