//! Byte decoder.

use std::borrow::Cow;

use crate::constants::PAD;
use crate::encode_bytes::encode_bytes;
use crate::error::DecodeError;
use crate::options::{Alphabet, DecodeOptions, EncodeOptions, Padding};

const PAD_BYTE: u8 = b'=';

/// Decodes a base64 string to bytes.
///
/// Whitespace anywhere in the input is ignored. The alphabet variant is
/// detected from the characters present: `-`/`_` select the URL-safe
/// alphabet, `+`/`/` the standard one, and an input using only the shared
/// alphanumeric core decodes as standard. Unpadded input is accepted in both
/// modes; in strict mode (the default) it must additionally be canonical,
/// i.e. re-encoding the decoded bytes must reproduce the input exactly.
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first validation failure; see
/// the variant docs for the individual rules.
///
/// # Example
///
/// ```
/// use b64_codec::{decode_to_bytes, DecodeOptions};
///
/// let decoded = decode_to_bytes("aGVsbG8=", &DecodeOptions::default()).unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn decode_to_bytes(text: &str, options: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    // Whitespace carries no information in base64; drop it before any
    // validation so wrapped or indented input decodes like its compact form.
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    let variant = detect_alphabet(cleaned.as_bytes())?;
    decode_cleaned(&cleaned, variant, options.loose)
}

/// Scans for variant-specific characters. Characters from the shared 62-symbol
/// core imply nothing; absent any variant-specific character the input is
/// treated as standard.
fn detect_alphabet(bytes: &[u8]) -> Result<Alphabet, DecodeError> {
    let mut standard = false;
    let mut url = false;
    for &b in bytes {
        match b {
            b'+' | b'/' => standard = true,
            b'-' | b'_' => url = true,
            _ => {}
        }
    }
    match (standard, url) {
        (true, true) => Err(DecodeError::MixedAlphabet),
        (false, true) => Ok(Alphabet::Url),
        _ => Ok(Alphabet::Standard),
    }
}

/// Strict-mode rule for inputs that are already a multiple of 4: `=` may only
/// form a suffix of length 1 or 2.
fn check_padding_placement(bytes: &[u8]) -> Result<(), DecodeError> {
    if let Some(first) = bytes.iter().position(|&b| b == PAD_BYTE) {
        let suffix = &bytes[first..];
        if suffix.len() > 2 || suffix.iter().any(|&b| b != PAD_BYTE) {
            return Err(DecodeError::InvalidPaddingPlacement { position: first });
        }
    }
    Ok(())
}

/// Looks up the 6-bit value of the character at `index`. A `=` in the third
/// or fourth position of a quartet stands for omitted bits and contributes 0.
fn sextet(
    table: &[i16; 256],
    bytes: &[u8],
    index: usize,
    quartet_pos: usize,
) -> Result<u8, DecodeError> {
    let b = bytes[index];
    if quartet_pos >= 2 && b == PAD_BYTE {
        return Ok(0);
    }
    let value = table[b as usize];
    if value < 0 {
        return Err(DecodeError::InvalidCharacter { position: index });
    }
    Ok(value as u8)
}

fn decode_cleaned(cleaned: &str, variant: Alphabet, loose: bool) -> Result<Vec<u8>, DecodeError> {
    let length = cleaned.len();
    let table = variant.reverse_table();

    // Bring the length to a multiple of 4, remembering whether padding had to
    // be synthesized: strict mode must then verify the input was canonical.
    let (padded, synthesized): (Cow<'_, str>, bool) = match length % 4 {
        1 => return Err(DecodeError::InvalidLength),
        0 => {
            if !loose {
                check_padding_placement(cleaned.as_bytes())?;
            }
            (Cow::Borrowed(cleaned), false)
        }
        rem => {
            let mut owned = String::with_capacity(length + 4 - rem);
            owned.push_str(cleaned);
            for _ in 0..(4 - rem) {
                owned.push(PAD);
            }
            (Cow::Owned(owned), true)
        }
    };

    let bytes = padded.as_bytes();
    let padded_length = bytes.len();

    let mut padding = 0;
    if bytes[padded_length - 1] == PAD_BYTE {
        padding = 1;
        if padded_length >= 2 && bytes[padded_length - 2] == PAD_BYTE {
            padding = 2;
        }
    }

    // The final quartet yields 3 - padding bytes; size the buffer up front so
    // the decode loop can never overrun it.
    let buffer_length = (padded_length >> 2) * 3 - padding;
    let main_length = if padding > 0 {
        padded_length - 4
    } else {
        padded_length
    };

    let mut buf = vec![0u8; buffer_length];
    let mut i = 0;
    let mut j = 0;

    while i < main_length {
        let s0 = sextet(table, bytes, i, 0)?;
        let s1 = sextet(table, bytes, i + 1, 1)?;
        let s2 = sextet(table, bytes, i + 2, 2)?;
        let s3 = sextet(table, bytes, i + 3, 3)?;

        buf[j] = (s0 << 2) | (s1 >> 4);
        buf[j + 1] = (s1 << 4) | (s2 >> 2);
        buf[j + 2] = (s2 << 6) | s3;
        j += 3;
        i += 4;
    }

    if padding == 2 {
        let s0 = sextet(table, bytes, i, 0)?;
        let s1 = sextet(table, bytes, i + 1, 1)?;
        buf[j] = (s0 << 2) | (s1 >> 4);
    } else if padding == 1 {
        let s0 = sextet(table, bytes, i, 0)?;
        let s1 = sextet(table, bytes, i + 1, 1)?;
        let s2 = sextet(table, bytes, i + 2, 2)?;
        buf[j] = (s0 << 2) | (s1 >> 4);
        buf[j + 1] = (s1 << 4) | (s2 >> 2);
    }

    // Omitted padding leaves the low bits of the final quartet unchecked: an
    // input like "YR" decodes to the same byte as "YQ". Strict mode closes
    // that ambiguity by requiring the round trip to reproduce the input.
    if !loose && synthesized {
        let reencoded = encode_bytes(
            &buf,
            &EncodeOptions {
                variant,
                padding: Padding::Preserve,
                ..Default::default()
            },
        );
        if reencoded.trim_end_matches(PAD) != cleaned {
            return Err(DecodeError::NonCanonicalInput);
        }
    }

    Ok(buf)
}
