//! Round-trip property tests.

use b64_codec::{
    decode_to_bytes, encode_bytes, Alphabet, DecodeOptions, EncodeOptions, Padding,
};
use proptest::prelude::*;

fn bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

proptest! {
    #[test]
    fn standard_padded(data in bytes()) {
        let encoded = encode_bytes(&data, &EncodeOptions::default());
        let decoded = decode_to_bytes(&encoded, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn url_padded(data in bytes()) {
        let opts = EncodeOptions { variant: Alphabet::Url, ..Default::default() };
        let encoded = encode_bytes(&data, &opts);
        let decoded = decode_to_bytes(&encoded, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn standard_stripped_strict(data in bytes()) {
        // Strict decode accepts unpadded input as long as it is canonical,
        // which the encoder's own output always is.
        let opts = EncodeOptions { padding: Padding::Strip, ..Default::default() };
        let encoded = encode_bytes(&data, &opts);
        let decoded = decode_to_bytes(&encoded, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn url_stripped_loose(data in bytes()) {
        let opts = EncodeOptions {
            variant: Alphabet::Url,
            padding: Padding::Strip,
            ..Default::default()
        };
        let encoded = encode_bytes(&data, &opts);
        let loose = DecodeOptions { loose: true, ..Default::default() };
        let decoded = decode_to_bytes(&encoded, &loose).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn wrapped_output_round_trips(data in bytes(), width in 1usize..100) {
        let opts = EncodeOptions { wrap: width, ..Default::default() };
        let encoded = encode_bytes(&data, &opts);
        let decoded = decode_to_bytes(&encoded, &DecodeOptions::default()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn encoding_is_deterministic(data in bytes()) {
        let opts = EncodeOptions::default();
        prop_assert_eq!(encode_bytes(&data, &opts), encode_bytes(&data, &opts));
    }
}
