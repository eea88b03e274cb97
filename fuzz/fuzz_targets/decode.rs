#![no_main]
use libfuzzer_sys::fuzz_target;

use ordjson::{decode, encode_with_options, EncodeError, EncodeOptions};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    let Ok(value) = decode(data) else {
        return;
    };

    // Anything that decodes re-encodes, unless an overflowing number
    // decoded to infinity, and the encoding decodes back to an equal value.
    let mut out = Vec::new();
    match encode_with_options(&mut out, &value, EncodeOptions::shortest()) {
        Ok(()) => {}
        Err(EncodeError::NonFiniteNumber(n)) if n.is_infinite() => return,
        Err(e) => panic!("decoded value failed to encode: {e}"),
    }
    let again = decode(&out).expect("encoder output must decode");
    assert_eq!(again, value);
});
