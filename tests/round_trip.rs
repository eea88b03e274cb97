//! Decode/encode agreement with `serde_json` over generated documents.

use ordjson::{decode, encode, encode_with_options, EncodeOptions, Value};
use serde_json::{json, Map, Value as SerdeValue};

/// Small deterministic generator (64-bit LCG) so failures are reproducible.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

const ALPHABET: &[&str] = &[
    "a", "b", "z", "0", " ", "\"", "\\", "/", "\n", "\t", "\u{1}", "é", "你", "😀",
];

fn random_string(rng: &mut Rng) -> String {
    (0..rng.below(8)).map(|_| ALPHABET[rng.below(ALPHABET.len() as u64) as usize]).collect()
}

fn random_value(rng: &mut Rng, depth: u32) -> SerdeValue {
    let kind = if depth >= 4 { rng.below(4) } else { rng.below(6) };
    match kind {
        0 => SerdeValue::Null,
        1 => SerdeValue::Bool(rng.below(2) == 1),
        2 => {
            let n = rng.below(2_000_000) as i64 - 1_000_000;
            if rng.below(2) == 0 {
                json!(n)
            } else {
                json!(n as f64 / 64.0)
            }
        }
        3 => SerdeValue::String(random_string(rng)),
        4 => (0..rng.below(5))
            .map(|_| random_value(rng, depth + 1))
            .collect(),
        _ => {
            let mut map = Map::new();
            for _ in 0..rng.below(6) {
                map.insert(random_string(rng), random_value(rng, depth + 1));
            }
            SerdeValue::Object(map)
        }
    }
}

/// Structural equality between our value and serde_json's, comparing all
/// numbers as `f64`.
fn same(ours: &Value, theirs: &SerdeValue) -> bool {
    match (ours, theirs) {
        (Value::Null, SerdeValue::Null) => true,
        (Value::Bool(a), SerdeValue::Bool(b)) => a == b,
        (Value::Number(a), SerdeValue::Number(b)) => Some(*a) == b.as_f64(),
        (Value::String(a), SerdeValue::String(b)) => a.as_slice() == b.as_bytes(),
        (Value::Array(a), SerdeValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same(x, y))
        }
        (Value::Object(a), SerdeValue::Object(b)) => {
            a.len() == b.len()
                && b.iter().all(|(key, value)| {
                    a.get(key.as_str())
                        .is_some_and(|pair| same(&pair.value, value))
                })
        }
        _ => false,
    }
}

#[test]
fn test_decode_agrees_with_serde_json() {
    let mut rng = Rng(0x5eed);
    for _ in 0..300 {
        let reference = random_value(&mut rng, 0);
        let text = serde_json::to_string(&reference).unwrap();
        let ours = decode(text.as_bytes()).unwrap();
        assert!(same(&ours, &reference), "mismatch decoding {text}");
    }
}

#[test]
fn test_encoded_output_decodes_in_serde_json() {
    let mut rng = Rng(42);
    for _ in 0..300 {
        let reference = random_value(&mut rng, 0);
        let ours = decode(serde_json::to_string(&reference).unwrap().as_bytes()).unwrap();

        let mut out = Vec::new();
        encode_with_options(&mut out, &ours, EncodeOptions::shortest()).unwrap();
        let reparsed: SerdeValue = serde_json::from_slice(&out).unwrap();
        assert!(
            same(&ours, &reparsed),
            "mismatch re-reading {}",
            String::from_utf8_lossy(&out)
        );
    }
}

#[test]
fn test_decode_encode_decode_is_identity() {
    let mut rng = Rng(7);
    for _ in 0..300 {
        let text = serde_json::to_string(&random_value(&mut rng, 0)).unwrap();
        let first = decode(text.as_bytes()).unwrap();

        // Values are multiples of 1/64, so six fractional digits are exact.
        let mut out = Vec::new();
        encode(&mut out, &first).unwrap();
        let second = decode(&out).unwrap();
        assert_eq!(first, second);

        let mut again = Vec::new();
        encode(&mut again, &second).unwrap();
        assert_eq!(out, again);
    }
}

#[test]
fn test_serde_rejects_what_we_reject() {
    for input in ["[1,2", r#"{"a" 1}"#, r#"["\x"]"#, "{,}", "[1 2]", "nul"] {
        assert!(decode(input.as_bytes()).is_err(), "{input}");
        assert!(serde_json::from_str::<SerdeValue>(input).is_err(), "{input}");
    }
}
