// Forward encoding: linearize a JSON tree into a flat uint256 word sequence.
use num_bigint::{BigUint, Sign};
use serde_json::Value;

use crate::core::classify::{classify, parse_decimal, Category};
use crate::core::error::{Error, ErrorKind};
use crate::core::word::{hash_modulus, Word};

/// Encode a JSON tree as a flat word sequence.
///
/// Traversal is depth-first pre-order: object values in key-insertion order
/// (keys themselves are never encoded), array elements in index order. Each
/// leaf contributes 0, 1, or 2 words per its [`Category`].
pub fn encode(tree: &Value) -> Result<Vec<Word>, Error> {
    let mut words = Vec::new();
    encode_node(tree, &mut words)?;
    Ok(words)
}

fn encode_node(node: &Value, words: &mut Vec<Word>) -> Result<(), Error> {
    match node {
        Value::Object(map) => {
            for value in map.values() {
                encode_node(value, words)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items {
                encode_node(item, words)?;
            }
            Ok(())
        }
        leaf => encode_leaf(leaf, words),
    }
}

fn encode_leaf(leaf: &Value, words: &mut Vec<Word>) -> Result<(), Error> {
    match (classify(leaf), leaf) {
        (Category::HexWord, Value::String(text)) => {
            let word = BigUint::parse_bytes(text[2..].as_bytes(), 16).ok_or_else(|| {
                Error::new(ErrorKind::Parse)
                    .with_message("hex word contains non-hex digits")
                    .with_leaf(text)
            })?;
            words.push(word);
        }
        (Category::Base58Hash, Value::String(text)) => {
            let bytes = bs58::decode(text).into_vec().map_err(|err| {
                Error::new(ErrorKind::Parse)
                    .with_message("hash is not valid base-58")
                    .with_leaf(text)
                    .with_source(err)
            })?;
            words.push(BigUint::from_bytes_be(&bytes) % hash_modulus());
        }
        (Category::DecimalInt, Value::String(text)) => {
            // The classifier already proved this parses; a failed re-parse
            // falls through like an unclassified leaf.
            if let Some(num) = parse_decimal(text) {
                let sign = u8::from(num.sign() == Sign::Minus);
                words.push(BigUint::from(sign));
                words.push(num.magnitude().clone());
            }
        }
        (Category::Bool, Value::Bool(flag)) => {
            words.push(BigUint::from(u8::from(*flag)));
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::encode;
    use num_bigint::BigUint;
    use serde_json::json;

    fn words_of(value: serde_json::Value) -> Vec<BigUint> {
        encode(&value).expect("encode")
    }

    #[test]
    fn decimal_uses_sign_and_magnitude_words() {
        assert_eq!(
            words_of(json!({"a": "-5"})),
            vec![BigUint::from(1u8), BigUint::from(5u8)]
        );
        assert_eq!(
            words_of(json!({"a": "5"})),
            vec![BigUint::from(0u8), BigUint::from(5u8)]
        );
    }

    #[test]
    fn hex_word_parses_as_base_16() {
        let leaf = format!("0x{:064x}", 1);
        assert_eq!(words_of(json!({ "a": leaf })), vec![BigUint::from(1u8)]);

        let max = format!("0x{}", "f".repeat(64));
        let expected = (BigUint::from(1u8) << 256u32) - 1u8;
        assert_eq!(words_of(json!([max])), vec![expected]);
    }

    #[test]
    fn bools_emit_one_word_each() {
        assert_eq!(
            words_of(json!([true, false])),
            vec![BigUint::from(1u8), BigUint::from(0u8)]
        );
    }

    #[test]
    fn unclassified_leaves_emit_nothing() {
        let words = words_of(json!({"a": 5, "b": null, "c": "word", "d": 1.5}));
        assert!(words.is_empty());
    }

    #[test]
    fn objects_traverse_in_insertion_order() {
        // "z" inserted before "y": words must not be reordered alphabetically.
        let words = words_of(json!({"x": {"z": "1", "y": "2"}}));
        assert_eq!(
            words,
            vec![
                BigUint::from(0u8),
                BigUint::from(1u8),
                BigUint::from(0u8),
                BigUint::from(2u8),
            ]
        );
    }

    #[test]
    fn all_zero_base58_hash_reduces_to_zero() {
        // 43 '1' chars decode to 43 zero bytes.
        let hash = "1".repeat(43);
        assert_eq!(words_of(json!([hash])), vec![BigUint::from(0u8)]);
    }

    #[test]
    fn invalid_base58_hash_is_a_parse_error() {
        // 41 chars of '0': the hash rule matches before the decimal rule,
        // and '0' is outside the base-58 alphabet.
        let bad = "0".repeat(41);
        let err = encode(&json!([bad])).expect_err("invalid base-58");
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Parse);
    }

    #[test]
    fn mixed_document_matches_hand_count() {
        let doc = json!({
            "proof": format!("0x{:064x}", 7),
            "amount": "-12",
            "ok": true,
            "note": "skip me",
            "nested": [["3"], {"flag": false}]
        });
        let words = words_of(doc);
        assert_eq!(
            words,
            vec![
                BigUint::from(7u8),  // proof
                BigUint::from(1u8),  // amount sign
                BigUint::from(12u8), // amount magnitude
                BigUint::from(1u8),  // ok
                BigUint::from(0u8),  // "3" sign
                BigUint::from(3u8),  // "3" magnitude
                BigUint::from(0u8),  // flag
            ]
        );
    }
}
