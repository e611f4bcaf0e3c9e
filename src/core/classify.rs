// Leaf classification shared by the forward encoder and reverse decoder.
//
// Rule order is part of the contract: the categories overlap (a long decimal
// string also satisfies the hash length check), and the first match wins.
use num_bigint::BigInt;
use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    /// String `"0x"` + 64 hex digits (66 chars total): one 256-bit word.
    HexWord,
    /// String without a `"0x"` prefix and longer than 40 chars, assumed to be
    /// a base-58-encoded 256-bit hash.
    Base58Hash,
    /// String rendering of an optionally-signed base-10 integer.
    DecimalInt,
    /// Native JSON boolean.
    Bool,
    /// Everything else: emits no words, passes through unchanged on decode.
    Opaque,
}

/// Assign a leaf to exactly one category. Pure and total: values that match
/// no rule (numbers, null, other strings) fall through to `Opaque` rather
/// than erroring.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::String(text) => {
            if text.starts_with("0x") && text.len() == 66 {
                Category::HexWord
            } else if !text.starts_with("0x") && text.len() > 40 {
                Category::Base58Hash
            } else if parse_decimal(text).is_some() {
                Category::DecimalInt
            } else {
                Category::Opaque
            }
        }
        Value::Bool(_) => Category::Bool,
        _ => Category::Opaque,
    }
}

/// Decimal-integer probe backing `Category::DecimalInt`. Parse failure is a
/// valid outcome, not an error.
pub(crate) fn parse_decimal(text: &str) -> Option<BigInt> {
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{classify, Category};
    use serde_json::{json, Value};

    fn hex_word(last: char) -> String {
        let mut text = String::from("0x");
        text.extend(std::iter::repeat('0').take(63));
        text.push(last);
        text
    }

    #[test]
    fn hex_word_requires_exact_length() {
        assert_eq!(classify(&json!(hex_word('1'))), Category::HexWord);
        assert_eq!(classify(&json!("0x1")), Category::Opaque);
        // 65 hex digits after the prefix: too long for a word, and the "0x"
        // prefix keeps it out of the hash rule.
        let long = format!("{}0", hex_word('1'));
        assert_eq!(classify(&json!(long)), Category::Opaque);
    }

    #[test]
    fn hash_requires_length_and_no_hex_prefix() {
        let hash = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
        assert_eq!(classify(&json!(hash)), Category::Base58Hash);
        assert_eq!(classify(&json!("tooshort")), Category::Opaque);
    }

    #[test]
    fn long_digit_string_is_a_hash_not_an_integer() {
        // 41 digits: first-match ordering sends this to the hash rule even
        // though it would also parse as an integer.
        let digits = "1".repeat(41);
        assert_eq!(classify(&json!(digits)), Category::Base58Hash);
        assert_eq!(classify(&json!("1".repeat(40))), Category::DecimalInt);
    }

    #[test]
    fn decimal_accepts_signs_and_rejects_floats() {
        assert_eq!(classify(&json!("5")), Category::DecimalInt);
        assert_eq!(classify(&json!("-5")), Category::DecimalInt);
        assert_eq!(classify(&json!("+5")), Category::DecimalInt);
        assert_eq!(classify(&json!("5.5")), Category::Opaque);
        assert_eq!(classify(&json!("1e3")), Category::Opaque);
        assert_eq!(classify(&json!("")), Category::Opaque);
    }

    #[test]
    fn non_strings_only_match_bool() {
        assert_eq!(classify(&json!(true)), Category::Bool);
        assert_eq!(classify(&json!(false)), Category::Bool);
        assert_eq!(classify(&json!(5)), Category::Opaque);
        assert_eq!(classify(&Value::Null), Category::Opaque);
    }

    #[test]
    fn classification_is_stable_across_calls() {
        let leaf = json!("-123");
        assert_eq!(classify(&leaf), classify(&leaf));
    }
}
