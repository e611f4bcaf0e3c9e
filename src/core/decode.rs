// Reverse decoding: rebuild a typed JSON tree from a flat word sequence,
// guided by an exemplar document with the same shape and leaf types.
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use serde_json::{Map, Value};

use crate::core::classify::{classify, Category};
use crate::core::error::{Error, ErrorKind};
use crate::core::word::{Word, WORD_BYTES};

/// Explicit left-to-right cursor over an immutable word slice. Decoding
/// consumes strictly in order with no lookahead; popping past the end is the
/// `Exhausted` failure, never silent wraparound.
#[derive(Debug)]
pub struct WordCursor<'a> {
    words: &'a [Word],
    next: usize,
}

impl<'a> WordCursor<'a> {
    pub fn new(words: &'a [Word]) -> Self {
        Self { words, next: 0 }
    }

    pub fn pop(&mut self) -> Result<&'a Word, Error> {
        let word = self.words.get(self.next).ok_or_else(|| {
            Error::new(ErrorKind::Exhausted)
                .with_message("word sequence ran out before the exemplar walk finished")
                .with_index(self.next)
        })?;
        self.next += 1;
        Ok(word)
    }

    pub fn consumed(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - self.next
    }
}

/// Decode words against an exemplar tree, walking it in the identical
/// pre-order traversal used by [`crate::core::encode::encode`]. The cursor is
/// left at the first unconsumed word so callers can check for surplus.
pub fn decode(exemplar: &Value, cursor: &mut WordCursor<'_>) -> Result<Value, Error> {
    match exemplar {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                out.insert(key.clone(), decode(value, cursor)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode(item, cursor)?);
            }
            Ok(Value::Array(out))
        }
        leaf => decode_leaf(leaf, cursor),
    }
}

/// Strict variant: decode and require the sequence to be fully consumed.
/// Leftover words mean the exemplar and the sequence disagree; silently
/// truncating would hide that, so it surfaces as `Unconsumed`.
pub fn decode_exact(exemplar: &Value, words: &[Word]) -> Result<Value, Error> {
    let mut cursor = WordCursor::new(words);
    let tree = decode(exemplar, &mut cursor)?;
    if cursor.remaining() > 0 {
        return Err(Error::new(ErrorKind::Unconsumed)
            .with_message(format!(
                "{} words left over after the exemplar walk",
                cursor.remaining()
            ))
            .with_index(cursor.consumed()));
    }
    Ok(tree)
}

fn decode_leaf(leaf: &Value, cursor: &mut WordCursor<'_>) -> Result<Value, Error> {
    match classify(leaf) {
        Category::HexWord => {
            let word = cursor.pop()?;
            Ok(Value::String(format!("0x{word:064x}")))
        }
        Category::Base58Hash => {
            let index = cursor.consumed();
            let word = cursor.pop()?;
            let bytes = hash_bytes_be(word).ok_or_else(|| {
                Error::new(ErrorKind::Parse)
                    .with_message("hash word exceeds 256 bits")
                    .with_index(index)
            })?;
            Ok(Value::String(bs58::encode(bytes).into_string()))
        }
        Category::DecimalInt => {
            let sign = if cursor.pop()?.is_zero() {
                Sign::Plus
            } else {
                Sign::Minus
            };
            let magnitude = cursor.pop()?.clone();
            // BigInt normalizes a negative zero to "0".
            let num = BigInt::from_biguint(sign, magnitude);
            Ok(Value::String(num.to_string()))
        }
        Category::Bool => {
            let word = cursor.pop()?;
            Ok(Value::Bool(!word.is_zero()))
        }
        Category::Opaque => Ok(leaf.clone()),
    }
}

/// Fixed-width big-endian rendering of a word, for base-58 hash output.
/// `None` if the word does not fit `WORD_BYTES` bytes.
fn hash_bytes_be(word: &Word) -> Option<[u8; WORD_BYTES]> {
    let raw = word.to_bytes_be();
    if raw.len() > WORD_BYTES {
        return None;
    }
    let mut buf = [0u8; WORD_BYTES];
    buf[WORD_BYTES - raw.len()..].copy_from_slice(&raw);
    Some(buf)
}
