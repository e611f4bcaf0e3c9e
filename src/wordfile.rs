//! Purpose: File layer for the CLI — JSON documents and flat word-array files.
//! Exports: `read_document`, `write_document`, `read_words`, `write_words`.
//! Role: Keep all filesystem and serialization concerns out of the core codec.
//! Invariants: Word-array files hold a single JSON array of unsigned decimal
//! integers below 2^256; anything else is a `Parse` error naming the index.
//! Invariants: Output files are written atomically (temp file + rename), so a
//! failed conversion never leaves partial output behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::{Number, Value};

use wordpack::core::error::{Error, ErrorKind};
use wordpack::core::word::{word_modulus, Word};

pub(crate) fn read_document(path: &Path) -> Result<Value, Error> {
    let text = read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("file is not valid JSON")
            .with_path(path)
            .with_source(err)
    })
}

pub(crate) fn write_document(path: &Path, tree: &Value) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(tree).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to render JSON document")
            .with_source(err)
    })?;
    write_atomic(path, &text)
}

pub(crate) fn read_words(path: &Path) -> Result<Vec<Word>, Error> {
    let tree = read_document(path)?;
    let Value::Array(items) = tree else {
        return Err(Error::new(ErrorKind::Parse)
            .with_message("word file must hold a single JSON array")
            .with_path(path));
    };

    let modulus = word_modulus();
    let mut words = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Number(number) = item else {
            return Err(Error::new(ErrorKind::Parse)
                .with_message("word file entries must be integers")
                .with_path(path)
                .with_index(index));
        };
        // arbitrary_precision keeps the literal text; BigUint parsing rejects
        // signs, fractions, and exponents in one step.
        let word: Word = number.to_string().parse().map_err(|_| {
            Error::new(ErrorKind::Parse)
                .with_message("word is not an unsigned decimal integer")
                .with_path(path)
                .with_index(index)
        })?;
        if word >= modulus {
            return Err(Error::new(ErrorKind::Parse)
                .with_message("word exceeds 256 bits")
                .with_path(path)
                .with_index(index));
        }
        words.push(word);
    }
    Ok(words)
}

pub(crate) fn write_words(path: &Path, words: &[Word]) -> Result<(), Error> {
    let items = words
        .iter()
        .map(|word| Value::Number(Number::from_string_unchecked(word.to_string())))
        .collect();
    write_document(path, &Value::Array(items))
}

fn read_to_string(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| {
        let kind = if err.kind() == io::ErrorKind::NotFound {
            ErrorKind::NotFound
        } else {
            ErrorKind::Io
        };
        Error::new(kind)
            .with_message("failed to read file")
            .with_path(path)
            .with_source(err)
    })
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |err: io::Error| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write output file")
            .with_path(path)
            .with_source(err)
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
    tmp.write_all(contents.as_bytes()).map_err(io_error)?;
    tmp.write_all(b"\n").map_err(io_error)?;
    tmp.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}
