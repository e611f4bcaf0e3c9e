// Word sizing constants shared by the encoder, decoder, and file layer.
use num_bigint::BigUint;

/// One flat-sequence element: an unsigned integer below `2^WORD_BITS`.
pub type Word = BigUint;

pub const WORD_BITS: u32 = 256;

/// Width of the modulus applied to decoded base-58 hashes. Kept as its own
/// constant (rather than reusing `WORD_BITS` inline) so the width can change
/// in one place if the endpoint turns out to want 255 bits.
pub const HASH_MODULUS_BITS: u32 = WORD_BITS;

pub const WORD_BYTES: usize = (WORD_BITS as usize) / 8;

pub fn word_modulus() -> BigUint {
    BigUint::from(1u8) << WORD_BITS
}

pub fn hash_modulus() -> BigUint {
    BigUint::from(1u8) << HASH_MODULUS_BITS
}
