// Core modules implementing classification, word encoding, and error modeling.
pub mod classify;
pub mod decode;
pub mod encode;
pub mod error;
pub mod word;
