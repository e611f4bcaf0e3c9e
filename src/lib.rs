//! Purpose: Shared core library crate used by the `wordpack` CLI and tests.
//! Exports: `core` (leaf classification, word encoding/decoding, errors).
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules are pure tree transformations; file I/O stays in the binary.
pub mod core;
