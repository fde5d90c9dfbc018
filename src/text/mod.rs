//! Text views and tokenization
//!
//! This module contains the zero-copy text primitives the engine slices
//! its inputs with:
//!
//! - `span`: immutable `(buffer, start, end)` views with content equality
//! - `tokenizer`: terminator-preserving line tokens and word splitting
//! - `word`: a token tied to its offset range in the shared base text
//!
//! Every view keeps a handle on the original buffer, so fragment output can
//! always be re-concatenated into the exact input text.

pub mod span;
pub mod tokenizer;
pub mod word;
