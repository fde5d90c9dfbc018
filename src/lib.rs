//! A text comparison engine producing ordered, classified fragments
//! (unchanged / changed / one-sided) at line and word granularity under
//! three whitespace-sensitivity policies.
//!
//! - `text`: zero-copy spans, line/word tokenization
//! - `fragment`: the fragment output model, builder and 2D container
//! - `compare`: policies, the sequence matcher and the public entry points
//! - `error`: the typed failure taxonomy
//!
//! The engine is a pure library: no I/O, no shared state, deterministic
//! output. Wrapped comparison keys are never substituted into the output,
//! so concatenating either side of the returned fragments reproduces that
//! side's input byte for byte.

pub mod compare;
pub mod error;
pub mod fragment;
pub mod text;

pub use compare::engine::{
    build_fragment_rows, build_fragments, build_fragments_with, build_line_fragments,
    build_line_fragments_with, is_equal,
};
pub use compare::matcher::{
    DEFAULT_SIZE_LIMIT, MatchOptions, MyersMatcher, Run, SequenceMatcher,
};
pub use compare::policy::{ComparisonPolicy, POLICIES};
pub use error::DiffError;
pub use fragment::fragment::Fragment;
pub use fragment::matrix::FragmentMatrix;
pub use fragment::side::Side;
pub use text::span::{SpanBuf, TextSpan};
pub use text::tokenizer::{LineTokenizer, split_words, tokenize_lines};
pub use text::word::{Word, WordKind};
