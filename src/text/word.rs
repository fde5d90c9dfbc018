use crate::text::span::TextSpan;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    Text,
    /// A run of formatting characters (spaces, tabs, line terminators).
    Whitespace,
}

/// A token tied to its byte range inside a shared base text.
///
/// The range is relative to `base`; the word's own text is a zero-copy view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    base: TextSpan,
    range: Range<usize>,
    kind: WordKind,
}

impl Word {
    pub fn new(base: TextSpan, range: Range<usize>, kind: WordKind) -> Self {
        assert!(
            range.start <= range.end && range.end <= base.len(),
            "word range {range:?} escapes its base text (len {})",
            base.len()
        );
        Self { base, range, kind }
    }

    pub fn text(&self) -> TextSpan {
        self.base.slice(self.range.clone())
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == WordKind::Whitespace
    }

    /// True when the word touches a line edge: the very start or end of the
    /// base text, or a `\n` directly before or after it.
    pub fn at_end_of_line(&self) -> bool {
        let bytes = self.base.as_str().as_bytes();
        self.range.start == 0
            || bytes[self.range.start - 1] == b'\n'
            || self.range.end == bytes.len()
            || bytes[self.range.end] == b'\n'
    }

    /// The untokenized text between `from` and this word's start.
    ///
    /// `from` must not lie past the word's start; a violation is an engine
    /// bug, not a recoverable condition.
    pub fn prefix(&self, from: usize) -> TextSpan {
        assert!(
            from <= self.range.start,
            "word prefix requested from {from}, past the word start {}",
            self.range.start
        );
        self.base.slice(from..self.range.start)
    }
}
