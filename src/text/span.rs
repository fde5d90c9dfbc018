use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;

/// An immutable view over a shared text buffer.
///
/// Spans compare and hash by content, not by buffer identity, so a span can
/// serve directly as a comparison key for the sequence matcher. Slicing a
/// span never copies; only joining spans from unrelated buffers does (see
/// [`SpanBuf`]).
#[derive(Clone)]
pub struct TextSpan {
    base: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSpan {
    pub fn new(base: Arc<str>) -> Self {
        let end = base.len();
        Self { base, start: 0, end }
    }

    pub fn empty() -> Self {
        Self::from("")
    }

    pub fn as_str(&self) -> &str {
        &self.base[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// A sub-view of this span; `range` is relative to this span's text.
    pub fn slice(&self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && self.start + range.end <= self.end,
            "span slice {range:?} escapes its view (len {})",
            self.len()
        );
        let start = self.start + range.start;
        let end = self.start + range.end;
        assert!(
            self.base.is_char_boundary(start) && self.base.is_char_boundary(end),
            "span slice {range:?} splits a character"
        );
        Self {
            base: self.base.clone(),
            start,
            end,
        }
    }

    /// Zero-copy join with a span that directly follows this one in the
    /// same buffer. Returns `None` for spans from other buffers or at other
    /// offsets.
    pub fn try_extend(&self, next: &TextSpan) -> Option<TextSpan> {
        if Arc::ptr_eq(&self.base, &next.base) && self.end == next.start {
            Some(TextSpan {
                base: self.base.clone(),
                start: self.start,
                end: next.end,
            })
        } else {
            None
        }
    }

    /// First byte offset at or after `pos` that does not hold whitespace.
    pub fn skip_space_forward(&self, pos: usize) -> usize {
        let s = self.as_str();
        s[pos..]
            .find(|c: char| !c.is_whitespace())
            .map(|off| pos + off)
            .unwrap_or(s.len())
    }

    /// Byte offset right after the last non-whitespace character before
    /// `pos`, i.e. the end of the trimmed text.
    pub fn skip_space_backward(&self, pos: usize) -> usize {
        let s = &self.as_str()[..pos];
        s.rfind(|c: char| !c.is_whitespace())
            .map(|off| off + s[off..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0)
    }

    pub fn trim(&self) -> TextSpan {
        let start = self.skip_space_forward(0);
        let end = self.skip_space_backward(self.len()).max(start);
        self.slice(start..end)
    }

    /// Trims leading horizontal whitespace, leaving line terminators alone.
    pub fn trim_leading_space(&self) -> TextSpan {
        let start = self
            .as_str()
            .find(|c: char| !is_horizontal_space(c))
            .unwrap_or(self.len());
        self.slice(start..self.len())
    }

    /// Trims trailing horizontal whitespace, leaving line terminators alone.
    pub fn trim_trailing_space(&self) -> TextSpan {
        let s = self.as_str();
        let end = s
            .rfind(|c: char| !is_horizontal_space(c))
            .map(|off| off + s[off..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        self.slice(0..end)
    }

    pub fn ends_with_terminator(&self) -> bool {
        self.as_str().ends_with(['\n', '\r'])
    }

    /// The span without its trailing `\n`, `\r\n` or `\r`, if any.
    pub fn without_terminator(&self) -> TextSpan {
        let s = self.as_str();
        let cut = if s.ends_with("\r\n") {
            2
        } else if s.ends_with(['\n', '\r']) {
            1
        } else {
            0
        };
        self.slice(0..self.len() - cut)
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().chars().all(char::is_whitespace)
    }

    /// The span's content with every whitespace character removed. Stays
    /// zero-copy when there is nothing to remove.
    pub fn without_whitespace(&self) -> TextSpan {
        let s = self.as_str();
        if s.contains(char::is_whitespace) {
            let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            TextSpan::from(stripped)
        } else {
            self.clone()
        }
    }
}

pub(crate) fn is_horizontal_space(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

impl From<&str> for TextSpan {
    fn from(text: &str) -> Self {
        Self::new(Arc::from(text))
    }
}

impl From<String> for TextSpan {
    fn from(text: String) -> Self {
        Self::new(Arc::from(text))
    }
}

impl From<Arc<str>> for TextSpan {
    fn from(base: Arc<str>) -> Self {
        Self::new(base)
    }
}

impl PartialEq for TextSpan {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSpan {}

impl Hash for TextSpan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextSpan({:?})", self.as_str())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulator for one side of a fragment.
///
/// Stays a plain span while pushed spans remain contiguous in one buffer
/// and degrades to an owned builder on the first discontiguous push. The
/// representation is collapsed by `finish` and is never observable outside
/// this type.
#[derive(Debug)]
pub enum SpanBuf {
    Empty,
    Span(TextSpan),
    Builder(String),
}

impl SpanBuf {
    pub fn new() -> Self {
        SpanBuf::Empty
    }

    pub fn push(&mut self, span: &TextSpan) {
        if span.is_empty() {
            return;
        }
        match self {
            SpanBuf::Empty => *self = SpanBuf::Span(span.clone()),
            SpanBuf::Span(current) => match current.try_extend(span) {
                Some(extended) => *current = extended,
                None => {
                    let mut text = String::with_capacity(current.len() + span.len());
                    text.push_str(current.as_str());
                    text.push_str(span.as_str());
                    *self = SpanBuf::Builder(text);
                }
            },
            SpanBuf::Builder(text) => text.push_str(span.as_str()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SpanBuf::Empty)
    }

    pub fn finish(self) -> TextSpan {
        match self {
            SpanBuf::Empty => TextSpan::empty(),
            SpanBuf::Span(span) => span,
            SpanBuf::Builder(text) => TextSpan::from(text),
        }
    }
}

impl Default for SpanBuf {
    fn default() -> Self {
        Self::new()
    }
}
