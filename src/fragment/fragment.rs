use crate::text::span::TextSpan;
use std::fmt;

/// One classified region of a comparison: both sides present (unchanged or
/// changed) or a single side (pure insertion or deletion).
///
/// The `modified` flag is only meaningful when both sides are present; for
/// one-sided fragments it is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text1: Option<TextSpan>,
    text2: Option<TextSpan>,
    modified: bool,
}

impl Fragment {
    /// Builds a fragment, normalizing the degenerate case: when both sides
    /// are empty or absent the result is an unchanged pair of empty spans,
    /// never a null/null no-op.
    pub fn new(text1: Option<TextSpan>, text2: Option<TextSpan>, modified: bool) -> Self {
        let blank = |t: &Option<TextSpan>| t.as_ref().is_none_or(TextSpan::is_empty);
        if blank(&text1) && blank(&text2) {
            return Self {
                text1: Some(TextSpan::empty()),
                text2: Some(TextSpan::empty()),
                modified: false,
            };
        }
        Self {
            text1,
            text2,
            modified,
        }
    }

    /// A two-sided fragment whose `modified` flag defaults to "the texts
    /// differ by content".
    pub fn of(text1: TextSpan, text2: TextSpan) -> Self {
        let modified = text1 != text2;
        Self::new(Some(text1), Some(text2), modified)
    }

    /// A two-sided fragment forced unchanged regardless of literal content.
    pub fn unchanged(text1: TextSpan, text2: TextSpan) -> Self {
        Self::new(Some(text1), Some(text2), false)
    }

    pub fn empty() -> Self {
        Self::new(None, None, false)
    }

    pub fn text1(&self) -> Option<&TextSpan> {
        self.text1.as_ref()
    }

    pub fn text2(&self) -> Option<&TextSpan> {
        self.text2.as_ref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_one_side(&self) -> bool {
        self.text1.is_none() || self.text2.is_none()
    }

    pub fn is_change(&self) -> bool {
        self.text1.is_some() && self.text2.is_some() && self.modified
    }

    pub fn is_equal(&self) -> bool {
        self.text1.is_some() && self.text2.is_some() && !self.modified
    }

    pub fn is_empty(&self) -> bool {
        let blank = |t: &Option<TextSpan>| t.as_ref().is_none_or(TextSpan::is_empty);
        blank(&self.text1) && blank(&self.text2)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.text1, &self.text2) {
            (Some(t1), Some(_)) if !self.modified => write!(f, " {t1}"),
            (Some(t1), Some(t2)) => write!(f, "-{t1}+{t2}"),
            (Some(t1), None) => write!(f, "-{t1}"),
            (None, Some(t2)) => write!(f, "+{t2}"),
            (None, None) => Ok(()),
        }
    }
}
