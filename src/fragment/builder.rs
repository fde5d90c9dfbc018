use crate::compare::matcher::Run;
use crate::fragment::fragment::Fragment;
use crate::text::span::{SpanBuf, TextSpan};
use crate::text::word::Word;
use derive_new::new;

/// A token the builder can lay back out into fragment text.
///
/// Words additionally report their offsets in the shared base text, so the
/// builder can carry any untokenized gap ahead of a token into the output.
pub trait Token: Clone {
    fn text(&self) -> TextSpan;

    fn end_offset(&self) -> Option<usize> {
        None
    }

    fn gap_before(&self, from: usize) -> Option<TextSpan> {
        let _ = from;
        None
    }
}

impl Token for TextSpan {
    fn text(&self) -> TextSpan {
        self.clone()
    }
}

impl Token for Word {
    fn text(&self) -> TextSpan {
        Word::text(self)
    }

    fn end_offset(&self) -> Option<usize> {
        Some(self.range().end)
    }

    fn gap_before(&self, from: usize) -> Option<TextSpan> {
        Some(self.prefix(from))
    }
}

/// Turns a matcher run list plus the original (unwrapped) tokens into an
/// ordered fragment sequence.
///
/// Equal runs go through the caller's pair rule one aligned token pair at a
/// time; changed runs become a single fragment concatenating each side's
/// tokens, one-sided when a side contributed nothing. Fragments are never
/// merged across run boundaries.
#[derive(Debug, new)]
pub struct FragmentBuilder<'a, T> {
    tokens1: &'a [T],
    tokens2: &'a [T],
}

impl<'a, T: Token> FragmentBuilder<'a, T> {
    pub fn build(&self, runs: &[Run], pair: impl Fn(&T, &T) -> Fragment) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let (mut index1, mut index2) = (0, 0);
        let (mut cursor1, mut cursor2) = (0, 0);

        for run in runs {
            match *run {
                Run::Equal { length } => {
                    for offset in 0..length {
                        let token1 = &self.tokens1[index1 + offset];
                        let token2 = &self.tokens2[index2 + offset];
                        fragments.push(pair(token1, token2));
                        if let Some(end) = token1.end_offset() {
                            cursor1 = end;
                        }
                        if let Some(end) = token2.end_offset() {
                            cursor2 = end;
                        }
                    }
                    index1 += length;
                    index2 += length;
                }
                Run::Changed { deleted, inserted } => {
                    let text1 = concat(&self.tokens1[index1..index1 + deleted], &mut cursor1);
                    let text2 = concat(&self.tokens2[index2..index2 + inserted], &mut cursor2);
                    index1 += deleted;
                    index2 += inserted;
                    fragments.push(Fragment::new(text1, text2, true));
                }
            }
        }

        fragments
    }
}

/// Concatenates a side's tokens, including any untokenized gap before each
/// one. `None` when the side contributed no tokens (the side is absent from
/// the fragment, not empty).
fn concat<T: Token>(tokens: &[T], cursor: &mut usize) -> Option<TextSpan> {
    if tokens.is_empty() {
        return None;
    }
    let mut buf = SpanBuf::new();
    for token in tokens {
        if let Some(gap) = token.gap_before(*cursor) {
            buf.push(&gap);
        }
        buf.push(&token.text());
        if let Some(end) = token.end_offset() {
            *cursor = end;
        }
    }
    Some(buf.finish())
}
