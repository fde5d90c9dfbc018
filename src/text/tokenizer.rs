use crate::text::span::TextSpan;
use crate::text::word::{Word, WordKind};

/// Splits a span into line tokens, keeping each line's terminator inside
/// the token so concatenating the tokens reproduces the input exactly.
///
/// `\n`, `\r\n` and `\r` all terminate a line; the final token carries no
/// terminator when the text does not end in one. Empty text yields no
/// tokens.
pub struct LineTokenizer {
    text: TextSpan,
    pos: usize,
}

impl LineTokenizer {
    pub fn new(text: TextSpan) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for LineTokenizer {
    type Item = TextSpan;

    fn next(&mut self) -> Option<TextSpan> {
        let bytes = self.text.as_str().as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'\n' => {
                    end += 1;
                    break;
                }
                b'\r' => {
                    end += if bytes.get(end + 1) == Some(&b'\n') { 2 } else { 1 };
                    break;
                }
                _ => end += 1,
            }
        }

        self.pos = end;
        Some(self.text.slice(start..end))
    }
}

pub fn tokenize_lines(text: &TextSpan) -> Vec<TextSpan> {
    LineTokenizer::new(text.clone()).collect()
}

/// Splits a span into word tokens covering the whole input: whitespace runs
/// (as `Whitespace` words), alphanumeric/underscore runs, and single other
/// characters.
pub fn split_words(text: &TextSpan) -> Vec<Word> {
    let mut words = Vec::new();
    let s = text.as_str();
    let mut chars = s.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            let end = advance_while(&mut chars, char::is_whitespace);
            words.push(Word::new(text.clone(), start..end, WordKind::Whitespace));
        } else if is_word_char(c) {
            let end = advance_while(&mut chars, is_word_char);
            words.push(Word::new(text.clone(), start..end, WordKind::Text));
        } else {
            chars.next();
            words.push(Word::new(
                text.clone(),
                start..start + c.len_utf8(),
                WordKind::Text,
            ));
        }
    }

    words
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn advance_while(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    pred: impl Fn(char) -> bool,
) -> usize {
    let mut end = 0;
    while let Some(&(pos, c)) = chars.peek() {
        if !pred(c) {
            return pos;
        }
        end = pos + c.len_utf8();
        chars.next();
    }
    end
}
