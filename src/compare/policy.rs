use crate::fragment::fragment::Fragment;
use crate::fragment::side::Side;
use crate::text::span::TextSpan;
use crate::text::word::Word;

/// Whitespace-sensitivity strategy for a comparison.
///
/// A policy supplies comparison-only token wrapping (never used for output
/// text), the fragment-construction rules for aligned pairs, and an
/// optional post-correction pass over the built sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonPolicy {
    /// Literal content comparison, no special-casing.
    Exact,
    /// Differences in leading/trailing whitespace of a line are ignored.
    TrimEdgeSpace,
    /// All whitespace is ignored during matching, and whitespace-only
    /// insert/delete noise is suppressed from the output.
    IgnoreSpace,
}

/// The three policies, constructed once; callers pass one explicitly.
pub const POLICIES: [ComparisonPolicy; 3] = [
    ComparisonPolicy::Exact,
    ComparisonPolicy::TrimEdgeSpace,
    ComparisonPolicy::IgnoreSpace,
];

impl ComparisonPolicy {
    /// Comparison key for a word token.
    pub fn wrap_word(self, word: &Word) -> TextSpan {
        match self {
            ComparisonPolicy::Exact | ComparisonPolicy::TrimEdgeSpace => word.text(),
            ComparisonPolicy::IgnoreSpace => word.text().without_whitespace(),
        }
    }

    /// Comparison keys for a line token sequence. TrimEdgeSpace threads its
    /// edge state through the whole sequence, so lines wrap as a batch.
    pub fn wrap_lines(self, lines: &[TextSpan]) -> Vec<TextSpan> {
        match self {
            ComparisonPolicy::Exact => lines.to_vec(),
            ComparisonPolicy::TrimEdgeSpace => {
                let mut trimmer = EdgeTrimmer::new();
                lines.iter().map(|line| trimmer.wrap(line)).collect()
            }
            ComparisonPolicy::IgnoreSpace => {
                lines.iter().map(TextSpan::without_whitespace).collect()
            }
        }
    }

    /// Fragment for an aligned word pair from an equal run. The matcher
    /// compared wrapped keys, so the raw texts may still differ here.
    pub fn word_fragment(self, word1: &Word, word2: &Word) -> Fragment {
        let suppress = match self {
            ComparisonPolicy::Exact => false,
            ComparisonPolicy::TrimEdgeSpace => {
                word1.is_whitespace()
                    && word2.is_whitespace()
                    && word1.at_end_of_line()
                    && word2.at_end_of_line()
            }
            ComparisonPolicy::IgnoreSpace => word1.is_whitespace() && word2.is_whitespace(),
        };
        if suppress {
            Fragment::unchanged(word1.text(), word2.text())
        } else {
            Fragment::of(word1.text(), word2.text())
        }
    }

    /// Fragment for an aligned line pair from an equal run.
    pub fn line_fragment(self, line1: &TextSpan, line2: &TextSpan) -> Fragment {
        match self {
            ComparisonPolicy::Exact => Fragment::of(line1.clone(), line2.clone()),
            // wrapped keys matched, so any remaining raw difference is
            // whitespace this policy ignores
            ComparisonPolicy::TrimEdgeSpace | ComparisonPolicy::IgnoreSpace => {
                Fragment::unchanged(line1.clone(), line2.clone())
            }
        }
    }

    /// Post-correction over the built sequence. Identity except for
    /// IgnoreSpace, which reclassifies whitespace-only one-sided fragments
    /// as unchanged instead of reporting them as inserts/deletes.
    pub fn correct_fragments(self, fragments: Vec<Fragment>) -> Vec<Fragment> {
        if self != ComparisonPolicy::IgnoreSpace {
            return fragments;
        }
        fragments
            .into_iter()
            .map(|fragment| {
                if !fragment.is_one_side() {
                    return fragment;
                }
                let side = Side::choose(&fragment);
                match side.text(&fragment) {
                    Some(text) if text.is_blank() => {
                        side.create_fragment(Some(text.clone()), Some(TextSpan::empty()), false)
                    }
                    _ => fragment,
                }
            })
            .collect()
    }
}

/// The TrimEdgeSpace line-wrapping state machine.
///
/// A line's leading edge only exists when the previous line ended at a
/// terminator, and its trailing edge only when the line itself does; the
/// terminator is dropped with the trailing whitespace so `"a \n"`, `"a\n"`
/// and `"a\r\n"` wrap identically.
pub struct EdgeTrimmer {
    at_beginning: bool,
}

impl EdgeTrimmer {
    pub fn new() -> Self {
        Self { at_beginning: true }
    }

    pub fn wrap(&mut self, line: &TextSpan) -> TextSpan {
        let trimmed = if self.at_beginning {
            line.trim_leading_space()
        } else {
            line.clone()
        };
        if trimmed.ends_with_terminator() {
            self.at_beginning = true;
            trimmed.without_terminator().trim_trailing_space()
        } else {
            self.at_beginning = false;
            trimmed
        }
    }
}

impl Default for EdgeTrimmer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenizer::{split_words, tokenize_lines};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn wrapped(policy: ComparisonPolicy, text: &str) -> Vec<String> {
        policy
            .wrap_lines(&tokenize_lines(&TextSpan::from(text)))
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect()
    }

    #[rstest]
    fn exact_wraps_are_identity() {
        assert_eq!(wrapped(ComparisonPolicy::Exact, "a \n b\n"), vec!["a \n", " b\n"]);
    }

    #[rstest]
    #[case("  foo  \n", vec!["foo"])]
    #[case("foo \nbar\n", vec!["foo", "bar"])]
    #[case("a\r\nb\n", vec!["a", "b"])]
    #[case("  \n", vec![""])]
    #[case("foo ", vec!["foo "])] // no terminator, so no trailing edge
    fn trim_edge_space_trims_only_proven_edges(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(wrapped(ComparisonPolicy::TrimEdgeSpace, text), expected);
    }

    #[rstest]
    fn ignore_space_strips_everything() {
        assert_eq!(
            wrapped(ComparisonPolicy::IgnoreSpace, "a b\n\tc \n"),
            vec!["ab", "c"]
        );
    }

    #[rstest]
    fn word_keys_follow_the_policy() {
        let words = split_words(&TextSpan::from("a \tb"));
        let ws = &words[1];
        assert_eq!(ComparisonPolicy::Exact.wrap_word(ws).as_str(), " \t");
        assert_eq!(ComparisonPolicy::TrimEdgeSpace.wrap_word(ws).as_str(), " \t");
        assert_eq!(ComparisonPolicy::IgnoreSpace.wrap_word(ws).as_str(), "");
    }

    #[rstest]
    fn whitespace_pairs_at_line_edges_are_suppressed() {
        // trailing whitespace words of "a \n" vs "a\t\n" both touch the
        // line edge
        let words1 = split_words(&TextSpan::from("a \n"));
        let words2 = split_words(&TextSpan::from("a\t\n"));
        let (ws1, ws2) = (&words1[1], &words2[1]);

        assert!(ComparisonPolicy::Exact.word_fragment(ws1, ws2).is_change());
        assert!(
            ComparisonPolicy::TrimEdgeSpace
                .word_fragment(ws1, ws2)
                .is_equal()
        );
        assert!(
            ComparisonPolicy::IgnoreSpace
                .word_fragment(ws1, ws2)
                .is_equal()
        );
    }

    #[rstest]
    fn mid_line_whitespace_pairs_stay_changed_under_trim() {
        let words1 = split_words(&TextSpan::from("a b c"));
        let words2 = split_words(&TextSpan::from("a\t b c"));
        let (ws1, ws2) = (&words1[1], &words2[1]);
        assert!(!ws1.at_end_of_line() && !ws2.at_end_of_line());

        assert!(
            ComparisonPolicy::TrimEdgeSpace
                .word_fragment(ws1, ws2)
                .is_change()
        );
        assert!(
            ComparisonPolicy::IgnoreSpace
                .word_fragment(ws1, ws2)
                .is_equal()
        );
    }

    #[rstest]
    fn correction_suppresses_whitespace_only_one_sided_fragments() {
        let fragments = vec![
            Fragment::new(Some(TextSpan::from("  ")), None, true),
            Fragment::new(None, Some(TextSpan::from("x")), true),
        ];

        let corrected = ComparisonPolicy::IgnoreSpace.correct_fragments(fragments);

        assert!(corrected[0].is_equal());
        assert_eq!(corrected[0].text1().unwrap().as_str(), "  ");
        assert_eq!(corrected[0].text2().unwrap().as_str(), "");
        assert!(corrected[1].is_one_side());
    }

    #[rstest]
    fn correction_is_identity_for_other_policies() {
        let fragments = vec![Fragment::new(Some(TextSpan::from(" ")), None, true)];
        for policy in [ComparisonPolicy::Exact, ComparisonPolicy::TrimEdgeSpace] {
            let kept = policy.correct_fragments(fragments.clone());
            assert!(kept[0].is_one_side());
        }
    }
}
