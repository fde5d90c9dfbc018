use crate::compare::matcher::{MatchOptions, MyersMatcher, SequenceMatcher};
use crate::compare::policy::ComparisonPolicy;
use crate::error::DiffError;
use crate::fragment::builder::FragmentBuilder;
use crate::fragment::fragment::Fragment;
use crate::fragment::matrix::FragmentMatrix;
use crate::text::span::TextSpan;
use crate::text::tokenizer::{split_words, tokenize_lines};

/// Word-granularity diff of two texts under the given policy.
///
/// The returned fragments cover both inputs completely and in order:
/// concatenating every fragment's left text reproduces `text1` exactly, and
/// likewise the right side for `text2`.
pub fn build_fragments(
    text1: impl Into<TextSpan>,
    text2: impl Into<TextSpan>,
    policy: ComparisonPolicy,
) -> Result<Vec<Fragment>, DiffError> {
    build_fragments_with(text1, text2, policy, &MatchOptions::default())
}

pub fn build_fragments_with(
    text1: impl Into<TextSpan>,
    text2: impl Into<TextSpan>,
    policy: ComparisonPolicy,
    options: &MatchOptions<'_>,
) -> Result<Vec<Fragment>, DiffError> {
    let text1 = text1.into();
    let text2 = text2.into();

    let words1 = split_words(&text1);
    let words2 = split_words(&text2);
    let keys1: Vec<TextSpan> = words1.iter().map(|w| policy.wrap_word(w)).collect();
    let keys2: Vec<TextSpan> = words2.iter().map(|w| policy.wrap_word(w)).collect();

    let runs = MyersMatcher::new(&keys1, &keys2).runs(options)?;
    let fragments = FragmentBuilder::new(&words1, &words2)
        .build(&runs, |w1, w2| policy.word_fragment(w1, w2));

    Ok(normalize(policy.correct_fragments(fragments)))
}

/// Line-granularity diff over pre-tokenized lines (terminators included in
/// each line token) under the given policy.
pub fn build_line_fragments(
    lines1: &[TextSpan],
    lines2: &[TextSpan],
    policy: ComparisonPolicy,
) -> Result<Vec<Fragment>, DiffError> {
    build_line_fragments_with(lines1, lines2, policy, &MatchOptions::default())
}

pub fn build_line_fragments_with(
    lines1: &[TextSpan],
    lines2: &[TextSpan],
    policy: ComparisonPolicy,
    options: &MatchOptions<'_>,
) -> Result<Vec<Fragment>, DiffError> {
    let keys1 = policy.wrap_lines(lines1);
    let keys2 = policy.wrap_lines(lines2);

    let runs = MyersMatcher::new(&keys1, &keys2).runs(options)?;
    let fragments = FragmentBuilder::new(lines1, lines2)
        .build(&runs, |l1, l2| policy.line_fragment(l1, l2));

    Ok(normalize(policy.correct_fragments(fragments)))
}

/// Re-evaluates a two-sided fragment's equality under the policy's
/// line-level wrap, independent of the `modified` flag already stored.
pub fn is_equal(policy: ComparisonPolicy, fragment: &Fragment) -> bool {
    let (Some(text1), Some(text2)) = (fragment.text1(), fragment.text2()) else {
        return false;
    };
    let lines1 = tokenize_lines(text1);
    let lines2 = tokenize_lines(text2);
    policy.wrap_lines(&lines1) == policy.wrap_lines(&lines2)
}

/// Word-granularity diff grouped into per-source-line rows: a new row
/// starts after every fragment whose left text ends in a line terminator.
pub fn build_fragment_rows(
    text1: impl Into<TextSpan>,
    text2: impl Into<TextSpan>,
    policy: ComparisonPolicy,
) -> Result<Vec<Vec<Fragment>>, DiffError> {
    let fragments = build_fragments(text1, text2, policy)?;

    let mut matrix = FragmentMatrix::new();
    let mut break_pending = false;
    for fragment in fragments {
        if break_pending {
            matrix.new_row();
            break_pending = false;
        }
        let ends_line = fragment
            .text1()
            .is_some_and(|t| t.ends_with_terminator());
        matrix.add(fragment);
        break_pending = ends_line;
    }
    Ok(matrix.into_rows())
}

/// An empty fragment sequence collapses to the unchanged empty pair; the
/// engine never returns "nothing happened" as zero fragments.
fn normalize(fragments: Vec<Fragment>) -> Vec<Fragment> {
    if fragments.is_empty() {
        vec![Fragment::empty()]
    } else {
        fragments
    }
}
