use pretty_assertions::assert_eq;
use rstest::rstest;
use textdiff::{
    ComparisonPolicy, DiffError, Fragment, MatchOptions, TextSpan, build_line_fragments,
    build_line_fragments_with, is_equal, tokenize_lines,
};

fn lines(text: &str) -> Vec<TextSpan> {
    tokenize_lines(&TextSpan::from(text))
}

fn side_texts(fragments: &[Fragment]) -> (String, String) {
    let collect = |left: bool| -> String {
        fragments
            .iter()
            .filter_map(|f| if left { f.text1() } else { f.text2() })
            .map(TextSpan::as_str)
            .collect()
    };
    (collect(true), collect(false))
}

#[rstest]
fn indentation_difference_is_suppressed_under_trim_edge_space() {
    let lines1 = lines("foo\n  bar\n");
    let lines2 = lines("foo\nbar\n");

    let trimmed =
        build_line_fragments(&lines1, &lines2, ComparisonPolicy::TrimEdgeSpace).unwrap();
    assert!(trimmed.iter().all(Fragment::is_equal));
    assert_eq!(side_texts(&trimmed), ("foo\n  bar\n".into(), "foo\nbar\n".into()));

    let exact = build_line_fragments(&lines1, &lines2, ComparisonPolicy::Exact).unwrap();
    assert!(exact.iter().any(|f| f.is_change()));
}

#[rstest]
fn changed_lines_pair_up_into_a_single_fragment() {
    let lines1 = lines("a\nb\nc\n");
    let lines2 = lines("a\nx\ny\nc\n");

    let fragments = build_line_fragments(&lines1, &lines2, ComparisonPolicy::Exact).unwrap();

    let changed: Vec<&Fragment> = fragments.iter().filter(|f| f.is_modified()).collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].text1().unwrap().as_str(), "b\n");
    assert_eq!(changed[0].text2().unwrap().as_str(), "x\ny\n");
}

#[rstest]
fn inserted_lines_are_one_sided() {
    let lines1 = lines("a\n");
    let lines2 = lines("a\nb\n");

    let fragments = build_line_fragments(&lines1, &lines2, ComparisonPolicy::Exact).unwrap();

    assert_eq!(fragments.len(), 2);
    assert!(fragments[0].is_equal());
    assert!(fragments[1].is_one_side());
    assert_eq!(fragments[1].text1(), None);
    assert_eq!(fragments[1].text2().unwrap().as_str(), "b\n");
}

#[rstest]
fn terminator_style_is_an_edge_difference() {
    let lines1 = lines("a\r\nb\r\n");
    let lines2 = lines("a\nb\n");

    let exact = build_line_fragments(&lines1, &lines2, ComparisonPolicy::Exact).unwrap();
    assert!(exact.iter().any(|f| f.is_modified()));

    let trimmed =
        build_line_fragments(&lines1, &lines2, ComparisonPolicy::TrimEdgeSpace).unwrap();
    assert!(trimmed.iter().all(Fragment::is_equal));
}

#[rstest]
fn empty_line_sets_collapse_to_an_unchanged_empty_pair() {
    let fragments = build_line_fragments(&[], &[], ComparisonPolicy::Exact).unwrap();
    assert_eq!(fragments, vec![Fragment::empty()]);
}

#[rstest]
fn blank_one_sided_lines_are_corrected_under_ignore_space() {
    let lines1 = lines("a\n   \nb\n");
    let lines2 = lines("a\nb\n");

    let fragments =
        build_line_fragments(&lines1, &lines2, ComparisonPolicy::IgnoreSpace).unwrap();

    assert!(fragments.iter().all(|f| !f.is_one_side()));
    assert!(fragments.iter().all(|f| !f.is_modified()));
    assert_eq!(side_texts(&fragments).0, "a\n   \nb\n");
}

#[rstest]
fn size_limit_surfaces_as_too_large() {
    let lines1 = lines("a\nb\nc\nd\n");
    let options = MatchOptions {
        size_limit: 3,
        ..MatchOptions::default()
    };

    let result =
        build_line_fragments_with(&lines1, &lines1, ComparisonPolicy::Exact, &options);

    assert_eq!(
        result,
        Err(DiffError::TooLarge {
            actual: 8,
            limit: 3
        })
    );
}

#[rstest]
#[case("a\nb\n", "a\nb\n", ComparisonPolicy::Exact, true)]
#[case("  a\n", "a\n", ComparisonPolicy::Exact, false)]
#[case("  a\n", "a\n", ComparisonPolicy::TrimEdgeSpace, true)]
#[case("a b\n", "ab\n", ComparisonPolicy::TrimEdgeSpace, false)]
#[case("a b\n", "ab\n", ComparisonPolicy::IgnoreSpace, true)]
fn is_equal_rechecks_fragments_under_the_policy(
    #[case] t1: &str,
    #[case] t2: &str,
    #[case] policy: ComparisonPolicy,
    #[case] expected: bool,
) {
    let fragment = Fragment::of(TextSpan::from(t1), TextSpan::from(t2));
    assert_eq!(is_equal(policy, &fragment), expected);
}
