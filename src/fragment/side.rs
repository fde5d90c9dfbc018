use crate::fragment::fragment::Fragment;
use crate::text::span::TextSpan;

/// Selector for one of a fragment's two sides, so side-generic logic can be
/// written once instead of twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The slot index used by downstream three-way mergers, which keep the
    /// base text at slot 1.
    pub fn merge_index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 2,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn select<T>(self, left: T, right: T) -> T {
        match self {
            Side::Left => left,
            Side::Right => right,
        }
    }

    pub fn text(self, fragment: &Fragment) -> Option<&TextSpan> {
        self.select(fragment.text1(), fragment.text2())
    }

    /// Builds a fragment with `text` in this side's slot and `other_text`
    /// opposite it.
    pub fn create_fragment(
        self,
        text: Option<TextSpan>,
        other_text: Option<TextSpan>,
        modified: bool,
    ) -> Fragment {
        match self {
            Side::Left => Fragment::new(text, other_text, modified),
            Side::Right => Fragment::new(other_text, text, modified),
        }
    }

    /// The side that actually holds content in a one-sided fragment.
    /// Calling this on a two-sided fragment is an engine bug.
    pub fn choose(fragment: &Fragment) -> Side {
        match (fragment.text1(), fragment.text2()) {
            (Some(_), None) => Side::Left,
            (None, Some(_)) => Side::Right,
            _ => panic!("cannot choose a side of a two-sided fragment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn span(text: &str) -> TextSpan {
        TextSpan::from(text)
    }

    #[rstest]
    fn indices_are_symmetric() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert_eq!(Side::Left.merge_index(), 0);
        assert_eq!(Side::Right.merge_index(), 2);
        for side in Side::BOTH {
            assert_eq!(side.other().other(), side);
            assert_ne!(side.other(), side);
        }
    }

    #[rstest]
    fn text_reads_the_matching_slot() {
        let fragment = Fragment::of(span("left"), span("right"));
        assert_eq!(Side::Left.text(&fragment).unwrap().as_str(), "left");
        assert_eq!(Side::Right.text(&fragment).unwrap().as_str(), "right");
    }

    #[rstest]
    #[case(Side::Left)]
    #[case(Side::Right)]
    fn create_fragment_places_text_in_the_right_slot(#[case] side: Side) {
        let fragment = side.create_fragment(Some(span("mine")), Some(span("other")), true);
        assert_eq!(side.text(&fragment).unwrap().as_str(), "mine");
        assert_eq!(side.other().text(&fragment).unwrap().as_str(), "other");
    }

    #[rstest]
    fn choose_finds_the_present_side() {
        let deletion = Side::Left.create_fragment(Some(span("gone")), None, true);
        let insertion = Side::Right.create_fragment(Some(span("new")), None, true);
        assert_eq!(Side::choose(&deletion), Side::Left);
        assert_eq!(Side::choose(&insertion), Side::Right);
    }

    #[rstest]
    #[should_panic(expected = "two-sided fragment")]
    fn choose_on_a_two_sided_fragment_is_fatal() {
        let _ = Side::choose(&Fragment::of(span("a"), span("b")));
    }
}
