use crate::fragment::fragment::Fragment;

/// A row-growable 2D fragment container, used when a caller wants
/// word-level fragments grouped per source line.
#[derive(Debug, Default)]
pub struct FragmentMatrix {
    rows: Vec<Vec<Fragment>>,
}

impl FragmentMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh row; subsequent `add` calls append to it.
    pub fn new_row(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Appends to the current row, starting one if none exists yet.
    pub fn add(&mut self, fragment: Fragment) {
        if self.rows.is_empty() {
            self.new_row();
        }
        self.rows
            .last_mut()
            .unwrap_or_else(|| unreachable!("a row was just started"))
            .push(fragment);
    }

    pub fn add_all(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.add(fragment);
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Vec<Fragment>> {
        self.rows
    }
}
