//! Minimal-edit-distance matching over opaque comparison keys
//!
//! The matcher consumes two arrays of `Eq`-comparable keys (produced by a
//! policy's wrap function, never shown to the user) and yields an ordered
//! run list covering both arrays completely: classic LCS/edit-script
//! semantics with no reordering or transposition. The computation is
//! deterministic; ties between minimal scripts break the same way on every
//! call, so identical inputs always produce an identical run list.
//!
//! The default implementation is a greedy forward Myers diff (trace plus
//! backtrack). It enforces the size cutoff and polls the cooperative
//! cancellation hook once per outer loop iteration, turning pathological
//! inputs into typed failures instead of unbounded CPU use.

use crate::error::DiffError;
use derive_new::new;

/// Macro for debug logging that is enabled with the debug_diff feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_diff"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Default token cutoff for the matching phase.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// A maximal block of the matcher output: either fully matched between the
/// two inputs or fully mismatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    Equal { length: usize },
    Changed { deleted: usize, inserted: usize },
}

/// Resource controls for the matching phase.
pub struct MatchOptions<'a> {
    /// Maximum combined token count; larger inputs fail with
    /// [`DiffError::TooLarge`].
    pub size_limit: usize,
    /// Cooperative cancellation hook, polled periodically while matching.
    pub cancelled: Option<&'a dyn Fn() -> bool>,
}

impl MatchOptions<'_> {
    fn check_cancelled(&self) -> Result<(), DiffError> {
        match self.cancelled {
            Some(hook) if hook() => Err(DiffError::Cancelled),
            _ => Ok(()),
        }
    }
}

impl Default for MatchOptions<'_> {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            cancelled: None,
        }
    }
}

/// The minimal-edit-distance primitive consumed by the fragment builder.
/// Implementations must be deterministic and cover both inputs in order.
pub trait SequenceMatcher {
    fn runs(&self, options: &MatchOptions<'_>) -> Result<Vec<Run>, DiffError>;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersMatcher<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

enum Step {
    Delete,
    Insert,
    Equal,
}

impl<'d, T: Eq> MyersMatcher<'d, T> {
    fn compute_shortest_edit(&self, options: &MatchOptions<'_>) -> Result<Vec<Vec<isize>>, DiffError> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        v[offset] = 0; // v[0] = 0

        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            options.check_cancelled()?;
            debug_log!("myers: exploring edit distance d={}", d);

            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    // we could have come from either k-1 (deletion) or k+1 (insertion)
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Ok(trace);
                }
            }
        }

        Ok(trace)
    }

    fn backtrack(&self, options: &MatchOptions<'_>) -> Result<Vec<(isize, isize, isize, isize)>, DiffError> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit(options)?;

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        Ok(edit_path)
    }

    fn steps(&self, options: &MatchOptions<'_>) -> Result<Vec<Step>, DiffError> {
        let mut steps = Vec::new();

        // the path is recorded end-to-start
        for (prev_x, prev_y, x, y) in self.backtrack(options)? {
            if x == prev_x {
                // only y increased: an insertion
                if prev_y < self.b.len() as isize {
                    steps.push(Step::Insert);
                }
            } else if y == prev_y {
                // only x increased: a deletion
                if prev_x < self.a.len() as isize {
                    steps.push(Step::Delete);
                }
            } else {
                // diagonal move: both sides matched
                if prev_x < self.a.len() as isize {
                    steps.push(Step::Equal);
                }
            }
        }

        steps.reverse();
        Ok(steps)
    }
}

impl<T: Eq> SequenceMatcher for MyersMatcher<'_, T> {
    fn runs(&self, options: &MatchOptions<'_>) -> Result<Vec<Run>, DiffError> {
        let total = self.a.len() + self.b.len();
        if total > options.size_limit {
            return Err(DiffError::TooLarge {
                actual: total,
                limit: options.size_limit,
            });
        }
        if total == 0 {
            return Ok(Vec::new());
        }

        let mut runs = Vec::new();
        let (mut equal, mut deleted, mut inserted) = (0, 0, 0);

        for step in self.steps(options)? {
            match step {
                Step::Equal => {
                    if deleted > 0 || inserted > 0 {
                        runs.push(Run::Changed { deleted, inserted });
                        (deleted, inserted) = (0, 0);
                    }
                    equal += 1;
                }
                step => {
                    if equal > 0 {
                        runs.push(Run::Equal { length: equal });
                        equal = 0;
                    }
                    match step {
                        Step::Delete => deleted += 1,
                        Step::Insert => inserted += 1,
                        Step::Equal => unreachable!("equal steps are handled above"),
                    }
                }
            }
        }
        if deleted > 0 || inserted > 0 {
            runs.push(Run::Changed { deleted, inserted });
        }
        if equal > 0 {
            runs.push(Run::Equal { length: equal });
        }

        debug_log!("myers: produced {} runs", runs.len());
        Ok(runs)
    }
}
