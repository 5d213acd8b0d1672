//! Ordered arrangements without repetition.

use std::iter::Fuse;

use tracing::debug;

use super::{count_permutations, gather, pick, IndexVec, Phase, Remaining};

/// Successive `r`-length permutations of a pool, in lexicographic order of
/// pool positions.
#[derive(Debug, Clone)]
pub struct Permutations<I: Iterator> {
    source: Option<Fuse<I>>,
    pool: Vec<I::Item>,
    /// Requested length; `None` means the pool size.
    r: Option<usize>,
    /// A permutation of every pool position; the first `r` form the tuple.
    indices: IndexVec,
    /// Per tuple position, how many more values it takes before it wraps.
    cycles: IndexVec,
    phase: Phase,
    remaining: Remaining,
}

/// All `r`-length orderings of distinct pool positions.
///
/// `r = None` uses the full pool length. `r > n` yields nothing. Elements
/// are distinguished by position, not value, so repeated values in the pool
/// give repeated tuples.
///
/// # Example
///
/// ```
/// use iterforge_ops::permutations;
///
/// let words: Vec<String> = permutations("ABC".chars(), None)
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(words, vec!["ABC", "ACB", "BAC", "BCA", "CAB", "CBA"]);
///
/// assert_eq!(permutations(0..4, Some(2)).count(), 12);
/// ```
pub fn permutations<I>(iterable: I, r: Option<usize>) -> Permutations<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Permutations {
        source: Some(iterable.into_iter().fuse()),
        pool: Vec::new(),
        r,
        indices: IndexVec::new(),
        cycles: IndexVec::new(),
        phase: Phase::Pending,
        remaining: Remaining(None),
    }
}

impl<I> Permutations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn start(&mut self) -> bool {
        gather(&mut self.source, &mut self.pool);
        let n = self.pool.len();
        let r = self.r.unwrap_or(n);
        debug!(pool_len = n, r, "permutations pool gathered");

        self.remaining = Remaining(count_permutations(n, r));
        if r > n {
            return false;
        }
        self.indices.extend(0..n);
        self.cycles.extend((n - r + 1..=n).rev());
        true
    }

    /// Steps the rightmost position whose cycle has not run out by swapping
    /// in the next unused index. Positions that run out rotate their suffix
    /// back to ascending order, which keeps the output lexicographic.
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        for i in (0..self.cycles.len()).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return true;
            }
        }
        false
    }

    fn current_tuple(&self) -> Vec<I::Item> {
        pick(&self.pool, &self.indices[..self.cycles.len()])
    }
}

index_walk_iterator!(Permutations);
