//! Unordered selections, with and without replacement.

use std::iter::Fuse;

use tracing::debug;

use super::{
    count_combinations, count_combinations_with_replacement, gather, pick, IndexVec, Phase,
    Remaining,
};

/// `r`-length subsequences of a pool: strictly increasing index vectors.
#[derive(Debug, Clone)]
pub struct Combinations<I: Iterator> {
    source: Option<Fuse<I>>,
    pool: Vec<I::Item>,
    r: usize,
    indices: IndexVec,
    phase: Phase,
    remaining: Remaining,
}

/// `r`-length subsequences allowing repeats: non-decreasing index vectors.
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<I: Iterator> {
    source: Option<Fuse<I>>,
    pool: Vec<I::Item>,
    r: usize,
    indices: IndexVec,
    phase: Phase,
    remaining: Remaining,
}

/// All `r`-length subsequences of `iterable`, in pool order.
///
/// `r > n` yields nothing.
///
/// # Example
///
/// ```
/// use iterforge_ops::combinations;
///
/// let pairs: Vec<String> = combinations("ABCD".chars(), 2)
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["AB", "AC", "AD", "BC", "BD", "CD"]);
/// ```
pub fn combinations<I>(iterable: I, r: usize) -> Combinations<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Combinations {
        source: Some(iterable.into_iter().fuse()),
        pool: Vec::new(),
        r,
        indices: IndexVec::new(),
        phase: Phase::Pending,
        remaining: Remaining(None),
    }
}

/// All `r`-length subsequences where an element may repeat.
///
/// Any `r` is accepted; an empty pool yields nothing unless `r = 0`.
///
/// # Example
///
/// ```
/// use iterforge_ops::combinations_with_replacement;
///
/// let pairs: Vec<String> = combinations_with_replacement("ABC".chars(), 2)
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["AA", "AB", "AC", "BB", "BC", "CC"]);
/// ```
pub fn combinations_with_replacement<I>(
    iterable: I,
    r: usize,
) -> CombinationsWithReplacement<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    CombinationsWithReplacement {
        source: Some(iterable.into_iter().fuse()),
        pool: Vec::new(),
        r,
        indices: IndexVec::new(),
        phase: Phase::Pending,
        remaining: Remaining(None),
    }
}

impl<I> Combinations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn start(&mut self) -> bool {
        gather(&mut self.source, &mut self.pool);
        let n = self.pool.len();
        debug!(pool_len = n, r = self.r, "combinations pool gathered");

        self.remaining = Remaining(count_combinations(n, self.r));
        if self.r > n {
            return false;
        }
        self.indices.extend(0..self.r);
        true
    }

    fn current_tuple(&self) -> Vec<I::Item> {
        pick(&self.pool, &self.indices)
    }

    /// Increments the rightmost index below its ceiling `n - r + i` and
    /// resets the suffix to consecutive values.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let r = self.r;
        for i in (0..r).rev() {
            if self.indices[i] < n - r + i {
                self.indices[i] += 1;
                for j in (i + 1)..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl<I> CombinationsWithReplacement<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn start(&mut self) -> bool {
        gather(&mut self.source, &mut self.pool);
        let n = self.pool.len();
        debug!(
            pool_len = n,
            r = self.r,
            "combinations_with_replacement pool gathered"
        );

        self.remaining = Remaining(count_combinations_with_replacement(n, self.r));
        if n == 0 && self.r > 0 {
            return false;
        }
        self.indices.resize(self.r, 0);
        true
    }

    fn current_tuple(&self) -> Vec<I::Item> {
        pick(&self.pool, &self.indices)
    }

    /// Increments the rightmost index below `n - 1` and sets the suffix
    /// equal to it.
    fn advance(&mut self) -> bool {
        let last = self.pool.len().saturating_sub(1);
        for i in (0..self.r).rev() {
            if self.indices[i] < last {
                let value = self.indices[i] + 1;
                for index in &mut self.indices[i..] {
                    *index = value;
                }
                return true;
            }
        }
        false
    }
}

index_walk_iterator!(Combinations);
index_walk_iterator!(CombinationsWithReplacement);
