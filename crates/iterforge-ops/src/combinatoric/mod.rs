//! Combinatoric generators: `product`, `permutations`, `combinations`,
//! `combinations_with_replacement`.
//!
//! Each generator keeps an index vector into its pool(s) and mutates it in
//! place with a successor step between yields. Output order is fixed:
//!
//! | Generator | Index vectors | Count |
//! |-----------|---------------|-------|
//! | [`product`] | any, odometer order | `n1 * n2 * ...` |
//! | [`permutations`] | distinct entries, lexicographic | `n! / (n - r)!` |
//! | [`combinations`] | strictly increasing | `C(n, r)` |
//! | [`combinations_with_replacement`] | non-decreasing | `C(n + r - 1, r)` |
//!
//! Pools are gathered from upstream on the first `next()` call, never at
//! construction. Tuples are yielded as `Vec<T>`; `r = 0` yields exactly one
//! empty tuple. Once the pool is known, `size_hint` is exact.

use std::iter::Fuse;

use smallvec::SmallVec;

/// Implements `Iterator` and `FusedIterator` for a generator with
/// `start`, `advance` and `current_tuple` methods and `phase`/`remaining`
/// fields.
macro_rules! index_walk_iterator {
    ($name:ident) => {
        impl<I> Iterator for $name<I>
        where
            I: Iterator,
            I::Item: Clone,
        {
            type Item = Vec<I::Item>;

            fn next(&mut self) -> Option<Vec<I::Item>> {
                use $crate::combinatoric::Phase;

                let more = match self.phase {
                    Phase::Done => return None,
                    Phase::Pending => self.start(),
                    Phase::Running => self.advance(),
                };
                if !more {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Running;
                self.remaining.taken();
                Some(self.current_tuple())
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.remaining.hint(self.phase)
            }
        }

        impl<I> ::std::iter::FusedIterator for $name<I>
        where
            I: Iterator,
            I::Item: Clone,
        {
        }
    };
}

mod combinations;
mod permutations;
mod product;

pub use combinations::{
    combinations, combinations_with_replacement, Combinations, CombinationsWithReplacement,
};
pub use permutations::{permutations, Permutations};
pub use product::{product, product_repeat, product_with, Product};

/// Index vectors up to this length stay on the stack.
const SMALL_INDEX: usize = 8;

type IndexVec = SmallVec<[usize; SMALL_INDEX]>;

/// Where a generator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pool not gathered yet; the next call yields the first tuple.
    Pending,
    /// The index vector holds the tuple yielded last.
    Running,
    /// Every tuple has been yielded.
    Done,
}

/// Drains `source` into `pool` the first time it is called.
fn gather<I: Iterator>(source: &mut Option<Fuse<I>>, pool: &mut Vec<I::Item>) {
    if let Some(source) = source.take() {
        pool.extend(source);
    }
}

/// Clones the pool elements at `indices` into a tuple.
fn pick<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| pool[index].clone()).collect()
}

/// Tracks how many tuples are left, once that is known.
#[derive(Debug, Clone, Copy)]
struct Remaining(Option<usize>);

impl Remaining {
    fn taken(&mut self) {
        if let Some(left) = self.0.as_mut() {
            *left = left.saturating_sub(1);
        }
    }

    fn hint(self, phase: Phase) -> (usize, Option<usize>) {
        match (phase, self.0) {
            (Phase::Done, _) => (0, Some(0)),
            (Phase::Pending, _) => (0, None),
            (Phase::Running, Some(left)) => (left, Some(left)),
            (Phase::Running, None) => (usize::MAX, None),
        }
    }
}

/// Number of tuples `product` yields for pools of the given sizes, each
/// repeated `repeat` times. `None` on overflow.
///
/// # Example
///
/// ```
/// use iterforge_ops::count_product;
///
/// assert_eq!(count_product(&[2], 3), Some(8));
/// assert_eq!(count_product(&[4, 3], 1), Some(12));
/// assert_eq!(count_product(&[], 1), Some(1));
/// ```
pub fn count_product(pool_sizes: &[usize], repeat: usize) -> Option<usize> {
    let once = pool_sizes
        .iter()
        .try_fold(1usize, |acc, &size| acc.checked_mul(size))?;
    let repeat = u32::try_from(repeat).ok()?;
    once.checked_pow(repeat)
}

/// Number of `r`-permutations of `n` items, `n! / (n - r)!`.
///
/// Zero when `r > n`; `None` on overflow.
pub fn count_permutations(n: usize, r: usize) -> Option<usize> {
    if r > n {
        return Some(0);
    }
    ((n - r + 1)..=n).try_fold(1usize, |acc, factor| acc.checked_mul(factor))
}

/// Binomial coefficient `C(n, r)`; zero when `r > n`, `None` on overflow.
///
/// # Example
///
/// ```
/// use iterforge_ops::count_combinations;
///
/// assert_eq!(count_combinations(5, 2), Some(10));
/// assert_eq!(count_combinations(2, 5), Some(0));
/// ```
pub fn count_combinations(n: usize, r: usize) -> Option<usize> {
    if r > n {
        return Some(0);
    }
    if r == 0 || r == n {
        return Some(1);
    }

    let r = r.min(n - r);
    let mut result: usize = 1;
    for i in 0..r {
        // Exact at every step: the partial product is C(n, i + 1).
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Multiset coefficient `C(n + r - 1, r)`.
///
/// An empty pool has exactly one 0-tuple and no longer ones.
pub fn count_combinations_with_replacement(n: usize, r: usize) -> Option<usize> {
    if n == 0 {
        return Some(usize::from(r == 0));
    }
    count_combinations(n.checked_add(r)? - 1, r)
}
