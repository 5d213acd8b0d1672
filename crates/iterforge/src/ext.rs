//! Method-call forms of the adaptors.

use std::ops::Add;

use iterforge_core::{BoxError, Fallible, Result, Total, Truthy};
use iterforge_ops::{
    Accumulate, AddOp, Combinations, CombinationsWithReplacement, Compress, Cycle, DropWhile,
    FilterFalse, GroupBy, ISlice, Permutations, Product, StarFn, StarMap, TakeWhile, Tee,
    ZipLongest,
};

/// Extension methods available on every [`Iterator`].
///
/// Names avoid the inherent [`Iterator`] methods (`cycle`, `take_while`,
/// `product`, ...) so both can be used side by side.
///
/// # Example
///
/// ```
/// use iterforge::prelude::*;
///
/// let runs: Vec<(char, usize)> = "aaabcc"
///     .chars()
///     .groupby(|c| *c)
///     .map(|(key, group)| (key, group.count()))
///     .collect();
/// assert_eq!(runs, vec![('a', 3), ('b', 1), ('c', 2)]);
///
/// let pairs: Vec<Vec<i32>> = (1..=3).combinations(2).collect();
/// assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// See [`iterforge_ops::groupby`].
    fn groupby<K, F>(self, key: F) -> GroupBy<Self, Total<F>>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq + Clone,
    {
        iterforge_ops::groupby(self, key)
    }

    /// See [`iterforge_ops::try_groupby`].
    fn try_groupby<K, E, F>(self, key: F) -> GroupBy<Self, Fallible<F>>
    where
        F: FnMut(&Self::Item) -> std::result::Result<K, E>,
        K: PartialEq + Clone,
        E: Into<BoxError>,
    {
        iterforge_ops::try_groupby(self, key)
    }

    /// See [`iterforge_ops::tee`].
    fn tee(self, n: usize) -> Result<Vec<Tee<Self>>>
    where
        Self::Item: Clone,
    {
        iterforge_ops::tee(self, n)
    }

    /// See [`iterforge_ops::islice`].
    fn islice(self, start: usize, stop: Option<usize>, step: usize) -> Result<ISlice<Self>> {
        iterforge_ops::islice(self, start, stop, step)
    }

    /// See [`iterforge_ops::dropwhile`].
    fn dropwhile<F>(self, predicate: F) -> DropWhile<Self, Total<F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        iterforge_ops::dropwhile(self, predicate)
    }

    /// See [`iterforge_ops::try_dropwhile`].
    fn try_dropwhile<E, F>(self, predicate: F) -> DropWhile<Self, Fallible<F>>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, E>,
        E: Into<BoxError>,
    {
        iterforge_ops::try_dropwhile(self, predicate)
    }

    /// See [`iterforge_ops::takewhile`].
    fn takewhile<F>(self, predicate: F) -> TakeWhile<Self, Total<F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        iterforge_ops::takewhile(self, predicate)
    }

    /// See [`iterforge_ops::try_takewhile`].
    fn try_takewhile<E, F>(self, predicate: F) -> TakeWhile<Self, Fallible<F>>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, E>,
        E: Into<BoxError>,
    {
        iterforge_ops::try_takewhile(self, predicate)
    }

    /// See [`iterforge_ops::filterfalse`].
    fn filterfalse<F>(self, predicate: F) -> FilterFalse<Self, Total<F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        iterforge_ops::filterfalse(self, predicate)
    }

    /// See [`iterforge_ops::try_filterfalse`].
    fn try_filterfalse<E, F>(self, predicate: F) -> FilterFalse<Self, Fallible<F>>
    where
        F: FnMut(&Self::Item) -> std::result::Result<bool, E>,
        E: Into<BoxError>,
    {
        iterforge_ops::try_filterfalse(self, predicate)
    }

    /// See [`iterforge_ops::starmap`].
    fn starmap<F>(self, func: F) -> StarMap<Self, F>
    where
        F: StarFn<Self::Item>,
    {
        iterforge_ops::starmap(self, func)
    }

    /// Running sums. See [`iterforge_ops::accumulate`].
    fn accumulate(self) -> Accumulate<Self, Total<AddOp<Self::Item>>>
    where
        Self::Item: Clone + Add<Output = Self::Item>,
    {
        iterforge_ops::accumulate(self)
    }

    /// See [`iterforge_ops::accumulate_with`].
    fn accumulate_with<F>(self, op: F) -> Accumulate<Self, Total<F>>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        iterforge_ops::accumulate_with(self, op)
    }

    /// See [`iterforge_ops::try_accumulate_with`].
    fn try_accumulate_with<E, F>(self, op: F) -> Accumulate<Self, Fallible<F>>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> std::result::Result<Self::Item, E>,
        E: Into<BoxError>,
    {
        iterforge_ops::try_accumulate_with(self, op)
    }

    /// See [`iterforge_ops::compress`].
    fn compress<S>(self, selectors: S) -> Compress<Self, S::IntoIter>
    where
        S: IntoIterator,
        S::Item: Truthy,
    {
        iterforge_ops::compress(self, selectors)
    }

    /// Zips `self` with `others` until all are exhausted.
    /// See [`iterforge_ops::zip_longest`].
    fn zip_longest_with<O>(self, others: O) -> ZipLongest<Self>
    where
        O: IntoIterator<Item = Self>,
    {
        iterforge_ops::zip_longest(std::iter::once(self).chain(others))
    }

    /// Buffers one pass, then replays it forever. See [`iterforge_ops::cycle`].
    fn cycle_buffered(self) -> Cycle<Self>
    where
        Self::Item: Clone,
    {
        iterforge_ops::cycle(self)
    }

    /// See [`iterforge_ops::product_repeat`].
    fn product_repeat(self, repeat: usize) -> Product<Self>
    where
        Self::Item: Clone,
    {
        iterforge_ops::product_repeat(self, repeat)
    }

    /// See [`iterforge_ops::permutations`].
    fn permutations(self, r: Option<usize>) -> Permutations<Self>
    where
        Self::Item: Clone,
    {
        iterforge_ops::permutations(self, r)
    }

    /// See [`iterforge_ops::combinations`].
    fn combinations(self, r: usize) -> Combinations<Self>
    where
        Self::Item: Clone,
    {
        iterforge_ops::combinations(self, r)
    }

    /// See [`iterforge_ops::combinations_with_replacement`].
    fn combinations_with_replacement(self, r: usize) -> CombinationsWithReplacement<Self>
    where
        Self::Item: Clone,
    {
        iterforge_ops::combinations_with_replacement(self, r)
    }
}

impl<I: Iterator> SequenceExt for I {}
