//! Sequential concatenation.

use std::iter::{Fuse, FusedIterator};

/// Concatenates the inner sources of an outer source, in order.
///
/// The outer source is pulled only when the current inner source is
/// exhausted, so both `chain(p, q, ...)` and `chain.from_iterable` are
/// covered by the same adaptor.
pub struct Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    sources: Fuse<O>,
    current: Option<<O::Item as IntoIterator>::IntoIter>,
}

/// Chains an iterable of iterables into one sequence.
///
/// # Example
///
/// ```
/// use iterforge_ops::chain;
///
/// let joined: Vec<i32> = chain([vec![1, 2, 3], vec![4, 5, 6]]).collect();
/// assert_eq!(joined, vec![1, 2, 3, 4, 5, 6]);
///
/// let letters: String = chain(["ABC", "DEF"].map(str::chars)).collect();
/// assert_eq!(letters, "ABCDEF");
/// ```
pub fn chain<O>(iterables: O) -> Chain<O::IntoIter>
where
    O: IntoIterator,
    O::Item: IntoIterator,
{
    Chain {
        sources: iterables.into_iter().fuse(),
        current: None,
    }
}

impl<O> Iterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }
            self.current = Some(self.sources.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        match self.sources.size_hint() {
            (0, Some(0)) => (lo, hi),
            _ => (lo, None),
        }
    }
}

impl<O> FusedIterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
}

impl<O> std::fmt::Debug for Chain<O>
where
    O: Iterator + std::fmt::Debug,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("sources", &self.sources)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::{CountingSource, FlakySource};

    #[test]
    fn mixed_sources_as_strings() {
        let numbers = [1, 2, 3].map(|i| i.to_string());
        let more = [4, 5, 6].map(|i| i.to_string());
        let letters = "aabc".chars().map(String::from).collect::<Vec<_>>();
        let got: Vec<String> = chain([numbers.to_vec(), more.to_vec(), letters]).collect();
        assert_eq!(got, vec!["1", "2", "3", "4", "5", "6", "a", "a", "b", "c"]);
    }

    #[test]
    fn skips_empty_inner_sources() {
        let got: Vec<u8> = chain(vec![vec![], vec![1], vec![], vec![2, 3], vec![]]).collect();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn outer_source_pulled_lazily() {
        let (outer, pulls) = CountingSource::new(vec![vec![1, 2], vec![3]]);
        let mut chained = chain(outer);
        assert_eq!(pulls.get(), 0);
        assert_eq!(chained.next(), Some(1));
        assert_eq!(chained.next(), Some(2));
        assert_eq!(pulls.get(), 1);
        assert_eq!(chained.next(), Some(3));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn inner_exhaustion_checked_once() {
        // A non-fused inner source is abandoned at its first `None`.
        let mut chained = chain(vec![FlakySource::new(vec![1, 2], 1)]);
        assert_eq!(chained.next(), Some(1));
        assert_eq!(chained.next(), None);
        assert_eq!(chained.next(), None);
    }
}
