//! Lockstep zipping that runs to the longest input.

use std::iter::{Fuse, FusedIterator};

/// Rows of `Option<T>`, one slot per source, until every source is exhausted.
#[derive(Debug, Clone)]
pub struct ZipLongest<I> {
    sources: Vec<Fuse<I>>,
    done: bool,
}

/// Zips `sources` in lockstep; an exhausted source contributes `None`.
///
/// Zero sources yield nothing.
///
/// # Example
///
/// ```
/// use iterforge_ops::zip_longest;
///
/// let rows: Vec<Vec<Option<char>>> = zip_longest(["AB".chars(), "xyz".chars()]).collect();
/// assert_eq!(rows, vec![
///     vec![Some('A'), Some('x')],
///     vec![Some('B'), Some('y')],
///     vec![None, Some('z')],
/// ]);
/// ```
pub fn zip_longest<S>(sources: S) -> ZipLongest<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let sources: Vec<_> = sources
        .into_iter()
        .map(|source| source.into_iter().fuse())
        .collect();
    let done = sources.is_empty();
    ZipLongest { sources, done }
}

impl<I: Iterator> Iterator for ZipLongest<I> {
    type Item = Vec<Option<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let row: Vec<Option<I::Item>> = self.sources.iter_mut().map(Iterator::next).collect();
        if row.iter().all(Option::is_none) {
            self.done = true;
            return None;
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    _ => None,
                };
                (lo.max(l), hi)
            })
    }
}

impl<I: Iterator> FusedIterator for ZipLongest<I> {}

/// [`ZipLongest`] with exhausted slots replaced by a fill value.
#[derive(Debug, Clone)]
pub struct ZipLongestFill<I: Iterator> {
    inner: ZipLongest<I>,
    fill: I::Item,
}

/// Zips `sources` in lockstep, filling exhausted slots with `fill`.
///
/// # Example
///
/// ```
/// use iterforge_ops::zip_longest_fill;
///
/// let rows: Vec<String> = zip_longest_fill(["ABCD".chars(), "xy".chars()], '-')
///     .map(|row| row.into_iter().collect())
///     .collect();
/// assert_eq!(rows, vec!["Ax", "By", "C-", "D-"]);
/// ```
pub fn zip_longest_fill<S, T>(
    sources: S,
    fill: T,
) -> ZipLongestFill<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Clone,
{
    ZipLongestFill {
        inner: zip_longest(sources),
        fill,
    }
}

impl<I> Iterator for ZipLongestFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let row = self.inner.next()?;
        Some(
            row.into_iter()
                .map(|slot| slot.unwrap_or_else(|| self.fill.clone()))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for ZipLongestFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::{CountingSource, FlakySource};

    #[test]
    fn fill_rows_match_longest_source() {
        let sources = vec![
            vec!["1", "2"],
            vec!["3", "4", "7"],
            vec!["5"],
            vec!["6"],
        ];
        let rows: Vec<Vec<&str>> = zip_longest_fill(sources, "?").collect();
        assert_eq!(
            rows,
            vec![
                vec!["1", "3", "5", "6"],
                vec!["2", "4", "?", "?"],
                vec!["?", "7", "?", "?"],
            ]
        );
    }

    #[test]
    fn no_sources_yield_nothing() {
        let mut rows = zip_longest(Vec::<Vec<i32>>::new());
        assert_eq!(rows.size_hint(), (0, Some(0)));
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn all_empty_sources() {
        assert_eq!(zip_longest(vec![Vec::<u8>::new(), vec![]]).count(), 0);
    }

    #[test]
    fn size_hint_is_longest() {
        let rows = zip_longest(vec![vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(rows.size_hint(), (3, Some(3)));
    }

    #[test]
    fn exhausted_source_not_pulled_again() {
        let (short, short_pulls) = CountingSource::new(vec![1]);
        let (long, _) = CountingSource::new(vec![1, 2, 3]);
        let rows: Vec<Vec<Option<i32>>> = zip_longest(vec![short, long]).collect();
        assert_eq!(rows.len(), 3);
        // One hit, then the pull that revealed the end.
        assert_eq!(short_pulls.get(), 2);
    }

    #[test]
    fn gap_in_one_source_does_not_resume() {
        let rows: Vec<Vec<Option<i32>>> =
            zip_longest(vec![FlakySource::new(vec![1, 2], 1), FlakySource::new(vec![7, 8, 9], 3)])
                .collect();
        assert_eq!(
            rows,
            vec![
                vec![Some(1), Some(7)],
                vec![None, Some(8)],
                vec![None, Some(9)],
            ]
        );
    }
}
