//! Running folds.

use std::iter::{Fuse, FusedIterator};
use std::ops::Add;

use iterforge_core::{BoxError, Fallible, Outcome, Reducer, Total};

/// Running fold over an upstream sequence.
///
/// The first output is the first input unchanged; every later output is
/// `op(previous_output, next_input)`. There is no seed value.
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, R> {
    source: Fuse<I>,
    reducer: R,
    total: Option<I::Item>,
    done: bool,
}

/// The default operator: addition.
pub type AddOp<T> = fn(T, T) -> T;

/// Running sums.
///
/// # Example
///
/// ```
/// use iterforge_ops::accumulate;
///
/// let sums: Vec<i32> = accumulate(vec![1, 2, 3, 4, 5]).collect();
/// assert_eq!(sums, vec![1, 3, 6, 10, 15]);
/// ```
pub fn accumulate<I>(iterable: I) -> Accumulate<I::IntoIter, Total<AddOp<I::Item>>>
where
    I: IntoIterator,
    I::Item: Clone + Add<Output = I::Item>,
{
    accumulate_with(iterable, <I::Item as Add>::add as AddOp<I::Item>)
}

/// Running fold with a custom binary operator.
///
/// # Example
///
/// ```
/// use iterforge_ops::accumulate_with;
///
/// let products: Vec<i32> = accumulate_with(vec![5, 4, 3, 2, 1], |a, b| a * b).collect();
/// assert_eq!(products, vec![5, 20, 60, 120, 120]);
///
/// let weighted: Vec<i32> = accumulate_with(vec![5, 4, 3, 2, 1], |x, y| x + 2 * y).collect();
/// assert_eq!(weighted, vec![5, 13, 19, 23, 25]);
/// ```
pub fn accumulate_with<I, F>(iterable: I, op: F) -> Accumulate<I::IntoIter, Total<F>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate::new(iterable.into_iter(), Total(op))
}

/// Running fold with a fallible operator.
///
/// Yields `Err` for the step whose operator failed, then ends.
pub fn try_accumulate_with<I, F, E>(iterable: I, op: F) -> Accumulate<I::IntoIter, Fallible<F>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
    E: Into<BoxError>,
{
    Accumulate::new(iterable.into_iter(), Fallible(op))
}

impl<I: Iterator, R> Accumulate<I, R> {
    fn new(source: I, reducer: R) -> Self {
        Self {
            source: source.fuse(),
            reducer,
            total: None,
            done: false,
        }
    }
}

impl<I, R> Accumulate<I, R>
where
    I: Iterator,
    I::Item: Clone,
    R: Reducer<I::Item>,
{
    fn pull(&mut self) -> Option<Result<I::Item, R::Error>> {
        if self.done {
            return None;
        }
        let Some(item) = self.source.next() else {
            self.done = true;
            return None;
        };
        let next = match self.total.take() {
            None => item,
            Some(total) => match self.reducer.reduce(total, item) {
                Ok(next) => next,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            },
        };
        self.total = Some(next.clone());
        Some(Ok(next))
    }
}

impl<I, R> Iterator for Accumulate<I, R>
where
    I: Iterator,
    I::Item: Clone,
    R: Reducer<I::Item>,
{
    type Item = <R::Error as Outcome>::Wrapped<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().map(<R::Error as Outcome>::wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.source.size_hint()
        }
    }
}

impl<I, R> FusedIterator for Accumulate<I, R>
where
    I: Iterator,
    I::Item: Clone,
    R: Reducer<I::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::{CountingSource, FlakySource};

    #[test]
    fn first_output_is_first_input() {
        let got: Vec<i32> = accumulate_with(vec![7, 1, 1], |_, b| b * 100).collect();
        assert_eq!(got, vec![7, 100, 100]);
    }

    #[test]
    fn sums_strings_by_concatenation() {
        let got: Vec<String> = accumulate_with(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            |acc, s| acc + &s,
        )
        .collect();
        assert_eq!(got, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn empty_source() {
        assert_eq!(accumulate(Vec::<i32>::new()).next(), None);
    }

    #[test]
    fn lazy_until_first_pull() {
        let (source, pulls) = CountingSource::new(vec![1, 2]);
        let mut acc = accumulate(source);
        assert_eq!(pulls.get(), 0);
        assert_eq!(acc.next(), Some(1));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn exhaustion_is_sticky_over_flaky_source() {
        let mut acc = accumulate(FlakySource::new(vec![1, 2, 3], 1));
        assert_eq!(acc.next(), Some(1));
        assert_eq!(acc.next(), None);
        assert_eq!(acc.next(), None);
    }

    #[test]
    fn fallible_operator_reports_and_stops() {
        let mut acc = try_accumulate_with(vec![200u8, 50, 10, 1], |a: u8, b: u8| {
            a.checked_add(b).ok_or("overflow")
        });
        assert_eq!(acc.next().unwrap().unwrap(), 200);
        assert_eq!(acc.next().unwrap().unwrap(), 250);
        let err = acc.next().unwrap().unwrap_err();
        assert!(err.is_callback());
        assert!(acc.next().is_none());
    }
}
