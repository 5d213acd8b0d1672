//! Slicing by discarding.

use std::iter::{Fuse, FusedIterator};

use iterforge_core::{IterForgeError, Result};

/// Yields the elements at indices `start, start + step, ...` below `stop`.
///
/// Skipped elements are pulled and dropped, so the cost is proportional to
/// the last index reached rather than to the number of elements yielded.
/// No element past `stop` is ever pulled and nothing is buffered.
#[derive(Debug, Clone)]
pub struct ISlice<I> {
    source: Fuse<I>,
    /// Index of the next element upstream will produce.
    position: usize,
    /// Index of the next element to yield.
    next_index: usize,
    stop: Option<usize>,
    step: usize,
    done: bool,
}

/// Slices `iterable` like `seq[start:stop:step]`.
///
/// `stop = None` runs until the upstream is exhausted, which never happens
/// for an infinite source.
///
/// # Errors
///
/// Returns [`IterForgeError::Config`] when `step` is zero.
///
/// # Example
///
/// ```
/// use iterforge_ops::{count, islice};
///
/// let picked: Vec<u64> = islice(count(0), 12_345, Some(10_000_000), 1_000_000)
///     .unwrap()
///     .collect();
/// assert_eq!(picked.len(), 10);
/// assert_eq!(picked[0], 12_345);
/// assert_eq!(picked[9], 9_012_345);
///
/// assert!(islice(0..10, 0, None, 0).is_err());
/// ```
pub fn islice<I>(
    iterable: I,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> Result<ISlice<I::IntoIter>>
where
    I: IntoIterator,
{
    if step == 0 {
        return Err(IterForgeError::config("islice step must be at least 1"));
    }
    let next_index = match stop {
        Some(stop) => start.min(stop),
        None => start,
    };
    Ok(ISlice {
        source: iterable.into_iter().fuse(),
        position: 0,
        next_index,
        stop,
        step,
        done: false,
    })
}

/// The single-bound form: the first `stop` elements.
///
/// # Example
///
/// ```
/// use iterforge_ops::islice_to;
///
/// let head: String = islice_to("ABCDEFG".chars(), 2).collect();
/// assert_eq!(head, "AB");
/// ```
pub fn islice_to<I>(iterable: I, stop: usize) -> ISlice<I::IntoIter>
where
    I: IntoIterator,
{
    ISlice {
        source: iterable.into_iter().fuse(),
        position: 0,
        next_index: 0,
        stop: Some(stop),
        step: 1,
        done: false,
    }
}

impl<I: Iterator> ISlice<I> {
    fn finish(&mut self) -> Option<I::Item> {
        self.done = true;
        None
    }
}

impl<I: Iterator> Iterator for ISlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        while self.position < self.next_index {
            if self.source.next().is_none() {
                return self.finish();
            }
            self.position += 1;
        }
        if self.stop.is_some_and(|stop| self.position >= stop) {
            return self.finish();
        }
        let Some(item) = self.source.next() else {
            return self.finish();
        };
        self.position += 1;

        // Cap at `stop` so the skip loop never runs past it.
        self.next_index = match (self.next_index.checked_add(self.step), self.stop) {
            (Some(next), Some(stop)) => next.min(stop),
            (Some(next), None) => next,
            (None, Some(stop)) => stop,
            (None, None) => usize::MAX,
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = |upper: usize| {
            let limit = self.stop.map_or(upper, |stop| stop.min(upper));
            if limit <= self.next_index {
                0
            } else {
                (limit - self.next_index).div_ceil(self.step)
            }
        };
        let (lo, hi) = self.source.size_hint();
        let lo = remaining(self.position.saturating_add(lo));
        let hi = match (hi, self.stop) {
            (Some(hi), _) => Some(remaining(self.position.saturating_add(hi))),
            (None, Some(stop)) => Some(remaining(stop)),
            (None, None) => None,
        };
        (lo, hi)
    }
}

impl<I: Iterator> FusedIterator for ISlice<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::count;
    use iterforge_test::CountingSource;

    fn letters(start: usize, stop: Option<usize>, step: usize) -> String {
        islice("ABCDEFG".chars(), start, stop, step)
            .unwrap()
            .collect()
    }

    #[test]
    fn slicing_forms() {
        assert_eq!(islice_to("ABCDEFG".chars(), 2).collect::<String>(), "AB");
        assert_eq!(letters(2, Some(4), 1), "CD");
        assert_eq!(letters(2, None, 1), "CDEFG");
        assert_eq!(letters(0, None, 2), "ACEG");
    }

    #[test]
    fn start_past_stop_is_empty() {
        assert_eq!(letters(5, Some(3), 1), "");
    }

    #[test]
    fn stop_past_end() {
        assert_eq!(letters(4, Some(100), 2), "EG");
    }

    #[test]
    fn zero_step_rejected() {
        let err = islice(0..3, 0, None, 0).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn never_pulls_past_stop() {
        let (source, pulls) = CountingSource::new((0..100).collect());
        let got: Vec<i32> = islice(source, 1, Some(7), 3).unwrap().collect();
        assert_eq!(got, vec![1, 4]);
        // Indices 0..=4 for the two hits, then 5 and 6 skipped up to stop.
        assert_eq!(pulls.get(), 7);
    }

    #[test]
    fn lazy_construction() {
        let (source, pulls) = CountingSource::new(vec![1, 2, 3]);
        let _slice = islice(source, 2, None, 1).unwrap();
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn infinite_source_with_stop_terminates() {
        let picked: Vec<u64> = islice(count(0u64), 12_345, Some(10_000_000), 1_000_000)
            .unwrap()
            .collect();
        let expected: Vec<u64> = (0..10).map(|i| 12_345 + i * 1_000_000).collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn infinite_source_without_stop_is_unbounded() {
        let mut slice = islice(count(0u64), 12_345, None, 1_000_000).unwrap();
        assert_eq!(slice.size_hint().1, None);
        assert_eq!(slice.next(), Some(12_345));
        assert_eq!(slice.next(), Some(1_012_345));
    }

    #[test]
    fn exact_size_hint_over_finite_source() {
        let slice = islice(0..10, 1, Some(8), 2).unwrap();
        assert_eq!(slice.size_hint(), (4, Some(4)));
        assert_eq!(slice.count(), 4);
    }

    #[test]
    fn sticky_exhaustion() {
        let mut slice = islice_to(vec![1], 5);
        assert_eq!(slice.next(), Some(1));
        assert_eq!(slice.next(), None);
        assert_eq!(slice.next(), None);
    }
}
