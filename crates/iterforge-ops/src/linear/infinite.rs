//! Possibly-infinite producers: `count`, `cycle`, `repeat`.
//!
//! None of these bound themselves. Callers must limit consumption with
//! `islice`, `takewhile`, [`Iterator::take`] or an explicit `break`.

use std::iter::{Fuse, FusedIterator};
use std::ops::Add;

use num_traits::One;
use tracing::debug;

/// Endless arithmetic progression `start, start + step, start + 2*step, ...`.
#[derive(Debug, Clone)]
pub struct Count<T> {
    next: T,
    step: T,
}

/// Counts upward from `start` by one. Never ends.
///
/// # Example
///
/// ```
/// use iterforge_ops::count;
///
/// let first: Vec<u32> = count(10).take(3).collect();
/// assert_eq!(first, vec![10, 11, 12]);
/// ```
pub fn count<T>(start: T) -> Count<T>
where
    T: Clone + Add<Output = T> + One,
{
    Count {
        next: start,
        step: T::one(),
    }
}

/// Counts from `start` by `step`. Never ends; a zero step repeats `start`.
///
/// # Example
///
/// ```
/// use iterforge_ops::count_by;
///
/// let evens: Vec<i32> = count_by(10, 2).take_while(|&i| i <= 40).collect();
/// assert_eq!(evens, vec![10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40]);
/// ```
pub fn count_by<T>(start: T, step: T) -> Count<T>
where
    T: Clone + Add<Output = T>,
{
    Count { next: start, step }
}

impl<T> Iterator for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let following = self.next.clone() + self.step.clone();
        Some(std::mem::replace(&mut self.next, following))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Count<T> where T: Clone + Add<Output = T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CyclePhase {
    Buffering,
    Replaying,
    Empty,
}

/// Replays a finite source forever.
///
/// The first pass yields upstream elements while copying them into a buffer;
/// later passes replay the buffer. An empty source yields nothing.
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    source: Fuse<I>,
    buffer: Vec<I::Item>,
    cursor: usize,
    phase: CyclePhase,
}

/// Cycles through `iterable` endlessly.
///
/// # Example
///
/// ```
/// use iterforge_ops::cycle;
///
/// let ten: Vec<i32> = cycle(vec![5, 4, 3, 2, 1]).take(10).collect();
/// assert_eq!(ten, vec![5, 4, 3, 2, 1, 5, 4, 3, 2, 1]);
/// ```
pub fn cycle<I>(iterable: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        source: iterable.into_iter().fuse(),
        buffer: Vec::new(),
        cursor: 0,
        phase: CyclePhase::Buffering,
    }
}

impl<I> Cycle<I>
where
    I: Iterator,
{
    /// Number of elements buffered so far.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.phase {
            CyclePhase::Empty => None,
            CyclePhase::Buffering => match self.source.next() {
                Some(item) => {
                    self.buffer.push(item.clone());
                    Some(item)
                }
                None if self.buffer.is_empty() => {
                    self.phase = CyclePhase::Empty;
                    None
                }
                None => {
                    debug!(len = self.buffer.len(), "cycle buffer complete, replaying");
                    self.phase = CyclePhase::Replaying;
                    self.cursor = 1 % self.buffer.len();
                    self.buffer.first().cloned()
                }
            },
            CyclePhase::Replaying => {
                let item = self.buffer.get(self.cursor).cloned();
                self.cursor = (self.cursor + 1) % self.buffer.len();
                item
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            CyclePhase::Empty => (0, Some(0)),
            CyclePhase::Replaying => (usize::MAX, None),
            CyclePhase::Buffering if self.buffer.is_empty() => match self.source.size_hint() {
                (0, Some(0)) => (0, Some(0)),
                _ => (0, None),
            },
            CyclePhase::Buffering => (usize::MAX, None),
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

/// Yields clones of one element, endlessly or a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    element: T,
    remaining: Option<usize>,
}

/// Repeats `element` forever.
///
/// # Example
///
/// ```
/// use iterforge_ops::repeat;
///
/// assert_eq!(repeat(1).take(5).sum::<i32>(), 5);
/// ```
pub fn repeat<T: Clone>(element: T) -> Repeat<T> {
    Repeat {
        element,
        remaining: None,
    }
}

/// Repeats `element` exactly `times` times.
///
/// # Example
///
/// ```
/// use iterforge_ops::repeat_n;
///
/// let a: Vec<&str> = repeat_n("a", 5).collect();
/// assert_eq!(a, vec!["a", "a", "a", "a", "a"]);
/// ```
pub fn repeat_n<T: Clone>(element: T, times: usize) -> Repeat<T> {
    Repeat {
        element,
        remaining: Some(times),
    }
}

impl<T> Repeat<T> {
    /// Returns true when no bound was given.
    pub fn is_never_ending(&self) -> bool {
        self.remaining.is_none()
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self.remaining.as_mut() {
            None => Some(self.element.clone()),
            Some(0) => None,
            Some(left) => {
                *left -= 1;
                Some(self.element.clone())
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (usize::MAX, None),
            Some(left) => (left, Some(left)),
        }
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::{CountingSource, FlakySource};

    #[test]
    fn count_from_start() {
        let got: Vec<i64> = count(-2).take(4).collect();
        assert_eq!(got, vec![-2, -1, 0, 1]);
    }

    #[test]
    fn count_by_float_step() {
        let got: Vec<f64> = count_by(0.5, 0.25).take(3).collect();
        assert_eq!(got, vec![0.5, 0.75, 1.0]);
    }

    #[test]
    fn count_zero_step() {
        let got: Vec<i32> = count_by(7, 0).take(3).collect();
        assert_eq!(got, vec![7, 7, 7]);
    }

    #[test]
    fn cycle_tuple_source() {
        let got: Vec<i32> = cycle([1, 2, 3]).take(10).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn cycle_buffers_source_once() {
        let (source, pulls) = CountingSource::new(vec!['A', 'B']);
        let mut cycled = cycle(source);
        assert_eq!(pulls.get(), 0);
        let got: String = cycled.by_ref().take(7).collect();
        assert_eq!(got, "ABABABA");
        // Two elements plus the pull that revealed the end.
        assert_eq!(pulls.get(), 3);
        assert_eq!(cycled.buffered_len(), 2);
    }

    #[test]
    fn cycle_single_element() {
        let got: Vec<u8> = cycle(vec![9]).take(3).collect();
        assert_eq!(got, vec![9, 9, 9]);
    }

    #[test]
    fn cycle_empty_is_sticky() {
        let mut cycled = cycle(Vec::<i32>::new());
        assert_eq!(cycled.next(), None);
        assert_eq!(cycled.next(), None);
        assert_eq!(cycled.size_hint(), (0, Some(0)));
    }

    #[test]
    fn cycle_stops_buffering_at_first_gap() {
        // The upstream gap counts as the end of the first pass.
        let got: Vec<i32> = cycle(FlakySource::new(vec![1, 2, 3], 2)).take(5).collect();
        assert_eq!(got, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn repeat_bounded_and_sticky() {
        let mut rep = repeat_n(10, 3);
        assert_eq!(rep.size_hint(), (3, Some(3)));
        assert_eq!(rep.by_ref().collect::<Vec<_>>(), vec![10, 10, 10]);
        assert_eq!(rep.next(), None);
        assert!(!rep.is_never_ending());
    }

    #[test]
    fn repeat_zero_times() {
        assert_eq!(repeat_n("x", 0).count(), 0);
    }

    #[test]
    fn repeat_unbounded() {
        let rep = repeat('z');
        assert!(rep.is_never_ending());
        assert_eq!(rep.take(100).count(), 100);
    }
}
