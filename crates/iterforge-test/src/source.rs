//! Instrumented upstream sources.
//!
//! # Example
//!
//! ```
//! use iterforge_test::source::FlakySource;
//!
//! // Signals exhaustion after the first element, then resumes.
//! let mut source = FlakySource::new(vec![1, 2], 1);
//! assert_eq!(source.next(), Some(1));
//! assert_eq!(source.next(), None);
//! assert_eq!(source.next(), Some(2));
//! assert_eq!(source.next(), None);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle reading how many times a [`CountingSource`] was pulled.
#[derive(Debug, Clone, Default)]
pub struct PullCounter {
    pulls: Arc<AtomicUsize>,
}

impl PullCounter {
    /// Number of `next()` calls made so far, including ones that returned `None`.
    pub fn get(&self) -> usize {
        self.pulls.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.pulls.fetch_add(1, Ordering::SeqCst);
    }
}

/// An upstream that counts every `next()` call made on it.
#[derive(Debug)]
pub struct CountingSource<I> {
    inner: I,
    counter: PullCounter,
}

impl<T> CountingSource<std::vec::IntoIter<T>> {
    /// Creates a counting source over a vector, with its counter.
    pub fn new(items: Vec<T>) -> (Self, PullCounter) {
        Self::wrap(items.into_iter())
    }
}

impl<I: Iterator> CountingSource<I> {
    /// Wraps any iterator, including infinite ones.
    pub fn wrap(inner: I) -> (Self, PullCounter) {
        let counter = PullCounter::default();
        let source = Self {
            inner,
            counter: counter.clone(),
        };
        (source, counter)
    }
}

impl<I: Iterator> Iterator for CountingSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.counter.bump();
        self.inner.next()
    }
}

/// A deliberately non-fused source.
///
/// Returns `None` once after `gap_after` elements, then resumes yielding the
/// remaining elements. Used to check that adaptors keep exhaustion sticky
/// regardless of upstream behaviour.
#[derive(Debug, Clone)]
pub struct FlakySource<T> {
    items: std::vec::IntoIter<T>,
    gap_after: usize,
    yielded: usize,
    gap_taken: bool,
}

impl<T> FlakySource<T> {
    pub fn new(items: Vec<T>, gap_after: usize) -> Self {
        Self {
            items: items.into_iter(),
            gap_after,
            yielded: 0,
            gap_taken: false,
        }
    }
}

impl<T> Iterator for FlakySource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.gap_taken && self.yielded == self.gap_after {
            self.gap_taken = true;
            return None;
        }
        let item = self.items.next()?;
        self.yielded += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        let (source, pulls) = CountingSource::new(vec!['a', 'b']);
        assert_eq!(pulls.get(), 0);
        drop(source);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn counter_counts_exhausting_pull() {
        let (mut source, pulls) = CountingSource::new(vec![1]);
        assert_eq!(source.next(), Some(1));
        assert_eq!(source.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn wrap_infinite() {
        let (source, pulls) = CountingSource::wrap(0u64..);
        let first: Vec<_> = source.take(3).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn flaky_gap_at_start() {
        let mut source = FlakySource::new(vec![7], 0);
        assert_eq!(source.next(), None);
        assert_eq!(source.next(), Some(7));
        assert_eq!(source.next(), None);
    }
}
