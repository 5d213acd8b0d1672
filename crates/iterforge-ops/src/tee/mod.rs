//! Fan-out of one single-pass source into independent handles.
//!
//! All handles share one buffer and one upstream cursor. A handle that lags
//! behind reads from the buffer; the most advanced handle pulls upstream and
//! appends. Elements every live handle has passed are evicted from the front,
//! so retained memory is the spread between the slowest and fastest handle.
//!
//! # Architecture
//!
//! - [`tee`] / [`tee_pair`]: construct the handles.
//! - [`Tee`]: one handle. Cloning it adds a handle at the same position;
//!   dropping it releases its position so it no longer pins the buffer.
//!
//! Handles can be advanced from different threads in any interleaving; the
//! shared state sits behind a mutex.

use std::collections::VecDeque;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::sync::{Arc, Mutex, MutexGuard};

use iterforge_core::{IterForgeError, Result};
use tracing::{debug, trace, warn};

/// Buffer and cursors shared by every handle of one fan-out.
struct TeeShared<I: Iterator> {
    source: Fuse<I>,
    /// Elements not yet consumed by every live handle.
    buffer: VecDeque<I::Item>,
    /// Logical position of `buffer[0]`.
    base: usize,
    /// Logical position of each handle; `None` once the handle is dropped.
    cursors: Vec<Option<usize>>,
}

impl<I: Iterator> TeeShared<I> {
    fn new_shared(source: I, handles: usize) -> Arc<Mutex<Self>> {
        debug!(handles, "tee created");
        Arc::new(Mutex::new(Self {
            source: source.fuse(),
            buffer: VecDeque::new(),
            base: 0,
            cursors: vec![Some(0); handles],
        }))
    }

    /// Reuses a released slot before growing the table.
    fn claim_slot(&mut self, position: Option<usize>) -> usize {
        match self.cursors.iter().position(Option::is_none) {
            Some(slot) => {
                self.cursors[slot] = position;
                slot
            }
            None => {
                self.cursors.push(position);
                self.cursors.len() - 1
            }
        }
    }

    /// Logical position one past the newest buffered element.
    fn tail(&self) -> usize {
        self.base + self.buffer.len()
    }

    /// Drops front elements that no live handle can still read.
    fn evict(&mut self) {
        let tail = self.tail();
        let slowest = self.cursors.iter().flatten().copied().min().unwrap_or(tail);
        let consumed = slowest.saturating_sub(self.base).min(self.buffer.len());
        if consumed > 0 {
            self.buffer.drain(..consumed);
            self.base += consumed;
            trace!(
                evicted = consumed,
                buffered = self.buffer.len(),
                "tee evicted consumed elements"
            );
        }
    }
}

fn lock<I: Iterator>(shared: &Mutex<TeeShared<I>>) -> MutexGuard<'_, TeeShared<I>> {
    // Every update completes under the guard, so a poisoned state is still
    // consistent.
    shared.lock().unwrap_or_else(|poisoned| {
        warn!("tee buffer lock was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// One independent view over a shared source.
pub struct Tee<I: Iterator> {
    shared: Arc<Mutex<TeeShared<I>>>,
    slot: usize,
    done: bool,
}

/// Splits `iterable` into `n` handles that each yield the full sequence.
///
/// # Errors
///
/// Returns [`IterForgeError::Config`] when `n` is zero.
///
/// # Example
///
/// ```
/// use iterforge_ops::tee;
///
/// let mut handles = tee(0..5, 3).unwrap();
/// let first: Vec<i32> = handles[0].by_ref().collect();
/// assert_eq!(first, vec![0, 1, 2, 3, 4]);
/// assert_eq!(handles[1].next(), Some(0));
/// assert_eq!(handles[1].by_ref().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// assert_eq!(handles[2].by_ref().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// ```
pub fn tee<I>(iterable: I, n: usize) -> Result<Vec<Tee<I::IntoIter>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if n == 0 {
        return Err(IterForgeError::config("tee needs at least 1 handle"));
    }
    let shared = TeeShared::new_shared(iterable.into_iter(), n);
    Ok((0..n)
        .map(|slot| Tee::attach(Arc::clone(&shared), slot))
        .collect())
}

/// Splits `iterable` into two handles.
///
/// # Example
///
/// ```
/// use iterforge_ops::tee_pair;
///
/// let (left, right) = tee_pair("AB".chars());
/// let pairs: Vec<(char, char)> = left.zip(right.skip(1)).collect();
/// assert_eq!(pairs, vec![('A', 'B')]);
/// ```
pub fn tee_pair<I>(iterable: I) -> (Tee<I::IntoIter>, Tee<I::IntoIter>)
where
    I: IntoIterator,
    I::Item: Clone,
{
    let shared = TeeShared::new_shared(iterable.into_iter(), 2);
    (Tee::attach(Arc::clone(&shared), 0), Tee::attach(shared, 1))
}

impl<I: Iterator> Tee<I> {
    fn attach(shared: Arc<Mutex<TeeShared<I>>>, slot: usize) -> Self {
        Self {
            shared,
            slot,
            done: false,
        }
    }

    /// Number of elements currently held in the shared buffer.
    pub fn buffered_len(&self) -> usize {
        lock(&self.shared).buffer.len()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let mut shared = lock(&self.shared);
        let position = shared.cursors[self.slot]?;
        let offset = position - shared.base;

        let item = if offset < shared.buffer.len() {
            shared.buffer[offset].clone()
        } else {
            let Some(item) = shared.source.next() else {
                self.done = true;
                return None;
            };
            shared.buffer.push_back(item.clone());
            item
        };
        shared.cursors[self.slot] = Some(position + 1);
        shared.evict();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let shared = lock(&self.shared);
        let ahead = shared.cursors[self.slot].map_or(0, |position| shared.tail() - position);
        let (lo, hi) = shared.source.size_hint();
        (
            lo.saturating_add(ahead),
            hi.and_then(|hi| hi.checked_add(ahead)),
        )
    }
}

impl<I> FusedIterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Tee<I> {
    /// Creates another handle positioned where this one is.
    fn clone(&self) -> Self {
        let mut shared = lock(&self.shared);
        let position = shared.cursors[self.slot];
        let slot = shared.claim_slot(position);
        trace!(slot, "tee handle cloned");
        Self {
            shared: Arc::clone(&self.shared),
            slot,
            done: self.done,
        }
    }
}

impl<I: Iterator> Drop for Tee<I> {
    fn drop(&mut self) {
        let mut shared = lock(&self.shared);
        shared.cursors[self.slot] = None;
        shared.evict();
        debug!(slot = self.slot, "tee handle released");
    }
}

impl<I: Iterator> fmt::Debug for Tee<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tee")
            .field("slot", &self.slot)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
