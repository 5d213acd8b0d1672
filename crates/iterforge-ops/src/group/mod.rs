//! Adjacency grouping.
//!
//! [`groupby`] partitions an upstream sequence into maximal runs of adjacent
//! elements whose projected keys compare equal, in encounter order. It is not
//! a global group-by: equal keys separated by a different key produce
//! separate groups. Sort the input by a compatible key first if global
//! grouping is wanted.
//!
//! # Group lifetime
//!
//! The parent [`GroupBy`] and every [`Group`] it hands out share one upstream
//! cursor. Advancing the parent skips whatever the current group has not yet
//! yielded, and the skipped members are gone: the old `Group` yields nothing
//! afterwards. Drain each group before asking for the next if its members are
//! needed.
//!
//! # Example
//!
//! ```
//! use iterforge_ops::groupby;
//!
//! let runs: Vec<(char, String)> = groupby("AAAABBBCCDAABBB".chars(), |c| *c)
//!     .map(|(key, group)| (key, group.collect()))
//!     .collect();
//! let keys: String = runs.iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, "ABCDAB");
//! assert_eq!(runs[0].1, "AAAA");
//! assert_eq!(runs[3].1, "D");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::rc::Rc;

use iterforge_core::{BoxError, Fallible, Outcome, Projection, Total};
use tracing::trace;

/// State shared between a [`GroupBy`] and its groups.
struct GroupState<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    source: Fuse<I>,
    key_fn: P,
    /// One-element lookahead: the next upstream element with its key.
    peeked: Option<(P::Output, I::Item)>,
    /// Key of the group handed out most recently.
    current_key: Option<P::Output>,
    /// Bumped whenever a new group starts; older groups compare stale.
    generation: u64,
    /// Key failure waiting to be reported by the parent.
    error: Option<P::Error>,
    /// Upstream exhausted or a key failure was reported.
    done: bool,
}

impl<I, P> GroupState<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq,
{
    /// Ensures the peek slot is filled. Returns false at the end of input or
    /// after a key failure.
    fn fill(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        if self.done || self.error.is_some() {
            return false;
        }
        let Some(item) = self.source.next() else {
            self.done = true;
            return false;
        };
        match self.key_fn.apply(&item) {
            Ok(key) => {
                self.peeked = Some((key, item));
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    fn peeked_in_current_group(&self) -> bool {
        match (&self.peeked, &self.current_key) {
            (Some((key, _)), Some(current)) => key == current,
            _ => false,
        }
    }
}

/// Iterator over `(key, group)` pairs of adjacent equal-key runs.
///
/// Yields `(K, Group)` from [`groupby`] and `Result<(K, Group)>` from
/// [`try_groupby`].
pub struct GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    state: Rc<RefCell<GroupState<I, P>>>,
}

/// The members of one run, valid until the parent [`GroupBy`] advances.
pub struct Group<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    state: Rc<RefCell<GroupState<I, P>>>,
    generation: u64,
    done: bool,
}

/// Groups adjacent elements of `iterable` by `key`.
///
/// # Example
///
/// ```
/// use iterforge_ops::groupby;
///
/// let sizes: Vec<usize> = groupby(vec![1, 1, 2, 2, 1, 1], |x| *x)
///     .map(|(_, group)| group.count())
///     .collect();
/// assert_eq!(sizes, vec![2, 2, 2]);
/// ```
pub fn groupby<I, F, K>(iterable: I, key: F) -> GroupBy<I::IntoIter, Total<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq + Clone,
{
    GroupBy::new(iterable.into_iter(), Total(key))
}

/// Groups adjacent equal elements, using each element as its own key.
pub fn groupby_identity<I>(
    iterable: I,
) -> GroupBy<I::IntoIter, Total<fn(&I::Item) -> I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
{
    GroupBy::new(
        iterable.into_iter(),
        Total(<I::Item as Clone>::clone as fn(&I::Item) -> I::Item),
    )
}

/// [`groupby`] with a fallible key function.
///
/// A key failure ends the current group; the parent then yields the error
/// once and is exhausted.
pub fn try_groupby<I, F, K, E>(iterable: I, key: F) -> GroupBy<I::IntoIter, Fallible<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<K, E>,
    K: PartialEq + Clone,
    E: Into<BoxError>,
{
    GroupBy::new(iterable.into_iter(), Fallible(key))
}

impl<I, P> GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    fn new(source: I, key_fn: P) -> Self {
        Self {
            state: Rc::new(RefCell::new(GroupState {
                source: source.fuse(),
                key_fn,
                peeked: None,
                current_key: None,
                generation: 0,
                error: None,
                done: false,
            })),
        }
    }
}

impl<I, P> GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq + Clone,
{
    fn pull(&mut self) -> Option<Result<(P::Output, Group<I, P>), P::Error>> {
        let mut state = self.state.borrow_mut();

        // Skip whatever the current group left unconsumed.
        while state.fill() && state.peeked_in_current_group() {
            state.peeked = None;
        }

        if let Some(err) = state.error.take() {
            state.done = true;
            return Some(Err(err));
        }
        let key = state.peeked.as_ref().map(|(key, _)| key.clone())?;
        state.current_key = Some(key.clone());
        state.generation += 1;
        let generation = state.generation;
        trace!(generation, "groupby opened a new group");
        drop(state);

        Some(Ok((
            key,
            Group {
                state: Rc::clone(&self.state),
                generation,
                done: false,
            },
        )))
    }
}

impl<I, P> Iterator for GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq + Clone,
{
    type Item = <P::Error as Outcome>::Wrapped<(P::Output, Group<I, P>)>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().map(<P::Error as Outcome>::wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let state = self.state.borrow();
        if state.done && state.peeked.is_none() {
            return (0, Some(0));
        }
        // Every remaining element could start its own group, or none could.
        let buffered = usize::from(state.peeked.is_some());
        let hi = state.source.size_hint().1;
        (0, hi.and_then(|hi| hi.checked_add(buffered)))
    }
}

impl<I, P> FusedIterator for GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq + Clone,
{
}

impl<I, P> Group<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    /// Returns true once the parent has moved on to a later group.
    pub fn is_stale(&self) -> bool {
        self.state.borrow().generation != self.generation
    }
}

impl<I, P> Iterator for Group<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let mut state = self.state.borrow_mut();
        if state.generation != self.generation
            || !state.fill()
            || !state.peeked_in_current_group()
        {
            self.done = true;
            return None;
        }
        state.peeked.take().map(|(_, item)| item)
    }
}

impl<I, P> FusedIterator for Group<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
    P::Output: PartialEq,
{
}

impl<I, P> fmt::Debug for GroupBy<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("GroupBy");
        if let Ok(state) = self.state.try_borrow() {
            out.field("generation", &state.generation)
                .field("done", &state.done);
        }
        out.finish_non_exhaustive()
    }
}

impl<I, P> fmt::Debug for Group<I, P>
where
    I: Iterator,
    P: Projection<I::Item>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("generation", &self.generation)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
