//! Predicate-driven adaptors: `dropwhile`, `takewhile`, `filterfalse`.
//!
//! Each adaptor is generic over a [`Projection`] returning `bool`, so the
//! same struct serves the infallible constructors (which yield `T`) and the
//! `try_` constructors (which yield `Result<T, IterForgeError>` and end after
//! the first callback failure).
//!
//! `dropwhile` and `takewhile` over the same input do not partition it:
//! the first failing element is discarded by `takewhile` but is the first
//! output of `dropwhile`.
//!
//! [`IterForgeError`]: iterforge_core::IterForgeError

use std::iter::{Fuse, FusedIterator};

use iterforge_core::{BoxError, Fallible, Outcome, Projection, Total};

/// Discards elements while the predicate holds, then yields everything.
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    source: Fuse<I>,
    predicate: P,
    dropping: bool,
    done: bool,
}

/// Yields elements while the predicate holds, then ends.
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    source: Fuse<I>,
    predicate: P,
    done: bool,
}

/// Yields elements for which the predicate is false.
#[derive(Debug, Clone)]
pub struct FilterFalse<I, P> {
    source: Fuse<I>,
    predicate: P,
    done: bool,
}

/// Skips the leading run of elements satisfying `predicate`.
///
/// The predicate is never consulted again once it has failed.
///
/// # Example
///
/// ```
/// use iterforge_ops::dropwhile;
///
/// let rest: Vec<i32> = dropwhile(vec![1, 4, 6, 4, 1], |x| *x < 5).collect();
/// assert_eq!(rest, vec![6, 4, 1]);
/// ```
pub fn dropwhile<I, F>(iterable: I, predicate: F) -> DropWhile<I::IntoIter, Total<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    DropWhile::new(iterable.into_iter(), Total(predicate))
}

/// [`dropwhile`] with a fallible predicate.
pub fn try_dropwhile<I, F, E>(iterable: I, predicate: F) -> DropWhile<I::IntoIter, Fallible<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<bool, E>,
    E: Into<BoxError>,
{
    DropWhile::new(iterable.into_iter(), Fallible(predicate))
}

/// Yields the leading run of elements satisfying `predicate`.
///
/// The first failing element is consumed and discarded.
///
/// # Example
///
/// ```
/// use iterforge_ops::takewhile;
///
/// let head: Vec<i32> = takewhile(vec![1, 4, 6, 4, 1], |x| *x < 5).collect();
/// assert_eq!(head, vec![1, 4]);
/// ```
pub fn takewhile<I, F>(iterable: I, predicate: F) -> TakeWhile<I::IntoIter, Total<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    TakeWhile::new(iterable.into_iter(), Total(predicate))
}

/// [`takewhile`] with a fallible predicate.
pub fn try_takewhile<I, F, E>(iterable: I, predicate: F) -> TakeWhile<I::IntoIter, Fallible<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<bool, E>,
    E: Into<BoxError>,
{
    TakeWhile::new(iterable.into_iter(), Fallible(predicate))
}

/// Complement of a filter: keeps elements for which `predicate` is false.
///
/// # Example
///
/// ```
/// use iterforge_ops::filterfalse;
///
/// let odd: Vec<i32> = filterfalse(0..10, |x| x % 2 == 0).collect();
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
pub fn filterfalse<I, F>(iterable: I, predicate: F) -> FilterFalse<I::IntoIter, Total<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    FilterFalse::new(iterable.into_iter(), Total(predicate))
}

/// [`filterfalse`] with a fallible predicate.
pub fn try_filterfalse<I, F, E>(
    iterable: I,
    predicate: F,
) -> FilterFalse<I::IntoIter, Fallible<F>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Result<bool, E>,
    E: Into<BoxError>,
{
    FilterFalse::new(iterable.into_iter(), Fallible(predicate))
}

impl<I: Iterator, P> DropWhile<I, P> {
    fn new(source: I, predicate: P) -> Self {
        Self {
            source: source.fuse(),
            predicate,
            dropping: true,
            done: false,
        }
    }
}

impl<I, P> DropWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    fn pull(&mut self) -> Option<Result<I::Item, P::Error>> {
        if self.done {
            return None;
        }
        loop {
            let Some(item) = self.source.next() else {
                self.done = true;
                return None;
            };
            if !self.dropping {
                return Some(Ok(item));
            }
            match self.predicate.apply(&item) {
                Ok(true) => continue,
                Ok(false) => {
                    self.dropping = false;
                    return Some(Ok(item));
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    type Item = <P::Error as Outcome>::Wrapped<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().map(<P::Error as Outcome>::wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.source.size_hint();
        if self.dropping {
            (0, hi)
        } else {
            (lo, hi)
        }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
}

impl<I: Iterator, P> TakeWhile<I, P> {
    fn new(source: I, predicate: P) -> Self {
        Self {
            source: source.fuse(),
            predicate,
            done: false,
        }
    }
}

impl<I, P> TakeWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    fn pull(&mut self) -> Option<Result<I::Item, P::Error>> {
        if self.done {
            return None;
        }
        let Some(item) = self.source.next() else {
            self.done = true;
            return None;
        };
        match self.predicate.apply(&item) {
            Ok(true) => Some(Ok(item)),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    type Item = <P::Error as Outcome>::Wrapped<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().map(<P::Error as Outcome>::wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
}

impl<I: Iterator, P> FilterFalse<I, P> {
    fn new(source: I, predicate: P) -> Self {
        Self {
            source: source.fuse(),
            predicate,
            done: false,
        }
    }
}

impl<I, P> FilterFalse<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    fn pull(&mut self) -> Option<Result<I::Item, P::Error>> {
        if self.done {
            return None;
        }
        loop {
            let Some(item) = self.source.next() else {
                self.done = true;
                return None;
            };
            match self.predicate.apply(&item) {
                Ok(true) => continue,
                Ok(false) => return Some(Ok(item)),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
    type Item = <P::Error as Outcome>::Wrapped<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.pull().map(<P::Error as Outcome>::wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: Iterator,
    P: Projection<I::Item, Output = bool>,
{
}
