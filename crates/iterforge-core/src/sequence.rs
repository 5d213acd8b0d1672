//! The sequence contract shared by every adaptor.
//!
//! A sequence is any [`Iterator`]: pulling with `next()` is the only way to
//! observe progress, and there is no random access. iterforge adaptors add
//! one guarantee on top of `Iterator`: exhaustion is terminal. Once an
//! adaptor returns `None` it keeps returning `None`, even when its upstream
//! is not fused. That guarantee is what [`FusedIterator`] promises, so
//! [`Sequence`] is simply the pair of the two traits.
//!
//! # Infinite sequences
//!
//! `count`, `cycle` and unbounded `repeat` never signal exhaustion. They are
//! ordinary sequences with no termination guarantee: bound them with
//! `islice`, `takewhile`, [`Iterator::take`] or an explicit `break`.
//!
//! # Single pass
//!
//! Advancing a sequence is destructive. Two fresh constructions over the same
//! deterministic input replay identically, but one instance never rewinds.
//! The fan-out engine (`tee`) is the only adaptor that buffers on purpose to
//! give several readers the same elements.

use std::iter::FusedIterator;

/// A pull-based, forward-only, possibly infinite source with sticky exhaustion.
///
/// Blanket-implemented for every fused iterator.
///
/// # Example
///
/// ```
/// use iterforge_core::Sequence;
///
/// fn drain<S: Sequence>(seq: S) -> Vec<S::Item> {
///     seq.collect()
/// }
///
/// assert_eq!(drain(vec![1, 2, 3].into_iter()), vec![1, 2, 3]);
/// ```
pub trait Sequence: Iterator + FusedIterator {}

impl<I: Iterator + FusedIterator> Sequence for I {}
