//! Caller-supplied callback strategies.
//!
//! Adaptors never take closures directly as their strategy type. They take a
//! [`Projection`] (one argument, by reference) or a [`Reducer`] (two owned
//! arguments), implemented by two wrappers:
//!
//! - [`Total`] wraps an infallible closure. Its error type is [`Infallible`].
//! - [`Fallible`] wraps a closure returning `Result<_, E>`. Failures become
//!   [`IterForgeError::Callback`].
//!
//! [`Outcome`] maps the callback's error type to what an adaptor yields:
//! plain `T` for [`Infallible`], `Result<T>` for [`IterForgeError`]. A single
//! adaptor struct therefore serves both `dropwhile` and `try_dropwhile`.
//!
//! # Example
//!
//! ```
//! use iterforge_core::{Fallible, Projection, Total};
//!
//! let mut is_small = Total(|x: &i32| *x < 5);
//! assert_eq!(is_small.apply(&3), Ok(true));
//!
//! let mut parse = Fallible(|s: &&str| s.parse::<i32>());
//! assert_eq!(parse.apply(&"42").unwrap(), 42);
//! assert!(parse.apply(&"x").is_err());
//! ```

use std::convert::Infallible;

use crate::error::{BoxError, IterForgeError};

/// A single-argument callback: key functions and predicates.
pub trait Projection<T> {
    /// The value computed from an element.
    type Output;

    /// The failure type; [`Infallible`] for total callbacks.
    type Error: Outcome;

    /// Evaluates the callback on one element.
    fn apply(&mut self, item: &T) -> Result<Self::Output, Self::Error>;
}

/// A binary fold callback: `reduce(previous_output, next_input)`.
pub trait Reducer<T> {
    /// The failure type; [`Infallible`] for total callbacks.
    type Error: Outcome;

    /// Combines the running value with the next input.
    fn reduce(&mut self, acc: T, item: T) -> Result<T, Self::Error>;
}

/// Wraps an infallible closure.
#[derive(Debug, Clone, Copy)]
pub struct Total<F>(pub F);

/// Wraps a closure returning `Result`; errors surface as callback errors.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<T, K, F> Projection<T> for Total<F>
where
    F: FnMut(&T) -> K,
{
    type Output = K;
    type Error = Infallible;

    #[inline]
    fn apply(&mut self, item: &T) -> Result<K, Infallible> {
        Ok((self.0)(item))
    }
}

impl<T, K, E, F> Projection<T> for Fallible<F>
where
    F: FnMut(&T) -> Result<K, E>,
    E: Into<BoxError>,
{
    type Output = K;
    type Error = IterForgeError;

    #[inline]
    fn apply(&mut self, item: &T) -> Result<K, IterForgeError> {
        (self.0)(item).map_err(IterForgeError::callback)
    }
}

impl<T, F> Reducer<T> for Total<F>
where
    F: FnMut(T, T) -> T,
{
    type Error = Infallible;

    #[inline]
    fn reduce(&mut self, acc: T, item: T) -> Result<T, Infallible> {
        Ok((self.0)(acc, item))
    }
}

impl<T, E, F> Reducer<T> for Fallible<F>
where
    F: FnMut(T, T) -> Result<T, E>,
    E: Into<BoxError>,
{
    type Error = IterForgeError;

    #[inline]
    fn reduce(&mut self, acc: T, item: T) -> Result<T, IterForgeError> {
        (self.0)(acc, item).map_err(IterForgeError::callback)
    }
}

/// Maps a callback error type to the item type an adaptor yields.
pub trait Outcome: Sized {
    /// What an adaptor over `T` yields per element.
    type Wrapped<T>;

    /// Converts a callback result into the yielded item.
    fn wrap<T>(result: Result<T, Self>) -> Self::Wrapped<T>;
}

impl Outcome for Infallible {
    type Wrapped<T> = T;

    #[inline]
    fn wrap<T>(result: Result<T, Self>) -> T {
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl Outcome for IterForgeError {
    type Wrapped<T> = Result<T, IterForgeError>;

    #[inline]
    fn wrap<T>(result: Result<T, Self>) -> Result<T, IterForgeError> {
        result
    }
}
