//! iterforge Core - shared contracts for lazy sequences
//!
//! This crate provides the fundamental abstractions every iterforge adaptor
//! builds on:
//! - [`Sequence`]: the pull-based, single-pass, sticky-exhaustion contract
//! - Callback strategies ([`Projection`], [`Reducer`]) with infallible and
//!   fallible wrappers
//! - [`Truthy`] interpretation for selector values
//! - [`IterForgeError`] for configuration and callback failures

pub mod callback;
pub mod error;
pub mod sequence;
pub mod truthy;

pub use callback::{Fallible, Outcome, Projection, Reducer, Total};
pub use error::{BoxError, IterForgeError, Result};
pub use sequence::Sequence;
pub use truthy::Truthy;
