//! Shared test fixtures for iterforge crates.
//!
//! This crate provides instrumented sources and logging setup for tests.
//! It does NOT depend on `iterforge-ops` so the engine can use it as a
//! dev-dependency without a cycle.
//!
//! - [`source`] - pull-counting and non-fused upstream sources
//! - [`logging`] - tracing subscriber setup for test output
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! iterforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use iterforge_test::source::CountingSource;
//!
//! let (source, pulls) = CountingSource::new(vec![1, 2, 3]);
//! assert_eq!(pulls.get(), 0);
//! assert_eq!(source.collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(pulls.get(), 4);
//! ```

pub mod logging;
pub mod source;

pub use logging::init_test_tracing;
pub use source::{CountingSource, FlakySource, PullCounter};
