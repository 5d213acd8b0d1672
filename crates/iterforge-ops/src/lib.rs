//! iterforge Ops - lazy sequence adaptors
//!
//! This crate provides every adaptor as a free constructor function
//! returning a concrete iterator type:
//! - Linear transforms (`count`, `cycle`, `repeat`, `accumulate`, `chain`,
//!   `compress`, `dropwhile`, `takewhile`, `filterfalse`, `islice`,
//!   `starmap`, `zip_longest`)
//! - Adjacency grouping (`groupby`)
//! - Fan-out into independent handles (`tee`)
//! - Combinatoric generators (`product`, `permutations`, `combinations`,
//!   `combinations_with_replacement`)
//! - Configuration wiring (builder module)
//!
//! Construction never pulls from upstream. Every adaptor is a
//! [`FusedIterator`](std::iter::FusedIterator): once it returns `None` it
//! keeps returning `None`, whatever its upstream does afterwards.
//!
//! `count`, `cycle` and `repeat` never end on their own. Bound them with
//! `islice`, `takewhile`, [`Iterator::take`] or an explicit `break`.
//!
//! # Example
//!
//! ```
//! use iterforge_ops::{accumulate, chain, takewhile};
//!
//! let sums: Vec<i32> = takewhile(accumulate(chain([vec![1, 2], vec![3, 4]])), |s| *s < 10)
//!     .collect();
//! assert_eq!(sums, vec![1, 3, 6]);
//! ```

pub mod builder;
pub mod combinatoric;
pub mod group;
pub mod linear;
pub mod tee;

pub use builder::{missing_section, SequenceBuilder};
pub use combinatoric::{
    combinations, combinations_with_replacement, count_combinations,
    count_combinations_with_replacement, count_permutations, count_product, permutations, product,
    product_repeat, product_with, Combinations, CombinationsWithReplacement, Permutations, Product,
};
pub use group::{groupby, groupby_identity, try_groupby, Group, GroupBy};
pub use linear::{
    accumulate, accumulate_with, chain, compress, count, count_by, cycle, dropwhile, filterfalse,
    islice, islice_to, repeat, repeat_n, starmap, takewhile, try_accumulate_with, try_dropwhile,
    try_filterfalse, try_takewhile, zip_longest, zip_longest_fill, Accumulate, AddOp, Chain,
    Compress, Count, Cycle, DropWhile, FilterFalse, ISlice, Repeat, StarFn, StarMap, TakeWhile,
    ZipLongest, ZipLongestFill,
};
pub use tee::{tee, tee_pair, Tee};
