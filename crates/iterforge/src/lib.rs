//! iterforge - lazy, composable iteration primitives
//!
//! Free constructor functions for every adaptor, plus [`SequenceExt`] for
//! method-call chaining. Nothing is pulled from an upstream until the
//! returned iterator is advanced, and every adaptor stays exhausted once it
//! has returned `None`.
//!
//! # Example
//!
//! ```rust
//! use iterforge::prelude::*;
//!
//! let (evens, odds) = tee_pair(0..10);
//! let evens: Vec<i32> = evens.filterfalse(|x| x % 2 == 1).collect();
//! let odds: Vec<i32> = odds.filterfalse(|x| x % 2 == 0).collect();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//! assert_eq!(odds, vec![1, 3, 5, 7, 9]);
//!
//! let words: Vec<String> = product_repeat("AB".chars(), 2)
//!     .map(|tuple| tuple.into_iter().collect())
//!     .collect();
//! assert_eq!(words, vec!["AA", "AB", "BA", "BB"]);
//! ```

// Shared contracts
pub use iterforge_core::{
    BoxError, Fallible, IterForgeError, Outcome, Projection, Reducer, Result, Sequence, Total,
    Truthy,
};

// Configuration
pub use iterforge_config::{
    CombinatoricConfig, CombinatoricParams, ConfigError, CountConfig, IterConfig, RepeatConfig,
    SliceBounds, SliceConfig, TeeConfig,
};

// Adaptors
pub use iterforge_ops::{
    accumulate, accumulate_with, chain, combinations, combinations_with_replacement, compress,
    count, count_by, count_combinations, count_combinations_with_replacement, count_permutations,
    count_product, cycle, dropwhile, filterfalse, groupby, groupby_identity, islice, islice_to,
    permutations, product, product_repeat, product_with, repeat, repeat_n, starmap, takewhile,
    tee, tee_pair, try_accumulate_with, try_dropwhile, try_filterfalse, try_groupby,
    try_takewhile, zip_longest, zip_longest_fill, SequenceBuilder,
};

/// Adaptor types, for naming return values.
pub mod adaptors {
    pub use iterforge_ops::{
        Accumulate, AddOp, Chain, Combinations, CombinationsWithReplacement, Compress, Count,
        Cycle, DropWhile, FilterFalse, Group, GroupBy, ISlice, Permutations, Product, Repeat,
        StarFn, StarMap, TakeWhile, Tee, ZipLongest, ZipLongestFill,
    };
}

mod ext;
pub use ext::SequenceExt;

pub mod prelude {
    pub use super::SequenceExt;
    pub use super::{
        accumulate, accumulate_with, chain, combinations, combinations_with_replacement,
        compress, count, count_by, cycle, dropwhile, filterfalse, groupby, islice, islice_to,
        permutations, product, product_repeat, repeat, repeat_n, starmap, takewhile, tee,
        tee_pair, zip_longest, zip_longest_fill,
    };
    pub use super::{IterForgeError, Result};
}
