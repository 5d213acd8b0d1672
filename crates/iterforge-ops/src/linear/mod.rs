//! Linear transforms: single-pass pipeline stages with little or no state.
//!
//! Each adaptor holds its upstream source(s) and parameters. Every `next()`
//! pulls upstream zero or more times until it can produce an output or
//! confirm exhaustion; only [`cycle`] buffers elements.

mod accumulate;
mod chain;
mod compress;
mod infinite;
mod islice;
mod predicate;
mod starmap;
mod zip_longest;

pub use accumulate::{accumulate, accumulate_with, try_accumulate_with, Accumulate, AddOp};
pub use chain::{chain, Chain};
pub use compress::{compress, Compress};
pub use infinite::{count, count_by, cycle, repeat, repeat_n, Count, Cycle, Repeat};
pub use islice::{islice, islice_to, ISlice};
pub use predicate::{
    dropwhile, filterfalse, takewhile, try_dropwhile, try_filterfalse, try_takewhile, DropWhile,
    FilterFalse, TakeWhile,
};
pub use starmap::{starmap, StarFn, StarMap};
pub use zip_longest::{zip_longest, zip_longest_fill, ZipLongest, ZipLongestFill};
