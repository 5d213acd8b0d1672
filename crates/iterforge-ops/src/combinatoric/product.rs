//! Cartesian product.

use tracing::debug;

use super::{count_product, IndexVec, Phase, Remaining};

/// Cartesian product of several pools, optionally repeated.
///
/// Index vector position `p` points into pool `p % pools.len()`, so
/// `repeat` never copies a pool. Advancement is odometer style: the
/// rightmost index increments first and carries left on overflow.
#[derive(Debug, Clone)]
pub struct Product<I: Iterator> {
    /// Upstreams, drained into `pools` on the first `next()`.
    sources: Vec<I>,
    pools: Vec<Vec<I::Item>>,
    repeat: usize,
    indices: IndexVec,
    phase: Phase,
    remaining: Remaining,
}

/// Cartesian product of `sources`, rightmost source varying fastest.
///
/// No sources yields one empty tuple; any empty source yields nothing.
///
/// # Example
///
/// ```
/// use iterforge_ops::product;
///
/// let pairs: Vec<String> = product(["ABCD".chars(), "xy".chars()])
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["Ax", "Ay", "Bx", "By", "Cx", "Cy", "Dx", "Dy"]);
/// ```
pub fn product<S>(sources: S) -> Product<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone,
{
    product_with(sources, 1)
}

/// Product of one source with itself, `repeat` times.
///
/// # Example
///
/// ```
/// use iterforge_ops::product_repeat;
///
/// let words: Vec<String> = product_repeat("AB".chars(), 3)
///     .map(|tuple| tuple.into_iter().collect())
///     .collect();
/// assert_eq!(words, vec!["AAA", "AAB", "ABA", "ABB", "BAA", "BAB", "BBA", "BBB"]);
/// ```
pub fn product_repeat<I>(source: I, repeat: usize) -> Product<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    product_with([source], repeat)
}

/// Product of `sources` repeated `repeat` times, like
/// `product(a, b, a, b)` for `product_with([a, b], 2)`.
pub fn product_with<S>(sources: S, repeat: usize) -> Product<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone,
{
    Product {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        pools: Vec::new(),
        repeat,
        indices: IndexVec::new(),
        phase: Phase::Pending,
        remaining: Remaining(None),
    }
}

impl<I> Product<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn pool_len(&self, position: usize) -> usize {
        self.pools[position % self.pools.len()].len()
    }

    /// Gathers every pool and sets up the first tuple.
    fn start(&mut self) -> bool {
        self.pools = std::mem::take(&mut self.sources)
            .into_iter()
            .map(|source| source.fuse().collect())
            .collect();
        let sizes: Vec<usize> = self.pools.iter().map(Vec::len).collect();
        let width = sizes.len().saturating_mul(self.repeat);
        debug!(pools = sizes.len(), repeat = self.repeat, width, "product pools gathered");

        self.remaining = Remaining(count_product(&sizes, self.repeat));
        if width > 0 && sizes.contains(&0) {
            return false;
        }
        self.indices.resize(width, 0);
        true
    }

    fn advance(&mut self) -> bool {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.pool_len(position) {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }

    fn current_tuple(&self) -> Vec<I::Item> {
        let width = self.pools.len();
        self.indices
            .iter()
            .enumerate()
            .map(|(position, &index)| self.pools[position % width][index].clone())
            .collect()
    }
}

index_walk_iterator!(Product);
