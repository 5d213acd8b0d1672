//! Positional filtering by a selector sequence.

use std::iter::{Fuse, FusedIterator};

use iterforge_core::Truthy;

/// Yields `data[i]` whenever `selectors[i]` is truthy.
///
/// Stops at whichever input ends first. At each position the data element
/// is pulled before its selector.
#[derive(Debug, Clone)]
pub struct Compress<D, S> {
    data: Fuse<D>,
    selectors: Fuse<S>,
    done: bool,
}

/// Filters `data` by the truthiness of the matching `selectors` element.
///
/// # Example
///
/// ```
/// use iterforge_ops::compress;
///
/// let kept: String = compress("ABCDEF".chars(), [1, 0, 1, 0, 1, 1]).collect();
/// assert_eq!(kept, "ACEF");
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::IntoIter, S::IntoIter>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Truthy,
{
    Compress {
        data: data.into_iter().fuse(),
        selectors: selectors.into_iter().fuse(),
        done: false,
    }
}

impl<D, S> Iterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
    type Item = D::Item;

    fn next(&mut self) -> Option<D::Item> {
        while !self.done {
            let Some(item) = self.data.next() else {
                self.done = true;
                break;
            };
            let Some(selector) = self.selectors.next() else {
                self.done = true;
                break;
            };
            if selector.is_truthy() {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (_, data_hi) = self.data.size_hint();
        let (_, sel_hi) = self.selectors.size_hint();
        let hi = match (data_hi, sel_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        (0, hi)
    }
}

impl<D, S> FusedIterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::CountingSource;

    #[test]
    fn shorter_selectors_stop_early() {
        let got: Vec<i32> = compress(vec![1, 2, 3, 4, 5, 6], [1, 0, 1]).collect();
        assert_eq!(got, vec![1, 3]);
    }

    #[test]
    fn shorter_data_stops_early() {
        let got: Vec<char> = compress("AB".chars(), [true, true, true, true]).collect();
        assert_eq!(got, vec!['A', 'B']);
    }

    #[test]
    fn option_selectors() {
        let got: Vec<&str> =
            compress(["x", "y", "z"], [Some(1), None, Some(0)]).collect();
        assert_eq!(got, vec!["x"]);
    }

    #[test]
    fn no_pull_after_shorter_input_ends() {
        let (data, pulls) = CountingSource::new(vec![1, 2, 3, 4]);
        let mut kept = compress(data, [true]);
        assert_eq!(pulls.get(), 0);
        assert_eq!(kept.next(), Some(1));
        assert_eq!(kept.next(), None);
        assert_eq!(kept.next(), None);
        // One hit, one element lost to the missing selector, nothing after.
        assert_eq!(pulls.get(), 2);
    }
}
