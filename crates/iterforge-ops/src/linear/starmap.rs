//! Argument-unpacking map.

use std::iter::{Fuse, FusedIterator};

/// A callable invoked with a tuple unpacked as positional arguments.
///
/// Implemented for every `FnMut` taking one to six arguments, so a closure
/// `|a: A, b: B| ...` is a `StarFn<(A, B)>`.
pub trait StarFn<Args> {
    /// The callable's return type.
    type Output;

    /// Calls `self` with the fields of `args` as arguments.
    fn call_star(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_star_fn {
    ($($ty:ident $arg:ident),+) => {
        impl<Func, Out, $($ty),+> StarFn<($($ty,)+)> for Func
        where
            Func: FnMut($($ty),+) -> Out,
        {
            type Output = Out;

            #[inline]
            fn call_star(&mut self, ($($arg,)+): ($($ty,)+)) -> Out {
                self($($arg),+)
            }
        }
    };
}

impl_star_fn!(A a);
impl_star_fn!(A a, B b);
impl_star_fn!(A a, B b, C c);
impl_star_fn!(A a, B b, C c, D d);
impl_star_fn!(A a, B b, C c, D d, E e);
impl_star_fn!(A a, B b, C c, D d, E e, G g);

/// Applies a [`StarFn`] to each upstream tuple.
#[derive(Debug, Clone)]
pub struct StarMap<I, F> {
    source: Fuse<I>,
    func: F,
}

/// Maps `func` over `iterable`, unpacking each element into arguments.
///
/// Closure parameter types usually need annotating, since they are inferred
/// through [`StarFn`] rather than directly from `FnMut`.
///
/// # Example
///
/// ```
/// use iterforge_ops::starmap;
///
/// let powers: Vec<i32> =
///     starmap(vec![(2, 5), (3, 2), (10, 3)], |base: i32, exp: u32| base.pow(exp)).collect();
/// assert_eq!(powers, vec![32, 9, 1000]);
/// ```
pub fn starmap<I, F>(iterable: I, func: F) -> StarMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: StarFn<I::Item>,
{
    StarMap {
        source: iterable.into_iter().fuse(),
        func,
    }
}

impl<I, F> Iterator for StarMap<I, F>
where
    I: Iterator,
    F: StarFn<I::Item>,
{
    type Item = F::Output;

    #[inline]
    fn next(&mut self) -> Option<F::Output> {
        let args = self.source.next()?;
        Some(self.func.call_star(args))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> FusedIterator for StarMap<I, F>
where
    I: Iterator,
    F: StarFn<I::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_test::{CountingSource, FlakySource};

    #[test]
    fn unary_tuples() {
        let got: Vec<i32> = starmap(vec![(1,), (2,)], |x: i32| x * 10).collect();
        assert_eq!(got, vec![10, 20]);
    }

    #[test]
    fn ternary_tuples() {
        let got: Vec<String> = starmap(
            vec![("a", 1, true), ("b", 2, false)],
            |name: &str, n: usize, upper: bool| {
                let s = name.repeat(n);
                if upper {
                    s.to_uppercase()
                } else {
                    s
                }
            },
        )
        .collect();
        assert_eq!(got, vec!["A", "bb"]);
    }

    #[test]
    fn six_arguments() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, g: u8| a + b + c + d + e + g;
        let got: Vec<u8> = starmap([(1, 2, 3, 4, 5, 6)], sum).collect();
        assert_eq!(got, vec![21]);
    }

    #[test]
    fn lazy_and_sticky() {
        let (source, pulls) = CountingSource::new(vec![(1, 2)]);
        let mut mapped = starmap(source, |a: i32, b: i32| a - b);
        assert_eq!(pulls.get(), 0);
        assert_eq!(mapped.next(), Some(-1));

        let mut flaky = starmap(FlakySource::new(vec![(1, 1), (2, 2)], 1), |a: i32, b: i32| a * b);
        assert_eq!(flaky.next(), Some(1));
        assert_eq!(flaky.next(), None);
        assert_eq!(flaky.next(), None);
    }
}
