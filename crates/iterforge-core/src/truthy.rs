//! Boolean interpretation of selector values.
//!
//! `compress` accepts selectors of any type implementing [`Truthy`]: numbers
//! are truthy when non-zero, containers and strings when non-empty, and
//! `Option` when it holds a truthy value.

/// A value with a boolean interpretation.
///
/// # Example
///
/// ```
/// use iterforge_core::Truthy;
///
/// assert!(1i32.is_truthy());
/// assert!(!0u8.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(true).is_truthy());
/// assert!(!None::<bool>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns true if the value counts as "selected".
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert!(1i32.is_truthy());
        assert!(!0i64.is_truthy());
        assert!((-3isize).is_truthy());
        assert!(0.5f64.is_truthy());
        assert!(!0.0f32.is_truthy());
    }

    #[test]
    fn containers() {
        assert!("a".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(vec![0u8].is_truthy());
        assert!(!Vec::<u8>::new().is_truthy());
        let empty: &[i32] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn options_and_refs() {
        assert!(Some(2i32).is_truthy());
        assert!(!Some(0u64).is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!((&&true).is_truthy());
        assert!(!'\0'.is_truthy());
        assert!('x'.is_truthy());
    }
}
