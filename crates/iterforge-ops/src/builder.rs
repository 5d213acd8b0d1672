//! Builder module for constructing adaptors from configuration
//!
//! This module provides the wiring between `iterforge-config` sections and
//! the adaptor constructors. Every section is validated before the upstream
//! is touched, so a bad value surfaces as [`IterForgeError::Config`] at
//! construction time.

use iterforge_config::{CombinatoricConfig, CountConfig, RepeatConfig, SliceConfig, TeeConfig};
use iterforge_core::{IterForgeError, Result};
use tracing::debug;

use crate::combinatoric::{
    combinations, combinations_with_replacement, permutations, product_with, Combinations,
    CombinationsWithReplacement, Permutations, Product,
};
use crate::linear::{count_by, islice, repeat, repeat_n, Count, ISlice, Repeat};
use crate::tee::{tee, Tee};

/// Builder for constructing adaptors from configuration sections.
///
/// # Example
///
/// ```
/// use iterforge_config::IterConfig;
/// use iterforge_ops::SequenceBuilder;
///
/// let config = IterConfig::new().with_slice(1, Some(6), 2);
/// let picked: Vec<char> =
///     SequenceBuilder::islice("ABCDEFG".chars(), &config.slice.unwrap_or_default())
///         .unwrap()
///         .collect();
/// assert_eq!(picked, vec!['B', 'D', 'F']);
/// ```
pub struct SequenceBuilder;

impl SequenceBuilder {
    /// Builds an `islice` from a slice section.
    pub fn islice<I: IntoIterator>(
        iterable: I,
        config: &SliceConfig,
    ) -> Result<ISlice<I::IntoIter>> {
        let bounds = config.validate()?;
        debug!(
            start = bounds.start,
            stop = ?bounds.stop,
            step = bounds.step,
            "building islice from config"
        );
        islice(iterable, bounds.start, bounds.stop, bounds.step)
    }

    /// Builds `tee` handles from a tee section.
    pub fn tee<I>(iterable: I, config: &TeeConfig) -> Result<Vec<Tee<I::IntoIter>>>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        tee(iterable, config.validate()?)
    }

    /// Builds a bounded or endless `repeat` from a repeat section.
    pub fn repeat<T: Clone>(element: T, config: &RepeatConfig) -> Result<Repeat<T>> {
        Ok(match config.validate()? {
            Some(times) => repeat_n(element, times),
            None => repeat(element),
        })
    }

    /// Builds an integer `count` from a count section.
    pub fn count(config: &CountConfig) -> Count<i64> {
        count_by(config.start, config.step)
    }

    /// Builds a `product` over `sources`, repeated `config.repeat` times.
    pub fn product<S>(
        sources: S,
        config: &CombinatoricConfig,
    ) -> Result<Product<<S::Item as IntoIterator>::IntoIter>>
    where
        S: IntoIterator,
        S::Item: IntoIterator,
        <S::Item as IntoIterator>::Item: Clone,
    {
        let params = config.validate()?;
        Ok(product_with(sources, params.repeat))
    }

    /// Builds `permutations`; an absent `r` means the full pool length.
    pub fn permutations<I>(
        iterable: I,
        config: &CombinatoricConfig,
    ) -> Result<Permutations<I::IntoIter>>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        let params = config.validate()?;
        Ok(permutations(iterable, params.r))
    }

    /// Builds `combinations`; `r` is required.
    pub fn combinations<I>(
        iterable: I,
        config: &CombinatoricConfig,
    ) -> Result<Combinations<I::IntoIter>>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        Ok(combinations(iterable, config.require_r()?))
    }

    /// Builds `combinations_with_replacement`; `r` is required.
    pub fn combinations_with_replacement<I>(
        iterable: I,
        config: &CombinatoricConfig,
    ) -> Result<CombinationsWithReplacement<I::IntoIter>>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        Ok(combinations_with_replacement(
            iterable,
            config.require_r()?,
        ))
    }
}

/// Error for a section the caller needs but the loaded file lacks.
pub fn missing_section(name: &str) -> IterForgeError {
    IterForgeError::config(format!("missing [{name}] section"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterforge_config::IterConfig;

    #[test]
    fn islice_from_toml() {
        let config = IterConfig::from_toml_str(
            r#"
            [slice]
            start = 2
            stop = 4
            "#,
        )
        .unwrap();
        let slice = config.slice.ok_or_else(|| missing_section("slice")).unwrap();
        let got: String = SequenceBuilder::islice("ABCDEFG".chars(), &slice)
            .unwrap()
            .collect();
        assert_eq!(got, "CD");
    }

    #[test]
    fn negative_slice_rejected() {
        let config = IterConfig::new().with_slice(-1, None, 1);
        let err = SequenceBuilder::islice(0..3, &config.slice.unwrap()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("slice.start"));
    }

    #[test]
    fn tee_from_yaml() {
        let config = IterConfig::from_yaml_str("tee:\n  count: 3\n").unwrap();
        let handles = SequenceBuilder::tee(0..2, &config.tee.unwrap()).unwrap();
        assert_eq!(handles.len(), 3);
        for handle in handles {
            assert_eq!(handle.collect::<Vec<_>>(), vec![0, 1]);
        }
    }

    #[test]
    fn tee_zero_rejected() {
        let config = IterConfig::new().with_tee_count(0);
        assert!(SequenceBuilder::tee(0..2, &config.tee.unwrap()).is_err());
    }

    #[test]
    fn repeat_bounded_and_endless() {
        let bounded = IterConfig::new().with_repeat_times(3);
        let rep = SequenceBuilder::repeat('x', &bounded.repeat.unwrap()).unwrap();
        assert_eq!(rep.count(), 3);

        let endless = SequenceBuilder::repeat('x', &RepeatConfig::default()).unwrap();
        assert!(endless.is_never_ending());

        let negative = IterConfig::new().with_repeat_times(-2);
        assert!(SequenceBuilder::repeat('x', &negative.repeat.unwrap()).is_err());
    }

    #[test]
    fn count_from_config() {
        let config = IterConfig::new().with_count(10, 2);
        let got: Vec<i64> = SequenceBuilder::count(&config.count.unwrap())
            .take(3)
            .collect();
        assert_eq!(got, vec![10, 12, 14]);
    }

    #[test]
    fn combinatorics_from_config() {
        let config = IterConfig::new().with_r(2).with_product_repeat(2);
        let section = config.combinatoric.unwrap();

        assert_eq!(SequenceBuilder::combinations("ABCD".chars(), &section).unwrap().count(), 6);
        assert_eq!(
            SequenceBuilder::combinations_with_replacement("ABCD".chars(), &section)
                .unwrap()
                .count(),
            10
        );
        assert_eq!(SequenceBuilder::permutations("ABCD".chars(), &section).unwrap().count(), 12);
        assert_eq!(SequenceBuilder::product(["AB".chars()], &section).unwrap().count(), 4);
    }

    #[test]
    fn combinations_require_r() {
        let section = CombinatoricConfig::default();
        let err = SequenceBuilder::combinations(0..3, &section).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: combinatoric.r is required");
        // Permutations fall back to the pool length.
        assert_eq!(SequenceBuilder::permutations(0..3, &section).unwrap().count(), 6);
    }
}
