//! Configuration system for iterforge.
//!
//! Load adaptor parameters from TOML or YAML so slicing windows, fan-out
//! width, repeat counts and combinatoric tuple lengths can change without
//! code changes. Every section uses signed integers so that out-of-domain
//! values can be written down and then rejected by `validate()` at
//! construction time, before any element is pulled.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use iterforge_config::IterConfig;
//!
//! let config = IterConfig::from_toml_str(r#"
//!     [slice]
//!     start = 2
//!     step = 3
//!
//!     [tee]
//!     count = 3
//!
//!     [combinatoric]
//!     r = 2
//! "#).unwrap();
//!
//! let bounds = config.slice.unwrap().validate().unwrap();
//! assert_eq!(bounds.start, 2);
//! assert_eq!(bounds.stop, None);
//! assert_eq!(bounds.step, 3);
//! assert_eq!(config.tee.unwrap().validate().unwrap(), 3);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use iterforge_config::IterConfig;
//!
//! let config = IterConfig::load("iterforge.toml").unwrap_or_default();
//! assert!(config.slice.is_none());
//! ```

use std::path::Path;

use iterforge_core::IterForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for IterForgeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(message) => IterForgeError::Config(message),
            other => IterForgeError::Config(other.to_string()),
        }
    }
}

/// Root configuration: one optional section per configurable adaptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IterConfig {
    /// Slicing window for `islice`.
    #[serde(default)]
    pub slice: Option<SliceConfig>,

    /// Fan-out width for `tee`.
    #[serde(default)]
    pub tee: Option<TeeConfig>,

    /// Repeat count for `repeat`.
    #[serde(default)]
    pub repeat: Option<RepeatConfig>,

    /// Progression for `count`.
    #[serde(default)]
    pub count: Option<CountConfig>,

    /// Tuple length and pool repetition for the combinatoric generators.
    #[serde(default)]
    pub combinatoric: Option<CombinatoricConfig>,
}

impl IterConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the slicing window.
    pub fn with_slice(mut self, start: i64, stop: Option<i64>, step: i64) -> Self {
        self.slice = Some(SliceConfig {
            start: Some(start),
            stop,
            step: Some(step),
        });
        self
    }

    /// Sets the tee fan-out width.
    pub fn with_tee_count(mut self, count: i64) -> Self {
        self.tee = Some(TeeConfig { count });
        self
    }

    /// Sets a bounded repeat count.
    pub fn with_repeat_times(mut self, times: i64) -> Self {
        self.repeat = Some(RepeatConfig { times: Some(times) });
        self
    }

    /// Sets the count progression.
    pub fn with_count(mut self, start: i64, step: i64) -> Self {
        self.count = Some(CountConfig { start, step });
        self
    }

    /// Sets the combinatoric tuple length.
    pub fn with_r(mut self, r: i64) -> Self {
        self.combinatoric = Some(CombinatoricConfig {
            r: Some(r),
            ..self.combinatoric.unwrap_or_default()
        });
        self
    }

    /// Sets the product pool repetition.
    pub fn with_product_repeat(mut self, repeat: i64) -> Self {
        self.combinatoric = Some(CombinatoricConfig {
            repeat,
            ..self.combinatoric.unwrap_or_default()
        });
        self
    }

    /// Validates every present section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(slice) = &self.slice {
            slice.validate()?;
        }
        if let Some(tee) = &self.tee {
            tee.validate()?;
        }
        if let Some(repeat) = &self.repeat {
            repeat.validate()?;
        }
        if let Some(combinatoric) = &self.combinatoric {
            combinatoric.validate()?;
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| {
        ConfigError::Invalid(format!("{field} must be non-negative, got {value}"))
    })
}

/// `islice` window: `start` defaults to 0, `stop` to unbounded, `step` to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SliceConfig {
    /// Index of the first element yielded.
    pub start: Option<i64>,

    /// Index at which slicing stops (exclusive); absent means unbounded.
    pub stop: Option<i64>,

    /// Distance between yielded indices.
    pub step: Option<i64>,
}

/// Validated `islice` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    /// Index of the first element yielded.
    pub start: usize,
    /// Exclusive upper index; `None` slices to the end of the source.
    pub stop: Option<usize>,
    /// Distance between yielded indices, at least 1.
    pub step: usize,
}

impl SliceConfig {
    /// Checks bounds and converts them to indices.
    pub fn validate(&self) -> Result<SliceBounds, ConfigError> {
        let start = non_negative("slice.start", self.start.unwrap_or(0))?;
        let stop = self
            .stop
            .map(|stop| non_negative("slice.stop", stop))
            .transpose()?;
        let step = non_negative("slice.step", self.step.unwrap_or(1))?;
        if step == 0 {
            return Err(ConfigError::Invalid(
                "slice.step must be at least 1".to_string(),
            ));
        }
        Ok(SliceBounds { start, stop, step })
    }
}

/// `tee` fan-out width.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TeeConfig {
    /// Number of independent handles.
    #[serde(default = "default_tee_count")]
    pub count: i64,
}

fn default_tee_count() -> i64 {
    2
}

impl Default for TeeConfig {
    fn default() -> Self {
        Self {
            count: default_tee_count(),
        }
    }
}

impl TeeConfig {
    /// Returns the handle count; it must be at least 1.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let count = non_negative("tee.count", self.count)?;
        if count == 0 {
            return Err(ConfigError::Invalid(
                "tee.count must be at least 1".to_string(),
            ));
        }
        Ok(count)
    }
}

/// `repeat` bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RepeatConfig {
    /// Number of copies; absent means unbounded.
    pub times: Option<i64>,
}

impl RepeatConfig {
    /// Returns the bound, `None` for an endless repeat.
    pub fn validate(&self) -> Result<Option<usize>, ConfigError> {
        self.times
            .map(|times| non_negative("repeat.times", times))
            .transpose()
    }
}

/// `count` progression. Both fields may be negative; a zero step is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CountConfig {
    /// First value yielded.
    #[serde(default)]
    pub start: i64,

    /// Added to the previous value on each step.
    #[serde(default = "default_count_step")]
    pub step: i64,
}

fn default_count_step() -> i64 {
    1
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            start: 0,
            step: default_count_step(),
        }
    }
}

/// Combinatoric generator parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CombinatoricConfig {
    /// Tuple length. Optional for `permutations`, required for `combinations`.
    pub r: Option<i64>,

    /// How many times the pools are repeated by `product`.
    #[serde(default = "default_product_repeat")]
    pub repeat: i64,
}

fn default_product_repeat() -> i64 {
    1
}

impl Default for CombinatoricConfig {
    fn default() -> Self {
        Self {
            r: None,
            repeat: default_product_repeat(),
        }
    }
}

/// Validated combinatoric parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinatoricParams {
    /// Tuple length, if the section set one.
    pub r: Option<usize>,
    /// Pool repetitions for `product`.
    pub repeat: usize,
}

impl CombinatoricConfig {
    /// Rejects negative `r` or `repeat`.
    pub fn validate(&self) -> Result<CombinatoricParams, ConfigError> {
        let r = self
            .r
            .map(|r| non_negative("combinatoric.r", r))
            .transpose()?;
        let repeat = non_negative("combinatoric.repeat", self.repeat)?;
        Ok(CombinatoricParams { r, repeat })
    }

    /// Like [`validate`](Self::validate), but `r` must be present.
    pub fn require_r(&self) -> Result<usize, ConfigError> {
        self.validate()?
            .r
            .ok_or_else(|| ConfigError::Invalid("combinatoric.r is required".to_string()))
    }
}
