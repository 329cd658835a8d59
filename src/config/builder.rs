//! Builder API for console configuration.

use crate::config::error::{ConfigError, ConfigErrors};
use crate::config::{ConsoleConfig, MAX_CAPACITY, MAX_PRECISION};
use crate::core::{OverflowPolicy, DEFAULT_CAPACITY};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Significant digits shown when none is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Builder for [`ConsoleConfig`].
///
/// `build` checks every field and reports all violations at once rather
/// than stopping at the first.
///
/// # Example
///
/// ```rust
/// use calcshell::config::ConfigBuilder;
/// use calcshell::core::OverflowPolicy;
///
/// let config = ConfigBuilder::new()
///     .history_capacity(10)
///     .overflow_policy(OverflowPolicy::EvictOldest)
///     .precision(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.history_capacity(), 10);
/// assert_eq!(config.precision(), 8);
///
/// let errors = ConfigBuilder::new()
///     .history_capacity(0)
///     .precision(0)
///     .build()
///     .unwrap_err();
/// assert_eq!(errors.0.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    history_capacity: usize,
    overflow_policy: OverflowPolicy,
    precision: usize,
    quiet: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            overflow_policy: OverflowPolicy::DropNewest,
            precision: DEFAULT_PRECISION,
            quiet: false,
        }
    }

    /// Set the maximum number of history entries
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set what happens when the history is full
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Set the number of significant digits used to display values
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    /// Suppress banners, help hints and the goodbye message
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Validate every field, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            in_range(self.history_capacity, 1, MAX_CAPACITY, |value, min, max| {
                ConfigError::CapacityOutOfRange { value, min, max }
            }),
            in_range(self.precision, 1, MAX_PRECISION, |value, min, max| {
                ConfigError::PrecisionOutOfRange { value, min, max }
            }),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the configuration, or return every violation found.
    pub fn build(self) -> Result<ConsoleConfig, ConfigErrors> {
        match self.validate() {
            Validation::Success(()) => Ok(ConsoleConfig {
                history_capacity: self.history_capacity,
                overflow_policy: self.overflow_policy,
                precision: self.precision,
                quiet: self.quiet,
            }),
            Validation::Failure(errors) => Err(ConfigErrors(errors.iter().cloned().collect())),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range<F>(
    value: usize,
    min: usize,
    max: usize,
    error: F,
) -> Validation<(), NonEmptyVec<ConfigError>>
where
    F: FnOnce(usize, usize, usize) -> ConfigError,
{
    if (min..=max).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(error(value, min, max))
    }
}
