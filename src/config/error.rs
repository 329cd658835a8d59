//! Configuration errors.

use thiserror::Error;

/// A single reason a configuration was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("History capacity {value} is out of range ({min}..={max})")]
    CapacityOutOfRange { value: usize, min: usize, max: usize },

    #[error("Precision {value} is out of range ({min}..={max} significant digits)")]
    PrecisionOutOfRange { value: usize, min: usize, max: usize },
}

/// Every violation found while building a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid configuration: {}", render(.0))]
pub struct ConfigErrors(pub Vec<ConfigError>);

fn render(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
