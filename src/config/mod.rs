//! Console configuration.
//!
//! A [`ConsoleConfig`] can only be obtained through [`ConfigBuilder`],
//! which validates every field with Stillwater's `Validation` so that all
//! problems are reported together.
//!
//! # Example
//!
//! ```rust
//! use calcshell::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().history_capacity(20).build().unwrap();
//! assert_eq!(config.history_capacity(), 20);
//! ```

pub mod builder;
pub mod error;

pub use builder::{ConfigBuilder, DEFAULT_PRECISION};
pub use error::{ConfigError, ConfigErrors};

use crate::core::OverflowPolicy;

/// Largest accepted history capacity.
pub const MAX_CAPACITY: usize = 10_000;

/// Most significant digits an `f64` can meaningfully show.
pub const MAX_PRECISION: usize = 17;

/// Validated settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub(crate) history_capacity: usize,
    pub(crate) overflow_policy: OverflowPolicy,
    pub(crate) precision: usize,
    pub(crate) quiet: bool,
}

impl ConsoleConfig {
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }

    /// Significant digits used when displaying values.
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            history_capacity: crate::core::DEFAULT_CAPACITY,
            overflow_policy: OverflowPolicy::DropNewest,
            precision: DEFAULT_PRECISION,
            quiet: false,
        }
    }
}
