//! Calcshell: an interactive calculator around a pure, validated engine
//!
//! Calcshell follows a "pure core, imperative shell" layout. The core
//! computes and classifies results with no side effects, while the console
//! owns every read and write.
//!
//! # Core Concepts
//!
//! - **Operation**: the eleven supported operations and their metadata
//! - **Engine**: validated arithmetic returning `Result<f64, CalcError>`
//! - **History**: a bounded, ordered log of successful calculations
//! - **Session**: the engine plus the history it feeds
//! - **Console**: the menu loop that drives a session
//!
//! # Example
//!
//! ```rust
//! use calcshell::core::{engine, CalcError, Operation};
//!
//! assert_eq!(engine::add(5.0, 3.0), Ok(8.0));
//! assert_eq!(engine::divide(5.0, 0.0), Err(CalcError::DivisionByZero));
//! assert_eq!(engine::compute(Operation::Power, &[2.0, 10.0]), Ok(1024.0));
//! ```

pub mod config;
pub mod console;
pub mod core;
mod session;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConsoleConfig};
pub use console::{Console, ConsoleError};
pub use crate::core::{CalcError, CalcResult, Engine, History, HistoryEntry, Operation};
pub use session::Session;
