//! Pure calculation core.
//!
//! This module contains everything that does not touch the terminal:
//! - The `Operation` set and its metadata
//! - The validated calculation engine
//! - The `CalcError` taxonomy
//! - The bounded calculation history
//!
//! Nothing in here performs I/O; the console drives it from the outside.

pub mod engine;
mod error;
mod history;
mod operation;

pub use engine::{Engine, DIVISION_EPSILON, MAX_SAFE_INTEGER};
pub use error::{CalcError, CalcResult};
pub use history::{History, HistoryEntry, OverflowPolicy, RecordOutcome, DEFAULT_CAPACITY};
pub use operation::{Arity, Group, Operation};
