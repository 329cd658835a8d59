//! Bounded log of successful calculations.
//!
//! Entries are immutable values. The log owns them outright and hands out
//! only shared references, in the order they were recorded.

use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};
use tracing::warn;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 50;

/// Record of a single successful calculation.
///
/// # Example
///
/// ```rust
/// use calcshell::core::{HistoryEntry, Operation};
///
/// let entry = HistoryEntry::new(Operation::Add, 5.0, Some(3.0), 8.0);
/// assert_eq!(entry.result, 8.0);
/// assert_eq!(entry.sequence, 0); // assigned when recorded
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the session, starting at 1. Zero until recorded.
    pub sequence: u64,
    /// The operation that produced the result
    pub operation: Operation,
    /// First (or only) operand
    pub operand_a: f64,
    /// Second operand, absent for unary operations
    pub operand_b: Option<f64>,
    /// The computed value
    pub result: f64,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(operation: Operation, operand_a: f64, operand_b: Option<f64>, result: f64) -> Self {
        Self {
            sequence: 0,
            operation,
            operand_a,
            operand_b,
            result,
            timestamp: Utc::now(),
        }
    }
}

/// What the log does with a record once it is full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Ignore the new record; existing entries are kept as they are.
    #[default]
    DropNewest,
    /// Remove the oldest entry to make room for the new one.
    EvictOldest,
}

/// Result of [`History::record`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordOutcome {
    /// The entry was appended.
    Stored,
    /// The log was full and the entry was discarded.
    Dropped,
    /// The entry was appended after removing the returned oldest entry.
    Evicted(HistoryEntry),
}

/// Ordered, bounded history of calculations.
///
/// # Example
///
/// ```rust
/// use calcshell::core::{History, HistoryEntry, Operation, OverflowPolicy};
///
/// let mut history = History::with_capacity(2, OverflowPolicy::DropNewest);
/// assert!(history.is_empty());
///
/// history.record(HistoryEntry::new(Operation::Add, 5.0, Some(3.0), 8.0));
/// history.record(HistoryEntry::new(Operation::SquareRoot, 9.0, None, 3.0));
/// history.record(HistoryEntry::new(Operation::Divide, 6.0, Some(3.0), 2.0));
///
/// let results: Vec<f64> = history.list().map(|e| e.result).collect();
/// assert_eq!(results, vec![8.0, 3.0]);
/// assert_eq!(history.dropped(), 1);
/// ```
///
/// A history can be serialized for display or export, but only built
/// through [`History::with_capacity`], so its capacity is never zero:
///
/// ```compile_fail
/// use calcshell::core::History;
///
/// let json = r#"{"entries":[],"capacity":0,"policy":"DropNewest"}"#;
/// let history: History = serde_json::from_str(json).unwrap();
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    policy: OverflowPolicy,
    next_sequence: u64,
    dropped: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty log with [`DEFAULT_CAPACITY`] and the drop-newest
    /// policy.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, OverflowPolicy::DropNewest)
    }

    /// Create an empty log holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize, policy: OverflowPolicy) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            policy,
            next_sequence: 1,
            dropped: 0,
        }
    }

    /// Record an entry, assigning its sequence number.
    ///
    /// Never fails. When the log is full the configured [`OverflowPolicy`]
    /// decides between discarding the new entry and evicting the oldest.
    pub fn record(&mut self, mut entry: HistoryEntry) -> RecordOutcome {
        if self.is_full() {
            match self.policy {
                OverflowPolicy::DropNewest => {
                    self.dropped += 1;
                    warn!(
                        capacity = self.capacity,
                        dropped = self.dropped,
                        operation = entry.operation.name(),
                        "history full, calculation not recorded"
                    );
                    return RecordOutcome::Dropped;
                }
                OverflowPolicy::EvictOldest => {
                    entry.sequence = self.take_sequence();
                    let evicted = self.entries.pop_front();
                    self.entries.push_back(entry);
                    return match evicted {
                        Some(old) => RecordOutcome::Evicted(old),
                        None => RecordOutcome::Stored,
                    };
                }
            }
        }

        entry.sequence = self.take_sequence();
        self.entries.push_back(entry);
        RecordOutcome::Stored
    }

    /// Entries in insertion order.
    ///
    /// The iterator borrows the log, so it cannot observe a concurrent
    /// `record`; call `list` again to restart.
    pub fn list(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Number of records discarded because the log was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn take_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }
}
