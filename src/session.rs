//! Calculator session: the engine plus the history it feeds.

use crate::config::ConsoleConfig;
use crate::core::{CalcError, CalcResult, Engine, History, HistoryEntry, Operation};
use tracing::info;

/// Owns the calculation history for the lifetime of the application.
///
/// Successful calculations are recorded automatically; failed ones leave
/// the history untouched.
///
/// # Example
///
/// ```rust
/// use calcshell::config::ConsoleConfig;
/// use calcshell::core::{CalcError, Operation};
/// use calcshell::Session;
///
/// let mut session = Session::new(&ConsoleConfig::default()).unwrap();
/// assert_eq!(session.calculate(Operation::Power, &[2.0, 10.0]), Ok(1024.0));
/// assert_eq!(
///     session.calculate(Operation::SquareRoot, &[-4.0]),
///     Err(CalcError::DomainError)
/// );
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    history: History,
}

impl Session {
    /// Initialize the engine and an empty history sized by `config`.
    pub fn new(config: &ConsoleConfig) -> Result<Self, CalcError> {
        let engine = Engine::init()?;
        info!(
            capacity = config.history_capacity(),
            policy = ?config.overflow_policy(),
            "calculator session started"
        );
        Ok(Self {
            engine,
            history: History::with_capacity(config.history_capacity(), config.overflow_policy()),
        })
    }

    /// Compute `op` over `operands`, recording the calculation on success.
    pub fn calculate(&mut self, op: Operation, operands: &[f64]) -> CalcResult {
        let value = self.engine.compute(op, operands)?;
        let entry = HistoryEntry::new(op, operands[0], operands.get(1).copied(), value);
        self.history.record(entry);
        Ok(value)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(
            recorded = self.history.len(),
            dropped = self.history.dropped(),
            "calculator session ended"
        );
    }
}
