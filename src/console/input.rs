//! Line-oriented input: one read, one parse, no buffer juggling.

use crate::core::CalcError;
use std::io::{self, BufRead};

/// Read one line, without its line terminator.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the parsers and fails there like any other typo.
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Parse a menu selection in `1..=max`.
pub fn parse_choice(line: &str, max: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=max).contains(choice))
}

/// Parse a finite operand such as `42`, `-2.5` or `1.5e-3`.
///
/// # Example
///
/// ```rust
/// use calcshell::console::parse_operand;
/// use calcshell::core::CalcError;
///
/// assert_eq!(parse_operand(" 1.5e-3 "), Ok(0.0015));
/// assert_eq!(parse_operand("inf"), Err(CalcError::InvalidInput));
/// assert_eq!(parse_operand("12abc"), Err(CalcError::InvalidInput));
/// ```
pub fn parse_operand(line: &str) -> Result<f64, CalcError> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CalcError::InvalidInput)
}
