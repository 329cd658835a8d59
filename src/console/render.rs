//! Text rendering for the console.
//!
//! Pure functions from the data model to strings; nothing here writes to
//! the terminal.

use super::menu::{sub_menu_len, MainChoice};
use crate::core::{Arity, CalcError, Group, History, HistoryEntry, Operation};

pub const BANNER: &str = "\
Simple Calculator
=================
Choose basic or advanced operations from the menu.
Every successful calculation is kept in the session history.
Numbers can be written like 42, 3.5 or 1.5e-3.
";

pub const GOODBYE: &str = "Thank you for using Simple Calculator!";

pub const HELP: &str = "\
Help
----
Entering numbers:
  Whole numbers:  42, -17, 0
  Decimals:       2.5, -0.001
  Scientific:     1.23e-4, 6.02e23, 2.5E10

Basic operations:
  Addition 5 + 3 = 8, Subtraction 10 - 4 = 6
  Multiplication 7 * 8 = 56, Division 15 / 3 = 5
  Modulus 7 % 3 = 1 (whole numbers only)

Advanced operations:
  Power 2 ^ 3 = 8, Square root sqrt(9) = 3, Natural log ln(1) = 0
  Trigonometry uses radians: sin(pi/2) = 1, cos(0) = 1, tan(pi/4) = 1
  Degrees to radians: multiply by pi/180 (pi is about 3.14159)

History:
  View past calculations from the main menu.
";

/// Format `value` with `precision` significant digits, `%g` style:
/// fixed notation for moderate magnitudes, exponent notation otherwise,
/// trailing zeros removed.
///
/// # Example
///
/// ```rust
/// use calcshell::console::format_value;
///
/// assert_eq!(format_value(8.0, 6), "8");
/// assert_eq!(format_value(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_value(1e20, 6), "1e+20");
/// ```
pub fn format_value(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Render an operation applied to its operands, e.g. `5 + 3` or `sqrt(9)`.
pub fn render_expression(op: Operation, operands: &[f64], precision: usize) -> String {
    let fmt = |v: &f64| format_value(*v, precision);
    match (op.arity(), operands) {
        (Arity::Binary, [a, b]) => format!("{} {} {}", fmt(a), op.symbol(), fmt(b)),
        (Arity::Unary, [a]) => format!("{}({})", op.symbol(), fmt(a)),
        _ => op.symbol().to_string(),
    }
}

pub fn render_result(op: Operation, operands: &[f64], value: f64, precision: usize) -> String {
    format!(
        "{} result: {} = {}",
        op.name(),
        render_expression(op, operands, precision),
        format_value(value, precision)
    )
}

/// One-line advice shown under an error message.
pub fn error_tip(error: CalcError) -> &'static str {
    match error {
        CalcError::DivisionByZero => "Try a divisor other than zero.",
        CalcError::DomainError => "Needs sqrt(x >= 0), ln(x > 0), whole powers of negatives.",
        CalcError::Overflow => "The result is too large. Try smaller numbers.",
        CalcError::Underflow => "The result is too far below zero. Try smaller numbers.",
        CalcError::InvalidInput => "Use numbers like 5, 3.5, -2.5 or 1.23e-4.",
    }
}

pub fn render_error(error: CalcError) -> String {
    format!("Error: {error}.\nTip: {}", error_tip(error))
}

fn render_entry(entry: &HistoryEntry, precision: usize) -> String {
    let operands: Vec<f64> = std::iter::once(entry.operand_a)
        .chain(entry.operand_b)
        .collect();
    format!(
        "#{:>3}: {} = {}",
        entry.sequence,
        render_expression(entry.operation, &operands, precision),
        format_value(entry.result, precision)
    )
}

/// Render the whole history, oldest entry first.
pub fn render_history(history: &History, precision: usize) -> String {
    if history.is_empty() {
        return "No calculations yet.\n".to_string();
    }

    let mut out = String::from("Calculation history:\n");
    for entry in history.list() {
        out.push_str(&render_entry(entry, precision));
        out.push('\n');
    }
    if history.dropped() > 0 {
        out.push_str(&format!(
            "({} later calculation(s) not recorded: history holds {} entries)\n",
            history.dropped(),
            history.capacity()
        ));
    }
    out
}

pub fn render_main_menu() -> String {
    let mut out = String::from("\nMain menu\n");
    for (i, choice) in MainChoice::ALL.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, choice.label()));
    }
    out
}

pub fn render_sub_menu(group: Group) -> String {
    let title = match group {
        Group::Basic => "Basic operations",
        Group::Advanced => "Advanced operations",
    };
    let mut out = format!("\n{title}\n");
    for (i, op) in Operation::in_group(group).enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, op.name(), op.symbol()));
    }
    out.push_str(&format!("  {}. Back to main menu\n", sub_menu_len(group)));
    if group == Group::Advanced {
        out.push_str("Trigonometric functions use radians.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, OverflowPolicy};

    #[test]
    fn format_value_uses_fixed_notation_for_moderate_values() {
        assert_eq!(format_value(8.0, 6), "8");
        assert_eq!(format_value(1024.0, 6), "1024");
        assert_eq!(format_value(-8.0, 6), "-8");
        assert_eq!(format_value(0.0015, 6), "0.0015");
        assert_eq!(format_value(2.5, 6), "2.5");
        assert_eq!(format_value(0.1 + 0.2, 6), "0.3");
        assert_eq!(format_value(0.0, 6), "0");
    }

    #[test]
    fn format_value_switches_to_exponent_notation() {
        assert_eq!(format_value(123_456_789.0, 6), "1.23457e+08");
        assert_eq!(format_value(1e20, 6), "1e+20");
        assert_eq!(format_value(0.00001, 6), "1e-05");
        assert_eq!(format_value(-2.5e-7, 6), "-2.5e-07");
    }

    #[test]
    fn format_value_honors_precision() {
        assert_eq!(format_value(1.0 / 3.0, 3), "0.333");
        assert_eq!(format_value(1.0 / 3.0, 10), "0.3333333333");
        assert_eq!(format_value(123_456.0, 3), "1.23e+05");
    }

    #[test]
    fn expressions_render_by_arity() {
        assert_eq!(render_expression(Operation::Add, &[5.0, 3.0], 6), "5 + 3");
        assert_eq!(render_expression(Operation::SquareRoot, &[9.0], 6), "sqrt(9)");
        assert_eq!(
            render_result(Operation::Power, &[2.0, 10.0], 1024.0, 6),
            "Power result: 2 ^ 10 = 1024"
        );
    }

    #[test]
    fn every_error_has_message_and_tip() {
        for error in [
            CalcError::DivisionByZero,
            CalcError::DomainError,
            CalcError::Overflow,
            CalcError::Underflow,
            CalcError::InvalidInput,
        ] {
            let text = render_error(error);
            assert!(text.starts_with("Error: "));
            assert!(text.contains(error_tip(error)));
        }
        assert_eq!(
            render_error(CalcError::DivisionByZero).lines().next(),
            Some("Error: Division by zero is not allowed.")
        );
    }

    #[test]
    fn empty_history_renders_placeholder() {
        assert_eq!(render_history(&History::new(), 6), "No calculations yet.\n");
    }

    #[test]
    fn history_renders_numbered_entries() {
        let mut history = History::with_capacity(2, OverflowPolicy::DropNewest);
        history.record(HistoryEntry::new(Operation::Add, 5.0, Some(3.0), 8.0));
        history.record(HistoryEntry::new(Operation::SquareRoot, 9.0, None, 3.0));
        history.record(HistoryEntry::new(Operation::Divide, 6.0, Some(3.0), 2.0));

        let text = render_history(&history, 6);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Calculation history:");
        assert_eq!(lines[1], "#  1: 5 + 3 = 8");
        assert_eq!(lines[2], "#  2: sqrt(9) = 3");
        assert!(lines[3].contains("1 later calculation(s) not recorded"));
    }

    #[test]
    fn menus_list_every_entry() {
        let main = render_main_menu();
        assert!(main.contains("1. Basic operations"));
        assert!(main.contains("5. Exit"));

        let basic = render_sub_menu(Group::Basic);
        assert!(basic.contains("5. Modulus (%)"));
        assert!(basic.contains("6. Back to main menu"));

        let advanced = render_sub_menu(Group::Advanced);
        assert!(advanced.contains("1. Power (^)"));
        assert!(advanced.contains("7. Back to main menu"));
        assert!(advanced.contains("radians"));
    }
}
