//! Menu choices and their numbering.

use crate::core::{Group, Operation};

/// Entries of the main menu, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Basic,
    Advanced,
    History,
    Help,
    Exit,
}

impl MainChoice {
    pub const ALL: [MainChoice; 5] = [
        Self::Basic,
        Self::Advanced,
        Self::History,
        Self::Help,
        Self::Exit,
    ];

    /// Map a 1-based menu number to its choice.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic operations",
            Self::Advanced => "Advanced operations",
            Self::History => "View history",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }
}

/// Entries of an operation sub-menu: the group's operations followed by
/// a final "back" entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubChoice {
    Run(Operation),
    Back,
}

/// Number of entries in the sub-menu for `group`, including "back".
pub fn sub_menu_len(group: Group) -> usize {
    Operation::in_group(group).count() + 1
}

/// Map a 1-based sub-menu number to its choice.
pub fn sub_choice(group: Group, number: usize) -> Option<SubChoice> {
    let index = number.checked_sub(1)?;
    match Operation::in_group(group).nth(index) {
        Some(op) => Some(SubChoice::Run(op)),
        None if number == sub_menu_len(group) => Some(SubChoice::Back),
        None => None,
    }
}

/// Prompts asked before running `op`, one per operand.
pub fn operand_prompts(op: Operation) -> &'static [&'static str] {
    match op {
        Operation::Power => &["Enter base: ", "Enter exponent: "],
        Operation::SquareRoot => &["Enter number for sqrt: "],
        Operation::Log => &["Enter number for ln(): "],
        Operation::Sin | Operation::Cos | Operation::Tan => &["Enter angle in radians: "],
        _ => &["Enter first number: ", "Enter second number: "],
    }
}
