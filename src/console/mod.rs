//! Interactive console: the imperative shell around the calculation core.
//!
//! The console reads menu selections and operands line by line, hands
//! them to a [`Session`], and writes rendered results. It is generic over
//! its input and output so it can be driven by a script in tests.
//!
//! # Example
//!
//! ```rust
//! use calcshell::config::ConfigBuilder;
//! use calcshell::console::Console;
//!
//! let config = ConfigBuilder::new().quiet(true).build().unwrap();
//! let script = "1\n1\n5\n3\n5\n"; // basic -> add -> 5, 3 -> exit
//! let mut output = Vec::new();
//!
//! let mut console = Console::new(script.as_bytes(), &mut output, config).unwrap();
//! console.run().unwrap();
//! assert_eq!(console.session().history().len(), 1);
//! drop(console);
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Addition result: 5 + 3 = 8"));
//! ```

mod input;
mod menu;
mod render;

pub use input::{parse_choice, parse_operand, read_line};
pub use menu::{operand_prompts, sub_choice, sub_menu_len, MainChoice, SubChoice};
pub use render::{
    error_tip, format_value, render_error, render_expression, render_history, render_main_menu,
    render_result, render_sub_menu, BANNER, GOODBYE, HELP,
};

use crate::config::ConsoleConfig;
use crate::core::{CalcError, Group, Operation};
use crate::session::Session;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Failures that end a console run.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Calculator initialization failed: {0}")]
    Init(#[from] CalcError),
}

/// Whether the menu loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven calculator over arbitrary line input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with a fresh session.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Result<Self, ConsoleError> {
        let session = Session::new(&config)?;
        Ok(Self {
            input,
            output,
            session,
            config,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Calculation errors are reported and the loop continues; only I/O
    /// failures end the run early.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        if !self.config.quiet() {
            writeln!(self.output, "{BANNER}")?;
        }

        while self.main_menu()? == Flow::Continue {}

        if !self.config.quiet() {
            writeln!(self.output, "\n{GOODBYE}")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<Flow, ConsoleError> {
        write!(self.output, "{}", render_main_menu())?;
        let count = MainChoice::ALL.len();
        let Some(line) = self.prompt(&format!("Enter your choice (1-{count}): "))? else {
            return Ok(Flow::Exit);
        };

        let choice = parse_choice(&line, count).and_then(MainChoice::from_number);
        let Some(choice) = choice else {
            debug!(input = %line, "invalid main menu choice");
            writeln!(self.output, "Invalid choice. Please select 1-{count}.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MainChoice::Basic => self.operation_menu(Group::Basic),
            MainChoice::Advanced => self.operation_menu(Group::Advanced),
            MainChoice::History => {
                let text = render_history(self.session.history(), self.config.precision());
                write!(self.output, "\n{text}")?;
                Ok(Flow::Continue)
            }
            MainChoice::Help => {
                write!(self.output, "\n{HELP}")?;
                Ok(Flow::Continue)
            }
            MainChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn operation_menu(&mut self, group: Group) -> Result<Flow, ConsoleError> {
        let len = sub_menu_len(group);
        write!(self.output, "{}", render_sub_menu(group))?;
        let Some(line) = self.prompt(&format!("Enter your choice (1-{len}): "))? else {
            return Ok(Flow::Exit);
        };

        match parse_choice(&line, len).and_then(|n| sub_choice(group, n)) {
            Some(SubChoice::Run(op)) => self.run_operation(op),
            Some(SubChoice::Back) => Ok(Flow::Continue),
            None => {
                debug!(input = %line, ?group, "invalid operation choice");
                writeln!(
                    self.output,
                    "Please choose 1-{} for an operation, or {len} to go back.",
                    len - 1
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    fn run_operation(&mut self, op: Operation) -> Result<Flow, ConsoleError> {
        writeln!(self.output, "\n{} calculation", op.name())?;

        let mut operands = Vec::with_capacity(op.arity().count());
        for prompt in operand_prompts(op) {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(Flow::Exit);
            };
            match parse_operand(&line) {
                Ok(value) => operands.push(value),
                Err(error) => {
                    debug!(input = %line, operation = op.name(), "operand rejected");
                    writeln!(self.output, "{}", render_error(error))?;
                    if op.is_trigonometric() {
                        writeln!(self.output, "Remember: angles are in radians.")?;
                    }
                    return Ok(Flow::Continue);
                }
            }
        }

        let dropped_before = self.session.history().dropped();
        match self.session.calculate(op, &operands) {
            Ok(value) => {
                let precision = self.config.precision();
                writeln!(self.output, "{}", render_result(op, &operands, value, precision))?;
                if self.session.history().dropped() > dropped_before {
                    writeln!(self.output, "History is full; this calculation was not saved.")?;
                } else {
                    writeln!(self.output, "Calculation saved to history.")?;
                }
            }
            Err(error) => writeln!(self.output, "{}", render_error(error))?,
        }
        Ok(Flow::Continue)
    }

    /// Write `text`, flush, and read the reply. `None` means input ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(read_line(&mut self.input)?)
    }
}
