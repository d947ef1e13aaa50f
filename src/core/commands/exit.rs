use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;
use crate::input::CommandLine;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _line: &CommandLine, _state: &mut ShellState) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
