use std::collections::BTreeMap;
use std::path::PathBuf;

mod cd;
mod exit;
mod prompt;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use prompt::{PromptAction, PromptCommand};

use crate::core::prompt::{PersistenceError, PresetError};
use crate::core::state::ShellState;
use crate::input::CommandLine;

/// What the REPL does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

impl Outcome {
    pub fn continue_loop(self) -> bool {
        self == Outcome::Continue
    }
}

#[derive(Debug)]
pub enum CommandError {
    Usage(String),
    Preset(PresetError),
    DirectoryChange {
        path: PathBuf,
        source: std::io::Error,
    },
    Persistence(PersistenceError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(msg) => write!(f, "{}", msg),
            CommandError::Preset(err) => write!(f, "{}", err),
            CommandError::DirectoryChange { path, source } => {
                write!(f, "cd error: {}: {}", path.display(), source)
            }
            CommandError::Persistence(err) => write!(f, "Failed to save: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<PresetError> for CommandError {
    fn from(err: PresetError) -> Self {
        CommandError::Preset(err)
    }
}

impl From<PersistenceError> for CommandError {
    fn from(err: PersistenceError) -> Self {
        CommandError::Persistence(err)
    }
}

pub trait Command {
    fn execute(&self, line: &CommandLine, state: &mut ShellState) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Prompt(PromptCommand),
}

impl Command for CommandType {
    fn execute(&self, line: &CommandLine, state: &mut ShellState) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(line, state),
            CommandType::Exit(cmd) => cmd.execute(line, state),
            CommandType::Prompt(cmd) => cmd.execute(line, state),
        }
    }
}

/// Name-to-handler table for the commands the shell runs itself.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("prompt", CommandType::Prompt(PromptCommand::new()));
        Builtins { commands }
    }

    /// Runs `line` if its first token names a builtin.
    ///
    /// Returns `None` when the line is not a builtin and should be run as an
    /// external program.
    pub fn dispatch(
        &self,
        line: &CommandLine,
        state: &mut ShellState,
    ) -> Option<Result<Outcome, CommandError>> {
        let name = line.name()?;
        let cmd = self.commands.get(name)?;
        tracing::debug!(builtin = name, argc = line.len(), "dispatching builtin");
        Some(cmd.execute(line, state))
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
