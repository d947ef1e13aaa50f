use crate::core::commands::{Builtins, Outcome};
use crate::core::state::ShellState;
use crate::highlight::SyntaxHighlighter;
use crate::input::CommandLine;
use crate::process::ProcessExecutor;

/// Routes a line to a builtin or an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    builtins: Builtins,
    process_executor: ProcessExecutor,
    highlighter: SyntaxHighlighter,
}

impl CommandExecutor {
    pub fn new(quiet: bool) -> Self {
        CommandExecutor {
            builtins: Builtins::new(),
            process_executor: ProcessExecutor::new(quiet),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Executes one input line. Errors are reported here and never end the
    /// loop; only `exit` yields [`Outcome::Exit`].
    pub fn execute(&self, line: &str, state: &mut ShellState) -> Outcome {
        let command = CommandLine::parse(line);
        if command.is_empty() {
            return Outcome::Continue;
        }

        match self.builtins.dispatch(&command, state) {
            Some(Ok(outcome)) => outcome,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "builtin failed");
                eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                Outcome::Continue
            }
            None => self.process_executor.run(&command.args()),
        }
    }
}

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Outcome;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Outcome {
        let outcome = self.executor.execute(line, &mut self.state);
        if let Some(helper) = self.editor.helper_mut() {
            helper.update_presets(self.state.presets.names());
        }
        outcome
    }
}
