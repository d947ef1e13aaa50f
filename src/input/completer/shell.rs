use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(builtins: Vec<&'static str>) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(builtins),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn update_presets(&mut self, names: Vec<String>) {
        self.command_completer.update_presets(names);
    }

    /// Candidates for the word under the cursor, with the byte offset it starts at.
    fn candidates(&self, line_up_to_cursor: &str) -> (usize, Vec<Pair>) {
        let start = line_up_to_cursor.rfind(' ').map_or(0, |i| i + 1);
        let current = &line_up_to_cursor[start..];
        let before: Vec<&str> = line_up_to_cursor[..start].split_whitespace().collect();

        let matches = match before.as_slice() {
            [] => self.command_completer.complete_command(current),
            ["prompt"] => self.command_completer.complete_prompt_subcommand(current),
            ["prompt", "load" | "delete"] => self.command_completer.complete_preset(current),
            _ => self.path_completer.complete_path(current),
        };
        (start, matches)
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}
