use std::{borrow::Cow, collections::BTreeSet, env, fs};

use rustyline::completion::Pair;

const PROMPT_SUBCOMMANDS: [&str; 4] = ["save", "load", "delete", "list"];

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
    builtins: Vec<&'static str>,
    presets: Vec<String>,
}

impl CommandCompleter {
    pub fn new(builtins: Vec<&'static str>) -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
            builtins,
            presets: Vec::new(),
        };
        completer.refresh_commands();
        completer
    }

    fn refresh_commands(&mut self) {
        self.commands.clear();
        for name in &self.builtins {
            self.commands.insert(Cow::Borrowed(*name));
        }
        self.add_path_commands();
    }

    fn add_path_commands(&mut self) {
        let Some(path_var) = env::var_os("PATH") else {
            return;
        };
        for dir in env::split_paths(&path_var) {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_candidate = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_candidate, entry.file_name().to_str()) {
                    self.commands.insert(Cow::Owned(name.to_string()));
                }
            }
        }
    }

    pub fn update_presets(&mut self, names: Vec<String>) {
        self.presets = names;
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| pair(cmd))
            .collect()
    }

    pub fn complete_prompt_subcommand(&self, input: &str) -> Vec<Pair> {
        PROMPT_SUBCOMMANDS
            .iter()
            .filter(|sub| sub.starts_with(input))
            .map(|sub| pair(sub))
            .collect()
    }

    pub fn complete_preset(&self, input: &str) -> Vec<Pair> {
        self.presets
            .iter()
            .filter(|name| name.starts_with(input))
            .map(|name| pair(name))
            .collect()
    }
}

fn pair(word: &str) -> Pair {
    Pair {
        display: word.to_string(),
        replacement: format!("{} ", word),
    }
}
