use super::config::ConfigPaths;
use super::prompt::{PersistenceError, PresetStore, PromptState};

/// State owned by the REPL and mutated by builtins.
#[derive(Debug)]
pub struct ShellState {
    pub presets: PresetStore,
    pub prompt: PromptState,
    pub quiet: bool,
}

impl ShellState {
    pub fn new(presets: PresetStore, prompt: PromptState) -> Self {
        ShellState {
            presets,
            prompt,
            quiet: false,
        }
    }

    /// Loads presets and the last prompt from the configured files.
    ///
    /// A file that cannot be read is reported and replaced by its empty or
    /// default value for the session.
    pub fn load(paths: &ConfigPaths) -> Self {
        let presets = PresetStore::load(&paths.presets_path).unwrap_or_else(|e| {
            report_load_failure("presets", &e);
            PresetStore::new(&paths.presets_path)
        });
        let prompt = PromptState::load(&paths.last_prompt_path).unwrap_or_else(|e| {
            report_load_failure("last prompt", &e);
            PromptState::new(&paths.last_prompt_path)
        });
        Self::new(presets, prompt)
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Prints an informational message unless running quietly.
    pub(crate) fn notify(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}

fn report_load_failure(what: &str, err: &PersistenceError) {
    tracing::warn!(error = %err, "failed to load {}", what);
    eprintln!("Failed to load {}: {}", what, err);
}
