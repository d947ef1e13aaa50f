use rustyline::{config::Configurer, history::FileHistory, Editor};

mod executor;

use crate::{
    core::{config::ConfigPaths, state::ShellState},
    error::ShellError,
    flags::Flags,
    input::ShellCompleter,
};

pub use executor::CommandExecutor;
use executor::CommandHandler;

const MAX_HISTORY: usize = 1000;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) executor: CommandExecutor,
    pub(crate) state: ShellState,
    pub(crate) paths: ConfigPaths,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let paths = match flags.get_value("config") {
            Some(dir) => ConfigPaths::with_dir(dir),
            None => ConfigPaths::new()?,
        };
        if let Err(e) = paths.ensure_dir() {
            eprintln!("Failed to create config directory: {}", e);
        }

        let quiet = flags.is_set("quiet");
        let executor = CommandExecutor::new(quiet);
        let state = ShellState::load(&paths).with_quiet(quiet);

        let mut completer = ShellCompleter::new(executor.builtins().names().collect());
        completer.update_presets(state.presets.names());

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_max_history_size(MAX_HISTORY)?;
        editor.set_auto_add_history(false);
        editor.set_helper(Some(completer));

        if paths.history_path.exists() {
            if let Err(e) = editor.load_history(&paths.history_path) {
                tracing::warn!(error = %e, "failed to load history");
            }
        }

        // The child shares our process group, so SIGINT reaches it; keep the shell alive.
        ctrlc::set_handler(|| tracing::debug!("SIGINT received"))?;

        Ok(Shell {
            editor,
            executor,
            state,
            paths,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        tracing::info!(dir = %self.paths.config_dir.display(), "shell started");

        loop {
            let prompt = self.state.prompt.current().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            tracing::warn!(error = %e, "couldn't add to history");
                        }
                    }

                    if !self.execute_command(&line).continue_loop() {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => {
                    if !self.flags.is_set("quiet") {
                        println!();
                    }
                    break;
                }
                Err(e) => {
                    // the line reader cannot recover; treat it like end of input
                    eprintln!("Error: {}", e);
                    break;
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.paths.history_path) {
            tracing::warn!(error = %e, "failed to save history");
            eprintln!("Failed to save history: {}", e);
        }
    }
}
