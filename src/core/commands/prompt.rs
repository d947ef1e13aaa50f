use super::{Command, CommandError, Outcome};
use crate::core::prompt::PresetError;
use crate::core::state::ShellState;
use crate::input::{parse_quoted, CommandLine};

const USAGE: &str = "Usage:
  prompt \"your prompt\"       - Set current prompt
  prompt save name \"prompt\"  - Save preset
  prompt load name          - Load preset
  prompt delete name        - Delete preset
  prompt list               - List presets";

/// A parsed `prompt` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Usage,
    Save { name: String, text: String },
    Delete(String),
    Load(String),
    List,
    Set(String),
}

impl PromptAction {
    /// Text arguments are taken from the raw line so quoted spaces survive
    /// tokenizing, then run through the quoted-argument parser.
    pub fn parse(line: &CommandLine) -> Result<Self, CommandError> {
        let Some(sub) = line.arg(1) else {
            return Ok(PromptAction::Usage);
        };

        let action = match sub {
            "save" => match (line.arg(2), line.rest_from(3)) {
                (Some(name), Some(rest)) => PromptAction::Save {
                    name: name.to_string(),
                    text: parse_quoted(rest),
                },
                _ => return Err(usage("prompt save name \"prompt\"")),
            },
            "delete" => PromptAction::Delete(required_name(line, "prompt delete name")?),
            "load" => PromptAction::Load(required_name(line, "prompt load name")?),
            "list" => PromptAction::List,
            _ => PromptAction::Set(parse_quoted(line.rest_from(1).unwrap_or(sub))),
        };
        Ok(action)
    }
}

fn usage(form: &str) -> CommandError {
    CommandError::Usage(format!("Usage: {}", form))
}

fn required_name(line: &CommandLine, form: &str) -> Result<String, CommandError> {
    line.arg(2).map(String::from).ok_or_else(|| usage(form))
}

#[derive(Clone)]
pub struct PromptCommand;

impl Default for PromptCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptCommand {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, action: PromptAction, state: &mut ShellState) -> Result<(), CommandError> {
        match action {
            PromptAction::Usage => eprintln!("{}", USAGE),
            PromptAction::Save { name, text } => {
                let saved = state.presets.insert(&name, &text)?.name.clone();
                state.presets.save()?;
                state.notify(&format!("Preset '{}' saved", saved));
            }
            PromptAction::Delete(name) => {
                state.presets.remove(&name)?;
                state.presets.save()?;
                state.notify(&format!("Preset '{}' deleted", name));
            }
            PromptAction::Load(name) => {
                let text = state
                    .presets
                    .get(&name)
                    .map(|p| p.prompt.clone())
                    .ok_or(PresetError::NotFound(name))?;
                state.prompt.set(&text)?;
            }
            PromptAction::List => {
                if state.presets.is_empty() {
                    println!("No saved presets");
                } else {
                    println!("Available prompt presets:");
                    for entry in state.presets.listing() {
                        println!("{}", entry);
                    }
                }
            }
            PromptAction::Set(text) => state.prompt.set_with_separator(&text)?,
        }
        Ok(())
    }
}

impl Command for PromptCommand {
    fn execute(&self, line: &CommandLine, state: &mut ShellState) -> Result<Outcome, CommandError> {
        let action = PromptAction::parse(line)?;
        tracing::debug!(?action, "prompt");
        self.run(action, state)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigPaths;
    use crate::core::prompt::{DEFAULT_PROMPT, MAX_PRESETS};
    use std::fs;

    fn setup() -> (tempfile::TempDir, ConfigPaths, ShellState) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::with_dir(dir.path());
        let state = ShellState::load(&paths).with_quiet(true);
        (dir, paths, state)
    }

    fn run(state: &mut ShellState, line: &str) -> Result<Outcome, CommandError> {
        PromptCommand::new().execute(&CommandLine::parse(line), state)
    }

    #[test]
    fn test_parse_actions() {
        let parse = |s: &str| PromptAction::parse(&CommandLine::parse(s)).unwrap();

        assert_eq!(parse("prompt"), PromptAction::Usage);
        assert_eq!(parse("prompt list"), PromptAction::List);
        assert_eq!(parse("prompt load work"), PromptAction::Load("work".to_string()));
        assert_eq!(parse("prompt delete work"), PromptAction::Delete("work".to_string()));
        assert_eq!(
            parse("prompt save work \"me@host $ \""),
            PromptAction::Save {
                name: "work".to_string(),
                text: "me@host $ ".to_string()
            }
        );
        assert_eq!(parse("prompt \"hi there\""), PromptAction::Set("hi there".to_string()));
        assert_eq!(parse("prompt foo bar"), PromptAction::Set("foo".to_string()));
    }

    #[test]
    fn test_parse_missing_arguments() {
        for line in ["prompt save", "prompt save work", "prompt load", "prompt delete"] {
            assert!(matches!(
                PromptAction::parse(&CommandLine::parse(line)),
                Err(CommandError::Usage(_))
            ));
        }
    }

    #[test]
    fn test_usage_continues() {
        let (_dir, _paths, mut state) = setup();
        assert_eq!(run(&mut state, "prompt").unwrap(), Outcome::Continue);
        assert_eq!(state.prompt.current(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_set_prompt_appends_separator() {
        let (_dir, paths, mut state) = setup();

        run(&mut state, "prompt \"foo\"").unwrap();
        assert_eq!(state.prompt.current(), "foo > ");
        assert_eq!(fs::read_to_string(&paths.last_prompt_path).unwrap(), "foo > ");

        run(&mut state, "prompt \"foo \"").unwrap();
        assert_eq!(state.prompt.current(), "foo ");
    }

    #[test]
    fn test_set_prompt_with_inner_spaces() {
        let (_dir, _paths, mut state) = setup();
        run(&mut state, "prompt \"user  at  host\"").unwrap();
        assert_eq!(state.prompt.current(), "user  at  host > ");
    }

    #[test]
    fn test_set_empty_prompt() {
        let (_dir, _paths, mut state) = setup();
        run(&mut state, "prompt \"\"").unwrap();
        assert_eq!(state.prompt.current(), " > ");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, paths, mut state) = setup();

        run(&mut state, "prompt save work \"me@host $ \"").unwrap();
        assert_eq!(state.presets.get("work").unwrap().prompt, "me@host $ ");
        assert_eq!(
            fs::read_to_string(&paths.presets_path).unwrap(),
            "work=me@host $ \n"
        );

        run(&mut state, "prompt load work").unwrap();
        assert_eq!(state.prompt.current(), "me@host $ ");
        assert_eq!(
            fs::read_to_string(&paths.last_prompt_path).unwrap(),
            "me@host $ "
        );
    }

    #[test]
    fn test_save_empty_preset_is_rejected() {
        let (_dir, paths, mut state) = setup();

        let result = run(&mut state, "prompt save e \"\"");
        assert!(matches!(
            result,
            Err(CommandError::Preset(PresetError::EmptyText))
        ));
        assert!(state.presets.is_empty());
        assert!(!paths.presets_path.exists());

        assert!(run(&mut state, "prompt load e").is_err());
        assert_eq!(state.prompt.current(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_save_duplicate_leaves_store_unchanged() {
        let (_dir, paths, mut state) = setup();
        run(&mut state, "prompt save work \"one\"").unwrap();

        let result = run(&mut state, "prompt save work \"two\"");
        assert!(matches!(
            result,
            Err(CommandError::Preset(PresetError::Duplicate(_)))
        ));
        assert_eq!(state.presets.len(), 1);
        assert_eq!(state.presets.get("work").unwrap().prompt, "one");
        assert_eq!(fs::read_to_string(&paths.presets_path).unwrap(), "work=one\n");
    }

    #[test]
    fn test_save_past_capacity() {
        let (_dir, _paths, mut state) = setup();
        for i in 0..MAX_PRESETS {
            run(&mut state, &format!("prompt save p{} \"x\"", i)).unwrap();
        }

        let result = run(&mut state, "prompt save extra \"x\"");
        assert!(matches!(
            result,
            Err(CommandError::Preset(PresetError::CapacityExceeded))
        ));
        assert_eq!(state.presets.len(), MAX_PRESETS);
    }

    #[test]
    fn test_delete_preserves_order() {
        let (_dir, paths, mut state) = setup();
        for name in ["a", "b", "c"] {
            run(&mut state, &format!("prompt save {} \"{}\"", name, name)).unwrap();
        }

        run(&mut state, "prompt delete b").unwrap();
        assert_eq!(state.presets.names(), vec!["a", "c"]);
        assert_eq!(fs::read_to_string(&paths.presets_path).unwrap(), "a=a\nc=c\n");
    }

    #[test]
    fn test_missing_presets_report_not_found() {
        let (_dir, _paths, mut state) = setup();

        assert!(matches!(
            run(&mut state, "prompt delete ghost"),
            Err(CommandError::Preset(PresetError::NotFound(_)))
        ));
        assert!(matches!(
            run(&mut state, "prompt load ghost"),
            Err(CommandError::Preset(PresetError::NotFound(_)))
        ));
        assert_eq!(state.prompt.current(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_list_continues() {
        let (_dir, _paths, mut state) = setup();
        assert_eq!(run(&mut state, "prompt list").unwrap(), Outcome::Continue);
        run(&mut state, "prompt save work \"w\"").unwrap();
        assert_eq!(run(&mut state, "prompt list").unwrap(), Outcome::Continue);
    }

    #[test]
    fn test_persistence_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::with_dir(dir.path().join("gone"));
        let mut state = ShellState::load(&paths).with_quiet(true);

        let result = run(&mut state, "prompt save work \"w\"");
        assert!(matches!(result, Err(CommandError::Persistence(_))));
        assert_eq!(state.presets.names(), vec!["work"]);

        assert!(run(&mut state, "prompt load work").is_err());
        assert_eq!(state.prompt.current(), "w");
    }
}
