use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{truncate_to, PersistenceError};

pub const MAX_PROMPT_LENGTH: usize = 256;
pub const DEFAULT_PROMPT: &str = "愛> ";

const SEPARATOR: &str = " > ";

/// The active prompt, persisted verbatim to its own file.
#[derive(Debug)]
pub struct PromptState {
    current: String,
    path: PathBuf,
}

impl PromptState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PromptState {
            current: DEFAULT_PROMPT.to_string(),
            path: path.into(),
        }
    }

    /// Reads the last used prompt from `path`.
    ///
    /// Only the first line counts. A missing or empty file leaves the default
    /// prompt in place.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let mut state = Self::new(path);

        let content = match fs::read(&state.path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(state),
            Err(e) => return Err(PersistenceError::new(&state.path, e)),
        };

        let first = content.split('\n').next().unwrap_or_default();
        let first = truncate_to(first, MAX_PROMPT_LENGTH - 1);
        if !first.is_empty() {
            state.current = first.to_string();
        }
        tracing::debug!(prompt = %state.current, "loaded last prompt");
        Ok(state)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the prompt and writes it out.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, prompt: &str) -> Result<(), PersistenceError> {
        self.current = truncate_to(prompt, MAX_PROMPT_LENGTH - 1).to_string();
        self.save()
    }

    /// Sets a user-typed prompt, appending `" > "` unless it already ends in a space.
    ///
    /// Long text is cut before the separator is added, so the separator is
    /// never lost to the length cap.
    pub fn set_with_separator(&mut self, text: &str) -> Result<(), PersistenceError> {
        self.set(&with_separator(text))
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        fs::write(&self.path, &self.current).map_err(|e| PersistenceError::new(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "saved prompt");
        Ok(())
    }
}

fn with_separator(text: &str) -> String {
    let text = truncate_to(text, MAX_PROMPT_LENGTH - 1 - SEPARATOR.len());
    if text.ends_with(' ') {
        text.to_string()
    } else {
        format!("{}{}", text, SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state() -> (tempfile::TempDir, PromptState) {
        let dir = tempfile::tempdir().unwrap();
        let state = PromptState::new(dir.path().join("last_prompt"));
        (dir, state)
    }

    #[test]
    fn test_missing_file_uses_default() {
        let (_dir, state) = temp_state();
        let loaded = PromptState::load(state.path()).unwrap();
        assert_eq!(loaded.current(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_empty_file_uses_default() {
        let (_dir, state) = temp_state();
        fs::write(state.path(), "\n").unwrap();
        assert_eq!(PromptState::load(state.path()).unwrap().current(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_load_strips_trailing_newline() {
        let (_dir, state) = temp_state();
        fs::write(state.path(), "me@host $ \n").unwrap();
        assert_eq!(PromptState::load(state.path()).unwrap().current(), "me@host $ ");
    }

    #[test]
    fn test_set_persists_verbatim() {
        let (_dir, mut state) = temp_state();
        state.set("λ ").unwrap();

        assert_eq!(fs::read_to_string(state.path()).unwrap(), "λ ");
        assert_eq!(PromptState::load(state.path()).unwrap().current(), "λ ");
    }

    #[test]
    fn test_separator_appended_without_trailing_space() {
        let (_dir, mut state) = temp_state();
        state.set_with_separator("foo").unwrap();
        assert_eq!(state.current(), "foo > ");

        state.set_with_separator("foo ").unwrap();
        assert_eq!(state.current(), "foo ");
    }

    #[test]
    fn test_long_text_keeps_separator() {
        let (_dir, mut state) = temp_state();
        state.set_with_separator(&"x".repeat(1000)).unwrap();

        assert_eq!(state.current().len(), MAX_PROMPT_LENGTH - 1);
        assert!(state.current().ends_with(SEPARATOR));
    }

    #[test]
    fn test_empty_text_gets_separator() {
        let (_dir, mut state) = temp_state();
        state.set_with_separator("").unwrap();
        assert_eq!(state.current(), " > ");
    }

    #[test]
    fn test_set_keeps_value_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = PromptState::new(dir.path().join("missing").join("last_prompt"));

        assert!(state.set("kept> ").is_err());
        assert_eq!(state.current(), "kept> ");
    }

    #[test]
    fn test_set_truncates_long_prompt() {
        let (_dir, mut state) = temp_state();
        state.set(&"x".repeat(1000)).unwrap();
        assert_eq!(state.current().len(), MAX_PROMPT_LENGTH - 1);
    }
}
