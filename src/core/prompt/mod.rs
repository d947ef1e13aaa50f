//! Prompt customization: the active prompt string and the named presets a
//! user can save and reload across sessions.

use std::fmt;
use std::path::{Path, PathBuf};

mod presets;
mod state;

pub use presets::{Preset, PresetError, PresetStore, MAX_PRESETS, MAX_PRESET_NAME};
pub use state::{PromptState, DEFAULT_PROMPT, MAX_PROMPT_LENGTH};

/// A failed read or write of one of the persisted prompt files.
#[derive(Debug)]
pub struct PersistenceError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl PersistenceError {
    pub(crate) fn new(path: &Path, source: std::io::Error) -> Self {
        PersistenceError {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Cuts `s` to at most `max` bytes without splitting a character.
pub(crate) fn truncate_to(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
