use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::{truncate_to, PersistenceError, MAX_PROMPT_LENGTH};

pub const MAX_PRESETS: usize = 50;
pub const MAX_PRESET_NAME: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub prompt: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PresetError {
    Duplicate(String),
    NotFound(String),
    CapacityExceeded,
    InvalidName(String),
    InvalidText,
    EmptyText,
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Duplicate(name) => write!(
                f,
                "Preset '{}' already exists. Delete it first or use a different name.",
                name
            ),
            PresetError::NotFound(name) => write!(f, "Preset '{}' not found", name),
            PresetError::CapacityExceeded => write!(f, "Maximum number of presets reached"),
            PresetError::InvalidName(name) => write!(
                f,
                "Invalid preset name '{}': must be non-empty and must not contain '='",
                name
            ),
            PresetError::InvalidText => write!(f, "Preset prompt must not contain a newline"),
            PresetError::EmptyText => write!(f, "Preset prompt must not be empty"),
        }
    }
}

impl std::error::Error for PresetError {}

/// Ordered, bounded collection of presets backed by a `name=prompt` file.
///
/// Insertion order is display order; removing an entry never reorders the
/// survivors. Names are unique and the store never holds more than
/// [`MAX_PRESETS`] entries.
#[derive(Debug)]
pub struct PresetStore {
    presets: Vec<Preset>,
    path: PathBuf,
}

impl PresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PresetStore {
            presets: Vec::new(),
            path: path.into(),
        }
    }

    /// Reads the store from `path`. A missing file yields an empty store.
    ///
    /// Lines without `=`, with an empty name or with an empty prompt are
    /// skipped, as are lines that are not valid UTF-8. Records past capacity are ignored.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let mut store = Self::new(path);

        let file = match File::open(&store.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(store),
            Err(e) => return Err(PersistenceError::new(&store.path, e)),
        };

        for line in BufReader::new(file).split(b'\n') {
            if store.presets.len() >= MAX_PRESETS {
                tracing::warn!(path = %store.path.display(), "preset file exceeds capacity, ignoring the rest");
                break;
            }
            let line = line.map_err(|e| PersistenceError::new(&store.path, e))?;
            let Ok(line) = String::from_utf8(line) else {
                tracing::debug!("skipping non-utf8 preset record");
                continue;
            };
            match parse_record(&line) {
                Some(preset) if store.get(&preset.name).is_none() => store.presets.push(preset),
                Some(preset) => tracing::debug!(name = %preset.name, "skipping duplicate preset record"),
                None => tracing::debug!(record = %line, "skipping malformed preset record"),
            }
        }

        tracing::debug!(count = store.presets.len(), "loaded presets");
        Ok(store)
    }

    /// Overwrites the backing file with every record, in store order.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let err = |e| PersistenceError::new(&self.path, e);
        let mut writer = BufWriter::new(File::create(&self.path).map_err(err)?);
        for preset in &self.presets {
            writeln!(writer, "{}={}", preset.name, preset.prompt).map_err(err)?;
        }
        writer.flush().map_err(err)?;
        tracing::debug!(path = %self.path.display(), count = self.presets.len(), "saved presets");
        Ok(())
    }

    /// Appends a preset. Name and text are cut to their length limits first.
    pub fn insert(&mut self, name: &str, prompt: &str) -> Result<&Preset, PresetError> {
        let name = truncate_to(name, MAX_PRESET_NAME);
        if name.is_empty() || name.contains('=') || name.contains('\n') {
            return Err(PresetError::InvalidName(name.to_string()));
        }
        if prompt.is_empty() {
            return Err(PresetError::EmptyText);
        }
        if prompt.contains('\n') {
            return Err(PresetError::InvalidText);
        }
        if self.get(name).is_some() {
            return Err(PresetError::Duplicate(name.to_string()));
        }
        if self.presets.len() >= MAX_PRESETS {
            return Err(PresetError::CapacityExceeded);
        }

        self.presets.push(Preset {
            name: name.to_string(),
            prompt: truncate_to(prompt, MAX_PROMPT_LENGTH - 1).to_string(),
        });
        Ok(&self.presets[self.presets.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Result<Preset, PresetError> {
        let index = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;
        Ok(self.presets.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One `index. name: prompt` line per preset, 1-based.
    pub fn listing(&self) -> Vec<String> {
        self.presets
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}: {}", i + 1, p.name, p.prompt))
            .collect()
    }
}

fn parse_record(line: &str) -> Option<Preset> {
    let (name, prompt) = line.split_once('=')?;
    if name.is_empty() || prompt.is_empty() {
        return None;
    }
    Some(Preset {
        name: truncate_to(name, MAX_PRESET_NAME).to_string(),
        prompt: truncate_to(prompt, MAX_PROMPT_LENGTH - 1).to_string(),
    })
}
