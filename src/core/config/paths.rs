use super::ConfigError;
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".sheller";
const PRESETS_FILE: &str = "prompts";
const LAST_PROMPT_FILE: &str = "last_prompt";
const HISTORY_FILE: &str = "history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub presets_path: PathBuf,
    pub last_prompt_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    /// Layout rooted at `$HOME/.sheller`.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_dir(home.join(CONFIG_DIR)))
    }

    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        ConfigPaths {
            presets_path: config_dir.join(PRESETS_FILE),
            last_prompt_path: config_dir.join(LAST_PROMPT_FILE),
            history_path: config_dir.join(HISTORY_FILE),
            config_dir,
        }
    }

    /// Creates the configuration directory (mode 0700) if it does not exist.
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        if self.config_dir.is_dir() {
            return Ok(());
        }
        create_private_dir(&self.config_dir)?;
        tracing::info!(dir = %self.config_dir.display(), "created config directory");
        Ok(())
    }
}

fn create_private_dir(path: &Path) -> Result<(), ConfigError> {
    DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(path)
        .map_err(ConfigError::from)
}
