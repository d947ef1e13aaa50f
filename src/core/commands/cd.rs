use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;
use crate::input::CommandLine;
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, line: &CommandLine, _state: &mut ShellState) -> Result<Outcome, CommandError> {
        let target = line
            .arg(1)
            .ok_or_else(|| CommandError::Usage("cd: missing argument".to_string()))?;

        env::set_current_dir(target).map_err(|source| CommandError::DirectoryChange {
            path: PathBuf::from(target),
            source,
        })?;
        tracing::debug!(dir = target, "changed directory");
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigPaths;
    use crate::test_support::cwd_lock;

    fn state(dir: &tempfile::TempDir) -> ShellState {
        ShellState::load(&ConfigPaths::with_dir(dir.path()))
    }

    #[test]
    fn test_cd_changes_directory() {
        let _guard = cwd_lock();
        let original = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().canonicalize().unwrap();
        let line = CommandLine::parse(&format!("cd {}", target.display()));

        let outcome = CdCommand::new().execute(&line, &mut state(&dir)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(env::current_dir().unwrap(), target);

        env::set_current_dir(original).unwrap();
    }

    #[test]
    fn test_cd_missing_argument() {
        let dir = tempfile::tempdir().unwrap();
        let result = CdCommand::new().execute(&CommandLine::parse("cd"), &mut state(&dir));
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_cd_nonexistent_leaves_cwd_unchanged() {
        let _guard = cwd_lock();
        let before = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let result = CdCommand::new().execute(
            &CommandLine::parse("cd /path/that/does/not/exist"),
            &mut state(&dir),
        );
        assert!(matches!(result, Err(CommandError::DirectoryChange { .. })));
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
