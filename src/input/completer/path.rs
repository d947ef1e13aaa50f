use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

#[derive(Clone)]
pub struct PathCompleter;

impl Default for PathCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Completes the last path component of `incomplete` against the
    /// entries of its parent directory.
    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_incomplete(incomplete);
        let shown_dir = &incomplete[..incomplete.len() - prefix.len()];

        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let full = format!("{}{}", shown_dir, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", full),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", full),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits into the directory to search and the file-name prefix.
fn split_incomplete(incomplete: &str) -> (PathBuf, &str) {
    match incomplete.rfind('/') {
        Some(0) => (PathBuf::from("/"), &incomplete[1..]),
        Some(idx) => (Path::new(&incomplete[..idx]).to_path_buf(), &incomplete[idx + 1..]),
        None => (PathBuf::from("."), incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_incomplete() {
        assert_eq!(split_incomplete("foo"), (PathBuf::from("."), "foo"));
        assert_eq!(split_incomplete("/us"), (PathBuf::from("/"), "us"));
        assert_eq!(split_incomplete("a/b/c"), (PathBuf::from("a/b"), "c"));
        assert_eq!(split_incomplete("a/"), (PathBuf::from("a"), ""));
    }

    #[test]
    fn test_complete_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();

        let base = format!("{}/", dir.path().display());
        let matches = PathCompleter::new().complete_path(&format!("{}n", base));
        let replacements: Vec<String> = matches.into_iter().map(|p| p.replacement).collect();

        assert_eq!(
            replacements,
            vec![format!("{}nested/", base), format!("{}notes.txt ", base)]
        );
    }
}
