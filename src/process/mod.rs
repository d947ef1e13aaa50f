use std::fmt;

pub mod executor;

pub use executor::{ProcessExecutor, Termination};

#[derive(Debug)]
pub enum ProcessError {
    /// The OS could not create the child process.
    Spawn(std::io::Error),
    /// The program does not exist on the search path or cannot be executed.
    ProgramLookup {
        program: String,
        source: std::io::Error,
    },
    Wait(std::io::Error),
}

impl ProcessError {
    pub(crate) fn from_spawn(program: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                ProcessError::ProgramLookup {
                    program: program.to_string(),
                    source: err,
                }
            }
            _ => ProcessError::Spawn(err),
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "Fork failed: {}", e),
            ProcessError::ProgramLookup { program, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                write!(f, "{}: command not found", program)
            }
            ProcessError::ProgramLookup { program, source } => {
                write!(f, "{}: {}", program, source)
            }
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
