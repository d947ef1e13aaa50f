use std::fmt;
use std::io;
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::core::commands::Outcome;
use crate::highlight::SyntaxHighlighter;

/// How a waited-on child stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
    /// The child was stopped and is still alive; the shell does not resume it.
    Stopped { pid: u32, signal: i32 },
}

impl Termination {
    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exited with status {}", code),
            Termination::Signaled(sig) => write!(f, "terminated by signal {}", sig),
            Termination::Stopped { pid, signal } => {
                write!(f, "[{}] stopped by signal {}", pid, signal)
            }
        }
    }
}

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
    highlighter: SyntaxHighlighter,
}

impl ProcessExecutor {
    pub fn new(quiet_mode: bool) -> Self {
        ProcessExecutor {
            quiet_mode,
            highlighter: SyntaxHighlighter::new(),
        }
    }

    /// Runs `argv[0]` with the rest as its arguments, blocking until it exits,
    /// is killed, or stops.
    ///
    /// The child inherits the shell's stdio, environment and working directory.
    // reaped by `wait_for`, not `Child::wait`
    #[allow(clippy::zombie_processes)]
    pub fn spawn_and_wait(&self, argv: &[&str]) -> Result<Termination, ProcessError> {
        let Some((program, args)) = argv.split_first() else {
            return Ok(Termination::Exited(0));
        };

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::from_spawn(program, e))?;

        let pid = child.id();
        tracing::debug!(pid, program = *program, "spawned child");

        let termination = wait_for(pid)?;
        tracing::debug!(pid, %termination, "child finished");
        Ok(termination)
    }

    /// Runs an external program and reports anything unusual. The shell
    /// keeps going whatever happens to the child.
    pub fn run(&self, argv: &[&str]) -> Outcome {
        match self.spawn_and_wait(argv) {
            Ok(termination) => self.report(&termination),
            Err(e) => {
                tracing::warn!(error = %e, "external command failed");
                eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
            }
        }
        Outcome::Continue
    }

    fn report(&self, termination: &Termination) {
        if termination.success() || self.quiet_mode {
            return;
        }
        match termination {
            Termination::Stopped { .. } => eprintln!("{}", termination),
            _ => eprintln!("Process {}", termination),
        }
    }
}

/// `waitpid` with `WUNTRACED`, retried on `EINTR`.
fn wait_for(pid: u32) -> Result<Termination, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        let rc = unsafe { libc::waitpid(pid as libc::pid_t, &mut status, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        if libc::WIFEXITED(status) {
            return Ok(Termination::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(Termination::Signaled(libc::WTERMSIG(status)));
        }
        if libc::WIFSTOPPED(status) {
            return Ok(Termination::Stopped {
                pid,
                signal: libc::WSTOPSIG(status),
            });
        }
    }
}
