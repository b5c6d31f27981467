//! Git command abstraction layer
//!
//! This module isolates every call to the `git` executable behind the
//! [CommandRunner] trait, so the history walker can be driven by the real
//! executable or by a scripted double in tests.
//!
//! # Overview
//!
//! - [process::ProcessRunner]: spawns `git` as a child process
//! - [mock::ScriptedRunner]: returns scripted output per argument list
//!
//! # Usage
//!
//! ```rust
//! # use gitversion::git::{CommandRunner, ScriptedRunner};
//! let runner = ScriptedRunner::new()
//!     .with_output(&["rev-list", "--merges", "1.0...HEAD"], "abc\n");
//! let output = runner.run(&["rev-list", "--merges", "1.0...HEAD"]).unwrap();
//! assert_eq!(output.lines(), vec!["abc".to_string()]);
//! ```

pub mod mock;
pub mod process;

pub use mock::ScriptedRunner;
pub use process::ProcessRunner;

use crate::error::Result;

/// Captured output of a successful git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        CommandOutput {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Standard output split into lines, without line terminators
    pub fn lines(&self) -> Vec<String> {
        self.stdout.lines().map(|line| line.to_string()).collect()
    }
}

/// Runs git with an argument list
///
/// ## Error Handling
///
/// A nonzero exit status must be reported as
/// [crate::error::GitVersionError::CommandFailed] carrying the exit code and
/// the full command line. Output on stderr alone is not a failure; it is
/// returned in [CommandOutput::stderr] for the caller to log.
///
/// ## Implementations
///
/// - [ProcessRunner](process::ProcessRunner): real child process
/// - [ScriptedRunner](mock::ScriptedRunner): test double
pub trait CommandRunner: Send + Sync {
    /// Run git with `args` (not including the program name) and wait for it.
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(args)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(args)
    }
}

/// Render a program and its arguments as a single command line
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
