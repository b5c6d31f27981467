use crate::error::{GitVersionError, Result};
use crate::git::{command_line, CommandOutput, CommandRunner};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Runs git as a child process and waits for it to exit
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    work_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Runner for the `git` found on `PATH`, in the current directory
    pub fn new() -> Self {
        ProcessRunner {
            program: "git".to_string(),
            work_dir: None,
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git inside `dir` instead of the current directory
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let command = command_line(&self.program, args);

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                GitVersionError::Spawn {
                    command: format!("{} (is git installed?)", command),
                    source,
                }
            } else {
                GitVersionError::Spawn { command: command.clone(), source }
            }
        })?;

        if !output.status.success() {
            return Err(GitVersionError::command_failed(output.status.code(), command));
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
