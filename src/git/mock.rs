use crate::error::{GitVersionError, Result};
use crate::git::{command_line, CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::sync::Mutex;

enum Scripted {
    Output(CommandOutput),
    Failure(i32),
}

/// Scripted runner for testing without a git executable
///
/// Each exact argument list can be given its own output or failure. Unknown
/// argument lists succeed with empty output. Every call is recorded.
pub struct ScriptedRunner {
    responses: HashMap<Vec<String>, Scripted>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses
    pub fn new() -> Self {
        ScriptedRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script the stdout returned for an argument list
    pub fn with_output(self, args: &[&str], stdout: &str) -> Self {
        self.with_response(args, CommandOutput::new(stdout, ""))
    }

    /// Script the full output returned for an argument list
    pub fn with_response(mut self, args: &[&str], output: CommandOutput) -> Self {
        self.responses.insert(key(args), Scripted::Output(output));
        self
    }

    /// Script a nonzero exit for an argument list
    pub fn with_failure(mut self, args: &[&str], code: i32) -> Self {
        self.responses.insert(key(args), Scripted::Failure(code));
        self
    }

    /// Argument lists received so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Whether the runner was called with exactly `args`
    pub fn was_called_with(&self, args: &[&str]) -> bool {
        let wanted = key(args);
        self.calls().iter().any(|call| *call == wanted)
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key(args));
        }

        match self.responses.get(&key(args)) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::Failure(code)) => Err(GitVersionError::command_failed(
                Some(*code),
                command_line("git", args),
            )),
            None => Ok(CommandOutput::default()),
        }
    }
}

fn key(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
