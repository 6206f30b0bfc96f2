use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{SetupError, SetupResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    fn failure_detail(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{status}: {stderr}")
        }
    }
}

/// Runs an external command to completion and captures its output.
pub trait ToolRunner {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<ToolOutput>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[&str]) -> io::Result<ToolOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// An external CLI the setup talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub binary: PathBuf,
}

impl Tool {
    pub fn new(name: impl Into<String>, binary: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            binary: binary.into(),
        }
    }

    /// True when the command could be spawned and exited with success.
    pub fn probe(&self, runner: &dyn ToolRunner, args: &[&str]) -> bool {
        match runner.run(&self.binary, args) {
            Ok(output) => {
                debug!(tool = %self.name, ?args, code = ?output.code, "probe finished");
                output.success
            }
            Err(err) => {
                debug!(tool = %self.name, ?args, error = %err, "probe could not start");
                false
            }
        }
    }

    /// Run a command whose failure is fatal for the setup.
    pub fn invoke(
        &self,
        runner: &dyn ToolRunner,
        args: &[&str],
        action: &str,
    ) -> SetupResult<ToolOutput> {
        debug!(tool = %self.name, binary = %self.binary.display(), ?args, "running");
        let output = runner
            .run(&self.binary, args)
            .map_err(|err| SetupError::ExternalCall {
                action: action.to_string(),
                detail: format!("unable to start {}: {err}", self.binary.display()),
            })?;
        if !output.success {
            return Err(SetupError::ExternalCall {
                action: action.to_string(),
                detail: output.failure_detail(),
            });
        }
        Ok(output)
    }
}
