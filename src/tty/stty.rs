//! `stty` backed terminal control

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use super::TtyControl;
use crate::error::{Error, Result};

/// Location of `stty` on Linux and the BSDs
pub const DEFAULT_STTY_PATH: &str = "/bin/stty";

/// Runs the `stty` binary against the controlling terminal
///
/// The child inherits our stdin, which is what `stty` operates on, so the
/// process must be attached to an interactive terminal.
#[derive(Debug, Clone)]
pub struct Stty {
    path: PathBuf,
}

impl Default for Stty {
    fn default() -> Self {
        Self::new(DEFAULT_STTY_PATH)
    }
}

impl Stty {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        let command = self.describe(args);
        debug!(%command, "running terminal control command");

        let output = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::piped())
            .stdout(Stdio::piped())
            .output()
            .map_err(|source| Error::ControlSpawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(Error::ControlFailed {
                command,
                status: output.status,
                stderr: format_stderr(&output),
            })
        }
    }

    fn describe(&self, args: &[String]) -> String {
        let mut command = self.path.display().to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl TtyControl for Stty {
    fn query(&mut self) -> Result<String> {
        let output = self.run(&["-a".to_string()])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn apply(&mut self, settings: &[String]) -> Result<()> {
        self.run(settings).map(|_| ())
    }
}

fn format_stderr(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
