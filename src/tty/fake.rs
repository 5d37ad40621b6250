//! In-memory `TtyControl` for tests

use std::collections::BTreeMap;
use std::process::ExitStatus;

use super::TtyControl;
use crate::error::{Error, Result};

/// Models the boolean `stty` flags plus every invocation made
///
/// `cbreak` is not a real flag: like `stty`, it toggles `icanon`.
#[derive(Debug, Clone)]
pub struct FakeTty {
    pub state: BTreeMap<String, bool>,
    pub calls: Vec<Vec<String>>,
    /// Zero-based index of the call that should fail
    pub fail_on_call: Option<usize>,
}

impl Default for FakeTty {
    fn default() -> Self {
        let state = ["isig", "icanon", "iexten", "echo", "echoe", "echok"]
            .iter()
            .map(|name| (name.to_string(), true))
            .chain(std::iter::once(("echonl".to_string(), false)))
            .collect();
        Self {
            state,
            calls: Vec::new(),
            fail_on_call: None,
        }
    }
}

impl FakeTty {
    fn record(&mut self, call: Vec<String>) -> Result<()> {
        let index = self.calls.len();
        let command = format!("stty {}", call.join(" "));
        self.calls.push(call);
        if self.fail_on_call == Some(index) {
            return Err(Error::ControlFailed {
                command,
                status: failed_status(),
                stderr: String::new(),
            });
        }
        Ok(())
    }

    /// Settings passed to each `apply`, query calls excluded
    pub fn applied(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter(|call| call.first().map(String::as_str) != Some("-a"))
            .cloned()
            .collect()
    }
}

impl TtyControl for FakeTty {
    fn query(&mut self) -> Result<String> {
        self.record(vec!["-a".to_string()])?;
        let flags: Vec<String> = self
            .state
            .iter()
            .map(|(name, on)| if *on { name.clone() } else { format!("-{}", name) })
            .collect();
        Ok(format!(
            "speed 38400 baud; rows 24; columns 80; line = 0;\n{}\n",
            flags.join(" ")
        ))
    }

    fn apply(&mut self, settings: &[String]) -> Result<()> {
        self.record(settings.to_vec())?;
        for setting in settings {
            let (name, on) = match setting.strip_prefix('-') {
                Some(name) => (name, false),
                None => (setting.as_str(), true),
            };
            match name {
                "cbreak" => self.state.insert("icanon".to_string(), !on),
                _ => self.state.insert(name.to_string(), on),
            };
        }
        Ok(())
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(not(unix))]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}

