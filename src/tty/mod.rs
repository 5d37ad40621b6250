//! Terminal line-discipline control.
//!
//! This module isolates everything that touches the controlling terminal's
//! mode settings:
//!
//! - **TtyControl**: query/apply seam over the settings vocabulary of `stty`
//! - **ModeSnapshot**: rollback values captured before a mode change
//! - **stty**: `TtyControl` backed by the external `stty` binary
//!
//! # Scoped mode changes
//!
//! ```text
//! query (stty -a) -> ModeSnapshot::capture
//! apply requested settings
//! run callback
//! apply snapshot rollback   (always)
//! ```
//!
//! Unix only: settings use the `stty` vocabulary (`cbreak`, `-echo`, ...).

pub mod stty;

#[cfg(test)]
pub(crate) mod fake;

pub use stty::Stty;

use tracing::trace;

use crate::error::Result;

/// Access to the terminal's line-discipline settings
pub trait TtyControl {
    /// Full textual dump of the current settings (`stty -a` format)
    fn query(&mut self) -> Result<String>;

    /// Apply settings such as `cbreak` or `-echo`
    fn apply(&mut self, settings: &[String]) -> Result<()>;
}

/// Strip the negation prefix from a setting
fn setting_name(setting: &str) -> &str {
    setting.trim_start_matches('-')
}

/// Requested settings paired with the values that undo them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSnapshot {
    requested: Vec<String>,
    rollback: Vec<String>,
}

impl ModeSnapshot {
    /// Record the current value of every setting in `requested`
    ///
    /// A setting missing from `query_output` rolls back to its negation
    /// (`cbreak` -> `-cbreak`, `-echo` -> `echo`).
    pub fn capture(requested: &[&str], query_output: &str) -> Self {
        let tokens: Vec<&str> = query_output
            .split_whitespace()
            .map(|token| token.trim_end_matches(';'))
            .collect();

        let rollback = requested
            .iter()
            .map(|setting| {
                let name = setting_name(setting);
                let found = tokens
                    .iter()
                    .find(|token| **token == name || token.strip_prefix('-') == Some(name));

                let value = match found {
                    Some(token) => token.to_string(),
                    None if *setting == name => format!("-{}", name),
                    None => name.to_string(),
                };
                trace!(setting, rollback = %value, found = found.is_some(), "captured tty setting");
                value
            })
            .collect();

        Self {
            requested: requested.iter().map(|s| s.to_string()).collect(),
            rollback,
        }
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    pub fn rollback(&self) -> &[String] {
        &self.rollback
    }
}
