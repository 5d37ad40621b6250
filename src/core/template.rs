//! Template formatting
//!
//! Supported placeholders:
//!
//! - `%{name}` - named argument (`[A-Za-z0-9_-]+`)
//! - `%s` - next positional argument
//! - `%%` - literal percent sign
//!
//! Any other `%` is copied through unchanged.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown placeholder %{{{0}}}")]
    UnknownName(String),

    #[error("Missing positional argument #{0}")]
    MissingPositional(usize),

    #[error("Unterminated placeholder at byte {0}")]
    Unterminated(usize),

    #[error("Invalid placeholder name {0:?}")]
    InvalidName(String),
}

/// Arguments for a template: positional values plus named values
#[derive(Debug, Clone, Default)]
pub struct Args {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value (consumed by `%s` in order)
    pub fn push(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Insert a named value unless the name is already taken
    pub(crate) fn with_default(&mut self, name: &str, value: &str) {
        if !self.named.contains_key(name) {
            self.named.insert(name.to_string(), value.to_string());
        }
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Substitute placeholders in `template`
pub fn format(template: &str, args: &Args) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next_positional = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.peek().map(|&(_, c)| c) {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') => {
                chars.next();
                let value = args
                    .positional
                    .get(next_positional)
                    .ok_or(FormatError::MissingPositional(next_positional))?;
                out.push_str(value);
                next_positional += 1;
            }
            Some('{') => {
                chars.next();
                let rest = &template[pos + 2..];
                let close = rest.find('}').ok_or(FormatError::Unterminated(pos))?;
                let name = &rest[..close];
                if name.is_empty() || !name.chars().all(is_name_char) {
                    return Err(FormatError::InvalidName(name.to_string()));
                }
                let value = args
                    .named(name)
                    .ok_or_else(|| FormatError::UnknownName(name.to_string()))?;
                out.push_str(value);

                // Skip past the name and the closing brace
                for _ in 0..=name.chars().count() {
                    chars.next();
                }
            }
            _ => out.push('%'),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_positional() {
        let args = Args::new().push("Alice").push("42").with("who", "Bob");

        assert_eq!(
            format("%s is %s, not %{who}", &args).unwrap(),
            "Alice is 42, not Bob"
        );
    }

    #[test]
    fn test_percent_passthrough() {
        let args = Args::new();

        assert_eq!(format("100%% done", &args).unwrap(), "100% done");
        assert_eq!(format("50% off", &args).unwrap(), "50% off");
        assert_eq!(format("trailing %", &args).unwrap(), "trailing %");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        let args = Args::new().with("x", "žluťoučký");

        assert_eq!(format("kůň: %{x}!", &args).unwrap(), "kůň: žluťoučký!");
    }

    #[test]
    fn test_errors() {
        let args = Args::new().push("only");

        assert_eq!(
            format("%{missing}", &args),
            Err(FormatError::UnknownName("missing".to_string()))
        );
        assert_eq!(
            format("%s and %s", &args),
            Err(FormatError::MissingPositional(1))
        );
        assert_eq!(format("ab%{open", &args), Err(FormatError::Unterminated(2)));
        assert_eq!(
            format("%{a b}", &args),
            Err(FormatError::InvalidName("a b".to_string()))
        );
    }
}
