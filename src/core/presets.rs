//! Color presets
//!
//! Symbolic names usable as `%{name}` placeholders in formatted writes.
//! Each name expands to a literal ANSI SGR sequence.

use std::collections::BTreeMap;

/// Built-in presets, in table order
const BUILTIN: &[(&str, &str)] = &[
    ("reset", "\x1b[0m"),
    ("red", "\x1b[0;31m"),
    ("red-bold", "\x1b[1;31m"),
    ("green", "\x1b[0;32m"),
    ("green-bold", "\x1b[1;32m"),
    ("yellow", "\x1b[0;33m"),
    ("yellow-bold", "\x1b[1;33m"),
    ("blue", "\x1b[0;34m"),
    ("blue-bold", "\x1b[1;34m"),
    ("magenta", "\x1b[0;35m"),
    ("magenta-bold", "\x1b[1;35m"),
    ("cyan", "\x1b[0;36m"),
    ("cyan-bold", "\x1b[1;36m"),
    ("white", "\x1b[0;37m"),
    ("white-bold", "\x1b[1;37m"),
];

/// Name to escape sequence table
#[derive(Debug, Clone)]
pub struct ColorPresets {
    table: BTreeMap<String, String>,
}

impl Default for ColorPresets {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorPresets {
    /// The standard 8-color table
    pub fn builtin() -> Self {
        let table = BUILTIN
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        Self { table }
    }

    /// Builtin table with `overrides` replacing or extending entries
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut presets = Self::builtin();
        for (name, code) in overrides {
            presets.table.insert(name.clone(), code.clone());
        }
        presets
    }

    /// Escape sequence for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Preset names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codes() {
        let presets = ColorPresets::builtin();

        assert_eq!(presets.get("reset"), Some("\x1b[0m"));
        assert_eq!(presets.get("red"), Some("\x1b[0;31m"));
        assert_eq!(presets.get("white-bold"), Some("\x1b[1;37m"));
        assert_eq!(presets.get("purple"), None);
        assert_eq!(presets.names().len(), 15);
    }

    #[test]
    fn test_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("red".to_string(), "\x1b[0;91m".to_string());
        overrides.insert("orange".to_string(), "\x1b[38;5;208m".to_string());

        let presets = ColorPresets::with_overrides(&overrides);

        assert_eq!(presets.get("red"), Some("\x1b[0;91m"));
        assert_eq!(presets.get("orange"), Some("\x1b[38;5;208m"));
        // Untouched entries survive
        assert_eq!(presets.get("green"), Some("\x1b[0;32m"));
    }
}
