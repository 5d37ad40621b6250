//! Terminal session
//!
//! Couples an input stream, an output stream and a `TtyControl` into the
//! prompt operations: formatted writes, line prompts, confirmations and
//! hidden or masked password entry.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::panic::{self, AssertUnwindSafe};

use crossterm::tty::IsTty;
use tracing::{debug, error, warn};

use super::flags::Flags;
use super::presets::ColorPresets;
use super::template::{self, Args};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::tty::{ModeSnapshot, Stty, TtyControl};

/// Settings for reading single keystrokes without echo
const CBREAK_NO_ECHO: &[&str] = &["cbreak", "-echo"];
/// Settings for reading a whole line without echo
const NO_ECHO: &[&str] = &["-echo"];

const ANSWER_YES: &str = "%{green}Yes%{reset}";
const ANSWER_NO: &str = "%{red}No%{reset}";

const CR: char = '\r';
const LF: char = '\n';
const ESC: char = '\x1b';

/// Console input/output helper
///
/// Defaults to stdin, stdout and `/bin/stty`; tests plug in in-memory
/// streams and a fake terminal.
pub struct TerminalSession<R = StdinLock<'static>, W = Stdout, C = Stty> {
    input: R,
    output: W,
    tty: C,
    flags: Flags,
    presets: ColorPresets,
}

impl TerminalSession {
    /// Session over the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), Stty::default())
    }

    /// Session over the standard streams, configured from `config`
    pub fn from_config(config: &Config) -> Self {
        let stdout = io::stdout();
        let is_tty = stdout.is_tty();

        Self::new(io::stdin().lock(), stdout, Stty::new(&config.stty)).configure(config, is_tty)
    }
}

impl<R: BufRead, W: Write, C: TtyControl> TerminalSession<R, W, C> {
    pub fn new(input: R, output: W, tty: C) -> Self {
        Self {
            input,
            output,
            tty,
            flags: Flags::empty(),
            presets: ColorPresets::builtin(),
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_presets(mut self, presets: ColorPresets) -> Self {
        self.presets = presets;
        self
    }

    /// Apply color mode and preset overrides from `config`
    ///
    /// `is_tty` tells whether the output stream is a terminal, which decides
    /// `colors = "auto"`.
    pub fn configure(mut self, config: &Config, is_tty: bool) -> Self {
        self.flags.set(Flags::NO_COLORS, !config.colors.enabled(is_tty));
        self.presets = ColorPresets::with_overrides(&config.presets);
        self
    }

    /// Set or clear a flag bit
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.flags.set(flag, value);
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn presets(&self) -> &ColorPresets {
        &self.presets
    }

    /// Take the session apart, returning its streams and terminal control
    pub fn into_parts(self) -> (R, W, C) {
        (self.input, self.output, self.tty)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a template with color presets available as named arguments
    ///
    /// Caller-supplied named arguments take precedence over presets.
    pub fn write_formatted(&mut self, template: &str, args: &Args) -> Result<()> {
        let text = self.render(template, args)?;
        self.write(&text)
    }

    /// Write text followed by a newline
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text))
    }

    pub fn write_formatted_line(&mut self, template: &str, args: &Args) -> Result<()> {
        self.write_formatted(&format!("{}\n", template), args)
    }

    fn render(&self, template: &str, args: &Args) -> Result<String> {
        let no_colors = self.flags.contains(Flags::NO_COLORS);
        let mut all = args.clone();
        for (name, code) in self.presets.iter() {
            all.with_default(name, if no_colors { "" } else { code });
        }
        Ok(template::format(template, &all)?)
    }

    // ------------------------------------------------------------------
    // Prompts
    // ------------------------------------------------------------------

    /// Prompt for a line of input
    ///
    /// Returns the trimmed line, or an empty string once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.write(&format!("{} ", prompt.trim_end()))?;
        let line = self.read_line()?;
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question, answered with a single keystroke
    ///
    /// Enter picks `default_yes`. Unrecognized keys print `Unknown answer`
    /// and ask again.
    pub fn ask_confirmation(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "(Y/n) " } else { "(y/N) " };

        loop {
            self.write(&format!("{} {}", question.trim_end(), hint))?;

            // A single byte, so non-ASCII keys cannot swallow the next keystrokes
            let answer = self.with_tty_mode(CBREAK_NO_ECHO, |session| session.read_byte())?;

            let confirmed = match answer.map(char::from) {
                Some('y' | 'Y') => true,
                Some('n' | 'N') => false,
                Some(CR | LF) => default_yes,
                Some(other) => {
                    warn!(answer = ?other, "unknown confirmation answer");
                    self.write_line("Unknown answer")?;
                    continue;
                }
                None => return Err(Error::EndOfInput),
            };

            let label = if confirmed { ANSWER_YES } else { ANSWER_NO };
            self.write_formatted_line(label, &Args::new())?;
            return Ok(confirmed);
        }
    }

    /// Prompt for a line without echoing what is typed
    pub fn ask_and_hide_answer(&mut self, prompt: &str) -> Result<String> {
        self.write_prompt(prompt)?;

        let answer = self.with_tty_mode(NO_ECHO, |session| session.read_line())?;

        self.write_line("")?;
        Ok(answer.trim().to_string())
    }

    /// Prompt for a password, echoing `*` for every typed character
    ///
    /// Entry ends at CR, LF, ESC or end of input; the terminator is not
    /// part of the result.
    pub fn ask_for_password(&mut self, prompt: &str) -> Result<String> {
        self.write_prompt(prompt)?;

        let password = self.with_tty_mode(CBREAK_NO_ECHO, |session| {
            let mut password = String::new();
            while let Some(ch) = session.read_char()? {
                if matches!(ch, CR | LF | ESC) {
                    break;
                }
                password.push(ch);
                session.write("*")?;
            }
            Ok(password)
        })?;

        self.write_line("")?;
        Ok(password)
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        if prompt.is_empty() {
            return Ok(());
        }
        self.write(&format!("{} ", prompt.trim_end()))
    }

    // ------------------------------------------------------------------
    // Terminal mode
    // ------------------------------------------------------------------

    /// Run `callback` with terminal `settings` applied, then restore them
    ///
    /// The previous values are re-applied on every exit path, unwinding
    /// included. If the callback fails its error is returned after the
    /// rollback; a panic resumes after the rollback.
    pub fn with_tty_mode<T, F>(&mut self, settings: &[&str], callback: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let current = self.tty.query()?;
        let snapshot = ModeSnapshot::capture(settings, &current);
        debug!(
            requested = ?snapshot.requested(),
            rollback = ?snapshot.rollback(),
            "entering tty mode"
        );

        self.tty.apply(snapshot.requested())?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(&mut *self)));
        let restored = self.tty.apply(snapshot.rollback());

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(payload) => {
                if let Err(err) = &restored {
                    error!(error = %err, "failed to restore tty mode");
                }
                panic::resume_unwind(payload);
            }
        };

        match (outcome, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(rollback_err)) => {
                error!(error = %rollback_err, "failed to restore tty mode");
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let Some(&byte) = self.input.fill_buf()?.first() else {
            return Ok(None);
        };
        self.input.consume(1);
        Ok(Some(byte))
    }

    /// Read one UTF-8 encoded character
    fn read_char(&mut self) -> Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let seq_len = if lead < 0x80 { 1 }
            else if lead & 0xE0 == 0xC0 { 2 }
            else if lead & 0xF0 == 0xE0 { 3 }
            else if lead & 0xF8 == 0xF0 { 4 }
            else {
                return Err(Error::InvalidInput(format!("unexpected byte 0x{:02x}", lead)));
            };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(seq_len).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or_else(|| Error::InvalidInput("truncated UTF-8 sequence".to_string()))?;
        }

        std::str::from_utf8(&buf[..seq_len])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| Error::InvalidInput("malformed UTF-8 sequence".to_string()))
    }
}
