//! ttyprompt - colorized console output and prompts for Unix terminals
//!
//! A small helper around an input stream, an output stream and the
//! terminal's line discipline:
//!
//! - **Formatted output**: `%{red}text%{reset}` templates with color presets
//! - **Prompts**: line input, single-key yes/no confirmation
//! - **Secret input**: hidden lines and `*`-masked passwords
//!
//! Masked input temporarily switches the terminal into `cbreak`/`-echo`
//! through `stty` and always restores the previous settings afterwards.
//!
//! ```no_run
//! use ttyprompt::{Args, TerminalSession};
//!
//! # fn main() -> ttyprompt::Result<()> {
//! let mut io = TerminalSession::stdio();
//! let name = io.ask("Name:")?;
//! io.write_formatted_line("Hello %{green-bold}%s%{reset}", &Args::new().push(name))?;
//! if io.ask_confirmation("Set a password?", true)? {
//!     let _password = io.ask_for_password("Password:")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod tty;

pub use crate::config::{ColorMode, Config};
pub use crate::core::flags::Flags;
pub use crate::core::presets::ColorPresets;
pub use crate::core::session::TerminalSession;
pub use crate::core::template::{Args, FormatError};
pub use crate::error::{Error, Result};
pub use crate::tty::{ModeSnapshot, Stty, TtyControl};
