//! Core console I/O components.
//!
//! - **flags**: Session flag bit-set (`NO_COLORS`)
//! - **presets**: Color preset table (`red`, `green-bold`, `reset`, ...)
//! - **template**: `%{name}` / `%s` template formatter
//! - **session**: `TerminalSession` with writes, prompts and scoped tty modes
//!
//! # Layering
//!
//! ```text
//! TerminalSession
//! ├── prompts (ask, ask_confirmation, ask_for_password, ...)
//! │   └── with_tty_mode ──> TtyControl (stty)
//! └── formatted writer
//!     ├── ColorPresets
//!     └── template::format
//! ```

pub mod flags;
pub mod presets;
pub mod template;
pub mod session;
