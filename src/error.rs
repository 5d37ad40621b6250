//! Error types for ttyprompt

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

use crate::core::template::FormatError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to run terminal control command ({command}): {source}")]
    ControlSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Terminal control command failed ({command}): {status}{stderr}")]
    ControlFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Input stream closed")]
    EndOfInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
