//! Failure taxonomy. Every variant is terminal for the process.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed command line. Holds clap's rendered message.
    #[error("{0}")]
    Usage(String),

    /// The device node could not be opened for reading.
    #[error("open({path}): {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// EVIOCGRAB was refused (not an evdev node, or already grabbed).
    #[error("EVIOCGRAB({path}): {source}")]
    Grab {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the grabbed device failed.
    #[error("read({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output channel refused or closed.
    #[error("write failed: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Process exit status for this failure. Zero is reserved for a clean EOF.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            Error::Open { .. } => 3,
            Error::Grab { .. } => 4,
            Error::Read { .. } => 5,
            Error::Write { .. } => 6,
        }
    }
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Self {
        Error::Usage(e.render().to_string().trim_end().to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
