//! Error Handling tools

use std::{
    fmt,
    io::Error as IoError,
    error::Error as StdError
};

use crate::di::error::Error as RegistryError;

/// An error that may occur while configuring or wiring the app
#[derive(Debug)]
pub enum Error {
    /// Configuration file could not be read
    Io(IoError),
    /// Configuration could not be parsed
    Config(serde_json::Error),
    /// A dependency could not be resolved
    Registry(RegistryError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Config Error: {err}"),
            Error::Config(err) => write!(f, "Config Error: {err}"),
            Error::Registry(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Registry(err) => Some(err),
        }
    }
}

impl From<IoError> for Error {
    #[inline]
    fn from(err: IoError) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err)
    }
}
