// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::domain::error::{MediaError, StoryError};

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The story catalog could not be read or parsed.
    Catalog(String),
    Story(StoryError),
    Media(MediaError),
}

impl Error {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Catalog(_) => "error-catalog",
            Error::Story(err) => err.i18n_key(),
            Error::Media(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Story(e) => write!(f, "Story Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Story(err) => Some(err),
            Error::Media(err) => Some(err),
            Error::Io(_) | Error::Config(_) | Error::Catalog(_) => None,
        }
    }
}

impl From<StoryError> for Error {
    fn from(err: StoryError) -> Self {
        Error::Story(err)
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(format!("json: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
