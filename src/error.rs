// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the application.
///
/// Fetch errors carry their source message as a plain string so they stay
/// `Clone` and can travel inside Iced messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, TLS, timeout).
    Http(String),
    /// The backend answered with a non-success status other than 404.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    /// Configuration could not be read or written.
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(msg) => write!(f, "HTTP error: {msg}"),
            Error::Status(code) => write!(f, "Unexpected status: {code}"),
            Error::Decode(msg) => write!(f, "Decode error: {msg}"),
            Error::Config(msg) => write!(f, "Config error: {msg}"),
            Error::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else {
            Error::Http(err.to_string())
        }
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
