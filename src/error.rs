// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Markup(MarkupError),
}

/// Problems with the element tree a widget is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A required child is missing from the container.
    MissingElement { selector: String },

    /// A selector string could not be parsed.
    InvalidSelector(String),

    /// An event target path does not point inside the container.
    NodeNotFound,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::MissingElement { selector } => {
                write!(f, "missing element matching `{}`", selector)
            }
            MarkupError::InvalidSelector(selector) => {
                write!(f, "invalid selector `{}`", selector)
            }
            MarkupError::NodeNotFound => write!(f, "target is not inside the container"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Markup(e) => write!(f, "Markup Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for MarkupError {}

impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Error::Markup(err)
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

pub type Result<T> = std::result::Result<T, Error>;
