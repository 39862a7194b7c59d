//! Error types.

use std::io::Error as IoError;
use std::path::PathBuf;

use serde_json::Error as JsonError;

/// Errors that occur while working with the font catalog and its utilities.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error returned when the catalog could not be fetched over HTTP.
    #[cfg(feature = "fetch")]
    #[error("failed to fetch the font catalog from '{url}'")]
    Fetch {
        /// The requested URL.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: Box<ureq::Error>,
    },
    /// An error returned when the catalog document is not valid JSON or does
    /// not have the expected shape.
    #[error("failed to parse the font catalog")]
    ParseCatalog(#[source] JsonError),
    /// An error returned when the catalog could not be written as JSON.
    #[error("failed to serialize the font catalog")]
    SerializeCatalog(#[source] JsonError),
    /// An error returned when a catalog file could not be read.
    #[error("failed to read '{path}'")]
    Io {
        /// The path of the file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: IoError,
    },
    /// An error returned when reading from a stream fails.
    #[error(transparent)]
    Stream(#[from] IoError),
    /// An error returned when there is an invalid color definition.
    #[error(transparent)]
    InvalidColor(#[from] InvalidColorString),
    /// An error returned when a font family name is invalid.
    #[error(transparent)]
    InvalidFamilyName(#[from] NamingError),
    /// An error returned when a subset identifier is not in the subset table.
    #[error("unknown Unicode subset '{0}'")]
    UnknownSubset(String),
    /// An error returned when a family is not present in the catalog.
    #[error("font family '{0}' is not in the catalog")]
    FontNotFound(String),
    /// An error returned when the catalog contains no fonts.
    #[error("the font catalog is empty")]
    EmptyCatalog,
    /// An error returned when the system clipboard could not be written.
    #[cfg(feature = "clipboard")]
    #[error("failed to access the clipboard")]
    Clipboard(#[from] arboard::Error),
}

/// An error representing an invalid [`Color`] string.
///
/// [`Color`]: crate::Color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color string '{string}'")]
pub struct InvalidColorString {
    /// The string that caused the error.
    string: String,
}

impl InvalidColorString {
    pub(crate) fn new(string: String) -> Self {
        InvalidColorString { string }
    }

    /// The string that failed to parse.
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

/// An error representing a failure to validate a font family name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NamingError {
    /// The name was empty or contained control characters.
    #[error("'{0}' is not a valid font family name")]
    Invalid(String),
}
