use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Errors raised while loading a reader's configuration or data file.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("I/O error (path: {path:?}): {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse XML (path: {path:?}): {source}")]
    Xml {
        path: Option<PathBuf>,
        #[source]
        source: roxmltree::Error,
    },
    #[error("failed to parse reader configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("<{record}> #{position} in {path:?} has no `{attribute}` attribute")]
    MissingAttribute {
        path: Option<PathBuf>,
        record: String,
        attribute: String,
        position: usize,
    },
}

impl ReaderError {
    /// Creates a [`ReaderError::Io`] with the provided optional path context.
    pub(crate) fn io_error(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    pub(crate) fn xml_error(path: Option<PathBuf>, source: roxmltree::Error) -> Self {
        Self::Xml { path, source }
    }

    /// Convenience constructor for [`ReaderError::MissingAttribute`].
    pub fn missing_attribute(
        path: Option<PathBuf>,
        record: impl Into<String>,
        attribute: impl Into<String>,
        position: usize,
    ) -> Self {
        Self::MissingAttribute {
            path,
            record: record.into(),
            attribute: attribute.into(),
            position,
        }
    }
}

impl From<std::io::Error> for ReaderError {
    /// Converts a plain [`std::io::Error`] into [`ReaderError::Io`] without path context.
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
