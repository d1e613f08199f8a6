//! Loads XML data files and extracts attribute values from tagged records.
//!
//! Readers compose a [`RecordSource`] rather than sharing a loader base type:
//! the source keeps the root's child records, each reader asks it for the
//! records of its own tag.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{ReaderError, Result};

/// One direct child of the document root.
#[derive(Debug, Clone)]
struct Record {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl Record {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// The root-level records of a well-formed XML document.
#[derive(Debug, Clone)]
pub struct RecordSource {
    path: Option<PathBuf>,
    records: Vec<Record>,
}

impl RecordSource {
    /// Builds a source from an XML string, rejecting malformed markup.
    pub fn from_string(source: impl AsRef<str>) -> Result<Self> {
        Self::parse(None, source.as_ref())
    }

    /// Synchronously reads and parses the XML file at `path`.
    pub fn from_file(path: impl AsRef<Path>, verbose: bool) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path_buf)
            .map_err(|err| ReaderError::io_error(Some(path_buf.clone()), err))?;
        if verbose {
            tracing::debug!(path = %path_buf.display(), bytes = text.len(), "loaded xml data file");
        }
        Self::parse(Some(path_buf), &text)
    }

    /// Asynchronously reads and parses the XML file at `path`.
    pub async fn from_file_async(
        path: impl AsRef<Path> + Send + Sync,
        verbose: bool,
    ) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path_buf)
            .await
            .map_err(|err| ReaderError::io_error(Some(path_buf.clone()), err))?;
        if verbose {
            tracing::debug!(path = %path_buf.display(), bytes = text.len(), "loaded xml data file");
        }
        Self::parse(Some(path_buf), &text)
    }

    /// File the document was read from, `None` for in-memory sources.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns `attribute` of every root child tagged `tag`, in document order.
    ///
    /// Nested elements are not searched. A matching record without the
    /// attribute fails the whole extraction.
    pub fn attribute_values(&self, tag: &str, attribute: &str) -> Result<Vec<String>> {
        self.records
            .iter()
            .filter(|record| record.tag == tag)
            .enumerate()
            .map(|(index, record)| {
                record
                    .attribute(attribute)
                    .map(str::to_owned)
                    .ok_or_else(|| {
                        ReaderError::missing_attribute(self.path.clone(), tag, attribute, index + 1)
                    })
            })
            .collect()
    }

    /// Parses `text` once and keeps the root's element children.
    ///
    /// DOCTYPE declarations are accepted; entities they declare are expanded.
    fn parse(path: Option<PathBuf>, text: &str) -> Result<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let document = roxmltree::Document::parse_with_options(text, options)
            .map_err(|err| ReaderError::xml_error(path.clone(), err))?;
        let records = document
            .root_element()
            .children()
            .filter(|node| node.is_element())
            .map(|node| Record {
                tag: node.tag_name().name().to_owned(),
                attributes: node
                    .attributes()
                    .map(|attr| (attr.name().to_owned(), attr.value().to_owned()))
                    .collect(),
            })
            .collect();
        Ok(Self { path, records })
    }
}
