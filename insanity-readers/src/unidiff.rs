//! Catalogue of known unidiff names with usage tracking.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;
use tokio::sync::RwLock;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::xml_records::RecordSource;

const COMPONENT_NAME: &str = "unidiff";
const FILE_NAME: &str = "unidiff.xml";
const RECORD_TAG: &str = "unidiff";
const NAME_ATTRIBUTE: &str = "name";

/// Shared handle for callers that query one catalogue from several tasks.
pub type SharedUnidiff = Arc<RwLock<Unidiff>>;

/// Known unidiff names loaded from `unidiff.xml`.
///
/// The name list is fixed after construction. [`Unidiff::find`] records every
/// matched name once so a run can report which entries were never looked up.
#[derive(Debug, Clone)]
pub struct Unidiff {
    path: Option<PathBuf>,
    names: Vec<String>,
    index: HashSet<String>,
    used: IndexSet<String>,
    unknown: Vec<String>,
}

impl Unidiff {
    /// Loads `<datpath>/unidiff.xml`.
    pub fn new(config: &ReaderConfig) -> Result<Self> {
        let path = config.resolve(FILE_NAME);
        tracing::info!(component = COMPONENT_NAME, path = %path.display(), "compiling");
        let source = RecordSource::from_file(&path, config.verbose)?;
        Self::compiled(&source)
    }

    /// Async variant of [`Unidiff::new`]; only the file read is asynchronous.
    pub async fn new_async(config: &ReaderConfig) -> Result<Self> {
        let path = config.resolve(FILE_NAME);
        tracing::info!(component = COMPONENT_NAME, path = %path.display(), "compiling");
        let source = RecordSource::from_file_async(&path, config.verbose).await?;
        Self::compiled(&source)
    }

    /// Builds the catalogue from an already loaded document.
    pub fn from_source(source: &RecordSource) -> Result<Self> {
        let names = source.attribute_values(RECORD_TAG, NAME_ATTRIBUTE)?;
        let index = names.iter().cloned().collect();
        Ok(Self {
            path: source.path().map(Path::to_path_buf),
            names,
            index,
            used: IndexSet::new(),
            unknown: Vec::new(),
        })
    }

    fn compiled(source: &RecordSource) -> Result<Self> {
        let catalogue = Self::from_source(source)?;
        tracing::info!(component = COMPONENT_NAME, names = catalogue.len(), "done");
        Ok(catalogue)
    }

    /// Returns `true` when `name` is a known unidiff, marking it as used.
    ///
    /// Matching is exact and case-sensitive. A miss leaves the state untouched.
    pub fn find(&mut self, name: &str) -> bool {
        if !self.index.contains(name) {
            return false;
        }
        if !self.used.contains(name) {
            self.used.insert(name.to_owned());
        }
        true
    }

    /// Membership test that does not record usage.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Names in document order, duplicates included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names matched by [`Unidiff::find`], in first-match order.
    pub fn used(&self) -> impl Iterator<Item = &str> + '_ {
        self.used.iter().map(String::as_str)
    }

    /// Catalogue names never matched so far, in document order without repeats.
    pub fn unused(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !self.used.contains(*name) && seen.insert(*name))
            .collect()
    }

    /// Queried names that are not in the catalogue.
    ///
    /// Nothing records into this list yet; it stays empty.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn component_name(&self) -> &'static str {
        COMPONENT_NAME
    }

    /// Data file the catalogue was compiled from, `None` for in-memory sources.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Wraps the catalogue in a [`SharedUnidiff`].
    pub fn into_shared(self) -> SharedUnidiff {
        Arc::new(RwLock::new(self))
    }
}
