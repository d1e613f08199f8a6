//! Readers for the in-sanity toolchain.
//!
//! Each reader compiles one XML data file from the configured `datpath` into
//! an in-memory catalogue. [`Unidiff`] holds the known unidiff names and
//! remembers which of them were looked up during a run.

pub mod config;
pub mod error;
pub mod unidiff;
pub mod xml_records;

pub use crate::config::ReaderConfig;
pub use crate::error::{ReaderError, Result};
pub use crate::unidiff::{SharedUnidiff, Unidiff};
pub use crate::xml_records::RecordSource;
