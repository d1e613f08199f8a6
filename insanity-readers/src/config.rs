//! Configuration bundle shared by the readers of a sanity run.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReaderError, Result};

/// Location of the data files and verbosity passed to every reader.
///
/// Keys other than `datpath` and `verbose` are ignored so one TOML document
/// can configure the whole toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReaderConfig {
    pub datpath: PathBuf,
    pub verbose: bool,
}

impl ReaderConfig {
    pub fn new(datpath: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            datpath: datpath.into(),
            verbose,
        }
    }

    /// Parses a configuration from a TOML string. Both keys are required.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(ReaderError::from)
    }

    /// Synchronously reads a TOML configuration file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path_buf)
            .map_err(|err| ReaderError::io_error(Some(path_buf.clone()), err))?;
        Self::from_toml_str(&contents)
    }

    /// Joins the data directory with a reader's fixed file name.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.datpath.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn parses_required_keys() -> Result<()> {
        let config = ReaderConfig::from_toml_str("datpath = \"/srv/dat\"\nverbose = true\n")?;
        assert_eq!(config, ReaderConfig::new("/srv/dat", true));
        Ok(())
    }

    #[test]
    fn ignores_keys_of_other_readers() -> Result<()> {
        let config = ReaderConfig::from_toml_str(
            "datpath = \"dat\"\nverbose = false\nsrcpath = \"src\"\n",
        )?;
        assert_eq!(config.datpath, PathBuf::from("dat"));
        assert!(!config.verbose);
        Ok(())
    }

    #[test]
    fn missing_verbose_is_a_config_error() {
        let err = ReaderConfig::from_toml_str("datpath = \"dat\"\n").unwrap_err();
        assert!(matches!(err, ReaderError::Config(_)));
    }

    #[test]
    fn resolve_joins_datpath() {
        let config = ReaderConfig::new("dat", false);
        assert_eq!(config.resolve("unidiff.xml"), Path::new("dat").join("unidiff.xml"));
    }

    #[test]
    fn from_file_reads_toml() -> Result<()> {
        let temp = NamedTempFile::new().expect("temp file");
        std::fs::write(temp.path(), "datpath = \"dat\"\nverbose = true\n")?;
        let config = ReaderConfig::from_file(temp.path())?;
        assert!(config.verbose);
        Ok(())
    }

    #[test]
    fn from_file_missing_reports_path() {
        let err = ReaderConfig::from_file("/nonexistent/insanity.toml").unwrap_err();
        match err {
            ReaderError::Io { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/nonexistent/insanity.toml")))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
