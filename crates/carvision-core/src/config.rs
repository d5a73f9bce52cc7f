use std::path::{Path, PathBuf};

use thiserror::Error;

/// Output directory used when none is given, relative to the site root.
pub const DEFAULT_OUT_DIR: &str = "src/data";

/// File name of the list view inside the output directory.
pub const LIST_FILE_NAME: &str = "cars.json";

/// Sub-directory of the output directory holding one detail file per car.
pub const DETAIL_DIR_NAME: &str = "cars";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input path must not be empty")]
    EmptyInputPath,

    #[error("output path \"{0}\" exists but is not a directory")]
    OutDirNotDirectory(String),
}

/// Options for a single import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// JSON export to read.
    pub input: PathBuf,
    /// Directory receiving `cars.json` and the `cars/` detail directory.
    pub out_dir: PathBuf,
    /// Delete existing `cars/*.json` before writing.
    pub clear: bool,
    /// Order output by status rank and title instead of source order.
    pub sort: bool,
    /// Map everything but write nothing.
    pub dry_run: bool,
}

impl ImportConfig {
    /// Creates a config for `input` with the default output directory and
    /// all flags off.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            clear: false,
            sort: false,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    #[must_use]
    pub fn list_path(&self) -> PathBuf {
        self.out_dir.join(LIST_FILE_NAME)
    }

    #[must_use]
    pub fn detail_dir(&self) -> PathBuf {
        self.out_dir.join(DETAIL_DIR_NAME)
    }

    /// Check the options before anything is read or written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyInputPath`] for an empty input path and
    /// [`ConfigError::OutDirNotDirectory`] when the output path names an
    /// existing non-directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInputPath);
        }
        if exists_as_non_dir(&self.out_dir) {
            return Err(ConfigError::OutDirNotDirectory(
                self.out_dir.display().to_string(),
            ));
        }
        Ok(())
    }
}

fn exists_as_non_dir(path: &Path) -> bool {
    path.metadata().is_ok_and(|meta| !meta.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_out_dir() {
        let cfg = ImportConfig::new("inventory.json");
        assert_eq!(cfg.out_dir, PathBuf::from("src/data"));
        assert!(!cfg.clear);
        assert!(!cfg.sort);
        assert!(!cfg.dry_run);
    }

    #[test]
    fn derived_paths_live_under_out_dir() {
        let cfg = ImportConfig::new("inventory.json").with_out_dir("/tmp/site");
        assert_eq!(cfg.list_path(), PathBuf::from("/tmp/site/cars.json"));
        assert_eq!(cfg.detail_dir(), PathBuf::from("/tmp/site/cars"));
    }

    #[test]
    fn validate_rejects_empty_input() {
        let cfg = ImportConfig::new("");
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyInputPath)));
    }

    #[test]
    fn validate_rejects_file_as_out_dir() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let cfg = ImportConfig::new("inventory.json").with_out_dir(manifest);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::OutDirNotDirectory(ref p) if p.ends_with("Cargo.toml")));
    }

    #[test]
    fn validate_accepts_missing_out_dir() {
        let cfg = ImportConfig::new("inventory.json").with_out_dir("does/not/exist/yet");
        assert!(cfg.validate().is_ok());
    }
}
