use super::raw::RawModelInput;
use super::traits::ModelSource;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the model description file inside an input directory.
const MODEL_FILE_NAME: &str = "model.toml";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// An input source reading the raw model bundle from a `model.toml` file
/// inside an input directory.
///
/// The directory handle mirrors how simulation runs are laid out on disk: one
/// directory per run, holding the model description next to the run's outputs.
#[derive(Debug, Clone)]
pub struct TomlDirectorySource {
    input_dir: PathBuf,
}

impl TomlDirectorySource {
    /// Creates a source for the given input directory.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Returns the path of the model description file this source reads.
    pub fn model_file(&self) -> PathBuf {
        self.input_dir.join(MODEL_FILE_NAME)
    }

    fn read(path: &Path) -> Result<RawModelInput, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| SourceError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

impl ModelSource for TomlDirectorySource {
    type Error = SourceError;

    fn load(&self) -> Result<RawModelInput, Self::Error> {
        Self::read(&self.model_file())
    }
}
