//! Quiz answers file loading.
//!
//! Reads a [`QuizResponse`] from a `.json` or `.toml` file. Every field of
//! the response is optional, so a file may carry just the answers it knows.

use advisor_domain::QuizResponse;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading an answers file.
#[derive(Error, Debug)]
pub enum AnswersFileError {
    #[error("Could not read answers file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in answers file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML in answers file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported answers file {0}: expected a .json or .toml extension")]
    UnsupportedFormat(PathBuf),
}

/// Answers file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswersFormat {
    Json,
    Toml,
}

impl AnswersFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loads quiz answers from disk
pub struct QuizAnswersLoader;

impl QuizAnswersLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<QuizResponse, AnswersFileError> {
        let path = path.as_ref();
        let format = AnswersFormat::from_path(path)
            .ok_or_else(|| AnswersFileError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| AnswersFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            "Loading quiz answers from {} ({:?})",
            path.display(),
            format
        );
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: AnswersFormat) -> Result<QuizResponse, AnswersFileError> {
        let response = match format {
            AnswersFormat::Json => serde_json::from_str(content)?,
            AnswersFormat::Toml => toml::from_str(content)?,
        };
        Ok(response)
    }
}
