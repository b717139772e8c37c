use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read dataset file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse dataset file `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("invalid record #{index} in `{path}`: {reason}")]
    InvalidRecord { path: PathBuf, index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl ApplicationError {
    /// Stable machine-readable class used in operator-facing output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Dataset(DatasetError::ReadFile { .. }) => "dataset_unreadable",
            Self::Dataset(DatasetError::Parse { .. })
            | Self::Dataset(DatasetError::InvalidRecord { .. }) => "dataset_malformed",
            Self::Configuration(_) => "config_validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::ConfigError;
    use crate::errors::{ApplicationError, DatasetError};

    #[test]
    fn missing_file_is_classified_as_unreadable() {
        let error = ApplicationError::from(DatasetError::ReadFile {
            path: PathBuf::from("data/customers.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });

        assert_eq!(error.error_class(), "dataset_unreadable");
        assert!(error.to_string().contains("data/customers.json"));
    }

    #[test]
    fn invalid_record_is_classified_as_malformed() {
        let error = ApplicationError::from(DatasetError::InvalidRecord {
            path: PathBuf::from("customers.json"),
            index: 3,
            reason: "name must not be empty".to_string(),
        });

        assert_eq!(error.error_class(), "dataset_malformed");
        assert_eq!(
            error.to_string(),
            "invalid record #3 in `customers.json`: name must not be empty"
        );
    }

    #[test]
    fn configuration_error_keeps_its_class() {
        let error = ApplicationError::from(ConfigError::Validation("bad".to_string()));
        assert_eq!(error.error_class(), "config_validation");
    }
}
