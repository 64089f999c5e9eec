use epi_core::EpiError;
use thiserror::Error;

/// Failure to read or parse a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {source}")]
    Yaml { source: serde_yml::Error },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl From<ConfigError> for EpiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { source } => EpiError::Io(source),
            ConfigError::Yaml { source } => EpiError::Parse(source.to_string()),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
