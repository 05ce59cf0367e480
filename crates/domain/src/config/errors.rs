/// Failures while loading, checking or writing `emberdns.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("cannot write {path}: {reason}")]
    FileWrite { path: String, reason: String },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    pub(crate) fn file_read(path: &str, err: impl std::fmt::Display) -> Self {
        ConfigError::FileRead {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn file_write(path: &str, err: impl std::fmt::Display) -> Self {
        ConfigError::FileWrite {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}
