use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sections file {path}: {source}")]
    SectionsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sections file: {0}")]
    SectionsFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors raised by a [`crate::ProfileStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid project id \"{0}\"")]
    InvalidProjectId(String),

    #[error("profile not found for project {0}")]
    NotFound(String),
}
