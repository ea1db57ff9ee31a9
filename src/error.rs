use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("Entry not found: {id}")]
    NotFound { id: String },

    #[error("Invalid category: '{0}'")]
    InvalidCategory(String),

    #[error("Definition error: {0}")]
    Definition(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PrimerError {
    /// Whether this error is a negative query result rather than a load failure
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            PrimerError::NotFound { .. } | PrimerError::InvalidCategory(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PrimerError>;
