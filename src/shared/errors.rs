use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid shoe '{slug}': {reason}")]
    InvalidShoe { slug: String, reason: String },

    #[error("Duplicate shoe slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid configuration value for {key}: '{value}'")]
    Config { key: String, value: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    pub fn invalid_shoe(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidShoe {
            slug: slug.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
