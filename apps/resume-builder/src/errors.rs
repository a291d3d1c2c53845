use thiserror::Error;

use crate::models::SectionId;

/// Application-level error type.
/// Every variant maps to a stable code and a message safe to show in the UI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Export format '{0}' is not yet supported")]
    UnsupportedFormat(String),

    #[error("Section {0} has no editable form")]
    NoForm(SectionId),

    #[error("Field does not belong to section {expected}")]
    SectionMismatch { expected: SectionId },

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::InvalidDocument(_) => "INVALID_DOCUMENT",
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::NoForm(_) => "NO_FORM",
            AppError::SectionMismatch { .. } => "SECTION_MISMATCH",
            AppError::Renderer(_) => "RENDERER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message for a toast or alert. Internal details go to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                "Your resume could not be saved to this device".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {e}");
                "Your resume data could not be read".to_string()
            }
            AppError::InvalidDocument(msg) => {
                tracing::warn!("Invalid document: {msg}");
                "Saved resume data was damaged and has been replaced".to_string()
            }
            AppError::UnsupportedFormat(format) => {
                format!("{} export is not yet supported", format.to_uppercase())
            }
            AppError::NoForm(section) => format!("{} is coming soon", section.title()),
            AppError::SectionMismatch { expected } => {
                format!("That change does not belong to {}", expected.title())
            }
            AppError::Renderer(msg) => {
                tracing::error!("Renderer error: {msg}");
                "The document could not be generated".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Something went wrong".to_string()
            }
        }
    }
}
