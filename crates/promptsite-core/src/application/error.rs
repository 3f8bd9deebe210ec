//! Application layer errors.
//!
//! These errors come from orchestration around the domain: template lookup,
//! rendering adapters and file writes. Domain failures are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Category;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template registered for the category.
    #[error("No template registered for category '{category}'")]
    TemplateNotFound { category: Category },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,

    /// Export target already exists.
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { category } => vec![
                format!("The '{}' template is missing from the store", category.as_str()),
                "Check your templates directory for an invalid template.toml".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::FileExists { path } => vec![
                format!("Refusing to overwrite {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose another directory with --output".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FileExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
