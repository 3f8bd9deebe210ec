// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Classification and rendering cannot fail; these errors come from parsing
/// user-facing identifiers and from validating template data.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template for '{category}' has no pages")]
    EmptyTemplate { category: String },

    #[error("Duplicate page id in template: {page_id}")]
    DuplicatePage { page_id: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Page '{page_id}' does not exist in site '{site}'")]
    PageNotFound { page_id: String, site: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCategory(value) => vec![
                format!("'{}' is not a template family", value),
                "Try: promptsite categories".into(),
            ],
            Self::PageNotFound { page_id, .. } => vec![
                format!("No page with id '{}'", page_id),
                "Omit --page to export the first page, or use --all-pages".into(),
            ],
            Self::EmptyTemplate { category } => vec![
                format!("The '{}' template defines no pages", category),
                "Add at least one [[pages]] entry to its template.toml".into(),
            ],
            Self::DuplicatePage { page_id } => vec![
                format!("Page id '{}' is declared twice", page_id),
                "Page ids must be unique within a template".into(),
            ],
            Self::InvalidTemplate(_) => vec!["Check the template manifest".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCategory(_) => ErrorCategory::Validation,
            Self::InvalidTemplate(_) | Self::EmptyTemplate { .. } | Self::DuplicatePage { .. } => {
                ErrorCategory::Validation
            }
            Self::PageNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
