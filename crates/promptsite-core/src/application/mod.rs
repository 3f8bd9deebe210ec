//! Application layer for promptsite.
//!
//! This layer contains:
//! - **Services**: use case orchestration (GenerationService, ExportService, CatalogService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CatalogService,
    CategoryInfo, // DTO for template family metadata
    EXAMPLE_PROMPTS, ExportService, GenerationOptions, GenerationService, PageSelection,
};

pub use ports::{Clock, Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
