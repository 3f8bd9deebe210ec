//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! use cases "generate a site", "export its pages" and "list templates".

pub mod catalog_service;
pub mod export_service;
pub mod generation_service;

pub use catalog_service::{CatalogService, CategoryInfo, EXAMPLE_PROMPTS};
pub use export_service::{ExportService, PageSelection};
pub use generation_service::{GenerationOptions, GenerationService};
