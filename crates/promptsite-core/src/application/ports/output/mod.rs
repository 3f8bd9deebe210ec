//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `promptsite-adapters` crate provides implementations.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::domain::{Category, Page, RenderContext, SiteTemplate};
use crate::error::SiteGenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `promptsite_adapters::filesystem::LocalFilesystem` (production)
/// - `promptsite_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SiteGenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SiteGenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for site template storage and retrieval.
///
/// Exactly one template per category. Implemented by
/// `promptsite_adapters::template_store::InMemoryStore`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template for a category.
    fn get(&self, category: Category) -> SiteGenResult<SiteTemplate>;

    /// List all templates in category order.
    fn list(&self) -> SiteGenResult<Vec<SiteTemplate>>;

    /// Insert or replace the template for its category.
    fn insert(&self, template: SiteTemplate) -> SiteGenResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `promptsite_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every page of `template`, in order.
    fn render(&self, template: &SiteTemplate, context: &RenderContext) -> SiteGenResult<Vec<Page>>;
}

/// Port for the current time.
///
/// Implemented by:
/// - `promptsite_adapters::clock::SystemClock` (production)
/// - `promptsite_adapters::clock::FixedClock` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
