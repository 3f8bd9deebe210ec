// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for promptsite.
//!
//! Pure logic: prompt classification, template data and slot rendering,
//! the generated site model and its standalone export. Template lookup,
//! time and file writes are reached through ports in the application layer.
//!
//! - **No I/O**: no filesystem, network or clock access
//! - **Infallible core**: classifying and rendering never return errors
//! - **Immutable entities**: a generated [`Site`] is never mutated
pub mod classifier;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use classifier::{
    CATEGORY_RULES, CategoryRule, Classification, DEFAULT_SITE_NAME, classify, detect_category,
    extract_colors, extract_name, keywords_for,
};

pub use entities::{
    document::{StandaloneDocument, TAILWIND_CDN},
    site::{ColorScheme, Page, Site, SiteId},
    template::{
        Fragment, PageTemplate, RenderContext, Row, SLOT_COLOR, SLOT_NAME, SLOT_PROMPT,
        SiteTemplate, SiteTemplateBuilder, TemplateSource,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Category, ColorToken};
