//! promptsite core - hexagonal architecture implementation
//!
//! Domain and application layers for the promptsite generator: a free-text
//! description goes in, a multi-page site built from a fixed template family
//! comes out. Nothing here performs I/O; adapters live in
//! `promptsite-adapters`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          promptsite-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (Generation, Export, Catalog services)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Renderer, Clock, Filesystem)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    promptsite-adapters (Infrastructure) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (classifier, SiteTemplate, Site, export)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use promptsite_core::prelude::*;
//!
//! let service = GenerationService::new(store, renderer, clock);
//! let site = service.generate("a cafe called Blue Door with a teal theme")?;
//!
//! let doc = StandaloneDocument::for_page(&site, "home")?;
//! println!("{}", doc.file_name); // blue-door-home.html
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, CategoryInfo, ExportService, GenerationOptions, GenerationService,
        PageSelection,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Category, Classification, ColorToken, Page, PageTemplate, RenderContext, Site,
        SiteTemplate, StandaloneDocument, classify,
    };
    pub use crate::error::{SiteGenError, SiteGenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
