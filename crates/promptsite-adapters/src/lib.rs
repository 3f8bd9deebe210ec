//! Infrastructure adapters for promptsite.
//!
//! This crate implements the ports defined in `promptsite-core::application::ports`.
//! It holds the built-in template set and every piece of I/O.

pub mod builtin_templates;
pub mod clock;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_loader::{TemplateOverrideLoader, resolve_templates_dir};
pub use template_store::InMemoryStore;
