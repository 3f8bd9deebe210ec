pub mod document;
pub mod site;
pub mod template;

pub use crate::domain::DomainError;
pub use document::StandaloneDocument;
pub use site::{ColorScheme, Page, Site, SiteId};
pub use template::{PageTemplate, RenderContext, SiteTemplate};
