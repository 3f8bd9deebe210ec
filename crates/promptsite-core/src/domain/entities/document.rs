//! Standalone HTML export of a single page.

use crate::domain::{
    entities::site::{Page, Site},
    error::DomainError,
};

/// Styling runtime referenced by every exported document.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// One page wrapped in a minimal document shell, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandaloneDocument {
    pub file_name: String,
    pub html: String,
}

impl StandaloneDocument {
    /// Wrap the page `page_id` of `site`.
    pub fn for_page(site: &Site, page_id: &str) -> Result<Self, DomainError> {
        let page = site.page(page_id).ok_or_else(|| DomainError::PageNotFound {
            page_id: page_id.to_string(),
            site: site.name().to_string(),
        })?;
        Ok(Self::wrap(site, page))
    }

    /// One document per page, in page order.
    pub fn for_each_page(site: &Site) -> Vec<Self> {
        site.pages().iter().map(|page| Self::wrap(site, page)).collect()
    }

    fn wrap(site: &Site, page: &Page) -> Self {
        let html = format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n  \
             <meta charset=\"UTF-8\">\n  \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
             <title>{title}</title>\n  \
             <script src=\"{cdn}\"></script>\n\
             </head>\n\
             <body>\n  \
             {content}\n\
             </body>\n\
             </html>",
            title = site.name(),
            cdn = TAILWIND_CDN,
            content = page.content,
        );

        Self {
            file_name: format!("{}-{}.html", site.slug(), page.id),
            html,
        }
    }
}
