//! Slot substitution renderer.

use promptsite_core::{
    application::ports::TemplateRenderer,
    domain::{Page, RenderContext, SiteTemplate},
    error::SiteGenResult,
};
use tracing::{debug, instrument};

/// Renders each page template by plain `{{SLOT}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(category = %template.category))]
    fn render(&self, template: &SiteTemplate, context: &RenderContext) -> SiteGenResult<Vec<Page>> {
        template.validate()?;

        let pages: Vec<Page> = template
            .pages
            .iter()
            .map(|page| Page {
                id: page.id.clone(),
                name: page.name.clone(),
                path: page.path.clone(),
                content: page.render(context),
            })
            .collect();

        debug!(pages = pages.len(), "pages rendered");
        Ok(pages)
    }
}
