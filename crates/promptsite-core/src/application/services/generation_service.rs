//! Generation Service - main application orchestrator.
//!
//! Coordinates the whole prompt-to-site workflow:
//! 1. Classify the prompt
//! 2. Look up the category's template
//! 3. Render every page with the extracted name and color
//! 4. Stamp the result with the clock

use std::thread;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, TemplateRenderer, TemplateStore},
    },
    domain::{self, RenderContext, Site},
    error::SiteGenResult,
};

/// Knobs for a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Simulated latency applied before classification. Zero skips it.
    pub delay: Duration,
}

impl GenerationOptions {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

/// Turns prompts into sites.
pub struct GenerationService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    clock: Box<dyn Clock>,
    options: GenerationOptions,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use promptsite_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     store,    // impl TemplateStore
    ///     renderer, // impl TemplateRenderer
    ///     clock,    // impl Clock
    /// );
    /// let site = service.generate("a bakery named Sweet Crumbs")?;
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            renderer,
            clock,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate a site from a prompt.
    #[instrument(skip_all, fields(len = prompt.len()))]
    pub fn generate(&self, prompt: &str) -> SiteGenResult<Site> {
        if !self.options.delay.is_zero() {
            debug!(delay_ms = self.options.delay.as_millis() as u64, "simulating latency");
            thread::sleep(self.options.delay);
        }

        let classification = domain::classify(prompt);
        info!(
            category = %classification.category,
            name = %classification.name,
            color = %classification.color,
            "Prompt classified"
        );

        let template = self.store.get(classification.category)?;

        let context = RenderContext::new(
            classification.name.clone(),
            classification.color,
            prompt,
        );
        let pages = self.renderer.render(&template, &context)?;

        if pages.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("template '{}' produced no pages", template.category.as_str()),
            }
            .into());
        }

        let site = Site::assemble(
            classification,
            prompt,
            pages,
            template.secondary_color,
            self.clock.now(),
        );

        info!(id = %site.id(), pages = site.pages().len(), "Site generated");
        Ok(site)
    }
}
