//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use promptsite_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Category, SiteTemplate},
    error::SiteGenResult,
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store, one template per category.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<Category, SiteTemplate>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with every built-in template loaded.
    pub fn with_builtin() -> SiteGenResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates, replacing any already present.
    pub fn load_builtin(&self) -> SiteGenResult<()> {
        for template in builtin_templates::all_templates()? {
            self.insert(template)?;
        }
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, category: Category) -> SiteGenResult<SiteTemplate> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&category)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateNotFound { category }.into())
    }

    fn list(&self) -> SiteGenResult<Vec<SiteTemplate>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn insert(&self, template: SiteTemplate) -> SiteGenResult<()> {
        template.validate()?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        debug!(category = %template.category, pages = template.pages.len(), "template registered");
        inner.insert(template.category, template);
        Ok(())
    }
}
