//! Filesystem-based template overrides.
//!
//! Discovers `template.toml` manifests one level below a templates directory
//! and turns them into [`SiteTemplate`]s that replace the built-in template
//! of their category.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── restaurant/
//! │   ├── template.toml        ← manifest (required)
//! │   └── home.html            ← page markup
//! └── ecommerce/
//!     ├── template.toml
//!     ├── home.html
//!     └── shop.html
//! ```
//!
//! # `template.toml` format
//!
//! ```toml
//! [template]
//! category        = "restaurant"   # optional; defaults to the directory name
//! secondary_color = "stone"        # optional; defaults to the category table
//!
//! [[pages]]
//! id   = "home"
//! name = "Home"                    # optional; defaults to the id
//! path = "/"                       # optional; "/" for home, "/<id>" otherwise
//! file = "home.html"
//! ```
//!
//! Page files may use `{{NAME}}`, `{{COLOR}}` and `{{PROMPT}}`. A manifest
//! that fails to load is skipped with a warning; the rest still load.

use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use promptsite_core::{
    application::ports::TemplateStore,
    domain::{Category, DomainError, PageTemplate, SiteTemplate},
    error::SiteGenResult,
};

/// Environment variable naming the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "PROMPTSITE_TEMPLATES_DIR";

const MANIFEST_FILE: &str = "template.toml";

/// Pick the templates directory: `$PROMPTSITE_TEMPLATES_DIR` wins over the
/// configured path. `None` means built-ins only.
pub fn resolve_templates_dir(configured: Option<&Path>) -> Option<PathBuf> {
    match std::env::var(TEMPLATES_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => {
            debug!(path = %dir, "templates dir from ${}", TEMPLATES_DIR_ENV);
            Some(PathBuf::from(dir))
        }
        _ => configured.map(Path::to_path_buf),
    }
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `template.toml` file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TemplateManifest {
    #[serde(default)]
    pub template: TemplateSection,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// `[template]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TemplateSection {
    pub category: Option<String>,
    pub secondary_color: Option<String>,
}

/// One entry under `[[pages]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct PageEntry {
    pub id: String,
    pub name: Option<String>,
    pub path: Option<String>,
    /// Markup file, relative to the manifest's directory.
    pub file: String,
}

impl PageEntry {
    fn route(&self) -> String {
        match &self.path {
            Some(path) => path.clone(),
            None if self.id == "home" => "/".to_string(),
            None => format!("/{}", self.id),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads override templates from a directory of `template.toml` manifests.
///
/// # Example
///
/// ```no_run
/// use promptsite_adapters::template_loader::TemplateOverrideLoader;
///
/// let loader = TemplateOverrideLoader::new("./templates");
/// let templates = loader.load_all()?;
/// println!("Loaded {} overrides", templates.len());
/// # Ok::<(), promptsite_core::domain::DomainError>(())
/// ```
pub struct TemplateOverrideLoader {
    templates_dir: PathBuf,
}

impl TemplateOverrideLoader {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Load every valid override found under the templates directory.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidTemplate`] if the directory is missing or cannot
    /// be walked. Individual manifests that fail are skipped with a `WARN`.
    /// When two manifests declare the same category the first in path order
    /// wins.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<SiteTemplate>, DomainError> {
        if !self.templates_dir.is_dir() {
            return Err(DomainError::InvalidTemplate(format!(
                "templates directory not found: {}",
                self.templates_dir.display()
            )));
        }

        let mut templates = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry
                .map_err(|e| DomainError::InvalidTemplate(format!("directory walk error: {e}")))?;

            if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE {
                continue;
            }

            match load_manifest(entry.path()) {
                Ok(template) if !seen.insert(template.category) => {
                    warn!(
                        manifest = %entry.path().display(),
                        category = %template.category,
                        "duplicate override for category, skipping"
                    );
                }
                Ok(template) => {
                    debug!(
                        category = %template.category,
                        pages = template.pages.len(),
                        "loaded override template"
                    );
                    templates.push(template);
                }
                Err(e) => {
                    warn!(
                        manifest = %entry.path().display(),
                        error = %e,
                        "skipping template due to load error"
                    );
                }
            }
        }

        debug!(count = templates.len(), "finished loading overrides");
        Ok(templates)
    }

    /// Load overrides and insert them into `store`. Returns how many were
    /// applied.
    pub fn apply_to(&self, store: &dyn TemplateStore) -> SiteGenResult<usize> {
        let templates = self.load_all()?;
        let count = templates.len();
        for template in templates {
            store.insert(template)?;
        }
        info!(count, dir = %self.templates_dir.display(), "template overrides applied");
        Ok(count)
    }
}

/// Parse one manifest and read its page files.
fn load_manifest(manifest_path: &Path) -> Result<SiteTemplate, DomainError> {
    let dir = manifest_path.parent().ok_or_else(|| {
        DomainError::InvalidTemplate(format!(
            "manifest has no parent directory: {}",
            manifest_path.display()
        ))
    })?;

    let raw = fs::read_to_string(manifest_path).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to read '{}': {e}",
            manifest_path.display()
        ))
    })?;

    let manifest: TemplateManifest = toml::from_str(&raw).map_err(|e| {
        DomainError::InvalidTemplate(format!(
            "failed to parse '{}': {e}",
            manifest_path.display()
        ))
    })?;

    let category = match &manifest.template.category {
        Some(declared) => Category::from_str(declared)?,
        None => dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::InvalidTemplate("unnamed template directory".into()))
            .and_then(Category::from_str)?,
    };

    let mut builder = SiteTemplate::builder(category);
    if let Some(color) = &manifest.template.secondary_color {
        builder = builder.secondary_color(color.clone());
    }

    for page in &manifest.pages {
        let file = page_file(dir, &page.file)?;
        let markup = fs::read_to_string(&file).map_err(|e| {
            DomainError::InvalidTemplate(format!(
                "failed to read page '{}' ({}): {e}",
                page.id,
                file.display()
            ))
        })?;

        builder = builder.page(
            PageTemplate::new(
                page.id.clone(),
                page.name.clone().unwrap_or_else(|| page.id.clone()),
                page.route(),
            )
            .markup(markup),
        );
    }

    builder.build()
}

/// Resolve a page file, keeping it inside the template directory.
fn page_file(dir: &Path, relative: &str) -> Result<PathBuf, DomainError> {
    let rel = Path::new(relative);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(DomainError::InvalidTemplate(format!(
            "page file must be relative to the template directory: {relative}"
        )));
    }
    Ok(dir.join(rel))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
