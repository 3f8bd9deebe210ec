//! Export Service - writes standalone documents to disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, Site, StandaloneDocument},
    error::SiteGenResult,
};

/// Which pages of a site to export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// The site's first page.
    #[default]
    First,
    /// One page by id.
    Id(String),
    /// One page by id if the site has it, else the first page.
    Preferred(String),
    /// Every page, one file each.
    All,
}

impl PageSelection {
    /// Selection from the CLI's `--page` / `--all-pages` pair.
    pub fn from_flags(page: Option<&str>, all: bool) -> Self {
        match (page, all) {
            (_, true) => Self::All,
            (Some(id), false) => Self::Id(id.to_string()),
            (None, false) => Self::First,
        }
    }

    /// Use `preferred` when nothing more specific was selected.
    pub fn or_preferred(self, preferred: Option<&str>) -> Self {
        match (self, preferred) {
            (Self::First, Some(id)) => Self::Preferred(id.to_string()),
            (selection, _) => selection,
        }
    }
}

/// Service for exporting generated pages.
pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Build the documents for a selection without writing anything.
    pub fn documents(
        &self,
        site: &Site,
        selection: &PageSelection,
    ) -> SiteGenResult<Vec<StandaloneDocument>> {
        let docs = match selection {
            PageSelection::All => StandaloneDocument::for_each_page(site),
            PageSelection::Id(id) => vec![StandaloneDocument::for_page(site, id)?],
            PageSelection::First => vec![Self::first_document(site)?],
            PageSelection::Preferred(id) => match site.page(id) {
                Some(page) => vec![StandaloneDocument::for_page(site, &page.id)?],
                None => {
                    debug!(page = %id, "preferred page missing, using first page");
                    vec![Self::first_document(site)?]
                }
            },
        };
        Ok(docs)
    }

    fn first_document(site: &Site) -> SiteGenResult<StandaloneDocument> {
        let first = site.first_page().ok_or_else(|| DomainError::PageNotFound {
            page_id: "first".into(),
            site: site.name().to_string(),
        })?;
        Ok(StandaloneDocument::for_page(site, &first.id)?)
    }

    /// Write the selected pages into `dir`.
    ///
    /// Nothing is written if any target file already exists and `overwrite`
    /// is false.
    #[instrument(skip_all, fields(site = %site.name(), dir = %dir.display()))]
    pub fn export(
        &self,
        site: &Site,
        selection: &PageSelection,
        dir: &Path,
        overwrite: bool,
    ) -> SiteGenResult<Vec<PathBuf>> {
        let docs = self.documents(site, selection)?;
        self.write_documents(&docs, dir, overwrite)
    }

    /// Write already-built documents into `dir`.
    pub fn write_documents(
        &self,
        docs: &[StandaloneDocument],
        dir: &Path,
        overwrite: bool,
    ) -> SiteGenResult<Vec<PathBuf>> {
        let targets: Vec<PathBuf> = docs.iter().map(|d| dir.join(&d.file_name)).collect();

        if !overwrite {
            if let Some(existing) = targets.iter().find(|p| self.filesystem.exists(p)) {
                return Err(ApplicationError::FileExists {
                    path: existing.clone(),
                }
                .into());
            }
        }

        self.filesystem.create_dir_all(dir)?;
        for (doc, path) in docs.iter().zip(&targets) {
            self.filesystem.write_file(path, &doc.html)?;
            info!(path = %path.display(), bytes = doc.html.len(), "Page exported");
        }

        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{Category, Classification, ColorToken, Page};
    use crate::error::SiteGenError;
    use chrono::Utc;

    fn site() -> Site {
        let classification = Classification {
            category: Category::Ecommerce,
            name: "Tech Gadgets".into(),
            color: ColorToken::Blue,
            detected_colors: vec![ColorToken::Blue],
        };
        let page = |id: &str, path: &str| Page {
            id: id.into(),
            name: id.into(),
            path: path.into(),
            content: format!("<main>{id}</main>"),
        };
        Site::assemble(
            classification,
            "prompt",
            vec![page("home", "/"), page("shop", "/shop")],
            "gray",
            Utc::now(),
        )
    }

    // ── selection ───────────────────────────────────────────────────────────

    #[test]
    fn selection_from_flags() {
        assert_eq!(PageSelection::from_flags(None, false), PageSelection::First);
        assert_eq!(
            PageSelection::from_flags(Some("shop"), false),
            PageSelection::Id("shop".into())
        );
        assert_eq!(PageSelection::from_flags(Some("shop"), true), PageSelection::All);
    }

    #[test]
    fn first_selection_exports_home() {
        let service = ExportService::new(Box::new(MockFilesystem::new()));
        let docs = service.documents(&site(), &PageSelection::First).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name, "tech-gadgets-home.html");
    }

    #[test]
    fn preferred_only_replaces_the_first_page_default() {
        assert_eq!(
            PageSelection::First.or_preferred(Some("shop")),
            PageSelection::Preferred("shop".into())
        );
        assert_eq!(PageSelection::First.or_preferred(None), PageSelection::First);
        assert_eq!(
            PageSelection::Id("home".into()).or_preferred(Some("shop")),
            PageSelection::Id("home".into())
        );
        assert_eq!(PageSelection::All.or_preferred(Some("shop")), PageSelection::All);
    }

    #[test]
    fn preferred_page_is_used_when_present() {
        let service = ExportService::new(Box::new(MockFilesystem::new()));
        let docs = service
            .documents(&site(), &PageSelection::Preferred("shop".into()))
            .unwrap();
        assert_eq!(docs[0].file_name, "tech-gadgets-shop.html");
    }

    #[test]
    fn missing_preferred_page_falls_back_to_first() {
        let service = ExportService::new(Box::new(MockFilesystem::new()));
        let docs = service
            .documents(&site(), &PageSelection::Preferred("menu".into()))
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name, "tech-gadgets-home.html");
    }

    #[test]
    fn unknown_page_is_rejected_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let service = ExportService::new(Box::new(fs));
        let err = service
            .export(&site(), &PageSelection::Id("blog".into()), Path::new("out"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            SiteGenError::Domain(DomainError::PageNotFound { .. })
        ));
    }

    // ── writing ─────────────────────────────────────────────────────────────

    #[test]
    fn export_all_writes_one_file_per_page() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .withf(|dir| dir == Path::new("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .times(2)
            .returning(|_, _| Ok(()));

        let service = ExportService::new(Box::new(fs));
        let written = service
            .export(&site(), &PageSelection::All, Path::new("out"), false)
            .unwrap();
        assert_eq!(
            written,
            vec![
                PathBuf::from("out/tech-gadgets-home.html"),
                PathBuf::from("out/tech-gadgets-shop.html"),
            ]
        );
    }

    #[test]
    fn existing_file_blocks_export_without_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("tech-gadgets-shop.html"));
        fs.expect_write_file().never();

        let service = ExportService::new(Box::new(fs));
        let err = service
            .export(&site(), &PageSelection::All, Path::new("out"), false)
            .unwrap_err();
        assert!(matches!(
            err,
            SiteGenError::Application(ApplicationError::FileExists { .. })
        ));
    }

    #[test]
    fn overwrite_skips_existence_check() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = ExportService::new(Box::new(fs));
        service
            .export(&site(), &PageSelection::First, Path::new("out"), true)
            .unwrap();
    }
}
