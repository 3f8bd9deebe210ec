//! Integration tests for promptsite-core.
//!
//! Exercises the public API end to end with small in-test port
//! implementations; the production adapters are tested in their own crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use promptsite_core::{
    application::{ApplicationError, ExportService, GenerationService, PageSelection},
    domain::{
        Category, ColorToken, Fragment, Page, PageTemplate, RenderContext, Row, SiteTemplate,
    },
    error::{SiteGenError, SiteGenResult},
    prelude::*,
};

struct OneTemplateStore(SiteTemplate);

impl TemplateStore for OneTemplateStore {
    fn get(&self, category: Category) -> SiteGenResult<SiteTemplate> {
        if category == self.0.category {
            Ok(self.0.clone())
        } else {
            Err(ApplicationError::TemplateNotFound { category }.into())
        }
    }

    fn list(&self) -> SiteGenResult<Vec<SiteTemplate>> {
        Ok(vec![self.0.clone()])
    }

    fn insert(&self, _template: SiteTemplate) -> SiteGenResult<()> {
        Ok(())
    }
}

struct FragmentRenderer;

impl TemplateRenderer for FragmentRenderer {
    fn render(&self, template: &SiteTemplate, ctx: &RenderContext) -> SiteGenResult<Vec<Page>> {
        Ok(template
            .pages
            .iter()
            .map(|p| Page {
                id: p.id.clone(),
                name: p.name.clone(),
                path: p.path.clone(),
                content: p.render(ctx),
            })
            .collect())
    }
}

struct StoppedClock(DateTime<Utc>);

impl Clock for StoppedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Default)]
struct RecordingFs(Arc<Mutex<HashMap<PathBuf, String>>>);

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, _path: &Path) -> SiteGenResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SiteGenResult<()> {
        self.0
            .lock()
            .map_err(|_| SiteGenError::Internal {
                message: "poisoned".into(),
            })?
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().map(|m| m.contains_key(path)).unwrap_or(false)
    }
}

fn shop_template() -> SiteTemplate {
    let products = (1..=3)
        .map(|i| Row::new().slot("INDEX", i).slot("PRICE", i * 25 + 24))
        .collect();
    SiteTemplate::builder(Category::Ecommerce)
        .page(
            PageTemplate::new("home", "Home", "/")
                .markup("<h1 class=\"text-{{COLOR}}-600\">{{NAME}}</h1>")
                .repeat(
                    products,
                    vec![Fragment::markup("<p>Product {{INDEX}} ${{PRICE}}.99</p>")],
                ),
        )
        .page(PageTemplate::new("shop", "Shop", "/shop").markup("<h2>Shop {{NAME}}</h2>"))
        .build()
        .unwrap()
}

fn service() -> GenerationService {
    GenerationService::new(
        Box::new(OneTemplateStore(shop_template())),
        Box::new(FragmentRenderer),
        Box::new(StoppedClock(
            Utc.with_ymd_and_hms(2024, 12, 24, 8, 0, 0).unwrap(),
        )),
    )
}

#[test]
fn prompt_to_site() {
    let site = service()
        .generate(
            "Create an e-commerce store for TechGadgets selling electronics with a modern blue theme",
        )
        .unwrap();

    assert_eq!(site.category(), Category::Ecommerce);
    assert_eq!(site.name(), "TechGadgets");
    assert_eq!(site.theme(), ColorToken::Blue);
    assert_eq!(site.pages().len(), 2);

    let home = &site.pages()[0].content;
    assert!(home.starts_with("<h1 class=\"text-blue-600\">TechGadgets</h1>"));
    assert!(home.contains("Product 1 $49.99"));
    assert!(home.contains("Product 3 $99.99"));
}

#[test]
fn unknown_category_surfaces_as_not_found() {
    let err = service().generate("a blog about tea").unwrap_err();
    assert!(matches!(
        err,
        SiteGenError::Application(ApplicationError::TemplateNotFound { .. })
    ));
}

#[test]
fn generate_then_export_every_page() {
    let site = service().generate("a shop named Night Market").unwrap();
    let fs = RecordingFs::default();
    let export = ExportService::new(Box::new(fs.clone()));

    let written = export
        .export(&site, &PageSelection::All, Path::new("site"), false)
        .unwrap();
    assert_eq!(
        written,
        vec![
            PathBuf::from("site/night-market-home.html"),
            PathBuf::from("site/night-market-shop.html"),
        ]
    );

    let files = fs.0.lock().unwrap();
    let shop = &files[Path::new("site/night-market-shop.html")];
    assert!(shop.contains("<title>Night Market</title>"));
    assert!(shop.contains("<h2>Shop Night Market</h2>"));
    assert!(!shop.contains("Product 1"));
}

#[test]
fn second_export_refuses_to_overwrite() {
    let site = service().generate("a shop named Night Market").unwrap();
    let export = ExportService::new(Box::new(RecordingFs::default()));

    export
        .export(&site, &PageSelection::First, Path::new("site"), false)
        .unwrap();
    let again = export.export(&site, &PageSelection::First, Path::new("site"), false);
    assert!(matches!(
        again,
        Err(SiteGenError::Application(ApplicationError::FileExists { .. }))
    ));
    assert!(
        export
            .export(&site, &PageSelection::First, Path::new("site"), true)
            .is_ok()
    );
}
