//! Site template domain model and slot rendering.
//!
//! A [`SiteTemplate`] is the structured blueprint for one [`Category`]: an
//! ordered list of [`PageTemplate`]s, each a sequence of [`Fragment`]s.
//!
//! ```text
//! SiteTemplate (category, secondary color)
//! └── PageTemplate (id, name, path)
//!      ├── Fragment::Markup   "<h1>{{NAME}}</h1>"
//!      └── Fragment::Repeat   rows × body
//!           └── Fragment::Markup "<span>${{PRICE}}.99</span>"
//! ```
//!
//! ## Slots
//!
//! | Slot | Source |
//! |------|--------|
//! | `NAME` | extracted site name |
//! | `COLOR` | primary color token |
//! | `PROMPT` | prompt text as typed |
//! | anything else | row-local values of the enclosing `Repeat` |
//!
//! Values are inserted verbatim and are never rescanned, so a prompt that
//! itself contains `{{NAME}}` renders literally.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{Category, ColorToken},
};

/// Slot holding the site name.
pub const SLOT_NAME: &str = "NAME";
/// Slot holding the primary color token.
pub const SLOT_COLOR: &str = "COLOR";
/// Slot holding the prompt as typed.
pub const SLOT_PROMPT: &str = "PROMPT";

// ── TemplateSource ────────────────────────────────────────────────────────────

/// Markup text, either compiled in or loaded at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

// ── Rows and fragments ────────────────────────────────────────────────────────

/// Row-local slot values for one iteration of a [`Fragment::Repeat`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    slots: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot value, consuming and returning the row.
    pub fn slot(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.slots.push((key.into(), value.to_string()));
        self
    }
}

/// One piece of page markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Markup with `{{SLOT}}` placeholders.
    Markup(TemplateSource),
    /// `body` rendered once per row, rows in order.
    Repeat { rows: Vec<Row>, body: Vec<Fragment> },
}

impl Fragment {
    pub fn markup(source: impl Into<TemplateSource>) -> Self {
        Self::Markup(source.into())
    }

    pub fn repeat(rows: Vec<Row>, body: Vec<Fragment>) -> Self {
        Self::Repeat { rows, body }
    }

    /// Render this fragment into `out`.
    pub fn render_into(&self, ctx: &RenderContext, out: &mut String) {
        match self {
            Self::Markup(source) => ctx.render_into(source.as_str(), out),
            Self::Repeat { rows, body } => {
                for row in rows {
                    let row_ctx = ctx.with_row(row);
                    for fragment in body {
                        fragment.render_into(&row_ctx, out);
                    }
                }
            }
        }
    }
}

// ── PageTemplate ──────────────────────────────────────────────────────────────

/// Blueprint for a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub id: String,
    pub name: String,
    pub path: String,
    pub fragments: Vec<Fragment>,
}

impl PageTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            fragments: Vec::new(),
        }
    }

    pub fn markup(mut self, source: impl Into<TemplateSource>) -> Self {
        self.fragments.push(Fragment::markup(source));
        self
    }

    pub fn repeat(mut self, rows: Vec<Row>, body: Vec<Fragment>) -> Self {
        self.fragments.push(Fragment::repeat(rows, body));
        self
    }

    /// Render every fragment in order.
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            fragment.render_into(ctx, &mut out);
        }
        out
    }
}

// ── SiteTemplate ──────────────────────────────────────────────────────────────

/// Blueprint for every page generated for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTemplate {
    pub category: Category,
    pub secondary_color: String,
    pub pages: Vec<PageTemplate>,
}

impl SiteTemplate {
    pub fn builder(category: Category) -> SiteTemplateBuilder {
        SiteTemplateBuilder {
            category,
            secondary_color: None,
            pages: Vec::new(),
        }
    }

    /// Check the template has pages and that page ids are unique.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pages.is_empty() {
            return Err(DomainError::EmptyTemplate {
                category: self.category.as_str().to_string(),
            });
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(DomainError::InvalidTemplate(format!(
                    "page in '{}' template has an empty id",
                    self.category.as_str()
                )));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(DomainError::DuplicatePage {
                    page_id: page.id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.id.as_str())
    }
}

/// Builder for [`SiteTemplate`]. `build` validates.
#[derive(Debug)]
pub struct SiteTemplateBuilder {
    category: Category,
    secondary_color: Option<String>,
    pages: Vec<PageTemplate>,
}

impl SiteTemplateBuilder {
    /// Override the category's table default.
    pub fn secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn page(mut self, page: PageTemplate) -> Self {
        self.pages.push(page);
        self
    }

    pub fn build(self) -> Result<SiteTemplate, DomainError> {
        let template = SiteTemplate {
            category: self.category,
            secondary_color: self
                .secondary_color
                .unwrap_or_else(|| self.category.secondary_color().to_string()),
            pages: self.pages,
        };
        template.validate()?;
        Ok(template)
    }
}

// ── RenderContext ─────────────────────────────────────────────────────────────

/// Slot values for rendering.
///
/// Immutable after creation; `with_row` returns a new context.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context with the three site-wide slots filled.
    pub fn new(name: impl Into<String>, color: ColorToken, prompt: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        variables.insert(SLOT_NAME.to_string(), name.into());
        variables.insert(SLOT_COLOR.to_string(), color.as_str().to_string());
        variables.insert(SLOT_PROMPT.to_string(), prompt.into());
        Self { variables }
    }

    /// Overlay a row's slots on top of this context.
    pub fn with_row(&self, row: &Row) -> Self {
        let mut child = self.clone();
        for (k, v) in &row.slots {
            child.variables.insert(k.clone(), v.clone());
        }
        child
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{SLOT}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}`
    /// - an unterminated `{{` is copied through unchanged
    /// - substituted values are not rescanned
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        self.render_into(template, &mut out);
        out
    }

    fn render_into(&self, template: &str, out: &mut String) {
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    return;
                }
            }
        }
        out.push_str(rest);
    }
}

impl fmt::Display for SiteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pages)", self.category, self.pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new("Acme", ColorToken::Teal, "make it pop")
    }

    // ── RenderContext ───────────────────────────────────────────────────────

    #[test]
    fn renders_site_wide_slots() {
        let out = ctx().render("<h1 class=\"text-{{COLOR}}-600\">{{NAME}}</h1><p>{{PROMPT}}</p>");
        assert_eq!(out, "<h1 class=\"text-teal-600\">Acme</h1><p>make it pop</p>");
    }

    #[test]
    fn unknown_slots_stay_literal() {
        assert_eq!(ctx().render("{{MISSING}} {{NAME}}"), "{{MISSING}} Acme");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        assert_eq!(ctx().render("a {{NAME"), "a {{NAME");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let ctx = RenderContext::new("{{COLOR}}", ColorToken::Red, "{{NAME}}");
        assert_eq!(ctx.render("{{NAME}}|{{PROMPT}}"), "{{COLOR}}|{{NAME}}");
    }

    #[test]
    fn row_overlays_parent_context() {
        let row = Row::new().slot("INDEX", 3).slot("NAME", "Shadowed");
        let child = ctx().with_row(&row);
        assert_eq!(child.get("INDEX"), Some("3"));
        assert_eq!(child.get("NAME"), Some("Shadowed"));
        assert_eq!(ctx().get("NAME"), Some("Acme"));
    }

    // ── Fragments ───────────────────────────────────────────────────────────

    #[test]
    fn repeat_renders_rows_in_order() {
        let page = PageTemplate::new("home", "Home", "/")
            .markup("<ul>")
            .repeat(
                (1..=3).map(|i| Row::new().slot("I", i)).collect(),
                vec![Fragment::markup("<li>{{NAME}} {{I}}</li>")],
            )
            .markup("</ul>");
        assert_eq!(
            page.render(&ctx()),
            "<ul><li>Acme 1</li><li>Acme 2</li><li>Acme 3</li></ul>"
        );
    }

    #[test]
    fn nested_repeat_sees_outer_row() {
        let page = PageTemplate::new("menu", "Menu", "/menu").repeat(
            vec![Row::new().slot("SECTION", "A"), Row::new().slot("SECTION", "B")],
            vec![Fragment::repeat(
                vec![Row::new().slot("DISH", 1), Row::new().slot("DISH", 2)],
                vec![Fragment::markup("{{SECTION}}{{DISH}} ")],
            )],
        );
        assert_eq!(page.render(&ctx()), "A1 A2 B1 B2 ");
    }

    #[test]
    fn empty_repeat_renders_nothing() {
        let page = PageTemplate::new("x", "X", "/").repeat(vec![], vec![Fragment::markup("never")]);
        assert_eq!(page.render(&ctx()), "");
    }

    // ── SiteTemplate ────────────────────────────────────────────────────────

    #[test]
    fn builder_defaults_secondary_from_category() {
        let template = SiteTemplate::builder(Category::Restaurant)
            .page(PageTemplate::new("home", "Home", "/").markup("x"))
            .build()
            .unwrap();
        assert_eq!(template.secondary_color, "amber");
    }

    #[test]
    fn builder_rejects_empty_template() {
        let result = SiteTemplate::builder(Category::Blog).build();
        assert!(matches!(result, Err(DomainError::EmptyTemplate { .. })));
    }

    #[test]
    fn builder_rejects_duplicate_page_ids() {
        let result = SiteTemplate::builder(Category::Ecommerce)
            .page(PageTemplate::new("home", "Home", "/"))
            .page(PageTemplate::new("home", "Again", "/again"))
            .build();
        assert!(matches!(result, Err(DomainError::DuplicatePage { .. })));
    }

    #[test]
    fn builder_rejects_blank_page_id() {
        let result = SiteTemplate::builder(Category::Blog)
            .page(PageTemplate::new("  ", "Home", "/"))
            .build();
        assert!(matches!(result, Err(DomainError::InvalidTemplate(_))));
    }
}
