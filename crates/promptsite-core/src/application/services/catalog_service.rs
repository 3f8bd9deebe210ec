//! Catalog Service - template family metadata.
//!
//! Answers "what can I generate?" without generating anything.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{CATEGORY_RULES, SiteTemplate, keywords_for},
    error::SiteGenResult,
};

/// Sample prompts, one per keyword-driven category.
pub const EXAMPLE_PROMPTS: [&str; 6] = [
    "Create an e-commerce store for TechGadgets selling electronics with a modern blue theme",
    "Build a portfolio website for Sarah Chen, a creative photographer specializing in nature photography",
    "Make a restaurant website for Bella Cucina, an Italian restaurant with a warm red color scheme",
    "Design a SaaS landing page for CloudSync, a file synchronization tool with a purple theme",
    "Create a blog called TechInsights about technology trends and tutorials",
    "Build a business website for Sterling Consulting, a corporate consulting firm",
];

/// Information about a template family for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub slug: String,
    pub label: String,
    /// 1-based position in the precedence table; `None` for the fallback.
    pub precedence: Option<usize>,
    pub keywords: Vec<String>,
    pub pages: Vec<String>,
    pub default_color: String,
    pub secondary_color: String,
}

impl CategoryInfo {
    fn from_template(template: &SiteTemplate) -> Self {
        let category = template.category;
        Self {
            slug: category.as_str().to_string(),
            label: category.label().to_string(),
            precedence: CATEGORY_RULES
                .iter()
                .position(|rule| rule.category == category)
                .map(|i| i + 1),
            keywords: keywords_for(category).iter().map(|k| k.to_string()).collect(),
            pages: template.page_ids().map(str::to_string).collect(),
            default_color: category.default_color().to_string(),
            secondary_color: template.secondary_color.clone(),
        }
    }
}

/// Service for catalog queries.
pub struct CatalogService {
    store: Box<dyn TemplateStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Every registered family, in category order.
    pub fn categories(&self) -> SiteGenResult<Vec<CategoryInfo>> {
        let mut templates = self.store.list()?;
        templates.sort_by_key(|t| t.category);
        Ok(templates.iter().map(CategoryInfo::from_template).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateStore;
    use std::collections::HashSet;

    use crate::domain::{Category, PageTemplate, classify};

    fn template(category: Category, pages: &[&str]) -> SiteTemplate {
        pages
            .iter()
            .fold(SiteTemplate::builder(category), |b, id| {
                b.page(PageTemplate::new(*id, *id, "/"))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn categories_are_sorted_and_described() {
        let mut store = MockTemplateStore::new();
        store.expect_list().returning(|| {
            Ok(vec![
                template(Category::General, &["home"]),
                template(Category::Ecommerce, &["home", "shop"]),
            ])
        });

        let infos = CatalogService::new(Box::new(store)).categories().unwrap();
        assert_eq!(infos.len(), 2);

        let shop = &infos[0];
        assert_eq!(shop.slug, "ecommerce");
        assert_eq!(shop.label, "E-commerce");
        assert_eq!(shop.precedence, Some(1));
        assert_eq!(shop.pages, ["home", "shop"]);
        assert!(shop.keywords.contains(&"sell".to_string()));
        assert_eq!(shop.secondary_color, "gray");

        let general = &infos[1];
        assert_eq!(general.precedence, None);
        assert!(general.keywords.is_empty());
    }

    #[test]
    fn each_example_selects_a_distinct_category() {
        let seen: HashSet<Category> = EXAMPLE_PROMPTS
            .iter()
            .map(|p| classify(p).category)
            .collect();
        assert_eq!(seen.len(), EXAMPLE_PROMPTS.len());
        assert!(!seen.contains(&Category::General));
    }
}
