use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    classifier::Classification,
    value_objects::{Category, ColorToken},
};

/// Identifier of a generated site: the generation time in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generated markup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    /// Informational route; nothing is routed.
    pub path: String,
    pub content: String,
}

/// Theme colors of a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: ColorToken,
    pub secondary: String,
    pub accent: ColorToken,
}

impl ColorScheme {
    /// Primary and accent both mirror the detected color.
    pub fn new(primary: ColorToken, secondary: impl Into<String>) -> Self {
        Self {
            primary,
            secondary: secondary.into(),
            accent: primary,
        }
    }
}

/// A generated website. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    id: SiteId,
    name: String,
    #[serde(with = "category_label")]
    category: Category,
    theme: ColorToken,
    pages: Vec<Page>,
    colors: ColorScheme,
    prompt: String,
    created_at: DateTime<Utc>,
}

impl Site {
    pub fn assemble(
        classification: Classification,
        prompt: impl Into<String>,
        pages: Vec<Page>,
        secondary_color: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SiteId::from_timestamp(created_at),
            colors: ColorScheme::new(classification.color, secondary_color),
            name: classification.name,
            category: classification.category,
            theme: classification.color,
            pages,
            prompt: prompt.into(),
            created_at,
        }
    }

    pub fn id(&self) -> &SiteId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn theme(&self) -> ColorToken {
        self.theme
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn first_page(&self) -> Option<&Page> {
        self.pages.first()
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation time as an ISO 8601 string with millisecond precision.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Name lowercased with whitespace runs collapsed to `-`.
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Display-only address of a page, e.g. `techgadgets.com/shop`.
    pub fn preview_url(&self, page: &Page) -> String {
        let host: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("{host}.com{}", page.path)
    }
}

/// Sites carry the display label (`E-commerce`), not the slug.
mod category_label {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::domain::value_objects::Category;

    pub fn serialize<S: Serializer>(category: &Category, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(category.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Category, D::Error> {
        let raw = String::deserialize(d)?;
        Category::from_str(&raw).map_err(D::Error::custom)
    }
}
