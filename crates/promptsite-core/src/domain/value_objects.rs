//! Domain value objects: Category, ColorToken.
//!
//! # Design
//!
//! These are plain `Copy` value types compared by value.
//! They hold NO matching logic. Keyword precedence and color scanning live
//! in `classifier.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` / `label` arms and the `FromStr` arm here
//! 3. Add a rule to `classifier::CATEGORY_RULES` and a builder in the adapters

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ─────────────────────────────────────────────────────────────────

/// The template family a prompt is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Ecommerce,
    Portfolio,
    Restaurant,
    Saas,
    Blog,
    Business,
    General,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Self::Ecommerce,
        Self::Portfolio,
        Self::Restaurant,
        Self::Saas,
        Self::Blog,
        Self::Business,
        Self::General,
    ];

    /// Machine-facing slug (`ecommerce`, `saas`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Portfolio => "portfolio",
            Self::Restaurant => "restaurant",
            Self::Saas => "saas",
            Self::Blog => "blog",
            Self::Business => "business",
            Self::General => "general",
        }
    }

    /// Human-facing label stored on a generated site.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::Portfolio => "Portfolio",
            Self::Restaurant => "Restaurant",
            Self::Saas => "SaaS",
            Self::Blog => "Blog",
            Self::Business => "Business",
            Self::General => "General",
        }
    }

    /// Color used when the prompt names none.
    pub const fn default_color(&self) -> ColorToken {
        ColorToken::Blue
    }

    /// Fixed secondary color of the category's color scheme.
    ///
    /// No rule connects these; they are table entries.
    pub const fn secondary_color(&self) -> &'static str {
        match self {
            Self::Ecommerce | Self::Portfolio | Self::Blog | Self::General => "gray",
            Self::Restaurant => "amber",
            Self::Saas | Self::Business => "slate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecommerce" | "e-commerce" | "shop" | "store" => Ok(Self::Ecommerce),
            "portfolio" => Ok(Self::Portfolio),
            "restaurant" => Ok(Self::Restaurant),
            "saas" => Ok(Self::Saas),
            "blog" => Ok(Self::Blog),
            "business" => Ok(Self::Business),
            "general" | "generic" => Ok(Self::General),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

// ── ColorToken ───────────────────────────────────────────────────────────────

/// One of the twelve theme colors a prompt can name.
///
/// Declaration order is significant: the classifier scans in this order and
/// the first hit becomes the primary color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Pink,
    Yellow,
    Orange,
    Teal,
    Indigo,
    Cyan,
    Emerald,
    Violet,
}

impl ColorToken {
    /// Every token, in scan order.
    pub const ALL: [ColorToken; 12] = [
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Purple,
        Self::Pink,
        Self::Yellow,
        Self::Orange,
        Self::Teal,
        Self::Indigo,
        Self::Cyan,
        Self::Emerald,
        Self::Violet,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Indigo => "indigo",
            Self::Cyan => "cyan",
            Self::Emerald => "emerald",
            Self::Violet => "violet",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_slugs_and_labels() {
        assert_eq!(Category::from_str("saas").unwrap(), Category::Saas);
        assert_eq!(Category::from_str("E-commerce").unwrap(), Category::Ecommerce);
        assert_eq!(Category::from_str("GENERAL").unwrap(), Category::General);
        assert!(Category::from_str("wiki").is_err());
    }

    #[test]
    fn category_label_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.label()).unwrap(), category);
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
    }

    #[test]
    fn secondary_colors_follow_table() {
        assert_eq!(Category::Ecommerce.secondary_color(), "gray");
        assert_eq!(Category::Restaurant.secondary_color(), "amber");
        assert_eq!(Category::Saas.secondary_color(), "slate");
        assert_eq!(Category::Business.secondary_color(), "slate");
        assert_eq!(Category::General.secondary_color(), "gray");
    }

    #[test]
    fn every_category_defaults_to_blue() {
        for category in Category::ALL {
            assert_eq!(category.default_color(), ColorToken::Blue);
        }
    }

    #[test]
    fn color_token_scan_order_starts_with_blue() {
        assert_eq!(ColorToken::ALL[0], ColorToken::Blue);
        assert_eq!(ColorToken::ALL[11], ColorToken::Violet);
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::Ecommerce).unwrap();
        assert_eq!(json, "\"ecommerce\"");
    }
}
