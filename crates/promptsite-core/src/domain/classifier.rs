//! Prompt classification.
//!
//! Turns free text into a [`Classification`]: which template family to use,
//! what to call the site, and which theme color to paint it with. Every
//! input, including the empty string, classifies successfully through the
//! fallback chains below.
//!
//! ## Category precedence
//!
//! [`CATEGORY_RULES`] is an ordered table. The first rule with a keyword
//! contained in the lowercased prompt wins, so "food blog" is a restaurant
//! and "business software platform" is a business. Prompts matching no rule
//! fall through to [`Category::General`].
//!
//! ## Name extraction
//!
//! 1. `for <Capitalized Phrase>`
//! 2. `called <Capitalized Phrase>`
//! 3. `named <Capitalized Phrase>`
//! 4. the first two capitalized tokens longer than two characters
//! 5. [`DEFAULT_SITE_NAME`]
//!
//! A capitalized phrase is a run of words that each start with an uppercase
//! letter or digit. It ends at the first lowercase word (which covers
//! "that", "which", "with"), at a period or comma, or at the end of the
//! prompt. A phrase running into any other character is not a match, and
//! neither is a single letter.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::value_objects::{Category, ColorToken};

/// Name used when nothing in the prompt looks like one.
pub const DEFAULT_SITE_NAME: &str = "MyBusiness";

/// One row of the category precedence table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Category rules in precedence order. Order is load-bearing.
pub const CATEGORY_RULES: [CategoryRule; 6] = [
    CategoryRule {
        category: Category::Ecommerce,
        keywords: &["shop", "store", "ecommerce", "product", "buy", "sell"],
    },
    CategoryRule {
        category: Category::Portfolio,
        keywords: &["portfolio", "designer", "artist", "photographer", "creative"],
    },
    CategoryRule {
        category: Category::Restaurant,
        keywords: &["restaurant", "cafe", "food", "menu", "dining"],
    },
    CategoryRule {
        category: Category::Business,
        keywords: &["business", "company", "corporate", "consulting", "agency"],
    },
    CategoryRule {
        category: Category::Blog,
        keywords: &["blog", "article", "news", "magazine"],
    },
    CategoryRule {
        category: Category::Saas,
        keywords: &["saas", "software", "app", "platform", "tool"],
    },
];

/// Keywords that select `category`. Empty for [`Category::General`].
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.keywords)
        .unwrap_or(&[])
}

/// Introducers tried in order, each followed by a capitalized phrase.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["for", "called", "named"]
        .iter()
        .map(|kw| {
            Regex::new(&format!(
                r"\b{kw}\s+([A-Z][A-Za-z0-9]*(?:[ \t]+[A-Z0-9][A-Za-z0-9]*)*)(?:[\s.,]|$)"
            ))
            .expect("name pattern is a valid regex")
        })
        .collect()
});

/// Result of classifying a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub name: String,
    /// Primary color: the first detected token, or the category default.
    pub color: ColorToken,
    /// Every token found in the prompt, in scan order.
    pub detected_colors: Vec<ColorToken>,
}

/// Classify a prompt. Never fails.
#[instrument(skip_all, fields(len = prompt.len()))]
pub fn classify(prompt: &str) -> Classification {
    let category = detect_category(prompt);
    let name = extract_name(prompt);
    let detected_colors = extract_colors(prompt);
    let color = detected_colors
        .first()
        .copied()
        .unwrap_or_else(|| category.default_color());

    debug!(%category, %name, %color, "prompt classified");

    Classification {
        category,
        name,
        color,
        detected_colors,
    }
}

/// Pick the first category whose keywords appear in the prompt.
pub fn detect_category(prompt: &str) -> Category {
    let lowered = prompt.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(Category::General, |rule| rule.category)
}

/// Extract a display name using the fallback chain in the module docs.
pub fn extract_name(prompt: &str) -> String {
    for pattern in NAME_PATTERNS.iter() {
        let phrase = pattern
            .captures_iter(prompt)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .find(|p| p.chars().count() > 1);
        if let Some(phrase) = phrase {
            return phrase.to_string();
        }
    }

    let capitalized: Vec<&str> = prompt
        .split_whitespace()
        .filter(|w| w.starts_with(|c: char| c.is_ascii_uppercase()) && w.chars().count() > 2)
        .take(2)
        .collect();

    if capitalized.is_empty() {
        DEFAULT_SITE_NAME.to_string()
    } else {
        capitalized.join(" ")
    }
}

/// Every color token contained in the prompt, in [`ColorToken::ALL`] order.
pub fn extract_colors(prompt: &str) -> Vec<ColorToken> {
    let lowered = prompt.to_lowercase();
    ColorToken::ALL
        .into_iter()
        .filter(|color| lowered.contains(color.as_str()))
        .collect()
}
