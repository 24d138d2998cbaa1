//! Deal records built from a single search answer.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Coarse deal category inferred from title keywords.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Sports,
    Fashion,
    Technology,
    #[default]
    General,
}

/// Keyword sets checked in order; the first matching set wins.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 4] = [
    (Category::Food, &["sushi", "pizza", "food", "cafe"]),
    (Category::Sports, &["gym", "fitness", "sport"]),
    (Category::Fashion, &["clothes", "fashion", "shoes"]),
    (Category::Technology, &["tech", "phone"]),
];

impl Category {
    /// Best-effort classification of an offer by its title.
    pub fn infer(title: &str) -> Self {
        let title = title.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| title.contains(keyword)))
            .map(|(category, _)| *category)
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Sports => "sports",
            Category::Fashion => "fashion",
            Category::Technology => "technology",
            Category::General => "general",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record decoded from one answer segment, before a link is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDeal {
    pub title: String,
    pub description: String,
    pub location: String,
    pub source: String,
    pub category: Category,
}

/// Deal card shown to the user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Key unique within one result set.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Store name or address, the search city when the answer omits it.
    pub location: String,
    /// Display name of the originating platform or site.
    pub source: String,
    /// Grounding link or a fallback web search.
    pub source_url: String,
    pub category: Category,
}

impl Deal {
    /// Combines a parsed record with its identifier and link.
    pub fn new(parsed: ParsedDeal, id: String, source_url: String) -> Self {
        Self {
            id,
            title: parsed.title,
            description: parsed.description,
            location: parsed.location,
            source: parsed.source,
            source_url,
            category: parsed.category,
        }
    }
}
