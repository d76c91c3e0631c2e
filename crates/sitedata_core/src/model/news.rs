//! News document model.
//!
//! # Responsibility
//! - Describe news/travel items and the categories they reference.
//!
//! # Invariants
//! - `NewsItem::category` refers to a `Category::name`; the reference is not
//!   enforced and a dangling name is rendered as-is.
//! - `link` is omitted from the file when `None`; `featured` is always written.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::Document;

/// One news or travel entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsItem {
    /// ISO calendar date (`YYYY-MM-DD`). Sorting relies on the fixed width.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Name of the referenced category.
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Hand-added keys, written back after the known fields.
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Category a news item can be filed under.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    /// Lowercase identifier referenced by `NewsItem::category`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    /// FontAwesome icon class, e.g. `fa-briefcase`.
    #[serde(default)]
    pub icon: String,
    /// Hex color, e.g. `#28a745`.
    #[serde(default)]
    pub color: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            icon: icon.into(),
            color: color.into(),
            extra: Mapping::new(),
        }
    }
}

/// Whole `news.yml` document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsDocument {
    #[serde(default)]
    pub items: Vec<NewsItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl NewsDocument {
    /// Resolves a category name to its display name by linear search.
    ///
    /// Falls back to the raw name when no category matches.
    pub fn category_display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.display_name.as_str())
            .unwrap_or(name)
    }
}

impl Document for NewsDocument {
    const KIND: &'static str = "news";

    fn record_count(&self) -> usize {
        self.items.len() + self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, NewsDocument, NewsItem};

    #[test]
    fn category_display_name_falls_back_to_raw_name() {
        let document = NewsDocument {
            categories: vec![Category::new("talk", "Talks", "fa-microphone", "#123456")],
            ..NewsDocument::default()
        };

        assert_eq!(document.category_display_name("talk"), "Talks");
        assert_eq!(document.category_display_name("travel"), "travel");
    }

    #[test]
    fn item_without_link_omits_the_key() {
        let item = NewsItem {
            date: "2024-05-01".to_string(),
            title: "Paper accepted".to_string(),
            category: "paper".to_string(),
            ..NewsItem::default()
        };

        let yaml = serde_yaml::to_string(&item).unwrap();
        assert!(!yaml.contains("link"));
        assert!(yaml.contains("featured: false"));
    }

    #[test]
    fn missing_featured_defaults_to_false() {
        let item: NewsItem =
            serde_yaml::from_str("date: '2024-01-01'\ntitle: t\ndescription: d\ncategory: c\n")
                .unwrap();
        assert!(!item.featured);
        assert_eq!(item.link, None);
    }
}
