//! News use-case service.
//!
//! # Responsibility
//! - Add, edit, remove and list news items; add categories.
//! - Resolve and validate the date typed for a new item.
//!
//! # Invariants
//! - New items and categories are appended; insertion order is storage order.
//! - The listing view sorts a copy; the stored order is never changed by it.
//! - Editing with a blank link response removes an existing link. All other
//!   blank edit responses leave their field unchanged.

use crate::model::news::{Category, NewsDocument, NewsItem};
use crate::repo::document_repo::{DocumentRepository, RepoResult};
use crate::service::selection::check_index;
use crate::service::{
    excerpt, non_blank, parse_yes_no, replace_if_given, ServiceError, ServiceResult,
};
use chrono::NaiveDate;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Characters of the description shown in the listing view.
pub const SUMMARY_DESCRIPTION_CHARS: usize = 100;

/// Structured input for a new news item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsItemDraft {
    pub date: String,
    pub title: String,
    pub description: String,
    /// Name of an existing category.
    pub category: String,
    /// Blank means no link; the key is then omitted from the file.
    pub link: String,
    pub featured: bool,
}

impl NewsItemDraft {
    fn into_item(self) -> NewsItem {
        NewsItem {
            date: self.date,
            title: self.title,
            description: self.description,
            category: self.category,
            link: non_blank(&self.link),
            featured: self.featured,
            ..NewsItem::default()
        }
    }
}

/// Raw edit responses, one per prompted field. Blank means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsItemEdit {
    pub date: String,
    pub title: String,
    pub description: String,
    pub link: String,
    /// Only an explicit yes/no answer changes the flag.
    pub featured: String,
}

impl NewsItemEdit {
    /// Applies the responses to `item` in place.
    pub fn apply(&self, item: &mut NewsItem) {
        replace_if_given(&mut item.date, &self.date);
        replace_if_given(&mut item.title, &self.title);
        replace_if_given(&mut item.description, &self.description);
        // Blank clears the link instead of keeping it.
        item.link = non_blank(&self.link);
        if let Some(featured) = parse_yes_no(&self.featured) {
            item.featured = featured;
        }
    }
}

/// One row of the date-sorted listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItemSummary {
    pub date: String,
    pub title: String,
    pub featured: bool,
    /// Category display name, or the raw category name when unknown.
    pub category: String,
    /// First `SUMMARY_DESCRIPTION_CHARS` characters of the description.
    pub description: String,
    pub link: Option<String>,
}

/// Resolves the date typed for a new item.
///
/// Accepts `today` (any case) or a `YYYY-MM-DD` string. Returns `None` when
/// the input should be asked for again.
pub fn resolve_date(input: &str, today: NaiveDate) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return Some(today.format("%Y-%m-%d").to_string());
    }
    if ISO_DATE_RE.is_match(trimmed) {
        return Some(trimmed.to_string());
    }
    None
}

/// Local calendar date used for `today`.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// News service facade owning the live news document.
pub struct NewsService<R: DocumentRepository<NewsDocument>> {
    repo: R,
    document: NewsDocument,
}

impl<R: DocumentRepository<NewsDocument>> NewsService<R> {
    /// Loads the document through `repo` and takes ownership of both.
    pub fn open(repo: R) -> RepoResult<Self> {
        let document = repo.load()?;
        Ok(Self { repo, document })
    }

    /// Wraps an already loaded document.
    pub fn with_document(repo: R, document: NewsDocument) -> Self {
        Self { repo, document }
    }

    pub fn document(&self) -> &NewsDocument {
        &self.document
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.document.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.document.categories
    }

    /// Appends a new item built from `draft`.
    pub fn add_item(&mut self, draft: NewsItemDraft) -> &NewsItem {
        self.document.items.push(draft.into_item());
        info!(
            "event=news_item_add module=service status=ok items={}",
            self.document.items.len()
        );
        let last = self.document.items.len() - 1;
        &self.document.items[last]
    }

    /// Returns the category at `index`, for filing a new item.
    pub fn category_at(&self, index: usize) -> ServiceResult<&Category> {
        if self.document.categories.is_empty() {
            return Err(ServiceError::NoCategories);
        }
        let index = check_index(index, self.document.categories.len())?;
        Ok(&self.document.categories[index])
    }

    /// Applies `edit` to the item at `index`.
    pub fn edit_item(&mut self, index: usize, edit: &NewsItemEdit) -> ServiceResult<&NewsItem> {
        let index = check_index(index, self.document.items.len())?;
        let item = &mut self.document.items[index];
        edit.apply(item);
        info!("event=news_item_edit module=service status=ok index={index}");
        Ok(item)
    }

    /// Removes and returns the item at `index`; later items shift down.
    pub fn remove_item(&mut self, index: usize) -> ServiceResult<NewsItem> {
        let index = check_index(index, self.document.items.len())?;
        let removed = self.document.items.remove(index);
        info!(
            "event=news_item_remove module=service status=ok index={index} items={}",
            self.document.items.len()
        );
        Ok(removed)
    }

    /// Lists every item newest first.
    ///
    /// Dates compare as strings; items with equal dates keep stored order.
    pub fn view_items(&self) -> Vec<NewsItemSummary> {
        let mut sorted: Vec<&NewsItem> = self.document.items.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        sorted
            .into_iter()
            .map(|item| NewsItemSummary {
                date: item.date.clone(),
                title: item.title.clone(),
                featured: item.featured,
                category: self
                    .document
                    .category_display_name(&item.category)
                    .to_string(),
                description: excerpt(&item.description, SUMMARY_DESCRIPTION_CHARS),
                link: item.link.clone().filter(|link| !link.is_empty()),
            })
            .collect()
    }

    /// Appends a category. Names are not checked for duplicates.
    pub fn add_category(&mut self, category: Category) -> &Category {
        self.document.categories.push(category);
        info!(
            "event=news_category_add module=service status=ok categories={}",
            self.document.categories.len()
        );
        let last = self.document.categories.len() - 1;
        &self.document.categories[last]
    }

    /// Serialized form of the live document, as `save` would write it.
    pub fn render(&self) -> RepoResult<String> {
        self.repo.render(&self.document)
    }

    /// Writes the live document to the backing file.
    pub fn save(&self) -> RepoResult<()> {
        self.repo.save(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_date, NewsItemEdit};
    use crate::model::news::NewsItem;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn resolve_date_expands_today() {
        assert_eq!(resolve_date("TODAY", today()).as_deref(), Some("2025-03-09"));
    }

    #[test]
    fn resolve_date_accepts_iso_shape_only() {
        assert_eq!(
            resolve_date(" 2024-01-31 ", today()).as_deref(),
            Some("2024-01-31")
        );
        assert_eq!(resolve_date("2024-1-31", today()), None);
        assert_eq!(resolve_date("31/01/2024", today()), None);
        assert_eq!(resolve_date("٢٠٢٤-٠١-٠١", today()), None);
        assert_eq!(resolve_date("", today()), None);
    }

    #[test]
    fn featured_changes_only_on_explicit_answer() {
        let mut item = NewsItem {
            featured: true,
            ..NewsItem::default()
        };

        NewsItemEdit {
            featured: "whatever".to_string(),
            ..NewsItemEdit::default()
        }
        .apply(&mut item);
        assert!(item.featured);

        NewsItemEdit {
            featured: "n".to_string(),
            ..NewsItemEdit::default()
        }
        .apply(&mut item);
        assert!(!item.featured);
    }

    #[test]
    fn blank_link_response_removes_existing_link() {
        let mut item = NewsItem {
            title: "Talk".to_string(),
            link: Some("https://example.org".to_string()),
            ..NewsItem::default()
        };

        NewsItemEdit::default().apply(&mut item);
        assert_eq!(item.link, None);
        assert_eq!(item.title, "Talk");
    }
}
