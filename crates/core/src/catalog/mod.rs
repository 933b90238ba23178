//! Movie catalog - the immutable list of movies the page browses and searches.
//!
//! The catalog is loaded once at startup from a JSON document and shared
//! read-only for the lifetime of the process.

mod sample;
mod source;
mod types;

pub use source::{
    load_catalog, source_for, try_load_catalog, CatalogSource, FileCatalogSource,
    HttpCatalogSource,
};
pub use types::*;

use serde_json::Value;

/// Maximum items per landing page row.
pub const SECTION_LIMIT: usize = 10;

/// Maximum items in the hero carousel.
pub const FEATURED_LIMIT: usize = 5;

/// Maximum "more like this" suggestions on a detail view.
pub const SIMILAR_LIMIT: usize = 6;

/// Ordered, immutable collection of catalog items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Create a catalog that keeps the given item order.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog document.
    ///
    /// Accepts either a bare array of items or an object carrying a `movies`
    /// array. Item order is preserved.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let list = match value {
            Value::Array(list) => list,
            Value::Object(mut map) => match map.remove("movies") {
                Some(Value::Array(list)) => list,
                _ => return Err(CatalogError::InvalidShape),
            },
            _ => return Err(CatalogError::InvalidShape),
        };

        let items = serde_json::from_value(Value::Array(list))
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { items })
    }

    /// The built-in catalog served when the real one cannot be loaded.
    pub fn sample() -> Self {
        Self::new(sample::sample_items()).newest_first()
    }

    /// Reorder by id, highest first. Items with equal ids keep their order.
    pub fn newest_first(mut self) -> Self {
        self.items.sort_by(|a, b| b.id.cmp(&a.id));
        self
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items visible under a category tab.
    pub fn browse(&self, filter: &BrowseFilter) -> Vec<&CatalogItem> {
        let mut items: Vec<&CatalogItem> = match filter {
            BrowseFilter::Top10 => self.items.iter().filter(|m| m.top10).collect(),
            BrowseFilter::Category(category) => self
                .items
                .iter()
                .filter(|m| &m.category == category)
                .collect(),
            BrowseFilter::All | BrowseFilter::New | BrowseFilter::Popular => {
                self.items.iter().collect()
            }
        };

        match filter {
            BrowseFilter::New => items.sort_by_key(|m| std::cmp::Reverse(m.year_value())),
            BrowseFilter::Popular => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            _ => {}
        }

        items
    }

    /// Landing page rows for the current category tab.
    pub fn sections(&self, filter: &BrowseFilter) -> Sections {
        let visible = self.browse(filter);
        let row = |keep: fn(&CatalogItem) -> bool| -> Vec<CatalogItem> {
            visible
                .iter()
                .filter(|m| keep(m))
                .take(SECTION_LIMIT)
                .map(|m| (*m).clone())
                .collect()
        };

        Sections {
            new_releases: row(is_new_release),
            popular: row(is_popular),
            top10: row(is_top10),
            action: row(is_action),
        }
    }

    /// Every item of one landing page row, uncapped and ignoring the tab.
    ///
    /// Rows are named like the [`Sections`] fields (`new_releases`,
    /// `popular`, `top10`, `action`); the page's element ids such as
    /// `new-releases` are accepted too. Unknown names list the whole catalog.
    pub fn section(&self, name: &str) -> Vec<&CatalogItem> {
        match section_filter(name) {
            Some(keep) => self.items.iter().filter(|m| keep(m)).collect(),
            None => self.items.iter().collect(),
        }
    }

    /// Hero carousel slides.
    ///
    /// The last flagged-featured items in reverse order, or the last items of
    /// the catalog when nothing is flagged.
    pub fn featured(&self) -> Vec<&CatalogItem> {
        let flagged: Vec<&CatalogItem> = self.items.iter().filter(|m| m.featured).collect();
        let pool = if flagged.is_empty() {
            self.items.iter().collect()
        } else {
            flagged
        };

        pool.into_iter().rev().take(FEATURED_LIMIT).collect()
    }

    /// Items in the same category as `item`, excluding titles equal to it.
    pub fn similar(&self, item: &CatalogItem) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|m| m.category == item.category && m.title != item.title)
            .take(SIMILAR_LIMIT)
            .collect()
    }
}

fn is_new_release(item: &CatalogItem) -> bool {
    item.is_new_release
}

fn is_popular(item: &CatalogItem) -> bool {
    item.is_popular
}

fn is_top10(item: &CatalogItem) -> bool {
    item.top10
}

fn is_action(item: &CatalogItem) -> bool {
    item.category == "action"
}

/// Display title for a landing page row.
pub fn section_title(name: &str) -> &'static str {
    match name.trim().replace('-', "_").as_str() {
        "new_releases" => "New Releases For You",
        "popular" | "popular_movies" => "Popular Movies",
        "top10" | "top_movies" => "Top 10 Movies This Week",
        "action" | "action_movies" => "Action Movies",
        _ => "All Movies",
    }
}

fn section_filter(name: &str) -> Option<fn(&CatalogItem) -> bool> {
    match name.trim().replace('-', "_").as_str() {
        "new_releases" => Some(is_new_release),
        "popular" | "popular_movies" => Some(is_popular),
        "top10" | "top_movies" => Some(is_top10),
        "action" | "action_movies" => Some(is_action),
        _ => None,
    }
}
