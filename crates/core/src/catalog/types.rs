//! Types for the movie catalog.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A single movie entry from the catalog document.
///
/// Field names follow the front-end's camelCase JSON so items can be served
/// back verbatim. Fields this type does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    pub title: String,
    /// Release year. Catalogs write this both as `"2021"` and `2021`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default, deserialize_with = "f64_from_string_or_number")]
    pub rating: f64,
    /// Lowercase genre key (e.g. "action").
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub awards: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new_release: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub top10: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CatalogItem {
    /// Create an item with only a title and category set.
    pub fn new(id: u64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: String::new(),
            rating: 0.0,
            category: category.into(),
            director: None,
            cast: Vec::new(),
            description: None,
            certification: None,
            duration: None,
            language: None,
            awards: Vec::new(),
            front_image: None,
            back_image: None,
            watch_link: None,
            featured: false,
            is_new_release: false,
            is_popular: false,
            top10: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Display label of this item's category.
    pub fn genre(&self) -> String {
        genre_label(&self.category)
    }

    /// Numeric year for ordering; unparseable years sort as 0.
    pub fn year_value(&self) -> i32 {
        self.year.trim().parse().unwrap_or(0)
    }
}

/// Upper-case the first character of a category key ("sci-fi" -> "Sci-fi").
pub fn genre_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null => String::new(),
    })
}

// A loose field must not reject the whole catalog document. Unparseable
// numbers read as 0 and null lists read as empty.

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(u64),
    Float(f64),
    Text(String),
    Null,
}

fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Int(n) => n,
        LooseNumber::Float(f) if f >= 0.0 => f as u64,
        LooseNumber::Text(s) => s.trim().parse().unwrap_or(0),
        LooseNumber::Float(_) | LooseNumber::Null => 0,
    })
}

fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Int(n) => n as f64,
        LooseNumber::Float(f) => f,
        LooseNumber::Text(s) => s.trim().parse().unwrap_or(0.0),
        LooseNumber::Null => 0.0,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Filter applied when browsing the catalog by category tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrowseFilter {
    /// Every item in catalog order.
    #[default]
    All,
    /// Every item, newest release year first.
    New,
    /// Every item, highest rating first.
    Popular,
    /// Items flagged as top 10.
    Top10,
    /// Items whose category equals the given key.
    Category(String),
}

impl BrowseFilter {
    /// Parse a category tab key. Unknown keys become a category filter.
    pub fn parse(key: &str) -> Self {
        match key.trim() {
            "" | "all" => Self::All,
            "new" => Self::New,
            "popular" => Self::Popular,
            "top10" => Self::Top10,
            other => Self::Category(other.to_string()),
        }
    }
}

/// The browse rows shown on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct Sections {
    pub new_releases: Vec<CatalogItem>,
    pub popular: Vec<CatalogItem>,
    pub top10: Vec<CatalogItem>,
    pub action: Vec<CatalogItem>,
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Failed to fetch catalog: {0}")]
    Http(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog structure: expected an array or an object with a `movies` array")]
    InvalidShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_front_end_item() {
        let json = r##"{
            "id": 2,
            "title": "Dune",
            "year": "2021",
            "category": "action",
            "rating": 8.1,
            "frontImage": "front.jpg",
            "watchLink": "#",
            "isNewRelease": true,
            "top10": true,
            "director": "Denis Villeneuve",
            "cast": ["Timothée Chalamet", "Rebecca Ferguson"]
        }"##;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 2);
        assert_eq!(item.year, "2021");
        assert_eq!(item.front_image.as_deref(), Some("front.jpg"));
        assert!(item.is_new_release);
        assert!(!item.is_popular);
        assert_eq!(item.cast.len(), 2);
    }

    #[test]
    fn test_numeric_year_is_stringified() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"title": "Heat", "year": 1995}"#).unwrap();
        assert_eq!(item.year, "1995");
        assert_eq!(item.year_value(), 1995);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{"title": "Heat", "category": "crime", "studio": "Warner"}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.extra["studio"], "Warner");

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["studio"], "Warner");
        assert!(out.get("director").is_none());
    }

    #[test]
    fn test_loose_numbers() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id": "7", "title": "Heat", "rating": "8.3"}"#).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.rating, 8.3);

        let item: CatalogItem =
            serde_json::from_str(r#"{"id": "n/a", "title": "Heat", "rating": null}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.rating, 0.0);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"title": "Heat", "cast": null, "awards": null}"#).unwrap();
        assert!(item.cast.is_empty());
        assert!(item.awards.is_empty());
    }

    #[test]
    fn test_genre_label() {
        assert_eq!(genre_label("action"), "Action");
        assert_eq!(genre_label("sci-fi"), "Sci-fi");
        assert_eq!(genre_label(""), "");
        assert_eq!(genre_label("épopée"), "Épopée");
    }

    #[test]
    fn test_browse_filter_parse() {
        assert_eq!(BrowseFilter::parse("all"), BrowseFilter::All);
        assert_eq!(BrowseFilter::parse(""), BrowseFilter::All);
        assert_eq!(BrowseFilter::parse("new"), BrowseFilter::New);
        assert_eq!(BrowseFilter::parse("popular"), BrowseFilter::Popular);
        assert_eq!(BrowseFilter::parse("top10"), BrowseFilter::Top10);
        assert_eq!(
            BrowseFilter::parse("drama"),
            BrowseFilter::Category("drama".to_string())
        );
    }
}
