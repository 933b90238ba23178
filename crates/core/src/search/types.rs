//! Types for ranked search results.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Genre chips offered when a search finds nothing.
pub const NO_RESULT_SUGGESTIONS: [&str; 4] = ["Action", "Comedy", "Drama", "Thriller"];

/// A movie whose title matched the query.
#[derive(Debug, Clone, Serialize)]
pub struct TitleMatch {
    pub movie: CatalogItem,
    pub match_score: f64,
}

/// How a person is credited on the first movie they matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    Actor,
    Director,
}

/// A cast member or director whose name matched the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonMatch {
    pub name: String,
    pub role: PersonRole,
    pub match_score: f64,
}

/// A genre whose category key matched the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreMatch {
    /// Display label ("Action").
    pub name: String,
    /// Raw category key ("action").
    pub category: String,
    pub match_score: f64,
}

/// Hits for one query, grouped by kind.
///
/// Each list is sorted by `match_score` descending; equal scores keep
/// catalog order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankedResults {
    pub query: String,
    pub titles: Vec<TitleMatch>,
    pub people: Vec<PersonMatch>,
    pub genres: Vec<GenreMatch>,
}

impl RankedResults {
    /// True when no list has any hit.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.people.is_empty() && self.genres.is_empty()
    }

    /// Hit count across all lists.
    pub fn total(&self) -> usize {
        self.titles.len() + self.people.len() + self.genres.len()
    }
}

/// What the search panel should display for a given input.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchView {
    /// Input was blank: show recent searches.
    History { entries: Vec<String> },
    /// The query matched nothing.
    NoResults {
        query: String,
        suggestions: Vec<String>,
    },
    /// Ranked hits.
    Results(RankedResults),
}

impl SearchView {
    pub fn no_results(query: impl Into<String>) -> Self {
        Self::NoResults {
            query: query.into(),
            suggestions: NO_RESULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
