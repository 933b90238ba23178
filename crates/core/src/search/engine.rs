//! The search engine: ranks catalog hits and records query history.

use std::sync::Arc;

use tracing::{debug, warn};

use super::matching::{fuzzy_match, match_score};
use super::types::{GenreMatch, PersonMatch, PersonRole, RankedResults, SearchView, TitleMatch};
use crate::catalog::{genre_label, Catalog};
use crate::history::{HistoryStore, SearchHistory, DEFAULT_HISTORY_VIEW_LIMIT};
use crate::metrics::{HISTORY_WRITE_FAILURES, SEARCHES_TOTAL, SEARCH_DURATION};

/// Searches one catalog and owns the search history for a session.
///
/// All operations are synchronous. Callers that share an engine across
/// tasks wrap it in a lock.
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    history: SearchHistory,
    store: Arc<dyn HistoryStore>,
    history_view_limit: usize,
}

impl SearchEngine {
    /// Create an engine, reading the stored history once.
    ///
    /// Unreadable or corrupt history is logged and treated as empty.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn HistoryStore>) -> Self {
        let history = match store.load() {
            Ok(entries) => SearchHistory::from_entries(entries),
            Err(e) => {
                warn!(error = %e, "Could not read search history, starting empty");
                SearchHistory::new()
            }
        };

        Self {
            catalog,
            history,
            store,
            history_view_limit: DEFAULT_HISTORY_VIEW_LIMIT,
        }
    }

    /// Set how many entries [`SearchEngine::query`] shows for blank input.
    pub fn with_history_view_limit(mut self, limit: usize) -> Self {
        self.history_view_limit = limit;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Rank catalog hits for `query` without touching history.
    ///
    /// Genres are unique by label: a category shared by many items yields a
    /// single genre hit, scored on its first matching item.
    pub fn rank(&self, query: &str) -> RankedResults {
        let query = query.trim();
        let mut results = RankedResults {
            query: query.to_string(),
            ..Default::default()
        };
        if query.is_empty() {
            return results;
        }

        for movie in self.catalog.items() {
            if fuzzy_match(&movie.title, query) {
                results.titles.push(TitleMatch {
                    movie: movie.clone(),
                    match_score: match_score(&movie.title, query),
                });
            }

            for person in &movie.cast {
                add_person(&mut results.people, person, PersonRole::Actor, query);
            }

            if let Some(director) = &movie.director {
                add_person(&mut results.people, director, PersonRole::Director, query);
            }

            if fuzzy_match(&movie.category, query) {
                let name = genre_label(&movie.category);
                if !results.genres.iter().any(|g| g.name == name) {
                    results.genres.push(GenreMatch {
                        name,
                        category: movie.category.clone(),
                        match_score: match_score(&movie.category, query),
                    });
                }
            }
        }

        // sort_by is stable: equal scores keep catalog order.
        results
            .titles
            .sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results
            .people
            .sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results
            .genres
            .sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        results
    }

    /// Run a search and record the query in history.
    ///
    /// Returns `None` without touching history when the trimmed query is
    /// empty; the caller should show history instead.
    pub fn search(&mut self, query: &str) -> Option<RankedResults> {
        let query = query.trim();
        if query.is_empty() {
            SEARCHES_TOTAL.with_label_values(&["skipped"]).inc();
            return None;
        }

        self.add_to_history(query);

        let timer = SEARCH_DURATION.start_timer();
        let results = self.rank(query);
        timer.observe_duration();

        let outcome = if results.is_empty() {
            "no_results"
        } else {
            "results"
        };
        SEARCHES_TOTAL.with_label_values(&[outcome]).inc();
        debug!(
            query = query,
            titles = results.titles.len(),
            people = results.people.len(),
            genres = results.genres.len(),
            "Search completed"
        );

        Some(results)
    }

    /// Decide what the search panel shows for raw `input`.
    pub fn query(&mut self, input: &str) -> SearchView {
        match self.search(input) {
            None => SearchView::History {
                entries: self.list_history(self.history_view_limit),
            },
            Some(results) if results.is_empty() => SearchView::no_results(results.query),
            Some(results) => SearchView::Results(results),
        }
    }

    /// Move `query` to the front of history and persist.
    pub fn add_to_history(&mut self, query: &str) {
        if self.history.push(query) {
            self.persist();
        }
    }

    /// Remove `query` from history and persist.
    pub fn remove_from_history(&mut self, query: &str) {
        self.history.remove(query);
        self.persist();
    }

    /// Forget all history and persist.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
    }

    /// Up to `limit` past queries, most recent first.
    pub fn list_history(&self, limit: usize) -> Vec<String> {
        self.history.recent(limit).to_vec()
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.history.entries()) {
            warn!(error = %e, "Failed to persist search history");
            HISTORY_WRITE_FAILURES.inc();
        }
    }
}

/// Add a person hit unless someone with the same name is already listed.
fn add_person(people: &mut Vec<PersonMatch>, name: &str, role: PersonRole, query: &str) {
    if !fuzzy_match(name, query) || people.iter().any(|p| p.name == name) {
        return;
    }
    people.push(PersonMatch {
        name: name.to_string(),
        role,
        match_score: match_score(name, query),
    });
}
