//! Testing utilities and mock implementations.
//!
//! This module provides catalog fixtures and a mock history store, allowing
//! engine and API tests to run without files or a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinestream_core::testing::{fixtures, MockHistoryStore};
//!
//! let catalog = Arc::new(fixtures::catalog());
//! let store = Arc::new(MockHistoryStore::new());
//! let mut engine = SearchEngine::new(catalog, store.clone());
//! ```

mod mock_history_store;

pub use mock_history_store::MockHistoryStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Catalog, CatalogItem};

    /// Create a movie with reasonable defaults.
    pub fn movie(id: u64, title: &str, category: &str) -> CatalogItem {
        let mut item = CatalogItem::new(id, title, category);
        item.year = "2020".to_string();
        item.rating = 7.0;
        item.watch_link = Some("#".to_string());
        item
    }

    /// Create a movie with credits.
    pub fn credited_movie(
        id: u64,
        title: &str,
        category: &str,
        director: &str,
        cast: &[&str],
    ) -> CatalogItem {
        let mut item = movie(id, title, category);
        item.director = Some(director.to_string());
        item.cast = cast.iter().map(|s| s.to_string()).collect();
        item
    }

    /// A small catalog covering every match kind, in catalog order.
    pub fn catalog() -> Catalog {
        let mut dune = credited_movie(
            3,
            "Dune",
            "action",
            "Denis Villeneuve",
            &["Timothée Chalamet", "Rebecca Ferguson"],
        );
        dune.featured = true;
        dune.top10 = true;
        dune.is_new_release = true;
        dune.year = "2021".to_string();
        dune.rating = 8.1;

        let mut dune_two = credited_movie(
            2,
            "Dune Part Two",
            "action",
            "Denis Villeneuve",
            &["Timothée Chalamet", "Zendaya"],
        );
        dune_two.is_popular = true;
        dune_two.year = "2024".to_string();
        dune_two.rating = 8.6;

        let mut arrival = credited_movie(
            1,
            "Arrival",
            "drama",
            "Denis Villeneuve",
            &["Amy Adams", "Jeremy Renner"],
        );
        arrival.year = "2016".to_string();
        arrival.rating = 7.9;

        Catalog::new(vec![dune, dune_two, arrival])
    }
}
