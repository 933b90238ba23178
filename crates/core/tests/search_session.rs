//! Search session tests against the SQLite history store.
//!
//! These tests exercise the engine the way a page session does: load the
//! catalog, search, restart, and check that history survived.

use std::path::Path;
use std::sync::Arc;

use cinestream_core::testing::fixtures;
use cinestream_core::{
    Catalog, HistoryStore, PersonRole, SearchEngine, SearchView, SqliteHistoryStore,
    MAX_HISTORY_ENTRIES,
};
use tempfile::TempDir;

fn open_engine(path: &Path, catalog: &Arc<Catalog>) -> SearchEngine {
    let store = Arc::new(SqliteHistoryStore::new(path).expect("Failed to open history store"));
    SearchEngine::new(Arc::clone(catalog), store)
}

fn assert_sorted(results: &cinestream_core::RankedResults) {
    assert!(results
        .titles
        .windows(2)
        .all(|w| w[0].match_score >= w[1].match_score));
    assert!(results
        .people
        .windows(2)
        .all(|w| w[0].match_score >= w[1].match_score));
    assert!(results
        .genres
        .windows(2)
        .all(|w| w[0].match_score >= w[1].match_score));
}

// =============================================================================
// History persistence
// =============================================================================

#[test]
fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("history.db");
    let catalog = Arc::new(fixtures::catalog());

    {
        let mut engine = open_engine(&db, &catalog);
        engine.search("dune");
        engine.search("arrival");
        engine.search("dune");
    }

    let engine = open_engine(&db, &catalog);
    assert_eq!(engine.list_history(5), vec!["dune", "arrival"]);
}

#[test]
fn test_history_cap_persisted() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("history.db");
    let catalog = Arc::new(fixtures::catalog());

    {
        let mut engine = open_engine(&db, &catalog);
        for i in 0..25 {
            engine.search(&format!("query {i}"));
        }
    }

    let store = SqliteHistoryStore::new(&db).unwrap();
    let stored = store.load().unwrap();
    assert_eq!(stored.len(), MAX_HISTORY_ENTRIES);
    assert_eq!(stored[0], "query 24");
}

#[test]
fn test_corrupt_history_recovers() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("history.db");
    SqliteHistoryStore::new(&db)
        .unwrap()
        .put_raw("[\"unterminated")
        .unwrap();

    let catalog = Arc::new(fixtures::catalog());
    let mut engine = open_engine(&db, &catalog);
    assert!(engine.history().is_empty());

    engine.search("dune");
    drop(engine);

    let engine = open_engine(&db, &catalog);
    assert_eq!(engine.list_history(5), vec!["dune"]);
}

#[test]
fn test_clear_then_search() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("history.db");
    let catalog = Arc::new(fixtures::catalog());

    let mut engine = open_engine(&db, &catalog);
    engine.search("dune");
    engine.search("zendaya");
    engine.clear_history();
    assert!(engine.list_history(5).is_empty());

    engine.search("arrival");
    drop(engine);

    let engine = open_engine(&db, &catalog);
    assert_eq!(engine.list_history(10), vec!["arrival"]);
}

// =============================================================================
// Ranking over a realistic catalog
// =============================================================================

#[test]
fn test_director_credited_once() {
    let catalog = Arc::new(fixtures::catalog());
    let dir = TempDir::new().unwrap();
    let mut engine = open_engine(&dir.path().join("h.db"), &catalog);

    let results = engine.search("villeneuve").unwrap();
    assert_eq!(results.people.len(), 1);
    assert_eq!(results.people[0].role, PersonRole::Director);
    assert!(results.titles.is_empty());
}

#[test]
fn test_shared_cast_member_deduplicated() {
    let catalog = Arc::new(fixtures::catalog());
    let dir = TempDir::new().unwrap();
    let mut engine = open_engine(&dir.path().join("h.db"), &catalog);

    let results = engine.search("chalamet").unwrap();
    let names: Vec<&str> = results.people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Timothée Chalamet"]);
}

#[test]
fn test_results_sorted_for_many_queries() {
    let catalog = Arc::new(Catalog::sample());
    let dir = TempDir::new().unwrap();
    let mut engine = open_engine(&dir.path().join("h.db"), &catalog);

    for query in [
        "the", "a", "man", "dune", "benedict", "action", "dr", "e", "no way", "look up",
    ] {
        let results = engine.search(query).unwrap();
        assert_sorted(&results);
    }
}

#[test]
fn test_sample_catalog_views() {
    let catalog = Arc::new(Catalog::sample());
    let dir = TempDir::new().unwrap();
    let mut engine = open_engine(&dir.path().join("h.db"), &catalog);

    match engine.query("cumberbatch") {
        SearchView::Results(results) => {
            assert_eq!(results.people.len(), 1);
            assert_eq!(results.people[0].name, "Benedict Cumberbatch");
            assert_eq!(results.people[0].role, PersonRole::Actor);
        }
        other => panic!("unexpected view: {other:?}"),
    }

    match engine.query("comedy") {
        SearchView::Results(results) => {
            assert_eq!(results.genres.len(), 1);
            assert_eq!(results.genres[0].name, "Comedy");
        }
        other => panic!("unexpected view: {other:?}"),
    }

    assert!(matches!(
        engine.query("no such movie anywhere"),
        SearchView::NoResults { .. }
    ));

    match engine.query("   ") {
        SearchView::History { entries } => {
            assert_eq!(
                entries,
                vec!["no such movie anywhere", "comedy", "cumberbatch"]
            );
        }
        other => panic!("unexpected view: {other:?}"),
    }
}
