//! Catalog search.
//!
//! Matches a query against titles, cast, directors, and genres, and ranks
//! each group by [`match_score`].

mod engine;
mod matching;
mod types;

pub use engine::SearchEngine;
pub use matching::{
    fuzzy_match, match_score, SCORE_CONTAINS, SCORE_EXACT, SCORE_PREFIX, SCORE_TOKENS_MAX,
};
pub use types::*;
