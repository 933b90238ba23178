//! Text matching and scoring used to rank search hits.
//!
//! Both functions compare case-insensitively. The tokenized branches do not
//! require query tokens to be adjacent or in order.

/// Score for an exact (case-insensitive) match.
pub const SCORE_EXACT: f64 = 100.0;
/// Score when the text starts with the query.
pub const SCORE_PREFIX: f64 = 90.0;
/// Score when the text contains the query.
pub const SCORE_CONTAINS: f64 = 80.0;
/// Ceiling for partial token matches.
pub const SCORE_TOKENS_MAX: f64 = 70.0;

/// Whether `text` matches `query`.
///
/// True when the text contains the whole query, or when every whitespace
/// separated query token appears somewhere in the text.
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    if text.is_empty() || query.is_empty() {
        return false;
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text.contains(&query) {
        return true;
    }

    let mut tokens = query.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|token| text.contains(token))
}

/// Relevance of `text` for `query` in `[0, 100]`.
///
/// First rule that applies: exact match (100), prefix (90), substring (80),
/// otherwise the share of query tokens found inside some text token, scaled
/// to 70.
pub fn match_score(text: &str, query: &str) -> f64 {
    if text.is_empty() || query.is_empty() {
        return 0.0;
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text == query {
        return SCORE_EXACT;
    }
    if text.starts_with(&query) {
        return SCORE_PREFIX;
    }
    if text.contains(&query) {
        return SCORE_CONTAINS;
    }

    let text_tokens: Vec<&str> = text.split_whitespace().collect();
    let query_tokens: Vec<&str> = query.split_whitespace().collect();
    if query_tokens.is_empty() {
        return 0.0;
    }

    let matched = query_tokens
        .iter()
        .filter(|q| text_tokens.iter().any(|t| t.contains(*q)))
        .count();

    matched as f64 / query_tokens.len() as f64 * SCORE_TOKENS_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match_substring() {
        assert!(fuzzy_match("The Matrix", "matrix"));
        assert!(fuzzy_match("The Matrix", "MATRIX"));
        assert!(fuzzy_match("The Matrix", "e m"));
    }

    #[test]
    fn test_fuzzy_match_tokens_any_order() {
        assert!(fuzzy_match("The Matrix", "mat rix"));
        assert!(fuzzy_match("The Matrix", "matrix the"));
        assert!(fuzzy_match("Spider-Man: No Way Home", "home spider"));
        assert!(!fuzzy_match("The Matrix", "matrix reloaded"));
    }

    #[test]
    fn test_fuzzy_match_empty_inputs() {
        assert!(!fuzzy_match("", "x"));
        assert!(!fuzzy_match("The Matrix", ""));
        assert!(!fuzzy_match("", ""));
        assert!(!fuzzy_match("The Matrix", "   "));
    }

    #[test]
    fn test_match_score_rules() {
        assert_eq!(match_score("Dune", "Dune"), 100.0);
        assert_eq!(match_score("dune", "DUNE"), 100.0);
        assert_eq!(match_score("Dune Part Two", "Dune"), 90.0);
        assert_eq!(match_score("The Dune Saga", "Dune"), 80.0);
        assert_eq!(match_score("Dune", "Dune Two"), 35.0);
    }

    #[test]
    fn test_match_score_token_partial_credit() {
        // "rix" is inside the token "matrix", "mat" too.
        assert_eq!(match_score("The Matrix", "mat rix"), 70.0);
        let third = match_score("Keanu Reeves", "keanu neo trinity");
        assert!((third - 70.0 / 3.0).abs() < 1e-9);
        assert_eq!(match_score("Keanu Reeves", "zendaya"), 0.0);
    }

    #[test]
    fn test_match_score_empty_inputs() {
        assert_eq!(match_score("", "dune"), 0.0);
        assert_eq!(match_score("Dune", ""), 0.0);
        assert_eq!(match_score("Dune", "  "), 0.0);
    }

    #[test]
    fn test_match_score_in_range() {
        let cases = [
            ("The Power of the Dog", "dog power"),
            ("Don't Look Up", "look"),
            ("Jennifer Lawrence", "law jen x"),
            ("Zendaya", "zendaya"),
        ];
        for (text, query) in cases {
            let score = match_score(text, query);
            assert!((0.0..=100.0).contains(&score), "{text} / {query}: {score}");
        }
    }
}
