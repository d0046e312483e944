use serde::Serialize;

use crate::category::canonical_category;
use crate::dataset::Dataset;
use crate::element::ElementRecord;

pub const SUGGESTION_LIMIT: usize = 5;
pub const SUGGESTION_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Empty,
    CategoryHighlight {
        category: &'static str,
        symbols: Vec<String>,
    },
    SingleMatch {
        symbol: String,
    },
    MultipleMatches {
        symbols: Vec<String>,
    },
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub symbol: String,
    pub name: String,
    pub label: String,
}

pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Category first, then an exact symbol/name hit, then prefix matches.
pub fn match_query(query: &str, dataset: &Dataset) -> MatchResult {
    let q = normalize(query);
    if q.is_empty() {
        return MatchResult::Empty;
    }

    if let Some(category) = canonical_category(&q) {
        let symbols = dataset
            .iter()
            .filter(|r| r.category_contains(category))
            .map(|r| r.symbol.clone())
            .collect();
        return MatchResult::CategoryHighlight { category, symbols };
    }

    if let Some(exact) = dataset.iter().find(|r| is_exact(r, &q)) {
        return MatchResult::SingleMatch {
            symbol: exact.symbol.clone(),
        };
    }

    let mut symbols: Vec<String> = dataset
        .iter()
        .filter(|r| is_prefix(r, &q))
        .map(|r| r.symbol.clone())
        .collect();
    match symbols.len() {
        0 => MatchResult::NoMatch,
        1 => MatchResult::SingleMatch {
            symbol: symbols.remove(0),
        },
        _ => MatchResult::MultipleMatches { symbols },
    }
}

pub fn suggest(query: &str, dataset: &Dataset) -> Vec<Suggestion> {
    let q = normalize(query);
    if q.chars().count() < SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    dataset
        .iter()
        .filter(|r| is_prefix(r, &q))
        .take(SUGGESTION_LIMIT)
        .map(|r| Suggestion {
            symbol: r.symbol.clone(),
            name: r.name.clone(),
            label: format!("{} ({})", r.name, r.symbol),
        })
        .collect()
}

fn is_exact(record: &ElementRecord, q: &str) -> bool {
    record.symbol.to_lowercase() == q || record.name.to_lowercase() == q
}

fn is_prefix(record: &ElementRecord, q: &str) -> bool {
    record.symbol.to_lowercase().starts_with(q) || record.name.to_lowercase().starts_with(q)
}
