//! Query tokenization
//!
//! A query is split on whitespace into an ordered list of terms. Empty tokens
//! are dropped, so a blank query yields no terms at all.

/// The terms extracted from a raw query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Terms in the order they appear
    pub terms: Vec<String>,
}

impl Query {
    /// Tokenize a raw query string
    pub fn parse(raw: &str) -> Self {
        Self {
            terms: tokenize(raw),
        }
    }

    /// True when the query has no terms to search for
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Split a query into non-empty whitespace-delimited terms
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
