//! Error types for provider calls and aggregation

use thiserror::Error;

/// Why a single provider call failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderErrorKind {
    /// The source could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client deadline
    #[error("request timed out")]
    Timeout,

    /// The source answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body could not be read as a hit count
    #[error("invalid payload: {0}")]
    Payload(String),

    /// The request could not be built
    #[error("invalid request: {0}")]
    Request(String),
}

/// A provider failed to produce a hit count for a term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{provider} query for '{term}' failed: {kind}")]
pub struct ProviderError {
    pub provider: String,
    pub term: String,
    #[source]
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(
        provider: impl Into<String>,
        term: impl Into<String>,
        kind: ProviderErrorKind,
    ) -> Self {
        Self {
            provider: provider.into(),
            term: term.into(),
            kind,
        }
    }
}

/// The registry has no provider under the requested name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search provider: {name}")]
pub struct UnknownProviderError {
    pub name: String,
}

impl UnknownProviderError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Failure that aborts an aggregation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error(transparent)]
    UnknownProvider(#[from] UnknownProviderError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Registry construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate search provider: {name}")]
    DuplicateProvider { name: String },
}
