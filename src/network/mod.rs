//! HTTP networking module
//!
//! Provides the shared HTTP client used by every search provider.

mod client;

pub use client::HttpClient;
