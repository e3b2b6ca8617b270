//! Search provider module
//!
//! Defines the `SearchProvider` trait and the registry that resolves
//! provider names to instances.

mod http;
mod loader;
mod registry;
mod traits;

// Provider implementations
pub mod bing;
pub mod google;

pub use http::HttpProvider;
pub use loader::ProviderLoader;
pub use registry::ProviderRegistry;
pub use traits::*;
