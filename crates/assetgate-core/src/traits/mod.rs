//! Core traits defined in `assetgate-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
