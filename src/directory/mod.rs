// src/directory/mod.rs
pub mod fetcher;
pub mod filter;
pub mod normalize;
pub mod resolver;

pub use fetcher::{Fetch, HttpFetcher};
pub use resolver::Resolver;
