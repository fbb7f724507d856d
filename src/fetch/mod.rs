// src/fetch/mod.rs
// =============================================================================
// Fetching pages and scripts.
//
// The pipeline only depends on the Fetcher trait. HttpFetcher is the real
// implementation; tests plug in an in-memory one.
// =============================================================================

mod http;

pub use http::{FetchError, Fetcher, HttpFetcher};
