// src/crawl/mod.rs
// =============================================================================
// This module handles visiting a target and its scripts.
//
// Features:
// - Fetches the target page and every script it declares
// - Strictly sequential: one request at a time, one target at a time
// - Exactly one hop (page -> scripts), no recursive crawling
// - A failed request only skips that page or script
//
// Rust concepts:
// - Generics: Pipeline<F> works with any Fetcher
// - Enums: TargetOutcome describes how a target went
// =============================================================================

mod pipeline;

pub use pipeline::{Pipeline, TargetOutcome};
