// src/lib.rs
// =============================================================================
// Library root for js-recon.
//
// The binary (src/main.rs) is a thin wrapper around these modules:
// - analysis: extraction, scope filters, keyword matching, aggregation
// - fetch: downloading pages and scripts
// - crawl: the per-target pipeline
// - config: settings and input lists
// - report: terminal output and result files
// - logging: tracing setup
// =============================================================================

pub mod analysis;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod fetch;
pub mod logging;
pub mod report;
