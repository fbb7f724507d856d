// src/analysis/mod.rs
// =============================================================================
// The extraction-and-classification core.
//
// Submodules:
// - domain: registrable domain + fragment stripping
// - scanner: the TextScanner capability and its regex implementation
// - extract: script, link and subdomain extractors
// - filter: scope filters (is this string about our target?)
// - sensitive: keyword matching against the wordlist
// - aggregate: merging, dedup and sorting into a ResultSet
//
// None of this touches the network or the filesystem.
// =============================================================================

mod aggregate;
mod domain;
mod extract;
mod filter;
mod scanner;
mod sensitive;

pub use aggregate::{dedup_sorted, ResultAccumulator, ResultSet};
pub use domain::{canonicalize, registrable_domain, Target};
pub use extract::Extractors;
pub use filter::{filter_links, filter_subdomains};
pub use scanner::{RegexScanner, TextScanner};
pub use sensitive::{find_sensitive, SensitiveFinding, Wordlist};
