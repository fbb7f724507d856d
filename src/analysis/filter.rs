// src/analysis/filter.rs
// =============================================================================
// Scope filters: decide which extracted strings belong to the target.
//
// - Links are in scope when they mention the domain anywhere
// - Subdomains are in scope when they END with the domain
//
// Both filters also drop exact duplicates, keeping the first one seen and
// preserving the original order.
//
// An empty domain (the target URL did not parse) would match everything as
// a substring or suffix, so instead both filters keep nothing.
// =============================================================================

use std::collections::HashSet;

pub fn filter_links(links: &[String], domain: &str) -> Vec<String> {
    retain_unique(links, domain, |link| link.contains(domain))
}

pub fn filter_subdomains(subdomains: &[String], domain: &str) -> Vec<String> {
    retain_unique(subdomains, domain, |sub| sub.ends_with(domain))
}

fn retain_unique<F>(items: &[String], domain: &str, in_scope: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    if domain.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| in_scope(item.as_str()))
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}
