// src/analysis/aggregate.rs
// =============================================================================
// Collects per-script results for one target into a single ResultSet.
//
// The pipeline feeds the accumulator one script at a time. When every
// script is done, finish() dedups and sorts each category on its own.
// A ResultSet is never merged across targets.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeSet;

use super::domain::Target;
use super::filter::{filter_links, filter_subdomains};
use super::sensitive::SensitiveFinding;

// The four result categories for one target, each deduplicated and sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub links: Vec<String>,
    pub subdomains: Vec<String>,
    pub scripts: Vec<String>,
    pub sensitive: Vec<SensitiveFinding>,
}

#[derive(Debug, Default)]
pub struct ResultAccumulator {
    links: Vec<String>,
    subdomains: Vec<String>,
    sensitive: Vec<SensitiveFinding>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds the output of one script
    //
    // Links and subdomains go through the scope filters first, so only
    // in-scope strings are ever accumulated.
    pub fn add_script(
        &mut self,
        target: &Target,
        links: Vec<String>,
        subdomains: Vec<String>,
        findings: Vec<SensitiveFinding>,
    ) {
        self.links.extend(filter_links(&links, &target.domain));
        self.subdomains.extend(filter_subdomains(&subdomains, &target.domain));
        self.sensitive.extend(findings);
    }

    pub fn finish(self, scripts: &[String]) -> ResultSet {
        ResultSet {
            links: dedup_sorted(self.links),
            subdomains: dedup_sorted(self.subdomains),
            scripts: dedup_sorted(scripts.iter().cloned()),
            sensitive: dedup_sorted(self.sensitive),
        }
    }
}

// Removes duplicates and sorts ascending
//
// Running it on its own output gives the same output back.
pub fn dedup_sorted<T, I>(items: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<BTreeSet<T>>().into_iter().collect()
}
