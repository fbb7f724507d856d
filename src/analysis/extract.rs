// src/analysis/extract.rs
// =============================================================================
// This module pulls candidate strings out of page markup and script bodies.
//
// Three extractors:
// - script references: `src="....js"` in the page HTML
// - absolute links:    http(s) URLs mentioned in a script
// - subdomains:        hostname-shaped tokens mentioned in a script
//
// Everything is plain pattern matching, no JavaScript parsing. The output
// can contain duplicates; the scope filters and the aggregator clean up.
//
// Rust concepts:
// - Box<dyn Trait>: holding "some TextScanner" without knowing which one
// - Iterators: .lines(), .flat_map(), .filter()
// =============================================================================

use url::Url;

use super::domain::{canonicalize, Target};
use super::scanner::{RegexScanner, TextScanner};

// The three scanners the pipeline runs
//
// Extractors::default() uses the regex scanners; tests (or a future
// tokenizer) can build one with different scanners.
pub struct Extractors {
    scripts: Box<dyn TextScanner>,
    links: Box<dyn TextScanner>,
    subdomains: Box<dyn TextScanner>,
}

impl Default for Extractors {
    fn default() -> Self {
        Extractors::new(
            Box::new(RegexScanner::script_sources()),
            Box::new(RegexScanner::absolute_links()),
            Box::new(RegexScanner::subdomains()),
        )
    }
}

impl Extractors {
    pub fn new(
        scripts: Box<dyn TextScanner>,
        links: Box<dyn TextScanner>,
        subdomains: Box<dyn TextScanner>,
    ) -> Self {
        Extractors {
            scripts,
            links,
            subdomains,
        }
    }

    // Finds every script referenced by the page
    //
    // Parameters:
    //   html: the page markup
    //   target: the page we fetched (used to resolve relative paths)
    //
    // Returns: absolute, fragment-free script URLs in page order
    //
    // Example:
    //   html = r#"<script src="/app.js">"#, target = "https://x.com"
    //   result = ["https://x.com/app.js"]
    pub fn script_references(&self, html: &str, target: &Target) -> Vec<String> {
        self.scripts
            .scan(html)
            .into_iter()
            .map(|path| canonicalize(&resolve_script(&target.url, path)))
            .collect()
    }

    // Finds absolute links to the target's domain inside a script
    //
    // Links ending in ".js" are dropped since scripts are reported on
    // their own.
    pub fn links(&self, content: &str, target: &Target) -> Vec<String> {
        if !target.has_scope() {
            return Vec::new();
        }

        content
            .lines()
            .flat_map(|line| self.links.scan(line))
            .filter(|link| !link.ends_with(".js") && link.contains(&target.domain))
            .map(canonicalize)
            .collect()
    }

    // Finds hostname-shaped tokens mentioning the target's domain
    pub fn subdomains(&self, content: &str, target: &Target) -> Vec<String> {
        if !target.has_scope() {
            return Vec::new();
        }

        content
            .lines()
            .flat_map(|line| self.subdomains.scan(line))
            .filter(|candidate| candidate.contains(&target.domain))
            .map(str::to_string)
            .collect()
    }
}

// Turns a script path from the page into an absolute URL
//
// Anything starting with "http" is taken as already absolute. Otherwise
// we resolve it the way a browser would (so "/app.js" and "../app.js"
// both work). If the target itself is not a valid URL we fall back to
// gluing the two together with a "/".
fn resolve_script(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }

    match Url::parse(base_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}/{}", base_url, path),
    }
}
