// src/analysis/scanner.rs
// =============================================================================
// The "text scanner" capability used by every extractor.
//
// A scanner takes a piece of text and returns every match it finds.
// The extractors only talk to the TextScanner trait, so a smarter matcher
// (a real tokenizer, say) can be dropped in without touching the pipeline.
//
// The default implementation wraps a compiled regex. The three patterns we
// ship are compiled once, lazily, and shared.
//
// Rust concepts:
// - Traits: an interface that several types can implement
// - LazyLock: a static that is initialized the first time it is used
// - Lifetimes: matches borrow from the scanned text ('t)
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// `src="something.js"`, double quotes only; group 1 is the path
pub const SCRIPT_SRC_PATTERN: &str = r#"src="([^"]+\.js)""#;

// An absolute http(s) URL, stopped by quotes, brackets, parens or whitespace
pub const ABSOLUTE_LINK_PATTERN: &str = r#"https?://[^\s"<>()']+"#;

// A lowercase hostname-ish token: label. groups followed by a 2-6 letter TLD.
// The word boundaries are ASCII-only, so a neighbouring non-ASCII letter
// (e.g. in a localized bundle) still counts as a boundary.
pub const SUBDOMAIN_PATTERN: &str =
    r"(?-u:\b)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,6}(?-u:\b)";

static SCRIPT_SRC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SCRIPT_SRC_PATTERN).unwrap());
static ABSOLUTE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ABSOLUTE_LINK_PATTERN).unwrap());
static SUBDOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SUBDOMAIN_PATTERN).unwrap());

/// Finds every occurrence of some pattern in a piece of text.
pub trait TextScanner: Send + Sync {
    fn scan<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

// A TextScanner backed by a regular expression
//
// `group` picks which capture group is returned for each match
// (0 = the whole match).
#[derive(Debug, Clone)]
pub struct RegexScanner {
    regex: Regex,
    group: usize,
}

impl RegexScanner {
    pub fn new(regex: Regex, group: usize) -> Self {
        RegexScanner { regex, group }
    }

    pub fn script_sources() -> Self {
        Self::new(SCRIPT_SRC_RE.clone(), 1)
    }

    pub fn absolute_links() -> Self {
        Self::new(ABSOLUTE_LINK_RE.clone(), 0)
    }

    pub fn subdomains() -> Self {
        Self::new(SUBDOMAIN_RE.clone(), 0)
    }
}

impl TextScanner for RegexScanner {
    fn scan<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.group == 0 {
            return self.regex.find_iter(text).map(|m| m.as_str()).collect();
        }

        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .map(|m| m.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_sources_double_quotes_only() {
        let html = r#"<script src="/a.js"></script><script src='/b.js'></script>"#;
        assert_eq!(RegexScanner::script_sources().scan(html), vec!["/a.js"]);
    }

    #[test]
    fn test_script_sources_requires_js_suffix() {
        let html = r#"<img src="/logo.png"><script src="app.min.js"></script>"#;
        assert_eq!(RegexScanner::script_sources().scan(html), vec!["app.min.js"]);
    }

    #[test]
    fn test_absolute_links_stop_at_terminators() {
        let js = r#"fetch("https://api.example.com/v1/users");go('http://example.com/x')"#;
        assert_eq!(
            RegexScanner::absolute_links().scan(js),
            vec!["https://api.example.com/v1/users", "http://example.com/x"]
        );
    }

    #[test]
    fn test_subdomains_are_case_sensitive() {
        let text = "cdn.example.com and API.EXAMPLE.COM";
        assert_eq!(RegexScanner::subdomains().scan(text), vec!["cdn.example.com"]);
    }

    #[test]
    fn test_subdomains_next_to_non_ascii_letters() {
        let scanner = RegexScanner::subdomains();
        assert_eq!(scanner.scan("xéapi.example.com"), vec!["api.example.com"]);
        assert_eq!(scanner.scan("//ñcdn.example.com"), vec!["cdn.example.com"]);
        assert_eq!(scanner.scan("api.example.comé"), vec!["api.example.com"]);
        assert_eq!(scanner.scan("访问api.example.com获取"), vec!["api.example.com"]);
    }
}
