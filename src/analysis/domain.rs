// src/analysis/domain.rs
// =============================================================================
// This module works out "which site does this URL belong to?".
//
// Two small helpers live here:
// - registrable_domain: "foo.bar.example.com" -> "example.com"
// - canonicalize: strips the #fragment so URLs compare cleanly
//
// The registrable domain is a heuristic: we just keep the last two labels
// of the host. There is no public-suffix list, so "shop.example.co.uk"
// becomes "co.uk". That is a known limitation.
//
// Rust concepts:
// - Option combinators: .map(), .unwrap_or_default()
// - Borrowing: we only read the URL strings we are given
// =============================================================================

use url::Url;

// A single URL we were asked to analyze, plus its scoping domain
//
// The domain is computed once up front because every extractor and filter
// needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The URL exactly as it appeared in the target list
    pub url: String,
    /// Registrable domain of `url`, or "" when it could not be parsed
    pub domain: String,
}

impl Target {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let domain = registrable_domain(&url);
        Target { url, domain }
    }

    /// True when we managed to work out a domain to scope results by
    pub fn has_scope(&self) -> bool {
        !self.domain.is_empty()
    }
}

// Returns the last two dot-separated labels of the URL's host
//
// Examples:
//   "https://sub.example.com/a" -> "example.com"
//   "http://localhost:8080/"    -> "localhost"
//   "not a url"                 -> ""
pub fn registrable_domain(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => return String::new(),
        },
        Err(_) => return String::new(),
    };

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host
    }
}

// Removes the fragment (#...) from a URL
//
// Anything that does not parse as a URL is handed back untouched.
// Note that re-serializing goes through the url crate, so an empty path
// comes back as "/" ("https://x.com" -> "https://x.com/").
pub fn canonicalize(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does impl Into<String> mean in Target::new?
//    - Callers can pass a &str or a String
//    - .into() turns either one into an owned String
//
// 2. Why does registrable_domain return "" instead of an error?
//    - A bad target URL should not crash the run
//    - Callers check Target::has_scope() and skip scoping instead
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain_strips_subdomains() {
        assert_eq!(registrable_domain("https://sub.example.com/a"), "example.com");
        assert_eq!(registrable_domain("https://a.b.c.example.org"), "example.org");
    }

    #[test]
    fn test_registrable_domain_single_label() {
        assert_eq!(registrable_domain("http://localhost:8080/"), "localhost");
    }

    #[test]
    fn test_registrable_domain_invalid_url() {
        assert_eq!(registrable_domain("not a url"), "");
        assert_eq!(registrable_domain("example.com/no-scheme"), "");
    }

    #[test]
    fn test_registrable_domain_multi_part_tld() {
        // No public suffix list, so this is the "wrong" but expected answer
        assert_eq!(registrable_domain("https://shop.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_canonicalize_strips_fragment() {
        assert_eq!(canonicalize("https://x.com/a#frag"), "https://x.com/a");
        assert_eq!(canonicalize("https://x.com/a?q=1#top"), "https://x.com/a?q=1");
    }

    #[test]
    fn test_canonicalize_leaves_garbage_alone() {
        assert_eq!(canonicalize("::not a url::"), "::not a url::");
    }

    #[test]
    fn test_target_caches_domain() {
        let target = Target::new("https://www.example.com/login");
        assert_eq!(target.domain, "example.com");
        assert!(target.has_scope());
        assert!(!Target::new("garbage").has_scope());
    }
}
