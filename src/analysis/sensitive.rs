// src/analysis/sensitive.rs
// =============================================================================
// This module looks for "sensitive" keywords inside script bodies.
//
// The keywords come from a wordlist file (API key prefixes, variable names
// like SECRET_KEY, and so on). A keyword matches when it appears verbatim
// anywhere in the script: case-sensitive, substring, no regex.
//
// The Wordlist is a plain value passed into the pipeline, not a global.
//
// Rust concepts:
// - Newtype structs: Wordlist wraps a Vec<String> to give it meaning
// - Display: controls how a finding is printed and saved
// - derive(Ord): lets us sort findings (keyword first, then script URL)
// =============================================================================

use serde::Serialize;
use std::fmt;

// The keywords we search for, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    // Builds a wordlist from raw lines
    //
    // A trailing '\r' (Windows line endings) is removed and blank lines
    // are dropped, since an empty keyword would match every script.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end_matches('\r').to_string())
            .filter(|word| !word.trim().is_empty())
            .collect();
        Wordlist { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A keyword that showed up in a script.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SensitiveFinding {
    pub keyword: String,
    pub source: String,
}

impl fmt::Display for SensitiveFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🔹 {} ➔ {}", self.keyword, self.source)
    }
}

// Reports every keyword that appears in `content`
//
// Parameters:
//   content: the script body
//   script_url: where the body came from (recorded in each finding)
//   wordlist: the keywords to look for
//
// Example:
//   wordlist = ["SECRET_KEY"], content = r#"var k = "SECRET_KEY_1";"#
//   result = [🔹 SECRET_KEY ➔ script_url]
pub fn find_sensitive(content: &str, script_url: &str, wordlist: &Wordlist) -> Vec<SensitiveFinding> {
    wordlist
        .words()
        .iter()
        .filter(|word| !word.is_empty() && content.contains(word.as_str()))
        .map(|word| SensitiveFinding {
            keyword: word.clone(),
            source: script_url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let wordlist = Wordlist::from_lines(["SECRET_KEY"]);
        let findings = find_sensitive(r#"var k = "SECRET_KEY_1";"#, "https://x.com/app.js", &wordlist);
        assert_eq!(
            findings,
            vec![SensitiveFinding {
                keyword: "SECRET_KEY".to_string(),
                source: "https://x.com/app.js".to_string(),
            }]
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let wordlist = Wordlist::from_lines(["apikey"]);
        assert!(find_sensitive("const APIKEY = 1;", "a.js", &wordlist).is_empty());
    }

    #[test]
    fn test_keyword_order_preserved() {
        let wordlist = Wordlist::from_lines(["token", "AKIA", "password"]);
        let findings = find_sensitive("password=1; AKIA123; token", "a.js", &wordlist);
        let keywords: Vec<&str> = findings.iter().map(|f| f.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["token", "AKIA", "password"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let wordlist = Wordlist::from_lines(["AKIA\r", "", "   ", "ghp_"]);
        assert_eq!(wordlist.words(), &["AKIA".to_string(), "ghp_".to_string()]);
        assert!(find_sensitive("nothing to see", "a.js", &wordlist).is_empty());
    }

    #[test]
    fn test_display() {
        let finding = SensitiveFinding {
            keyword: "AKIA".to_string(),
            source: "https://x.com/a.js".to_string(),
        };
        assert_eq!(finding.to_string(), "🔹 AKIA ➔ https://x.com/a.js");
    }
}
