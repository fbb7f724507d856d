// src/config/lists.rs
// =============================================================================
// Loading the two input lists from disk.
//
// - Target list: required. If it can't be read the run cannot start.
// - Wordlist: optional. If it can't be read we warn and carry on with an
//   empty wordlist (no sensitive-data findings).
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::analysis::Wordlist;

// Reads the target URLs, one per line
//
// Blank lines are skipped and surrounding whitespace is trimmed.
//
// Returns: the URLs, or an error if the file is missing/unreadable
pub fn load_targets(path: Option<&Path>) -> Result<Vec<String>> {
    let path = path.ok_or_else(|| anyhow!("please provide a file containing the URLs to analyze (-i)"))?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to open URLs file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

// Reads the sensitive keywords, one per line
//
// Never fails: a missing or unreadable file gives an empty wordlist and a
// warning. The default file gets a hint about where it should come from.
pub fn load_wordlist(path: Option<&Path>, explicit: bool) -> Wordlist {
    let path = match path {
        Some(path) => path,
        None => {
            warn!("could not determine home directory, running without a wordlist");
            return Wordlist::default();
        }
    };

    match fs::read_to_string(path) {
        Ok(content) => {
            let wordlist = Wordlist::from_lines(content.lines());
            info!(path = %path.display(), words = wordlist.len(), "loaded wordlist");
            wordlist
        }
        Err(e) if explicit => {
            warn!(path = %path.display(), error = %e, "failed to open wordlist file");
            Wordlist::default()
        }
        Err(_) => {
            warn!(
                path = %path.display(),
                "the default WordList.txt is missing, sensitive data checks are disabled"
            );
            Wordlist::default()
        }
    }
}
