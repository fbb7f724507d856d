// src/crawl/pipeline.rs
// =============================================================================
// This module runs the whole analysis for one target.
//
// How it works:
// 1. Fetch the target page
// 2. Find the scripts it references (src="....js")
// 3. Fetch each script, one after another
// 4. Pull links, subdomains and sensitive keywords out of each script
// 5. Merge everything into one sorted, deduplicated ResultSet
//
// Failure handling:
// - Page fetch fails -> this target is skipped, the run goes on
// - A script fetch fails -> that script is skipped, the others still count
// - Nothing is retried
//
// Only one hop is made: scripts are never crawled for further scripts.
// =============================================================================

use tracing::{info, warn};

use crate::analysis::{find_sensitive, Extractors, ResultAccumulator, ResultSet, Target, Wordlist};
use crate::fetch::{FetchError, Fetcher};

// What happened to one target
#[derive(Debug)]
pub enum TargetOutcome {
    /// The page itself could not be fetched
    PageFailed(FetchError),
    /// The page loaded but referenced no scripts
    NoScripts,
    /// Scripts were found and analyzed
    Analyzed(ResultSet),
}

pub struct Pipeline<F: Fetcher> {
    fetcher: F,
    extractors: Extractors,
    wordlist: Wordlist,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, extractors: Extractors, wordlist: Wordlist) -> Self {
        Pipeline {
            fetcher,
            extractors,
            wordlist,
        }
    }

    // Analyzes a single target from start to finish
    //
    // Parameters:
    //   target: the page to analyze (URL + scoping domain)
    //
    // Returns: what happened, see TargetOutcome
    pub async fn process_target(&self, target: &Target) -> TargetOutcome {
        if !target.has_scope() {
            warn!(url = %target.url, "could not determine a domain, links and subdomains will be empty");
        }

        let html = match self.fetcher.fetch(&target.url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %target.url, error = %e, "failed to fetch page");
                return TargetOutcome::PageFailed(e);
            }
        };

        let scripts = self.extractors.script_references(&html, target);
        if scripts.is_empty() {
            return TargetOutcome::NoScripts;
        }

        info!(url = %target.url, count = scripts.len(), "found scripts");

        let mut accumulator = ResultAccumulator::new();
        for script in &scripts {
            let content = match self.fetcher.fetch(script).await {
                Ok(content) => content,
                Err(e) => {
                    warn!(script = %script, error = %e, "failed to fetch script, skipping");
                    continue;
                }
            };

            accumulator.add_script(
                target,
                self.extractors.links(&content, target),
                self.extractors.subdomains(&content, target),
                find_sensitive(&content, script, &self.wordlist),
            );
        }

        TargetOutcome::Analyzed(accumulator.finish(&scripts))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Pipeline generic over F: Fetcher?
//    - The real program uses HttpFetcher, the tests use MemoryFetcher
//    - Generics are resolved at compile time, so there is no runtime cost
//
// 2. Why `continue` instead of `?` in the script loop?
//    - `?` would return early and throw away every other script's results
//    - One dead script should not hide what the other scripts contain
//
// 3. What does `%` mean inside warn!(...)?
//    - It tells tracing to record the value using its Display impl
//    - `?` would use Debug instead
// -----------------------------------------------------------------------------
