// src/config/mod.rs
// =============================================================================
// Run configuration.
//
// Settings is the resolved form of the command line: default paths are
// filled in and the timeout is a Duration. The lists submodule loads the
// target list and the wordlist from disk.
// =============================================================================

mod lists;

pub use lists::{load_targets, load_wordlist};

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

const DEFAULT_WORDLIST: &str = "bin/WordList.txt";
const DEFAULT_OUTPUT_DIR: &str = "js_recon_results";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Target list; None means the user forgot -i
    pub input: Option<PathBuf>,
    /// Wordlist to load (explicit, or the default under $HOME)
    pub wordlist: Option<PathBuf>,
    /// True when the wordlist path came from -w rather than the default
    pub wordlist_is_explicit: bool,
    pub timeout: Duration,
    /// Where per-domain result directories go; None if $HOME is unknown
    pub output_dir: Option<PathBuf>,
    pub save: bool,
    pub json: bool,
    pub banner: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let home = dirs::home_dir();

        let wordlist_is_explicit = cli.wordlist.is_some();
        let wordlist = cli
            .wordlist
            .or_else(|| home.as_ref().map(|h| h.join(DEFAULT_WORDLIST)));
        let output_dir = cli
            .output
            .or_else(|| home.as_ref().map(|h| h.join(DEFAULT_OUTPUT_DIR)));

        Settings {
            input: cli.input,
            wordlist,
            wordlist_is_explicit,
            timeout: Duration::from_secs(cli.timeout),
            output_dir,
            save: cli.save,
            json: cli.json,
            banner: !cli.no_banner,
            verbose: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_explicit_paths_win() {
        let cli = Cli::parse_from([
            "js-recon", "-i", "t.txt", "-w", "words.txt", "-o", "/tmp/out", "-t", "7", "--no-banner",
        ]);
        let settings = Settings::from_cli(cli);
        assert_eq!(settings.wordlist, Some(PathBuf::from("words.txt")));
        assert!(settings.wordlist_is_explicit);
        assert_eq!(settings.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(settings.timeout, Duration::from_secs(7));
        assert!(!settings.banner);
    }

    #[test]
    fn test_defaults_live_under_home() {
        let settings = Settings::from_cli(Cli::parse_from(["js-recon"]));
        assert!(settings.input.is_none());
        assert!(!settings.wordlist_is_explicit);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(settings.wordlist, Some(home.join("bin/WordList.txt")));
            assert_eq!(settings.output_dir, Some(home.join("js_recon_results")));
        }
    }
}
