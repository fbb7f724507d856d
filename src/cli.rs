// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below IS the list of flags, and clap
// generates the parsing code, --help and --version for us.
//
// The raw flags are turned into a Settings value (src/config/) before
// anything else uses them, so the rest of the program never sees clap.
// =============================================================================

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "js-recon",
    version = "0.1.0",
    about = "Mine a site's JavaScript files for links, subdomains and leaked secrets",
    long_about = "js-recon fetches each target page, downloads every script it references and \
                  reports same-domain links, subdomains and sensitive keywords found inside them."
)]
pub struct Cli {
    /// File containing the URLs to analyze, one per line
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File containing sensitive keywords, one per line
    ///
    /// Defaults to ~/bin/WordList.txt
    #[arg(short = 'w', long = "wordlist", value_name = "FILE")]
    pub wordlist: Option<PathBuf>,

    /// Timeout for every HTTP request, in seconds
    #[arg(short = 't', long = "timeout", default_value_t = 30, value_name = "SECONDS")]
    pub timeout: u64,

    /// Directory results are saved under (default: ~/js_recon_results)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Save results to files (pass `-s=false` to only print them)
    #[arg(
        short = 's',
        long = "save",
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub save: bool,

    /// Print each target's results as JSON instead of a coloured listing
    #[arg(long)]
    pub json: bool,

    /// Don't print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Show debug logging (same as RUST_LOG=js_recon=debug)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
