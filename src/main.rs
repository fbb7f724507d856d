// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and resolve them into Settings
// 2. Load the wordlist (optional) and the target list (required)
// 3. Run the pipeline on each target, one after the other
// 4. Print and optionally save each target's results
// 5. Exit with 0 if the run started, 1 if it couldn't
// =============================================================================

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use js_recon::analysis::{Extractors, ResultSet, Target};
use js_recon::cli::Cli;
use js_recon::config::{load_targets, load_wordlist, Settings};
use js_recon::crawl::{Pipeline, TargetOutcome};
use js_recon::fetch::HttpFetcher;
use js_recon::logging::init_logging;
use js_recon::report;

// The #[tokio::main] attribute transforms our async main into a real main function
// Requests are still made one at a time; tokio is only here for reqwest
#[tokio::main]
async fn main() {
    let settings = Settings::from_cli(Cli::parse());
    init_logging(settings.verbose);

    let exit_code = match run(settings).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Runs every target in the list
//
// Only problems that stop the run from starting (no target list, no HTTP
// client) come back as Err. Everything per-target is logged and skipped.
async fn run(settings: Settings) -> Result<()> {
    if settings.banner && !settings.json {
        report::print_banner();
    }

    let wordlist = load_wordlist(settings.wordlist.as_deref(), settings.wordlist_is_explicit);
    let targets = load_targets(settings.input.as_deref())?;
    info!(count = targets.len(), "loaded targets");

    let fetcher = HttpFetcher::new(settings.timeout)?;
    let pipeline = Pipeline::new(fetcher, Extractors::default(), wordlist);

    for url in targets {
        let target = Target::new(url);
        handle_target(&pipeline, &target, &settings).await;
    }

    Ok(())
}

async fn handle_target(pipeline: &Pipeline<HttpFetcher>, target: &Target, settings: &Settings) {
    if !settings.json {
        report::print_target_header(target);
    }

    match pipeline.process_target(target).await {
        TargetOutcome::PageFailed(e) => {
            if !settings.json {
                println!("Error fetching the URL: {}", e);
            }
        }
        TargetOutcome::NoScripts => {
            if !settings.json {
                report::print_no_scripts();
            }
        }
        TargetOutcome::Analyzed(results) => {
            if settings.json {
                if let Err(e) = report::print_json(target, &results) {
                    warn!(url = %target.url, error = %e, "failed to render JSON");
                }
            } else {
                report::print_results(&results);
            }

            if settings.save {
                save(target, &results, settings);
            }
        }
    }

    if !settings.json {
        report::print_separator();
    }
}

// Saving is best effort: any failure is a warning, never fatal
fn save(target: &Target, results: &ResultSet, settings: &Settings) {
    let output_dir = match &settings.output_dir {
        Some(dir) => dir,
        None => {
            warn!("could not determine home directory, pass -o to save results");
            return;
        }
    };

    match report::save_results(output_dir, target, results) {
        Ok(dir) => {
            if settings.json {
                info!(dir = %dir.display(), "results saved");
            } else {
                println!("Results saved to: {}", dir.display());
            }
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            warn!(url = %target.url, error = %reason, "could not save results");
        }
    }
}
