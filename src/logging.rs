// src/logging.rs
// =============================================================================
// Sets up tracing output.
//
// Logs go to stderr so stdout only carries results. RUST_LOG wins when it
// is set; otherwise we show info (or debug with -v) for this crate and
// warnings from dependencies.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,js_recon=debug"
    } else {
        "warn,js_recon=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
