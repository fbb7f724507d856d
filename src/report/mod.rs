// src/report/mod.rs
// =============================================================================
// Showing and saving results.
//
// Submodules:
// - display: banner, coloured listing, JSON
// - persist: per-domain result files
// =============================================================================

mod display;
mod persist;

pub use display::{
    print_banner, print_json, print_no_scripts, print_results, print_separator,
    print_target_header,
};
pub use persist::save_results;
