// src/report/display.rs
// =============================================================================
// Printing results to the terminal.
//
// Two formats:
// - a coloured listing, one block per category (the default)
// - pretty JSON, for piping into other tools (--json)
//
// Results go to stdout with println!; logs go to stderr through tracing,
// so JSON output stays clean.
// =============================================================================

use anyhow::Result;
use colored::{Color, Colorize};
use serde::Serialize;

use crate::analysis::{ResultSet, Target};

const BANNER: &str = r#"
     _
    (_)___       _ __ ___  ___ ___  _ __
    | / __|_____| '__/ _ \/ __/ _ \| '_ \
    | \__ \_____| | |  __/ (_| (_) | | | |
   _/ |___/     |_|  \___|\___\___/|_| |_|
  |__/
"#;

const SEPARATOR_WIDTH: usize = 93;

pub fn print_banner() {
    println!("{}", BANNER.green());
    println!("{}", format!("          js-recon v{}", env!("CARGO_PKG_VERSION")).green());
    println!();
}

pub fn print_target_header(target: &Target) {
    println!("\nProcessing URL: {}", target.url);
}

pub fn print_separator() {
    println!("{}", "_".repeat(SEPARATOR_WIDTH));
}

pub fn print_no_scripts() {
    println!("No JavaScript files found.");
}

// Prints every non-empty category of a ResultSet
//
// Sensitive data gets an explicit "none found" line, since that is the
// category people actually look for.
pub fn print_results(results: &ResultSet) {
    print_category("Links", &results.links, Color::Green);
    print_category("Subdomains", &results.subdomains, Color::Cyan);
    print_category("JS Files", &results.scripts, Color::Yellow);

    if results.sensitive.is_empty() {
        println!("\n{}", "No sensitive data found.".red());
    } else {
        let lines: Vec<String> = results.sensitive.iter().map(ToString::to_string).collect();
        print_category("Sensitive Data", &lines, Color::Red);
    }
}

fn print_category(label: &str, entries: &[String], color: Color) {
    if entries.is_empty() {
        return;
    }

    println!("\n{}", format!("{}:", label).color(color));
    for entry in entries {
        println!("{}", entry);
    }
}

// JSON shape for one target
#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    domain: &'a str,
    #[serde(flatten)]
    results: &'a ResultSet,
}

pub fn render_json(target: &Target, results: &ResultSet) -> Result<String> {
    let report = JsonReport {
        target: &target.url,
        domain: &target.domain,
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn print_json(target: &Target, results: &ResultSet) -> Result<()> {
    println!("{}", render_json(target, results)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SensitiveFinding;

    #[test]
    fn test_render_json() {
        let target = Target::new("https://www.example.com");
        let results = ResultSet {
            links: vec!["https://api.example.com/v1".to_string()],
            subdomains: vec!["api.example.com".to_string()],
            scripts: vec!["https://www.example.com/app.js".to_string()],
            sensitive: vec![SensitiveFinding {
                keyword: "AKIA".to_string(),
                source: "https://www.example.com/app.js".to_string(),
            }],
        };

        let json: serde_json::Value = serde_json::from_str(&render_json(&target, &results).unwrap()).unwrap();
        assert_eq!(json["target"], "https://www.example.com");
        assert_eq!(json["domain"], "example.com");
        assert_eq!(json["links"][0], "https://api.example.com/v1");
        assert_eq!(json["scripts"][0], "https://www.example.com/app.js");
        assert_eq!(json["sensitive"][0]["keyword"], "AKIA");
    }
}
