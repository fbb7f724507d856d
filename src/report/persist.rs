// src/report/persist.rs
// =============================================================================
// Saving a target's results to disk.
//
// Layout:
//   <output dir>/<registrable domain>/links.txt
//                                    /subdomains.txt
//                                    /jsfiles.txt
//                                    /sensitive.txt
//
// One entry per line, every line newline-terminated, no header. Empty
// categories don't get a file.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{ResultSet, Target};

pub const LINKS_FILE: &str = "links.txt";
pub const SUBDOMAINS_FILE: &str = "subdomains.txt";
pub const SCRIPTS_FILE: &str = "jsfiles.txt";
pub const SENSITIVE_FILE: &str = "sensitive.txt";

// Writes every non-empty category under <output_dir>/<domain>
//
// Returns: the per-domain directory that was written to
pub fn save_results(output_dir: &Path, target: &Target, results: &ResultSet) -> Result<PathBuf> {
    if !target.has_scope() {
        return Err(anyhow!("invalid URL provided: {}", target.url));
    }

    let dir = output_dir.join(&target.domain);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create results directory {}", dir.display()))?;

    let sensitive: Vec<String> = results.sensitive.iter().map(ToString::to_string).collect();

    write_lines(&dir.join(LINKS_FILE), &results.links)?;
    write_lines(&dir.join(SUBDOMAINS_FILE), &results.subdomains)?;
    write_lines(&dir.join(SCRIPTS_FILE), &results.scripts)?;
    write_lines(&dir.join(SENSITIVE_FILE), &sensitive)?;

    Ok(dir)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }

    let mut content = lines.join("\n");
    content.push('\n');

    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SensitiveFinding;
    use tempfile::tempdir;

    fn sample() -> ResultSet {
        ResultSet {
            links: vec![
                "https://a.example.com/".to_string(),
                "https://b.example.com/x".to_string(),
            ],
            subdomains: vec![],
            scripts: vec!["https://www.example.com/app.js".to_string()],
            sensitive: vec![SensitiveFinding {
                keyword: "AKIA".to_string(),
                source: "https://www.example.com/app.js".to_string(),
            }],
        }
    }

    #[test]
    fn test_writes_non_empty_categories() {
        let out = tempdir().unwrap();
        let target = Target::new("https://www.example.com/login");

        let dir = save_results(out.path(), &target, &sample()).unwrap();
        assert_eq!(dir, out.path().join("example.com"));

        assert_eq!(
            fs::read_to_string(dir.join(LINKS_FILE)).unwrap(),
            "https://a.example.com/\nhttps://b.example.com/x\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join(SCRIPTS_FILE)).unwrap(),
            "https://www.example.com/app.js\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join(SENSITIVE_FILE)).unwrap(),
            "🔹 AKIA ➔ https://www.example.com/app.js\n"
        );
        assert!(!dir.join(SUBDOMAINS_FILE).exists());
    }

    #[test]
    fn test_invalid_target_is_refused() {
        let out = tempdir().unwrap();
        assert!(save_results(out.path(), &Target::new("nope"), &sample()).is_err());
    }

    #[test]
    fn test_unwritable_output_dir() {
        let out = tempdir().unwrap();
        let blocker = out.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let target = Target::new("https://example.com");
        assert!(save_results(&blocker, &target, &sample()).is_err());
    }
}
