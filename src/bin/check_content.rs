// Content fixture lint
//
// Usage: cargo run --bin check_content
// Exits non-zero when any fixture has a blank required field, so a deploy
// script can gate on it.

use std::path::Path;

use portfolio_gen::ContentStore;

fn main() -> anyhow::Result<()> {
    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
    let store = ContentStore::load(Path::new(&content_dir))?;

    let findings = store.check();
    if findings.is_empty() {
        println!(
            "content OK: {} education, {} experience, {} awards, {} publications",
            store.education.len(),
            store.experience.len(),
            store.awards.len(),
            store.publications.len()
        );
        return Ok(());
    }

    println!("{} problem(s) in {}:", findings.len(), content_dir);
    for finding in &findings {
        println!("  {}", finding);
    }
    anyhow::bail!("content check failed")
}
