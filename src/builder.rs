//! Static site builder - renders every page and asset into an output tree.
//!
//! Pages land as `<route>/index.html` so the built tree serves clean URLs
//! from any dumb file host. Assets are generated last: the stylesheet is the
//! checked-in base sheet plus the reveal rules, and the two scripts are
//! rendered from the same Rust values the page contracts are tested against.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use askama::Template;

use crate::contact::{form_script, MailtoTemplate};
use crate::content::ContentStore;
use crate::pages;
use crate::reveal::RevealConfig;

pub(crate) const BASE_STYLES: &str = include_str!("../assets/styles.css");

/// Renders the whole site into one output directory.
pub struct SiteBuilder<'a> {
    store: &'a ContentStore,
    out_dir: PathBuf,
    reveal: RevealConfig,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(store: &'a ContentStore, out_dir: PathBuf) -> Self {
        Self {
            store,
            out_dir,
            reveal: RevealConfig::default(),
        }
    }

    /// Build every page and asset. Returns the written paths in write order.
    pub fn build(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        self.write_page(&mut written, pages::home::ROUTE, pages::home::page(self.store))?;
        self.write_page(
            &mut written,
            pages::education::ROUTE,
            pages::education::page(self.store),
        )?;
        self.write_page(
            &mut written,
            pages::experience::ROUTE,
            pages::experience::page(self.store),
        )?;
        self.write_page(
            &mut written,
            pages::awards::ROUTE,
            pages::awards::page(self.store),
        )?;
        self.write_page(
            &mut written,
            pages::publications::ROUTE,
            pages::publications::page(self.store),
        )?;
        self.write_page(
            &mut written,
            pages::contact::ROUTE,
            pages::contact::page(self.store),
        )?;

        let mailto = MailtoTemplate::for_site(&self.store.site);
        self.write_file(
            &mut written,
            Path::new("assets/styles.css"),
            &styles_asset(&self.reveal),
        )?;
        self.write_file(
            &mut written,
            Path::new("assets/reveal.js"),
            &self.reveal.script(),
        )?;
        self.write_file(
            &mut written,
            Path::new("assets/contact.js"),
            &form_script(&mailto),
        )?;

        tracing::info!(
            "Site build complete: {} files under {}",
            written.len(),
            self.out_dir.display()
        );
        Ok(written)
    }

    fn write_page<T: Template>(
        &self,
        written: &mut Vec<PathBuf>,
        route: &str,
        template: T,
    ) -> Result<()> {
        let html = template
            .render()
            .with_context(|| format!("failed to render page {}", route))?;
        self.write_file(written, &page_path(route), &html)
    }

    fn write_file(&self, written: &mut Vec<PathBuf>, rel: &Path, contents: &str) -> Result<()> {
        let path = self.out_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
        Ok(())
    }
}

/// Clean-URL layout: "/" is `index.html`, every other route is
/// `<route>/index.html`.
fn page_path(route: &str) -> PathBuf {
    if route == "/" {
        PathBuf::from("index.html")
    } else {
        Path::new(route.trim_start_matches('/')).join("index.html")
    }
}

/// Base stylesheet with the reveal rules appended.
pub(crate) fn styles_asset(reveal: &RevealConfig) -> String {
    format!("{}\n{}", BASE_STYLES, reveal.stylesheet())
}
