//! Content store - typed, read-only portfolio records.
//!
//! Everything the site shows comes from five JSON fixtures under the
//! content directory, loaded once per run and never mutated:
//! - `site.json`: owner profile, tagline, contact address, footer links
//! - `education.json`, `work-experience.json`, `awards.json`,
//!   `publications.json`: ordered entry lists, rendered top-to-bottom in
//!   file order
//!
//! The loader does not validate entry contents. Fixtures are trusted,
//! authoring-time data; the `check_content` bin lints them before a deploy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Site-wide profile from `site.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteProfile {
    pub owner: String,
    pub tagline: String,
    /// Destination address for the contact form's mailto link.
    pub email: String,
    /// Markdown paragraphs for the landing-page greeting.
    #[serde(default)]
    pub greeting: Vec<String>,
    #[serde(default)]
    pub links: Vec<SiteLink>,
}

impl SiteProfile {
    /// Greeting paragraphs joined into one markdown document.
    pub fn greeting_markdown(&self) -> String {
        self.greeting.join("\n\n")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteLink {
    pub label: String,
    pub url: String,
}

/// A grade that fixtures may store as a JSON string ("3.92/4.0") or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Text(s) => f.write_str(s),
            Score::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One education record. `gpa` and `awards` are optional attachments;
/// an empty `awards` list means absent by contract.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub university: String,
    pub degree: String,
    pub major: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub gpa: Option<Score>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
}

/// One job record. `end` may be an open-ended marker such as "Present",
/// rendered verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub organization: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One award or recognition.
#[derive(Debug, Clone, Deserialize)]
pub struct AwardEntry {
    pub title: String,
    pub issuer: String,
    pub year: String,
    pub location: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// One publication. `url` turns the rendered title into a link.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationEntry {
    pub title: String,
    pub venue: String,
    pub year: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// All content, loaded once. Lives for the rest of the process.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub site: SiteProfile,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub awards: Vec<AwardEntry>,
    pub publications: Vec<PublicationEntry>,
}

impl ContentStore {
    /// Load every fixture from `dir`. Fails with the offending path in the
    /// error chain if a file is missing or not valid JSON.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            site: read_json(&dir.join("site.json"))?,
            education: read_json(&dir.join("education.json"))?,
            experience: read_json(&dir.join("work-experience.json"))?,
            awards: read_json(&dir.join("awards.json"))?,
            publications: read_json(&dir.join("publications.json"))?,
        })
    }

    /// Authoring-time lint: report entries whose required fields are blank.
    /// Empty optional attachments are fine; blank required labels are not.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.site.owner.trim().is_empty() {
            findings.push("site.json: owner is blank".to_string());
        }
        if !self.site.email.contains('@') {
            findings.push(format!(
                "site.json: email {:?} does not look like an address",
                self.site.email
            ));
        }

        for (i, e) in self.education.iter().enumerate() {
            require(&mut findings, "education", i, "university", &e.university);
            require(&mut findings, "education", i, "degree", &e.degree);
            require(&mut findings, "education", i, "major", &e.major);
            require(&mut findings, "education", i, "start", &e.start);
            require(&mut findings, "education", i, "end", &e.end);
            require(&mut findings, "education", i, "location", &e.location);
        }

        for (i, e) in self.experience.iter().enumerate() {
            require(&mut findings, "work-experience", i, "organization", &e.organization);
            require(&mut findings, "work-experience", i, "title", &e.title);
            require(&mut findings, "work-experience", i, "start", &e.start);
            require(&mut findings, "work-experience", i, "end", &e.end);
            require(&mut findings, "work-experience", i, "location", &e.location);
        }

        for (i, a) in self.awards.iter().enumerate() {
            require(&mut findings, "awards", i, "title", &a.title);
            require(&mut findings, "awards", i, "issuer", &a.issuer);
            require(&mut findings, "awards", i, "year", &a.year);
            require(&mut findings, "awards", i, "location", &a.location);
        }

        for (i, p) in self.publications.iter().enumerate() {
            require(&mut findings, "publications", i, "title", &p.title);
            require(&mut findings, "publications", i, "venue", &p.venue);
            require(&mut findings, "publications", i, "year", &p.year);
        }

        findings
    }
}

#[cfg(test)]
impl ContentStore {
    /// Empty store with a minimal profile, shared by unit tests across
    /// modules. Push entries onto the lists a test cares about.
    pub(crate) fn sample() -> Self {
        Self {
            site: SiteProfile {
                owner: "Jordan Blake".to_string(),
                tagline: "Data engineer building small, sharp tools.".to_string(),
                email: "hello@jordanblake.dev".to_string(),
                greeting: vec!["Hi.".to_string(), "Second paragraph.".to_string()],
                links: vec![],
            },
            education: vec![],
            experience: vec![],
            awards: vec![],
            publications: vec![],
        }
    }
}

fn require(findings: &mut Vec<String>, file: &str, index: usize, field: &str, value: &str) {
    if value.trim().is_empty() {
        findings.push(format!("{}.json[{}]: {} is blank", file, index, field));
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}
