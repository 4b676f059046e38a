//! List renderer - maps content entries onto a common tile shape.
//!
//! Every listing page (education, work experience, awards, publications)
//! renders the same way: one tile per entry, in fixture order, with a
//! heading, a badge, a date range, a context line, and then whichever
//! optional attachments the entry carries, in a fixed order: score,
//! highlights, honors, free-text detail lines.
//!
//! Optional attachments are normalized here, once, at build time. A missing
//! or empty attachment becomes `None` and produces no element downstream;
//! templates never make the presence decision themselves.

use crate::content::{AwardEntry, EducationEntry, ExperienceEntry, PublicationEntry};

/// A labeled single value, e.g. "GPA: 3.92/4.0".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

/// A labeled, ordered list rendered on one line, e.g.
/// "Course Highlights: Algorithms, Databases".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledList {
    pub label: &'static str,
    pub items: Vec<String>,
}

impl LabeledList {
    /// `None` when the list is empty, so an empty sequence in a fixture is
    /// indistinguishable from an absent one.
    fn filled(label: &'static str, items: &[String]) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self {
                label,
                items: items.to_vec(),
            })
        }
    }

    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

/// One rendered card. The visual unit corresponding to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub heading: String,
    pub badge: String,
    pub period: String,
    pub context: String,
    /// Turns the heading into a link when present (publications).
    pub href: Option<String>,
    pub score: Option<LabeledValue>,
    pub highlights: Option<LabeledList>,
    pub honors: Option<LabeledList>,
    /// Free-text lines; an empty vec renders nothing.
    pub details: Vec<String>,
}

impl Tile {
    fn base(heading: &str, badge: &str, period: String, context: &str) -> Self {
        Self {
            heading: heading.to_string(),
            badge: badge.to_string(),
            period,
            context: context.to_string(),
            href: None,
            score: None,
            highlights: None,
            honors: None,
            details: Vec::new(),
        }
    }
}

/// Implemented by every entry type the list renderer can display.
pub trait TileSource {
    fn tile(&self) -> Tile;
}

/// One tile per entry, same order as the input. Never sorts, filters, or
/// deduplicates: fixture order is authoritative.
pub fn build_tiles<T: TileSource>(entries: &[T]) -> Vec<Tile> {
    entries.iter().map(TileSource::tile).collect()
}

/// "2021 - 2023", or "2023 - Present" with the open-ended marker verbatim.
fn date_range(start: &str, end: &str) -> String {
    format!("{} - {}", start, end)
}

impl TileSource for EducationEntry {
    fn tile(&self) -> Tile {
        let mut tile = Tile::base(
            &self.university,
            &self.degree,
            date_range(&self.start, &self.end),
            &self.location,
        );
        tile.score = self.gpa.as_ref().map(|g| LabeledValue {
            label: "GPA",
            value: g.to_string(),
        });
        tile.highlights = LabeledList::filled("Course Highlights", &self.courses);
        tile.honors = LabeledList::filled("Awards/Honors", &self.awards);
        tile.details = vec![self.major.clone()];
        tile
    }
}

impl TileSource for ExperienceEntry {
    fn tile(&self) -> Tile {
        let mut tile = Tile::base(
            &self.organization,
            &self.title,
            date_range(&self.start, &self.end),
            &self.location,
        );
        tile.highlights = LabeledList::filled("Key Skills", &self.skills);
        tile.details = self.details.clone();
        tile
    }
}

impl TileSource for AwardEntry {
    fn tile(&self) -> Tile {
        let mut tile = Tile::base(&self.title, &self.issuer, self.year.clone(), &self.location);
        tile.details = self.details.clone();
        tile
    }
}

impl TileSource for PublicationEntry {
    fn tile(&self) -> Tile {
        let mut tile = Tile::base(&self.title, &self.venue, self.year.clone(), "");
        tile.context = self.authors.join(", ");
        tile.href = self.url.clone();
        tile.details = self.notes.clone();
        tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Score;

    fn education(university: &str, gpa: Option<Score>, courses: &[&str], awards: &[&str]) -> EducationEntry {
        EducationEntry {
            university: university.to_string(),
            degree: "B.Sc.".to_string(),
            major: "Computer Science".to_string(),
            start: "2018".to_string(),
            end: "2022".to_string(),
            location: "City, Country".to_string(),
            gpa,
            courses: courses.iter().map(|s| s.to_string()).collect(),
            awards: awards.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_one_tile_per_entry_in_input_order() {
        let entries = vec![
            education("State University", None, &[], &[]),
            education("Tech Institute", None, &[], &[]),
            education("Community College", None, &[], &[]),
        ];
        let tiles = build_tiles(&entries);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].heading, "State University");
        assert_eq!(tiles[1].heading, "Tech Institute");
        assert_eq!(tiles[2].heading, "Community College");
    }

    #[test]
    fn test_entry_with_all_optionals_absent_still_renders() {
        let tiles = build_tiles(&[education("State University", None, &[], &[])]);
        let tile = &tiles[0];
        assert_eq!(tile.badge, "B.Sc.");
        assert_eq!(tile.period, "2018 - 2022");
        assert_eq!(tile.context, "City, Country");
        assert!(tile.score.is_none());
        assert!(tile.highlights.is_none());
        assert!(tile.honors.is_none());
    }

    #[test]
    fn test_courses_render_without_gpa_line() {
        let tiles = build_tiles(&[education(
            "State University",
            None,
            &["Algorithms", "Databases"],
            &[],
        )]);
        let tile = &tiles[0];
        assert!(tile.score.is_none());
        let highlights = tile.highlights.as_ref().unwrap();
        assert_eq!(highlights.label, "Course Highlights");
        assert_eq!(highlights.joined(), "Algorithms, Databases");
    }

    #[test]
    fn test_present_optionals_carry_source_values() {
        let tiles = build_tiles(&[education(
            "State University",
            Some(Score::Text("3.9/4.0".to_string())),
            &["Algorithms"],
            &["Dean's List"],
        )]);
        let tile = &tiles[0];
        assert_eq!(tile.score.as_ref().unwrap().value, "3.9/4.0");
        assert_eq!(tile.honors.as_ref().unwrap().joined(), "Dean's List");
    }

    #[test]
    fn test_open_ended_range_renders_verbatim() {
        let entry = ExperienceEntry {
            organization: "Streamhaven".to_string(),
            title: "Senior Data Engineer".to_string(),
            start: "2023".to_string(),
            end: "Present".to_string(),
            location: "Remote".to_string(),
            details: vec![],
            skills: vec!["Rust".to_string()],
        };
        let tile = entry.tile();
        assert_eq!(tile.period, "2023 - Present");
        assert!(tile.details.is_empty());
        assert_eq!(tile.highlights.as_ref().unwrap().label, "Key Skills");
    }

    #[test]
    fn test_empty_sequence_treated_as_absent() {
        let entry = ExperienceEntry {
            organization: "Helio Labs".to_string(),
            title: "Intern".to_string(),
            start: "2019".to_string(),
            end: "2019".to_string(),
            location: "Madison, WI".to_string(),
            details: vec![],
            skills: vec![],
        };
        assert!(entry.tile().highlights.is_none());
    }

    #[test]
    fn test_publication_tile_links_title() {
        let entry = PublicationEntry {
            title: "Paper".to_string(),
            venue: "Workshop".to_string(),
            year: "2023".to_string(),
            authors: vec!["A. One".to_string(), "B. Two".to_string()],
            url: Some("https://example.org/p.pdf".to_string()),
            notes: vec![],
        };
        let tile = entry.tile();
        assert_eq!(tile.href.as_deref(), Some("https://example.org/p.pdf"));
        assert_eq!(tile.context, "A. One, B. Two");
        assert_eq!(tile.period, "2023");
    }
}
