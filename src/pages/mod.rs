//! Page view models.
//!
//! One module per page. The four record-backed pages (education, work
//! experience, awards, publications) share [`ListingPage`] and the tile
//! partial; home and contact have their own templates. Every page carries a
//! [`PageShell`] with the document metadata and navigation state the base
//! layout renders.

pub mod awards;
pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
pub mod publications;

use askama::Template;
use chrono::{Datelike, Utc};

use crate::content::{SiteLink, SiteProfile};
use crate::tile::Tile;

/// Document metadata rendered into `<head>`: title, description, and the
/// matching Open Graph / Twitter card tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Inner pages are titled "<Page> | <Owner>".
    pub fn titled(page: &str, owner: &str, description: &str) -> Self {
        Self {
            title: format!("{} | {}", page, owner),
            description: description.to_string(),
        }
    }

    /// The home page is titled with the owner's name alone.
    pub fn home(site: &SiteProfile) -> Self {
        Self {
            title: site.owner.clone(),
            description: site.tagline.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Navigation entries in display order.
const NAV: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Education", "/education"),
    ("Work Experience", "/work-experience"),
    ("Awards", "/awards"),
    ("Publications", "/publications"),
    ("Contact", "/contact"),
];

/// Everything the base layout needs around a page's own content.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub meta: PageMeta,
    pub owner: String,
    pub links: Vec<SiteLink>,
    pub nav: Vec<NavItem>,
    pub year: i32,
    pub generated_at: String,
}

impl PageShell {
    pub fn new(site: &SiteProfile, route: &str, meta: PageMeta) -> Self {
        let now = Utc::now();
        Self {
            meta,
            owner: site.owner.clone(),
            links: site.links.clone(),
            nav: NAV
                .iter()
                .map(|&(label, href)| NavItem {
                    label,
                    href,
                    active: href == route,
                })
                .collect(),
            year: now.year(),
            generated_at: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Shared view model for the four tile-listing pages.
#[derive(Template)]
#[template(path = "pages/listing.html")]
pub struct ListingPage {
    pub shell: PageShell,
    pub heading: &'static str,
    pub tiles: Vec<Tile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SiteProfile {
        SiteProfile {
            owner: "Jordan Blake".to_string(),
            tagline: "Systems engineer".to_string(),
            email: "hello@jordanblake.dev".to_string(),
            greeting: vec!["Hi.".to_string()],
            links: vec![],
        }
    }

    #[test]
    fn test_inner_page_title_format() {
        let meta = PageMeta::titled("Education", "Jordan Blake", "Degrees.");
        assert_eq!(meta.title, "Education | Jordan Blake");
        assert_eq!(meta.description, "Degrees.");
    }

    #[test]
    fn test_home_title_is_owner_name() {
        let meta = PageMeta::home(&profile());
        assert_eq!(meta.title, "Jordan Blake");
        assert_eq!(meta.description, "Systems engineer");
    }

    #[test]
    fn test_shell_marks_exactly_one_nav_item_active() {
        let site = profile();
        let shell = PageShell::new(&site, "/awards", PageMeta::home(&site));
        let active: Vec<&str> = shell
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Awards"]);
    }

    #[test]
    fn test_nav_order_is_stable() {
        let site = profile();
        let shell = PageShell::new(&site, "/", PageMeta::home(&site));
        let labels: Vec<&str> = shell.nav.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "Home",
                "Education",
                "Work Experience",
                "Awards",
                "Publications",
                "Contact"
            ]
        );
    }
}
