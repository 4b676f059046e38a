//! Home page: name, tagline, and the markdown greeting.

use askama::Template;
use pulldown_cmark::{html, Parser};

use crate::content::ContentStore;
use crate::pages::{PageMeta, PageShell};

pub const ROUTE: &str = "/";

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub shell: PageShell,
    pub tagline: String,
    pub greeting_html: String,
}

pub fn page(store: &ContentStore) -> HomePage {
    HomePage {
        shell: PageShell::new(&store.site, ROUTE, PageMeta::home(&store.site)),
        tagline: store.site.tagline.clone(),
        greeting_html: markdown_to_html(&store.site.greeting_markdown()),
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_paragraphs_and_emphasis() {
        let html = markdown_to_html("Hi, I'm **Jordan**.\n\nSecond paragraph.");
        assert!(html.contains("<p>Hi, I'm <strong>Jordan</strong>.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
    }

    #[test]
    fn test_markdown_links_survive() {
        let html = markdown_to_html("See [the repo](https://example.com).");
        assert!(html.contains("<a href=\"https://example.com\">the repo</a>"));
    }
}
