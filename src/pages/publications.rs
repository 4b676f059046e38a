//! Publications listing: one tile per paper, titles linked when a URL is
//! on file.

use crate::content::ContentStore;
use crate::pages::{ListingPage, PageMeta, PageShell};
use crate::tile::build_tiles;

pub const ROUTE: &str = "/publications";

const DESCRIPTION: &str = "Papers and articles, with links to full text where available.";

pub fn page(store: &ContentStore) -> ListingPage {
    ListingPage {
        shell: PageShell::new(
            &store.site,
            ROUTE,
            PageMeta::titled("Publications", &store.site.owner, DESCRIPTION),
        ),
        heading: "Publications",
        tiles: build_tiles(&store.publications),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PublicationEntry;

    #[test]
    fn test_unlinked_publication_gets_plain_tile() {
        let mut store = ContentStore::sample();
        store.publications.push(PublicationEntry {
            title: "A Paper".to_string(),
            venue: "Some Workshop".to_string(),
            year: "2022".to_string(),
            authors: vec![],
            url: None,
            notes: vec![],
        });
        let page = page(&store);
        assert!(page.tiles[0].href.is_none());
        assert_eq!(page.tiles[0].context, "");
    }
}
