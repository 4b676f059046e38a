//! Awards listing: one tile per recognition.

use crate::content::ContentStore;
use crate::pages::{ListingPage, PageMeta, PageShell};
use crate::tile::build_tiles;

pub const ROUTE: &str = "/awards";

const DESCRIPTION: &str = "Recognition and honors, newest first as authored.";

pub fn page(store: &ContentStore) -> ListingPage {
    ListingPage {
        shell: PageShell::new(
            &store.site,
            ROUTE,
            PageMeta::titled("Awards", &store.site.owner, DESCRIPTION),
        ),
        heading: "Awards",
        tiles: build_tiles(&store.awards),
    }
}
