//! Education listing: one tile per degree.

use crate::content::ContentStore;
use crate::pages::{ListingPage, PageMeta, PageShell};
use crate::tile::build_tiles;

pub const ROUTE: &str = "/education";

const DESCRIPTION: &str = "Degrees, coursework highlights, and academic honors.";

pub fn page(store: &ContentStore) -> ListingPage {
    ListingPage {
        shell: PageShell::new(
            &store.site,
            ROUTE,
            PageMeta::titled("Education", &store.site.owner, DESCRIPTION),
        ),
        heading: "Education",
        tiles: build_tiles(&store.education),
    }
}
