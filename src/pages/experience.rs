//! Work experience listing: one tile per role.

use crate::content::ContentStore;
use crate::pages::{ListingPage, PageMeta, PageShell};
use crate::tile::build_tiles;

pub const ROUTE: &str = "/work-experience";

const DESCRIPTION: &str = "Roles held, what they involved, and the skills behind them.";

pub fn page(store: &ContentStore) -> ListingPage {
    ListingPage {
        shell: PageShell::new(
            &store.site,
            ROUTE,
            PageMeta::titled("Work Experience", &store.site.owner, DESCRIPTION),
        ),
        heading: "Work Experience",
        tiles: build_tiles(&store.experience),
    }
}
