//! Contact page: the two-field form plus a plain mailto fallback.

use askama::Template;

use crate::content::ContentStore;
use crate::pages::{PageMeta, PageShell};

pub const ROUTE: &str = "/contact";

const DESCRIPTION: &str = "Send a message; it opens ready to go in your mail client.";

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactPage {
    pub shell: PageShell,
    pub email: String,
}

pub fn page(store: &ContentStore) -> ContactPage {
    ContactPage {
        shell: PageShell::new(
            &store.site,
            ROUTE,
            PageMeta::titled("Contact", &store.site.owner, DESCRIPTION),
        ),
        email: store.site.email.clone(),
    }
}
