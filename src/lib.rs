//! Personal portfolio site generator.
//!
//! Renders a six-page portfolio (home, education, work experience, awards,
//! publications, contact) from JSON fixtures under `content/`:
//! - `content`: typed fixture loading plus the authoring lint
//! - `tile`: the list renderer mapping entries onto a common tile shape
//! - `reveal`: one-shot scroll-reveal contract and its generated assets
//! - `contact`: contact form state and mailto link construction
//! - `pages`: per-page view models over Askama templates
//! - `builder`: writes the finished HTML tree and assets
//! - `server` (feature `serve`): live preview over HTTP
//!
//! Two ways to run it: `build_site` renders everything into a static tree
//! for any file host; `site_server` serves the same pages live while
//! authoring.

pub mod builder;
pub mod contact;
pub mod content;
pub mod pages;
pub mod reveal;
pub mod tile;

#[cfg(feature = "serve")]
pub mod server;

// Re-export commonly used types
pub use builder::SiteBuilder;
pub use contact::{FormState, MailtoLink, MailtoTemplate};
pub use content::ContentStore;
pub use reveal::{RevealConfig, RevealState};
pub use tile::{build_tiles, Tile, TileSource};

#[cfg(feature = "serve")]
pub use server::{create_router, AppState};
