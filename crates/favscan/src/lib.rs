//! favscan finds icons for websites.
//!
//! It can find icons in HTML (favicons in `<link>` elements, Open Graph or
//! Twitter images) and in JSON manifests, or check common paths on the
//! server (e.g. `/favicon.ico`). Candidates from all sources are
//! normalized, deduplicated and ranked into a single ordered list.
//!
//! The crate-level [`find`] and [`find_in_html`] functions build a
//! default-configured [`Finder`] per call. For customised behaviour,
//! configure one via [`Finder::builder`] and reuse it.

pub mod error;
pub mod filter;
pub mod finder;
pub mod rank;
pub mod sizes;
pub mod types;
pub mod well_known;

mod html;
mod manifest;
mod normalize;
mod resolve;
mod social;

pub use error::FindError;
pub use finder::{Finder, FinderBuilder};
pub use types::Icon;

/// Finds icons for the page at `url` with a default-configured [`Finder`].
///
/// # Errors
///
/// Returns an error when `url` is unparsable or the page cannot be fetched.
pub async fn find(url: &str) -> Result<Vec<Icon>, FindError> {
    Finder::builder().build()?.find(url).await
}

/// Finds icons in an HTML document with a default-configured [`Finder`].
///
/// # Errors
///
/// Returns an error when `base_url` is given but unparsable.
pub async fn find_in_html(page: &str, base_url: Option<&str>) -> Result<Vec<Icon>, FindError> {
    Finder::builder().build()?.find_in_html(page, base_url).await
}
