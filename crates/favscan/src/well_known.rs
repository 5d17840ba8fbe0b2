//! Conventional icon locations probed at the site root.

use reqwest::Url;

/// Common names of icon files hosted in server roots.
pub const WELL_KNOWN_NAMES: &[&str] = &["favicon.ico", "apple-touch-icon.png"];

/// Builds the absolute root-relative probe URLs for `base`.
#[must_use]
pub fn well_known_urls(base: &Url, names: &[String]) -> Vec<String> {
    let root = base.origin().ascii_serialization();
    names.iter().map(|name| format!("{root}/{name}")).collect()
}
