//! Candidate filters applied after deduplication.
//!
//! A filter either keeps a candidate (possibly transformed) or rejects it.
//! Filters run in the order they were added to the finder; the first
//! rejection short-circuits the rest of the chain for that candidate.

use crate::types::Icon;

/// One step of the filter chain.
pub trait IconFilter: Send + Sync {
    /// Returns the icon to keep (same or modified), or `None` to reject.
    fn apply(&self, icon: Icon) -> Option<Icon>;
}

/// Closures work as filters directly.
impl<F> IconFilter for F
where
    F: Fn(Icon) -> Option<Icon> + Send + Sync,
{
    fn apply(&self, icon: Icon) -> Option<Icon> {
        self(icon)
    }
}

/// Keeps only icons whose MIME type is in the allow-list.
pub struct MimeTypes(pub Vec<String>);

impl IconFilter for MimeTypes {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        self.0.iter().any(|m| *m == icon.mime_type).then_some(icon)
    }
}

/// Keeps only icons at least this wide.
pub struct MinWidth(pub u32);

impl IconFilter for MinWidth {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        (icon.width >= self.0).then_some(icon)
    }
}

/// Keeps only icons at most this wide.
pub struct MaxWidth(pub u32);

impl IconFilter for MaxWidth {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        (icon.width <= self.0).then_some(icon)
    }
}

/// Keeps only icons at least this tall.
pub struct MinHeight(pub u32);

impl IconFilter for MinHeight {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        (icon.height >= self.0).then_some(icon)
    }
}

/// Keeps only icons at most this tall.
pub struct MaxHeight(pub u32);

impl IconFilter for MaxHeight {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        (icon.height <= self.0).then_some(icon)
    }
}

/// Keeps only square icons.
///
/// Icons with unknown dimensions (0x0) count as square; combine with
/// [`KnownSizeOnly`] to exclude them.
pub struct SquareOnly;

impl IconFilter for SquareOnly {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        icon.is_square().then_some(icon)
    }
}

/// Keeps only icons with a known size.
pub struct KnownSizeOnly;

impl IconFilter for KnownSizeOnly {
    fn apply(&self, icon: Icon) -> Option<Icon> {
        (icon.width > 0 && icon.height > 0).then_some(icon)
    }
}
