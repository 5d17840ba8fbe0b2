//! Ordering policies for the final candidate list.

use std::cmp::Ordering;

use crate::types::Icon;

/// Total-order policy used to sort final candidates.
pub trait IconRank: Send + Sync {
    fn compare(&self, a: &Icon, b: &Icon) -> Ordering;
}

/// Closures work as ranking policies directly.
impl<F> IconRank for F
where
    F: Fn(&Icon, &Icon) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &Icon, b: &Icon) -> Ordering {
        self(a, b)
    }
}

/// Default policy: widest first, then format priority, then URL.
///
/// The URL tiebreak makes the order deterministic across runs.
pub struct ByWidth;

impl IconRank for ByWidth {
    fn compare(&self, a: &Icon, b: &Icon) -> Ordering {
        b.width
            .cmp(&a.width)
            .then_with(|| format_rank(&b.mime_type).cmp(&format_rank(&a.mime_type)))
            .then_with(|| a.url.cmp(&b.url))
    }
}

/// Preserves discovery order.
pub struct Unranked;

impl IconRank for Unranked {
    fn compare(&self, _: &Icon, _: &Icon) -> Ordering {
        Ordering::Equal
    }
}

/// Fixed format priority; higher wins, unranked formats sort last.
fn format_rank(mime_type: &str) -> u8 {
    match mime_type {
        "image/png" => 10,
        "image/jpeg" => 9,
        "image/svg+xml" | "image/svg" => 8,
        // .ico under either registered name
        "image/x-icon" | "image/vnd.microsoft.icon" => 7,
        _ => 0,
    }
}
