//! Candidate normalization and identity-based deduplication.
//!
//! Every extractor hands raw candidates here: URLs may still be relative,
//! MIME types and extensions missing, sizes unknown. Normalization fills
//! what it can, drops what stays unresolvable, and collapses duplicates by
//! identity hash.

use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::resolve::resolve;
use crate::sizes::size_from_url;
use crate::types::Icon;

/// Normalizes one candidate, or drops it.
///
/// Re-resolves the URL (idempotent when already absolute), derives the MIME
/// type from the file extension when missing, derives the extension from
/// the URL path, falls back to URL heuristics for an unknown size, and
/// computes the identity hash over the final URL and dimensions.
///
/// Returns `None` when URL or MIME type cannot be resolved; such drops are
/// expected for noisy input and are not logged as errors.
pub(crate) fn normalize_icon(mut icon: Icon, base: Option<&Url>) -> Option<Icon> {
    icon.url = resolve(&icon.url, base);

    if icon.mime_type.is_empty() {
        icon.mime_type = mime_from_url(&icon.url);
    }
    if icon.url.is_empty() || icon.mime_type.is_empty() {
        return None;
    }

    if icon.file_ext.is_empty() {
        icon.file_ext = file_ext(&icon.url);
    }

    if icon.width == 0 {
        if let Some((w, h)) = size_from_url(&icon.url) {
            icon.width = w;
            icon.height = h;
        }
    }

    icon.hash = icon_hash(&icon);
    Some(icon)
}

/// Normalizes all candidates and collapses duplicates.
///
/// Duplicates share an identity hash; the last-processed duplicate's field
/// values win, at the position of the first occurrence. The returned list
/// preserves discovery order so that an unranked pipeline stays
/// deterministic; ordering beyond that is the ranker's job.
pub(crate) fn dedupe(icons: Vec<Icon>, base: Option<&Url>) -> Vec<Icon> {
    let mut by_hash = std::collections::HashMap::new();
    let mut out: Vec<Icon> = Vec::new();

    for icon in icons {
        let Some(icon) = normalize_icon(icon, base) else {
            continue;
        };
        match by_hash.get(&icon.hash) {
            Some(&index) => out[index] = icon,
            None => {
                by_hash.insert(icon.hash.clone(), out.len());
                out.push(icon);
            }
        }
    }
    out
}

/// Identity hash over URL and dimensions.
fn icon_hash(icon: &Icon) -> String {
    let key = format!("{}-{}x{}", icon.url, icon.width, icon.height);
    format!("{:x}", Sha256::digest(key.as_bytes()))
}

/// MIME type derived from the file extension in a URL.
///
/// Returns an empty string for unknown or missing extensions.
pub(crate) fn mime_from_url(url: &str) -> String {
    let mime = match file_ext(url).as_str() {
        "ico" => "image/x-icon",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "",
    };
    mime.to_owned()
}

/// Lower-case file extension from a URL path, without the leading dot.
pub(crate) fn file_ext(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let name = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
