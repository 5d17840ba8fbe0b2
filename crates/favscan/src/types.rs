//! Core record types: the [`Icon`] candidate and the JSON manifest shapes.
//!
//! ## Observed manifest shape
//!
//! Real-world `manifest.json` / `site.webmanifest` files carry an `icons`
//! array of `{src, sizes, type}` objects. `sizes` is a space-separated list
//! of `WxH` tokens and is frequently empty or absent; an entry with no
//! parsable size contributes no candidates. `type` is an explicit MIME hint
//! and is honored the same way a markup `<link type=...>` is.

use serde::{Deserialize, Serialize};

/// A site icon discovered for a page.
///
/// Produced by every extractor and finalized by normalization: after a
/// discovery call returns, `url` is absolute and non-empty, `mime_type` is
/// non-empty, and `hash` uniquely identifies the icon by URL and
/// dimensions. A width and height of `0` mean "unknown", not zero-sized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Icon {
    /// Absolute URL of the icon. Never empty on finalized icons.
    pub url: String,

    /// MIME type, from markup/manifest metadata or derived from the URL's
    /// file extension. Never empty on finalized icons.
    #[serde(rename = "mimetype")]
    pub mime_type: String,

    /// Lower-case file extension without the leading dot. May be empty.
    #[serde(rename = "extension")]
    pub file_ext: String,

    /// Width in pixels; `0` when unknown.
    pub width: u32,

    /// Height in pixels; `0` when unknown.
    pub height: u32,

    /// SHA-256 over URL and dimensions; identical hashes mean the same icon.
    pub hash: String,
}

impl Icon {
    /// Returns true if the icon has equally-long sides.
    ///
    /// An icon with completely unknown dimensions (0x0) reports square.
    /// Callers that want only icons known to be square should combine
    /// square and known-size filters.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// The relevant parts of a `manifest.json` file.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub icons: Vec<ManifestIcon>,
}

/// One entry of a manifest's `icons` array.
#[derive(Debug, Deserialize)]
pub struct ManifestIcon {
    /// Icon URL, possibly relative to the page.
    #[serde(default)]
    pub src: String,

    /// Space-separated `WxH` tokens, e.g. `"192x192 512x512"`.
    #[serde(default)]
    pub sizes: String,

    /// Explicit MIME type, e.g. `"image/png"`.
    #[serde(default, rename = "type")]
    pub icon_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_for_equal_sides() {
        let icon = Icon {
            width: 180,
            height: 180,
            ..Icon::default()
        };
        assert!(icon.is_square());
    }

    #[test]
    fn square_for_unknown_dimensions() {
        assert!(Icon::default().is_square());
    }

    #[test]
    fn not_square_for_unequal_sides() {
        let icon = Icon {
            width: 32,
            height: 16,
            ..Icon::default()
        };
        assert!(!icon.is_square());
    }

    #[test]
    fn icon_serializes_with_wire_field_names() {
        let icon = Icon {
            url: "https://example.com/f.png".to_owned(),
            mime_type: "image/png".to_owned(),
            file_ext: "png".to_owned(),
            width: 32,
            height: 32,
            hash: "abc".to_owned(),
        };
        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["mimetype"], "image/png");
        assert_eq!(json["extension"], "png");
        assert_eq!(json["url"], "https://example.com/f.png");
    }

    #[test]
    fn manifest_deserializes_with_missing_fields() {
        let manifest: Manifest =
            serde_json::from_str(r#"{"icons":[{"src":"/a.png"}]}"#).unwrap();
        assert_eq!(manifest.icons.len(), 1);
        assert_eq!(manifest.icons[0].src, "/a.png");
        assert!(manifest.icons[0].sizes.is_empty());
        assert!(manifest.icons[0].icon_type.is_none());
    }
}
