//! Expansion of JSON icon manifests into candidates.

use reqwest::Url;

use crate::resolve::resolve;
use crate::sizes::parse_sizes;
use crate::types::{Icon, Manifest};

/// Decodes manifest bytes and expands the icon entries.
///
/// Each entry yields one candidate per parsable `WxH` pair in its `sizes`
/// string; an entry with no parsable size contributes nothing. An explicit
/// `type` is carried into the candidate like a markup `<link type=...>`.
/// Decode failure means zero icons, never a discovery-level error.
pub(crate) fn parse_manifest_bytes(bytes: &[u8], base: Option<&Url>) -> Vec<Icon> {
    let manifest: Manifest = match serde_json::from_slice(bytes) {
        Ok(manifest) => manifest,
        Err(err) => {
            tracing::warn!(error = %err, "manifest decode failed");
            return Vec::new();
        }
    };

    let mut icons = Vec::new();
    for entry in manifest.icons {
        let url = resolve(&entry.src, base);
        if url.is_empty() {
            continue;
        }
        tracing::debug!(url = %url, "manifest icon");
        let mime_type = entry.icon_type.unwrap_or_default();
        for (width, height) in parse_sizes(&entry.sizes) {
            icons.push(Icon {
                url: url.clone(),
                mime_type: mime_type.clone(),
                width,
                height,
                ..Icon::default()
            });
        }
    }
    icons
}
