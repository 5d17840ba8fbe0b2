//! Open Graph and Twitter image extraction.
//!
//! Image attributes arrive as separate meta tags interleaved with the
//! image-URL tag itself, in document order, with no grouping boundary other
//! than the next image key. Both extractors therefore run the same state
//! machine over the ordered key/value pairs harvested from the markup scan:
//! an image key flushes the current candidate and starts a new one, and
//! `*:type` / `*:width` / `*:height` keys mutate the current candidate in
//! place.

use crate::types::Icon;

/// Extracts icons from `og:image*` property/content pairs.
pub(crate) fn parse_opengraph(pairs: &[(String, String)]) -> Vec<Icon> {
    collect_images(pairs, &["og:image"], "og:image:")
}

/// Extracts icons from `twitter:image*` property/content pairs.
pub(crate) fn parse_twitter(pairs: &[(String, String)]) -> Vec<Icon> {
    collect_images(pairs, &["twitter:image", "twitter:image:src"], "twitter:image:")
}

fn collect_images(pairs: &[(String, String)], image_keys: &[&str], prefix: &str) -> Vec<Icon> {
    let mut icons = Vec::new();
    let mut current: Option<Icon> = None;

    for (key, value) in pairs {
        if image_keys.contains(&key.as_str()) {
            if let Some(done) = current.take() {
                icons.push(done);
            }
            tracing::debug!(url = %value, key = %key, "social image");
            current = Some(Icon {
                url: value.clone(),
                ..Icon::default()
            });
            continue;
        }

        let Some(icon) = current.as_mut() else {
            continue;
        };
        match key.strip_prefix(prefix) {
            Some("type") => icon.mime_type.clone_from(value),
            // Unparsable numbers are ignored, not errors.
            Some("width") => {
                if let Ok(n) = value.parse() {
                    icon.width = n;
                }
            }
            Some("height") => {
                if let Ok(n) = value.parse() {
                    icon.height = n;
                }
            }
            _ => {}
        }
    }

    if let Some(done) = current {
        icons.push(done);
    }
    icons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(kv: &[(&str, &str)]) -> Vec<(String, String)> {
        kv.iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn attributes_apply_to_preceding_image() {
        let icons = parse_opengraph(&pairs(&[
            ("og:image", "http://x/a.jpg"),
            ("og:image:width", "100"),
            ("og:image:height", "50"),
            ("og:image", "http://x/b.jpg"),
        ]));
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].url, "http://x/a.jpg");
        assert_eq!(icons[0].width, 100);
        assert_eq!(icons[0].height, 50);
        assert_eq!(icons[1].url, "http://x/b.jpg");
        assert_eq!(icons[1].width, 0);
        assert_eq!(icons[1].height, 0);
    }

    #[test]
    fn type_key_sets_mime() {
        let icons = parse_opengraph(&pairs(&[
            ("og:image", "http://x/a.png"),
            ("og:image:type", "image/png"),
        ]));
        assert_eq!(icons[0].mime_type, "image/png");
    }

    #[test]
    fn unparsable_dimension_is_ignored() {
        let icons = parse_opengraph(&pairs(&[
            ("og:image", "http://x/a.png"),
            ("og:image:width", "wide"),
        ]));
        assert_eq!(icons[0].width, 0);
    }

    #[test]
    fn attributes_before_any_image_are_dropped() {
        let icons = parse_opengraph(&pairs(&[
            ("og:image:width", "100"),
            ("og:image", "http://x/a.png"),
        ]));
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].width, 0);
    }

    #[test]
    fn twitter_accepts_both_image_keys() {
        let icons = parse_twitter(&pairs(&[
            ("twitter:image:src", "http://x/a.png"),
            ("twitter:image", "http://x/b.png"),
        ]));
        assert_eq!(icons.len(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_opengraph(&[]).is_empty());
        assert!(parse_twitter(&[]).is_empty());
    }
}
