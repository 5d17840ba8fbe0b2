//! Single-pass markup scan for icon `<link>` elements and `<meta>` tags.
//!
//! The scan collects three things at once: icon candidates from link
//! elements, the manifest location for the page, and the ordered
//! `og:image*` / `twitter:image*` key/value pairs that the social
//! extractors consume afterwards.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::resolve::resolve;
use crate::sizes::parse_sizes;
use crate::types::Icon;

static LINK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>").expect("valid regex"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));

/// Link relations that mark an icon element.
const ICON_RELS: &[&str] = &[
    "icon",
    "alternate icon",
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    // for site-specific browser apps, https://fluidapp.com/
    "fluid-icon",
];

/// Everything one pass over the markup produces.
#[derive(Debug, Default)]
pub(crate) struct PageScan {
    /// Candidates from icon-relation `<link>` elements.
    pub icons: Vec<Icon>,
    /// Manifest location: an explicit `<link rel="manifest">` when present,
    /// otherwise the `/manifest.json` guess resolved against the base.
    pub manifest_url: String,
    /// Declared page charset, informational only.
    pub charset: Option<String>,
    /// Ordered `og:image*` property/content pairs.
    pub opengraph: Vec<(String, String)>,
    /// Ordered `twitter:image*` property/content pairs.
    pub twitter: Vec<(String, String)>,
}

/// Scans `html` for icon links and image meta tags.
pub(crate) fn parse_page(html: &str, base: Option<&Url>) -> PageScan {
    let mut scan = PageScan {
        manifest_url: resolve("/manifest.json", base),
        ..PageScan::default()
    };

    for m in LINK_TAG_RE.find_iter(html) {
        let tag = m.as_str();
        let Some(rel) = extract_attr(tag, "rel") else {
            continue;
        };
        let rel = rel.to_ascii_lowercase();

        if ICON_RELS.contains(&rel.as_str()) {
            scan.icons.extend(parse_link(tag, base));
        } else if rel == "manifest" {
            let url = resolve(&extract_attr(tag, "href").unwrap_or_default(), base);
            if !url.is_empty() {
                scan.manifest_url = url;
            }
        }
    }

    for m in META_TAG_RE.find_iter(html) {
        let tag = m.as_str();
        if let Some(charset) = extract_attr(tag, "charset") {
            scan.charset = Some(charset);
            continue;
        }

        // `property` wins over `name` when both are present.
        let prop = extract_attr(tag, "property").or_else(|| extract_attr(tag, "name"));
        let (Some(prop), Some(content)) = (prop, extract_attr(tag, "content")) else {
            continue;
        };
        if prop.is_empty() || content.is_empty() {
            continue;
        }

        let prop = prop.to_ascii_lowercase();
        if prop.starts_with("og:image") {
            scan.opengraph.push((prop, content));
        } else if prop.starts_with("twitter:image") {
            scan.twitter.push((prop, content));
        }
    }

    scan
}

/// Expands one icon `<link>` element into candidates.
///
/// A `sizes` attribute with several parsable pairs yields one candidate per
/// pair; with no parsable size, exactly one size-unknown candidate.
fn parse_link(tag: &str, base: Option<&Url>) -> Vec<Icon> {
    let href = resolve(&extract_attr(tag, "href").unwrap_or_default(), base);
    if href.is_empty() {
        return Vec::new();
    }
    tracing::debug!(url = %href, "link icon");

    let icon = Icon {
        url: href,
        mime_type: extract_attr(tag, "type").unwrap_or_default(),
        ..Icon::default()
    };

    let sizes = extract_attr(tag, "sizes").unwrap_or_default();
    let parsed = parse_sizes(&sizes);
    if parsed.is_empty() {
        return vec![icon];
    }
    parsed
        .into_iter()
        .map(|(width, height)| Icon {
            width,
            height,
            ..icon.clone()
        })
        .collect()
}

/// Reads a quoted attribute value out of a raw tag.
fn extract_attr(tag: &str, attr: &str) -> Option<String> {
    let pattern = format!(r#"(?is)\b{}\s*=\s*["']([^"']*)["']"#, regex::escape(attr));
    let re = Regex::new(&pattern).expect("valid attr regex");
    re.captures(tag)
        .and_then(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn link_with_sizes_expands_per_pair() {
        let html = r#"<link rel="icon" sizes="16x16 32x32" href="/f.png">"#;
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.icons.len(), 2);
        assert_eq!(scan.icons[0].url, "https://example.com/f.png");
        assert_eq!(scan.icons[0].width, 16);
        assert_eq!(scan.icons[1].width, 32);
    }

    #[test]
    fn link_without_sizes_yields_one_unknown_size_candidate() {
        let html = r#"<link rel="shortcut icon" type="image/x-icon" href="/favicon.ico">"#;
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.icons.len(), 1);
        assert_eq!(scan.icons[0].mime_type, "image/x-icon");
        assert_eq!(scan.icons[0].width, 0);
    }

    #[test]
    fn apple_touch_and_fluid_rels_are_icons() {
        let html = concat!(
            r#"<link rel="apple-touch-icon" href="/a.png">"#,
            r#"<link rel="apple-touch-icon-precomposed" href="/b.png">"#,
            r#"<link rel="fluid-icon" href="/c.png">"#,
            r#"<link rel="stylesheet" href="/style.css">"#,
        );
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.icons.len(), 3);
    }

    #[test]
    fn link_with_missing_href_is_skipped() {
        let html = r#"<link rel="icon" sizes="16x16">"#;
        let scan = parse_page(html, Some(&base()));
        assert!(scan.icons.is_empty());
    }

    #[test]
    fn manifest_link_overrides_default_guess() {
        let scan = parse_page("<html></html>", Some(&base()));
        assert_eq!(scan.manifest_url, "https://example.com/manifest.json");

        let html = r#"<link rel="manifest" href="/site.webmanifest">"#;
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.manifest_url, "https://example.com/site.webmanifest");
    }

    #[test]
    fn charset_is_captured() {
        let html = r#"<meta charset="utf-8"><meta name="og:image" content="/x.png">"#;
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.charset.as_deref(), Some("utf-8"));
    }

    #[test]
    fn social_pairs_accumulate_in_document_order() {
        let html = concat!(
            r#"<meta property="og:image" content="http://x/a.jpg">"#,
            r#"<meta property="og:image:width" content="100">"#,
            r#"<meta name="twitter:image" content="http://x/t.png">"#,
        );
        let scan = parse_page(html, Some(&base()));
        assert_eq!(
            scan.opengraph,
            vec![
                ("og:image".to_owned(), "http://x/a.jpg".to_owned()),
                ("og:image:width".to_owned(), "100".to_owned()),
            ]
        );
        assert_eq!(
            scan.twitter,
            vec![("twitter:image".to_owned(), "http://x/t.png".to_owned())]
        );
    }

    #[test]
    fn property_wins_over_name() {
        let html = r#"<meta name="description" property="og:image" content="/x.png">"#;
        let scan = parse_page(html, Some(&base()));
        assert_eq!(scan.opengraph.len(), 1);
        assert_eq!(scan.opengraph[0].0, "og:image");
    }

    #[test]
    fn empty_content_is_skipped() {
        let html = r#"<meta property="og:image" content="">"#;
        let scan = parse_page(html, Some(&base()));
        assert!(scan.opengraph.is_empty());
    }
}
