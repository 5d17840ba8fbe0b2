//! Parsing of `WxH` size tokens and `-N` filename suffixes.

use std::sync::LazyLock;

use regex::Regex;

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)x(\d+)").expect("valid size regex"));
static TRAILING_NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d+)$").expect("valid suffix regex"));

/// Extracts all `WxH` pairs from a size-attribute string, in input order.
///
/// Tokens may be separated by any non-digit text, so this works unchanged
/// on markup `sizes="16x16 32x32"`, manifest sizes strings and whole URLs.
/// Unparsable input yields an empty vec, never an error.
#[must_use]
pub fn parse_sizes(s: &str) -> Vec<(u32, u32)> {
    SIZE_RE
        .captures_iter(s)
        .filter_map(|caps| {
            let w = caps.get(1)?.as_str().parse().ok()?;
            let h = caps.get(2)?.as_str().parse().ok()?;
            Some((w, h))
        })
        .collect()
}

/// Tries to find icon dimensions in a URL.
///
/// Looks for a `WxH` pattern anywhere in the URL first, then for a `-N`
/// suffix on the filename stem (e.g. `icon-512.png`), which is read as a
/// square NxN size. Used only as a fallback when no explicit size is known.
#[must_use]
pub fn size_from_url(url: &str) -> Option<(u32, u32)> {
    if let Some(&first) = parse_sizes(url).first() {
        return Some(first);
    }

    let parsed = reqwest::Url::parse(url).ok()?;
    let name = parsed.path_segments()?.next_back()?;
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    let n: u32 = TRAILING_NUM_RE.captures(stem)?.get(1)?.as_str().parse().ok()?;
    Some((n, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_input_order() {
        assert_eq!(
            parse_sizes("48x48 32x32 16x16"),
            vec![(48, 48), (32, 32), (16, 16)]
        );
    }

    #[test]
    fn parses_single_pair() {
        assert_eq!(parse_sizes("180x180"), vec![(180, 180)]);
    }

    #[test]
    fn uppercase_separator_accepted() {
        assert_eq!(parse_sizes("16X16"), vec![(16, 16)]);
    }

    #[test]
    fn unparsable_input_yields_nothing() {
        assert!(parse_sizes("").is_empty());
        assert!(parse_sizes("any").is_empty());
        assert!(parse_sizes("x").is_empty());
    }

    #[test]
    fn size_from_url_prefers_wxh_pattern() {
        assert_eq!(
            size_from_url("https://example.com/icons/favicon-196x196.png"),
            Some((196, 196))
        );
        assert_eq!(
            size_from_url("https://example.com/i/icon-64x32.png"),
            Some((64, 32))
        );
    }

    #[test]
    fn size_from_url_falls_back_to_trailing_suffix() {
        assert_eq!(
            size_from_url("https://example.com/icon-512.png"),
            Some((512, 512))
        );
    }

    #[test]
    fn size_from_url_ignores_plain_names() {
        assert_eq!(size_from_url("https://example.com/favicon.ico"), None);
        assert_eq!(size_from_url("https://example.com/"), None);
    }

    #[test]
    fn size_from_url_needs_suffix_at_stem_end() {
        assert_eq!(size_from_url("https://example.com/icon-512-old.png"), None);
    }
}
