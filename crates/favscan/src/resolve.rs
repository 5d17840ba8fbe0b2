//! Resolution of possibly-relative URLs against the page base.

use reqwest::Url;

/// Resolves `input` against `base`.
///
/// With no base the input is returned unchanged, which covers entry points
/// with no known origin. Absolute inputs are returned verbatim and never
/// re-based. A relative input that cannot be joined resolves to the empty
/// string; callers drop such candidates.
pub(crate) fn resolve(input: &str, base: Option<&Url>) -> String {
    if input.is_empty() {
        return String::new();
    }
    let Some(base) = base else {
        return input.to_owned();
    };
    if Url::parse(input).is_ok() {
        return input.to_owned();
    }
    base.join(input).map(|u| u.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(resolve("", None), "");
        assert_eq!(resolve("", Some(&base("https://github.com"))), "");
    }

    #[test]
    fn no_base_returns_input_unchanged() {
        assert_eq!(resolve("/root", None), "/root");
    }

    #[test]
    fn relative_input_joined_with_base() {
        assert_eq!(
            resolve("/root", Some(&base("https://github.com"))),
            "https://github.com/root"
        );
        assert_eq!(
            resolve("icons/a.png", Some(&base("https://github.com/pages/x"))),
            "https://github.com/pages/icons/a.png"
        );
    }

    #[test]
    fn absolute_input_returned_verbatim() {
        assert_eq!(
            resolve("https://github.com/root", Some(&base("https://google.com"))),
            "https://github.com/root"
        );
        assert_eq!(resolve("https://github.com/root", None), "https://github.com/root");
    }
}
