// Utility functions
use url::Url;

/// Checks that a website name is safe to use as a single path segment.
pub fn is_valid_site_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves `raw` against the page URL, keeping only http(s) targets without fragment.
pub fn resolve_link(base: &Url, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('#') {
        return None;
    }

    let mut url = base.join(raw).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_name_rejects_path_segments() {
        assert!(is_valid_site_name("example"));
        assert!(is_valid_site_name("example.com"));
        assert!(!is_valid_site_name(""));
        assert!(!is_valid_site_name("."));
        assert!(!is_valid_site_name(".."));
        assert!(!is_valid_site_name("../etc"));
        assert!(!is_valid_site_name("a\\b"));
        assert!(!is_valid_site_name("a\0b"));
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize_whitespace("  Hello \n\t world  "), "Hello world");
        assert_eq!(normalize_whitespace(" \n "), "");
    }

    #[test]
    fn links_resolve_against_base() {
        let base = Url::parse("https://example.com/docs/index.html").unwrap();

        let rel = resolve_link(&base, "guide.html#intro").unwrap();
        assert_eq!(rel.as_str(), "https://example.com/docs/guide.html");

        let abs = resolve_link(&base, "/about").unwrap();
        assert_eq!(abs.as_str(), "https://example.com/about");

        assert!(resolve_link(&base, "#top").is_none());
        assert!(resolve_link(&base, "mailto:hi@example.com").is_none());
        assert!(resolve_link(&base, "javascript:void(0)").is_none());
        assert!(resolve_link(&base, "   ").is_none());
    }
}
