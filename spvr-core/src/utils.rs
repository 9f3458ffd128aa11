/// Returns true if the URL carries an explicit `http://` or `https://` scheme.
pub fn has_explicit_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Ensures the URL has a scheme, defaulting to `https://` when absent.
pub fn add_prefix_if_needed(url: &str) -> String {
    if has_explicit_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Strips a leading `http(s)://` from a paymail domain.
///
/// Some instances report their paymail domain as a full URL; a paymail
/// address must be built from the bare domain.
pub fn strip_scheme(domain: &str) -> &str {
    domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_added_when_scheme_absent() {
        assert_eq!(add_prefix_if_needed("example.com"), "https://example.com");
        assert_eq!(
            add_prefix_if_needed("localhost:3003"),
            "https://localhost:3003"
        );
    }

    #[test]
    fn test_prefixed_urls_left_unchanged() {
        assert_eq!(
            add_prefix_if_needed("http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            add_prefix_if_needed("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_prefixing_is_idempotent() {
        let once = add_prefix_if_needed("example.com");
        assert_eq!(add_prefix_if_needed(&once), once);
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com"), "example.com");
        assert_eq!(strip_scheme("http://example.com"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }
}
