//! Destination URL validation and host derivation.

use url::Url;

/// Derives the host a destination URL must resolve to.
///
/// The destination must be a well-formed absolute URL with an `http` or
/// `https` scheme and a host component. Pairs whose destination fails this
/// check are rejected before any navigator interaction.
///
/// # Arguments
///
/// * `raw` - The destination URL exactly as it appeared in the input file
///
/// # Returns
///
/// `Some(host)` if the destination is valid, `None` otherwise.
pub fn destination_host(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return None,
    }
    parsed.host_str().map(str::to_string)
}

/// Extracts the host of an observed hop URL.
///
/// Hop URLs come from the navigator (the landed page or a `Location`
/// header); one that does not parse or has no host is a transient condition
/// handled by the caller, not a precondition failure.
pub fn host_of(raw: &str) -> Option<String> {
    Url::parse(raw).ok()?.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{destination_host, host_of};

    #[test]
    fn test_destination_host_https() {
        assert_eq!(
            destination_host("https://example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_destination_host_with_path_and_port() {
        assert_eq!(
            destination_host("http://example.com:8080/landing?c=1"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_destination_host_rejects_relative() {
        assert_eq!(destination_host("/just/a/path"), None);
        assert_eq!(destination_host("example.com"), None);
    }

    #[test]
    fn test_destination_host_rejects_garbage() {
        assert_eq!(destination_host("not a url"), None);
        assert_eq!(destination_host(""), None);
    }

    #[test]
    fn test_destination_host_rejects_non_http_scheme() {
        assert_eq!(destination_host("ftp://example.com"), None);
        assert_eq!(destination_host("mailto:ops@example.com"), None);
    }

    #[test]
    fn test_host_of_lowercases() {
        // The url crate normalizes hosts, so comparisons are case-insensitive
        assert_eq!(
            host_of("https://EXAMPLE.com/Path"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_host_of_garbage() {
        assert_eq!(host_of("%%%"), None);
        assert_eq!(host_of("data:text/plain,hello"), None);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_destination_host_matches_hop_host(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            // A destination and a hop on the same domain must derive the same host,
            // regardless of path or query differences.
            let dest = format!("https://{domain}");
            let hop = format!("https://{domain}/some/path?q=1");
            prop_assert_eq!(destination_host(&dest), host_of(&hop));
        }

        #[test]
        fn test_destination_host_no_panic(raw in "\\PC{0,100}") {
            let _ = destination_host(&raw);
            let _ = host_of(&raw);
        }
    }
}
