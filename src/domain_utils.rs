use url::Url;

/// URL and host helpers used by the analyzer
pub struct DomainUtils;

impl DomainUtils {
    /// Trim and prepend `https://` when no http(s) scheme is present.
    /// The scheme check is case-sensitive.
    pub fn normalize_url(input: &str) -> String {
        let url = input.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{url}")
        }
    }

    /// Hostname of the URL, lower-cased. Falls back to the whole URL
    /// lower-cased when it does not parse or has no host.
    pub fn extract_domain(url: &str) -> String {
        match Url::parse(url) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) if !host.is_empty() => host.to_lowercase(),
                _ => {
                    log::debug!("No host in '{url}', using raw string as domain");
                    url.to_lowercase()
                }
            },
            Err(e) => {
                log::debug!("Could not parse '{url}' ({e}), using raw string as domain");
                url.to_lowercase()
            }
        }
    }

    /// Check if domain matches any in list (with hierarchy support)
    pub fn matches_domain_list(domain: &str, domain_list: &[String]) -> bool {
        let domain_lower = domain.to_lowercase();

        domain_list.iter().any(|pattern| {
            let pattern_lower = pattern.to_lowercase();
            domain_lower == pattern_lower || domain_lower.ends_with(&format!(".{pattern_lower}"))
        })
    }

    /// Number of dot-separated labels, empty labels included
    pub fn label_count(domain: &str) -> usize {
        domain.split('.').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(DomainUtils::normalize_url("bit.ly/xyz"), "https://bit.ly/xyz");
        assert_eq!(
            DomainUtils::normalize_url("  http://example.com  "),
            "http://example.com"
        );
        assert_eq!(
            DomainUtils::normalize_url("https://example.com"),
            "https://example.com"
        );
        // Upper-case schemes are not recognised
        assert_eq!(
            DomainUtils::normalize_url("HTTP://example.com"),
            "https://HTTP://example.com"
        );
        assert_eq!(DomainUtils::normalize_url(""), "https://");
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            DomainUtils::extract_domain("https://WWW.Example.com/path"),
            "www.example.com"
        );
        assert_eq!(DomainUtils::extract_domain("http://bit.ly/abc123"), "bit.ly");
        assert_eq!(
            DomainUtils::extract_domain("https://192.168.1.1/x"),
            "192.168.1.1"
        );
    }

    #[test]
    fn test_extract_domain_fallback() {
        assert_eq!(DomainUtils::extract_domain("https://[[["), "https://[[[");
        assert_eq!(DomainUtils::extract_domain("https://"), "https://");
        assert_eq!(
            DomainUtils::extract_domain("HTTPS://[Bad"),
            "https://[bad"
        );
    }

    #[test]
    fn test_matches_domain_list() {
        let domains = vec!["example.com".to_string(), "test.org".to_string()];

        assert!(DomainUtils::matches_domain_list("example.com", &domains));
        assert!(DomainUtils::matches_domain_list(
            "mail.example.com",
            &domains
        ));
        assert!(!DomainUtils::matches_domain_list("other.com", &domains));
        assert!(!DomainUtils::matches_domain_list(
            "notexample.com",
            &domains
        ));
        assert!(!DomainUtils::matches_domain_list(
            "example.com.evil.net",
            &domains
        ));
    }

    #[test]
    fn test_label_count() {
        assert_eq!(DomainUtils::label_count("example.com"), 2);
        assert_eq!(DomainUtils::label_count("a.b.c.d.example.com"), 6);
        assert_eq!(DomainUtils::label_count("localhost"), 1);
    }
}
