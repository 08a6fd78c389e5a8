// Built-in reference tables. AnalyzerConfig copies these when no override is given.

/// Known legitimate sites; exact host or any subdomain of one is trusted
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "amazon.com",
    "microsoft.com",
    "apple.com",
    "github.com",
    "stackoverflow.com",
    "wikipedia.org",
    "linkedin.com",
    "twitter.com",
    "instagram.com",
];

/// Link shortening services, matched as substrings of the host
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "buff.ly",
    "adf.ly",
    "j.mp",
    "rb.gy",
    "short.io",
    "cutt.ly",
];

/// Words commonly found in phishing links. Order matters for factor labels.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login",
    "verify",
    "update",
    "confirm",
    "account",
    "secure",
    "banking",
    "password",
    "credential",
    "suspend",
    "urgent",
    "reward",
    "winner",
    "prize",
    "free",
    "gift",
    "claim",
    "limited",
    "expire",
    "alert",
    "warning",
    "immediately",
];

/// Regex shapes of known phishing URLs, matched against the whole URL.
///
/// Case folding is ASCII-only and `.` is spelled as a class that stops at
/// line terminators, so the patterns behave like browser regexes.
pub const PHISHING_PATTERNS: &[&str] = &[
    r"(?i-u:paypal)[^\n\r\x{2028}\x{2029}]*(?i-u:login)",
    r"(?i-u:bank)[^\n\r\x{2028}\x{2029}]*(?i-u:verify)",
    r"(?i-u:account)[^\n\r\x{2028}\x{2029}]*(?i-u:suspend)",
    r"(?i-u:secure)[^\n\r\x{2028}\x{2029}]*(?i-u:update)",
    // IPv4 literal
    r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}",
    r"@[^\n\r\x{2028}\x{2029}]*@",
    // hyphenated host token
    r"(?i-u:[a-z0-9]+-[a-z0-9]+-[a-z0-9]+\.)",
];

pub fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_builtin_patterns_compile() {
        for pattern in PHISHING_PATTERNS {
            assert!(Regex::new(pattern).is_ok(), "pattern failed: {pattern}");
        }
    }

    #[test]
    fn test_lists_are_lowercase() {
        for entry in TRUSTED_DOMAINS
            .iter()
            .chain(URL_SHORTENERS)
            .chain(SUSPICIOUS_KEYWORDS)
        {
            assert_eq!(*entry, entry.to_lowercase());
        }
    }
}
