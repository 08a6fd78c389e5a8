use crate::config::AnalyzerConfig;
use crate::domain_age::{DomainAgeSource, SimulatedDomainAge};
use crate::domain_utils::DomainUtils;
use crate::risk::{AnalysisResult, FactorIcon, RiskFactor, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

const NO_HTTPS_SCORE: i32 = 25;
const SHORTENER_SCORE: i32 = 20;
const KEYWORD_SCORE: i32 = 10;
const KEYWORD_SCORE_CAP: i32 = 30;
const PHISHING_PATTERN_SCORE: i32 = 35;
const EXCESSIVE_SUBDOMAIN_SCORE: i32 = 15;
const UNUSUAL_CHARACTER_SCORE: i32 = 25;
const NEW_DOMAIN_SCORE: i32 = 15;

/// More labels than this counts as an unusual subdomain structure
const MAX_DOMAIN_LABELS: usize = 4;
/// Keywords named in the factor label
const LISTED_KEYWORDS: usize = 3;

static DEFAULT_ANALYZER: Lazy<UrlAnalyzer> = Lazy::new(UrlAnalyzer::new);

/// Score a URL with the built-in lists and a simulated domain age
pub fn analyze_url(input: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(input)
}

/// Heuristic URL risk classifier.
///
/// A trusted host short-circuits to a fixed safe verdict. Otherwise every
/// check runs and contributes to a summed score, which is bucketed into a
/// [`crate::RiskLevel`] before the reported score is clamped to 0..=100.
pub struct UrlAnalyzer {
    trusted_domains: Vec<String>,
    url_shorteners: Vec<String>,
    suspicious_keywords: Vec<String>,
    phishing_patterns: Vec<Regex>,
    domain_age: Box<dyn DomainAgeSource>,
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlAnalyzer {
    pub fn new() -> Self {
        let config = AnalyzerConfig::default();

        let phishing_patterns = config
            .phishing_patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    log::warn!("Skipping phishing pattern '{pattern}': {e}");
                    None
                }
            })
            .collect();

        Self {
            trusted_domains: config.trusted_domains,
            url_shorteners: lowercase_all(&config.url_shorteners),
            suspicious_keywords: lowercase_all(&config.suspicious_keywords),
            phishing_patterns,
            domain_age: Box::new(SimulatedDomainAge::new(config.new_domain_probability)),
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(Self {
            trusted_domains: config.trusted_domains.clone(),
            url_shorteners: lowercase_all(&config.url_shorteners),
            suspicious_keywords: lowercase_all(&config.suspicious_keywords),
            phishing_patterns: config.compile_patterns()?,
            domain_age: Box::new(SimulatedDomainAge::new(config.new_domain_probability)),
        })
    }

    /// Replace the domain age strategy
    pub fn with_domain_age(mut self, source: impl DomainAgeSource + 'static) -> Self {
        self.domain_age = Box::new(source);
        self
    }

    pub fn analyze(&self, input: &str) -> AnalysisResult {
        let url = DomainUtils::normalize_url(input);
        let domain = DomainUtils::extract_domain(&url);

        if self.is_trusted_domain(&domain) {
            log::debug!("{domain} is on the trusted list");
            return AnalysisResult::trusted();
        }

        let mut score = 0;
        let mut factors = Vec::new();

        if Self::is_https(&url) {
            factors.push(RiskFactor::new(
                FactorIcon::Lock,
                "HTTPS secured",
                Severity::Low,
            ));
        } else {
            log::debug!("{url}: no HTTPS");
            score += NO_HTTPS_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::ShieldOff,
                "No HTTPS encryption",
                Severity::High,
            ));
        }

        if self.is_url_shortener(&domain) {
            log::debug!("{domain}: URL shortener");
            score += SHORTENER_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::Link2,
                "URL shortener detected",
                Severity::Medium,
            ));
        }

        let keywords = self.find_suspicious_keywords(&url);
        if !keywords.is_empty() {
            log::debug!("{url}: suspicious keywords {keywords:?}");
            score += (keywords.len() as i32 * KEYWORD_SCORE).min(KEYWORD_SCORE_CAP);
            let listed: Vec<&str> = keywords.iter().take(LISTED_KEYWORDS).copied().collect();
            let severity = if keywords.len() > 2 {
                Severity::High
            } else {
                Severity::Medium
            };
            factors.push(RiskFactor::new(
                FactorIcon::AlertTriangle,
                format!("Suspicious keywords: {}", listed.join(", ")),
                severity,
            ));
        }

        if self.matches_phishing_pattern(&url) {
            log::debug!("{url}: matches phishing pattern");
            score += PHISHING_PATTERN_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::Skull,
                "Matches known phishing patterns",
                Severity::High,
            ));
        }

        if Self::has_excessive_subdomains(&domain) {
            log::debug!("{domain}: excessive subdomains");
            score += EXCESSIVE_SUBDOMAIN_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::GitBranch,
                "Unusual subdomain structure",
                Severity::Medium,
            ));
        }

        if Self::has_unusual_characters(&url) {
            log::debug!("{url}: unusual characters");
            score += UNUSUAL_CHARACTER_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::Type,
                "Unusual characters detected",
                Severity::High,
            ));
        }

        let age = self.domain_age.lookup(&domain);
        if age.is_new {
            log::debug!("{domain}: registered {}", age.age_label);
            score += NEW_DOMAIN_SCORE;
            factors.push(RiskFactor::new(
                FactorIcon::Clock,
                "Recently registered domain",
                Severity::Medium,
            ));
        }

        AnalysisResult::from_raw_score(score, factors)
    }

    pub fn is_trusted_domain(&self, domain: &str) -> bool {
        DomainUtils::matches_domain_list(domain, &self.trusted_domains)
    }

    pub fn is_https(url: &str) -> bool {
        url.to_lowercase().starts_with("https://")
    }

    pub fn is_url_shortener(&self, domain: &str) -> bool {
        self.url_shorteners
            .iter()
            .any(|shortener| domain.contains(shortener.as_str()))
    }

    /// Distinct keywords present anywhere in the URL, in list order
    pub fn find_suspicious_keywords(&self, url: &str) -> Vec<&str> {
        let url_lower = url.to_lowercase();
        self.suspicious_keywords
            .iter()
            .filter(|keyword| url_lower.contains(keyword.as_str()))
            .map(|keyword| keyword.as_str())
            .collect()
    }

    pub fn matches_phishing_pattern(&self, url: &str) -> bool {
        self.phishing_patterns.iter().any(|re| re.is_match(url))
    }

    pub fn has_excessive_subdomains(domain: &str) -> bool {
        DomainUtils::label_count(domain) > MAX_DOMAIN_LABELS
    }

    /// Non-ASCII text (lookalike attacks) or an encoded NUL
    pub fn has_unusual_characters(url: &str) -> bool {
        !url.is_ascii() || url.contains("%00")
    }
}

fn lowercase_all(list: &[String]) -> Vec<String> {
    list.iter().map(|s| s.to_lowercase()).collect()
}
