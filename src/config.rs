use crate::domain_age::DEFAULT_NEW_DOMAIN_PROBABILITY;
use crate::reference_lists::{
    to_owned_list, PHISHING_PATTERNS, SUSPICIOUS_KEYWORDS, TRUSTED_DOMAINS, URL_SHORTENERS,
};
use anyhow::{anyhow, Context};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reference lists and tuning for the analyzer. Any field left out of the
/// YAML file keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub trusted_domains: Vec<String>,
    pub url_shorteners: Vec<String>,
    pub suspicious_keywords: Vec<String>,
    pub phishing_patterns: Vec<String>,
    pub new_domain_probability: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            trusted_domains: to_owned_list(TRUSTED_DOMAINS),
            url_shorteners: to_owned_list(URL_SHORTENERS),
            suspicious_keywords: to_owned_list(SUSPICIOUS_KEYWORDS),
            phishing_patterns: to_owned_list(PHISHING_PATTERNS),
            new_domain_probability: DEFAULT_NEW_DOMAIN_PROBABILITY,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path}"))?;
        let config: AnalyzerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {path}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if Path::new(path).exists() {
            log::info!("Loading analyzer configuration from {path}");
            Self::from_file(path)
        } else {
            log::warn!("Configuration file '{path}' not found, using default configuration");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.new_domain_probability) {
            return Err(anyhow!(
                "new_domain_probability must be between 0 and 1, got {}",
                self.new_domain_probability
            ));
        }

        let lists = [
            ("trusted_domains", &self.trusted_domains),
            ("url_shorteners", &self.url_shorteners),
            ("suspicious_keywords", &self.suspicious_keywords),
            ("phishing_patterns", &self.phishing_patterns),
        ];
        for (field, entries) in lists {
            // An empty entry matches every URL
            if let Some(index) = entries.iter().position(|entry| entry.trim().is_empty()) {
                return Err(anyhow!("{field}[{index}] is empty"));
            }
        }

        self.compile_patterns()?;
        Ok(())
    }

    pub fn compile_patterns(&self) -> anyhow::Result<Vec<Regex>> {
        self.phishing_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| format!("invalid phishing pattern '{pattern}'"))
            })
            .collect()
    }
}
