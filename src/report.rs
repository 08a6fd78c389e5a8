use crate::risk::{AnalysisResult, RiskLevel, Severity};
use serde::Serialize;
use std::fmt;

/// One analyzed URL, as emitted in JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    pub url: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl ScanEntry {
    pub fn new(url: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            url: url.into(),
            result,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub safe: usize,
    pub suspicious: usize,
    pub dangerous: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[ScanEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            summary.record(entry.result.risk_level);
        }
        summary
    }

    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Safe => self.safe += 1,
            RiskLevel::Suspicious => self.suspicious += 1,
            RiskLevel::Dangerous => self.dangerous += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.suspicious + self.dangerous
    }

    pub fn any_dangerous(&self) -> bool {
        self.dangerous > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scanned: {} safe, {} suspicious, {} dangerous",
            self.total(),
            self.safe,
            self.suspicious,
            self.dangerous
        )
    }
}

fn level_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "✅",
        RiskLevel::Suspicious => "⚠️",
        RiskLevel::Dangerous => "🚨",
    }
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "·",
        Severity::Medium => "!",
        Severity::High => "‼",
    }
}

pub fn render_text(entry: &ScanEntry) -> String {
    let result = &entry.result;
    let mut out = format!(
        "🔍 {}\n   {} {} (score {}/100)\n   {}\n",
        entry.url,
        level_marker(result.risk_level),
        result.risk_level.display_label(),
        result.risk_score,
        result.explanation
    );

    for factor in &result.risk_factors {
        out.push_str(&format!(
            "     {} [{}] {}\n",
            severity_marker(factor.severity),
            factor.severity,
            factor.label
        ));
    }
    out.push_str(&format!("   → {}\n", result.recommendation));

    out
}

pub fn render_json(entries: &[ScanEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{FactorIcon, RiskFactor};

    fn entry(url: &str, score: i32) -> ScanEntry {
        let factors = vec![RiskFactor::new(
            FactorIcon::ShieldOff,
            "No HTTPS encryption",
            Severity::High,
        )];
        ScanEntry::new(url, AnalysisResult::from_raw_score(score, factors))
    }

    #[test]
    fn test_batch_summary_counts() {
        let entries = vec![
            entry("http://a.example", 10),
            entry("http://b.example", 30),
            entry("http://c.example", 60),
            entry("http://d.example", 90),
        ];
        let summary = BatchSummary::from_entries(&entries);

        assert_eq!(summary.safe, 1);
        assert_eq!(summary.suspicious, 1);
        assert_eq!(summary.dangerous, 2);
        assert_eq!(summary.total(), 4);
        assert!(summary.any_dangerous());
        assert_eq!(
            summary.to_string(),
            "4 scanned: 1 safe, 1 suspicious, 2 dangerous"
        );
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&entry("http://example.com", 25));

        assert!(text.contains("http://example.com"));
        assert!(text.contains("SUSPICIOUS (score 25/100)"));
        assert!(text.contains("[high] No HTTPS encryption"));
        assert!(text.contains("Proceed carefully"));
    }

    #[test]
    fn test_render_json_flattens_result() {
        let json = render_json(&[entry("http://example.com", 60)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["url"], "http://example.com");
        assert_eq!(value[0]["riskScore"], 60);
        assert_eq!(value[0]["riskLevel"], "dangerous");
        assert_eq!(value[0]["riskFactors"][0]["icon"], "ShieldOff");
    }
}
