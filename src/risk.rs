use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the reported score. Bucketing happens before clamping.
pub const MAX_REPORTED_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskLevel {
    /// Bucket a raw (unclamped) score.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s <= 20 => RiskLevel::Safe,
            s if s <= 50 => RiskLevel::Suspicious,
            _ => RiskLevel::Dangerous,
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "This link appears to be safe based on our analysis.",
            RiskLevel::Suspicious => "This link has some characteristics that warrant caution.",
            RiskLevel::Dangerous => "This link shows multiple high-risk indicators.",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "This link shows no common threat patterns. Safe to visit.",
            RiskLevel::Suspicious => {
                "This link shows patterns often used in scams. Proceed carefully and verify the source."
            }
            RiskLevel::Dangerous => "High risk detected. We strongly recommend avoiding this link.",
        }
    }

    /// Badge text used by the terminal report
    pub fn display_label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Suspicious => "SUSPICIOUS",
            RiskLevel::Dangerous => "DANGEROUS",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Dangerous => "dangerous",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(name)
    }
}

/// Presentation hint for whatever renders a factor. Carries no scoring meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorIcon {
    Shield,
    ShieldOff,
    Lock,
    Link2,
    AlertTriangle,
    Skull,
    GitBranch,
    Type,
    Clock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub icon: FactorIcon,
    pub label: String,
    pub severity: Severity,
}

impl RiskFactor {
    pub fn new(icon: FactorIcon, label: impl Into<String>, severity: Severity) -> Self {
        Self {
            icon,
            label: label.into(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendation: String,
}

impl AnalysisResult {
    /// Build a result from the raw summed score. The level is taken from the
    /// raw score, the reported score is clamped.
    pub fn from_raw_score(raw_score: i32, risk_factors: Vec<RiskFactor>) -> Self {
        let risk_level = RiskLevel::from_score(raw_score);
        Self {
            risk_score: raw_score.clamp(0, MAX_REPORTED_SCORE),
            risk_level,
            explanation: risk_level.explanation().to_string(),
            risk_factors,
            recommendation: risk_level.recommendation().to_string(),
        }
    }

    /// Fixed verdict for hosts on the trusted list
    pub fn trusted() -> Self {
        Self {
            risk_score: 5,
            risk_level: RiskLevel::Safe,
            explanation: "This is a well-known, trusted website.".to_string(),
            risk_factors: vec![RiskFactor::new(
                FactorIcon::Shield,
                "Verified trusted domain",
                Severity::Low,
            )],
            recommendation: RiskLevel::Safe.recommendation().to_string(),
        }
    }
}
