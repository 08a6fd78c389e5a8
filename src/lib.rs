pub mod analyzer;
pub mod config;
pub mod domain_age;
pub mod domain_utils;
pub mod reference_lists;
pub mod report;
pub mod risk;

pub use analyzer::{analyze_url, UrlAnalyzer};
pub use config::AnalyzerConfig;
pub use domain_age::{DomainAge, DomainAgeSource, FixedDomainAge, SimulatedDomainAge};
pub use risk::{AnalysisResult, FactorIcon, RiskFactor, RiskLevel, Severity};
