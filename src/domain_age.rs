use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

pub const DEFAULT_NEW_DOMAIN_PROBABILITY: f64 = 0.3;

const NEW_DOMAIN_LABEL: &str = "Less than 30 days";
const ESTABLISHED_DOMAIN_LABEL: &str = "Over 1 year";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAge {
    pub is_new: bool,
    pub age_label: String,
}

impl DomainAge {
    pub fn new_domain() -> Self {
        Self {
            is_new: true,
            age_label: NEW_DOMAIN_LABEL.to_string(),
        }
    }

    pub fn established() -> Self {
        Self {
            is_new: false,
            age_label: ESTABLISHED_DOMAIN_LABEL.to_string(),
        }
    }
}

/// Where the analyzer gets its domain age verdict from.
///
/// No registry lookup exists; implementations either simulate or pin the answer.
pub trait DomainAgeSource: Send + Sync {
    fn lookup(&self, domain: &str) -> DomainAge;
}

/// Random draw: a domain is "new" with the configured probability
#[derive(Debug)]
pub struct SimulatedDomainAge {
    new_domain_probability: f64,
    rng: Mutex<StdRng>,
}

impl Default for SimulatedDomainAge {
    fn default() -> Self {
        Self::new(DEFAULT_NEW_DOMAIN_PROBABILITY)
    }
}

impl SimulatedDomainAge {
    pub fn new(new_domain_probability: f64) -> Self {
        Self::with_rng(new_domain_probability, StdRng::from_entropy())
    }

    /// Reproducible sequence of draws for a given seed
    pub fn seeded(new_domain_probability: f64, seed: u64) -> Self {
        Self::with_rng(new_domain_probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(new_domain_probability: f64, rng: StdRng) -> Self {
        let probability = if new_domain_probability.is_finite() {
            new_domain_probability.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "Invalid new domain probability {new_domain_probability}, using {DEFAULT_NEW_DOMAIN_PROBABILITY}"
            );
            DEFAULT_NEW_DOMAIN_PROBABILITY
        };

        Self {
            new_domain_probability: probability,
            rng: Mutex::new(rng),
        }
    }

    pub fn new_domain_probability(&self) -> f64 {
        self.new_domain_probability
    }
}

impl DomainAgeSource for SimulatedDomainAge {
    fn lookup(&self, domain: &str) -> DomainAge {
        let is_new = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_bool(self.new_domain_probability)
        };
        log::debug!("Simulated domain age for {domain}: new={is_new}");

        if is_new {
            DomainAge::new_domain()
        } else {
            DomainAge::established()
        }
    }
}

/// Always returns the same verdict
#[derive(Debug, Clone)]
pub struct FixedDomainAge(pub DomainAge);

impl FixedDomainAge {
    pub fn new_domain() -> Self {
        Self(DomainAge::new_domain())
    }

    pub fn established() -> Self {
        Self(DomainAge::established())
    }
}

impl DomainAgeSource for FixedDomainAge {
    fn lookup(&self, _domain: &str) -> DomainAge {
        self.0.clone()
    }
}
