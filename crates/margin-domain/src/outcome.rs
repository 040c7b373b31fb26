//! Validation outcome and run summary types

use crate::claim::Claim;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recomputed metrics and verdict for one claim.
///
/// Never mutated after creation; re-derivable from the claim and the fact
/// table alone. A mismatch beyond tolerance surfaces as `is_valid = false`
/// plus the numeric `delta`, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The claim that was checked
    pub claim: Claim,

    /// Actual value recomputed from the matching fact rows
    pub computed_actual: f64,

    /// Plan value recomputed from the matching fact rows
    pub computed_plan: f64,

    /// Variance percentage recomputed from the values above
    pub computed_variance_pct: f64,

    /// Whether every supplied expectation held within tolerance
    pub is_valid: bool,

    /// Magnitude of the mismatch, for reporting only: the variance gap when
    /// the claim declared an expected variance, the actual-value gap
    /// otherwise
    pub delta: f64,

    /// Human-readable note about what the fact data showed
    pub notes: String,
}

/// Aggregate statistics for one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of claims checked
    pub total: usize,

    /// Claims that held within tolerance
    pub valid_count: usize,

    /// Claims that did not
    pub invalid_count: usize,

    /// valid / total, in percent (0 when no claims were checked)
    pub accuracy_rate_pct: f64,
}

impl ValidationSummary {
    /// Qualitative band for the accuracy rate
    pub fn band(&self) -> AccuracyBand {
        AccuracyBand::from_rate(self.accuracy_rate_pct)
    }
}

/// Qualitative accuracy band, attached to summaries purely for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyBand {
    /// At least 95% of claims valid
    Excellent,
    /// At least 85%
    Good,
    /// At least 70%
    Fair,
    /// Below 70%
    Poor,
}

impl AccuracyBand {
    /// Band for an accuracy rate in percent
    pub fn from_rate(rate_pct: f64) -> Self {
        if rate_pct >= 95.0 {
            AccuracyBand::Excellent
        } else if rate_pct >= 85.0 {
            AccuracyBand::Good
        } else if rate_pct >= 70.0 {
            AccuracyBand::Fair
        } else {
            AccuracyBand::Poor
        }
    }

    /// Reporting message for this band
    pub fn message(&self) -> &'static str {
        match self {
            AccuracyBand::Excellent => "EXCELLENT: analysis is highly accurate",
            AccuracyBand::Good => "GOOD: analysis is mostly accurate with minor discrepancies",
            AccuracyBand::Fair => "FAIR: analysis has some accuracy issues",
            AccuracyBand::Poor => "POOR: analysis has significant accuracy problems",
        }
    }
}

impl fmt::Display for AccuracyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(AccuracyBand::from_rate(100.0), AccuracyBand::Excellent);
        assert_eq!(AccuracyBand::from_rate(95.0), AccuracyBand::Excellent);
        assert_eq!(AccuracyBand::from_rate(94.9), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_rate(85.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_rate(70.0), AccuracyBand::Fair);
        assert_eq!(AccuracyBand::from_rate(69.9), AccuracyBand::Poor);
        assert_eq!(AccuracyBand::from_rate(0.0), AccuracyBand::Poor);
    }

    #[test]
    fn test_summary_band() {
        let summary = ValidationSummary {
            total: 10,
            valid_count: 9,
            invalid_count: 1,
            accuracy_rate_pct: 90.0,
        };
        assert_eq!(summary.band(), AccuracyBand::Good);
    }
}
