//! Validator configuration

use serde::{Deserialize, Serialize};

/// Configuration for a validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Fact-table column holding the actual value
    #[serde(default = "default_actual_column")]
    pub actual_column: String,

    /// Fact-table column holding the plan value
    #[serde(default = "default_plan_column")]
    pub plan_column: String,

    /// Variance tolerance in percentage points, applied when a claim
    /// declares an expected variance but no tolerance of its own
    #[serde(default = "default_variance_tolerance")]
    pub default_variance_tolerance: f64,
}

fn default_actual_column() -> String {
    "Actual".to_string()
}

fn default_plan_column() -> String {
    "Plan".to_string()
}

fn default_variance_tolerance() -> f64 {
    0.5
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            actual_column: default_actual_column(),
            plan_column: default_plan_column(),
            default_variance_tolerance: default_variance_tolerance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.actual_column, "Actual");
        assert_eq!(config.plan_column, "Plan");
        assert_eq!(config.default_variance_tolerance, 0.5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ValidatorConfig = toml::from_str(r#"actual_column = "ActualUSD""#).unwrap();
        assert_eq!(config.actual_column, "ActualUSD");
        assert_eq!(config.plan_column, "Plan");
    }
}
