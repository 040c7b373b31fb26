//! Claim validation logic

use crate::config::ValidatorConfig;
use margin_domain::{Claim, Table, ValidationOutcome, ValidationSummary};
use tracing::{debug, info};

/// The Validator re-derives claimed metrics from a fact table.
///
/// Stateless between runs: each call reads only its own claims and fact
/// table and produces a fresh outcome sequence, so independent runs may
/// execute concurrently without interference.
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a Validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a Validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidatorConfig::default())
    }

    /// Validate every claim against the fact table.
    ///
    /// Total: every claim yields exactly one outcome, including claims
    /// whose filter matches no rows (explicit zero result) and claims over
    /// columns the table does not have.
    pub fn validate(&self, claims: &[Claim], facts: &Table) -> Vec<ValidationOutcome> {
        let outcomes: Vec<ValidationOutcome> = claims
            .iter()
            .map(|claim| self.validate_claim(claim, facts))
            .collect();

        let valid = outcomes.iter().filter(|o| o.is_valid).count();
        info!(
            total = outcomes.len(),
            valid,
            invalid = outcomes.len() - valid,
            "validation run complete"
        );

        outcomes
    }

    /// Validate a single claim
    fn validate_claim(&self, claim: &Claim, facts: &Table) -> ValidationOutcome {
        let matching = self.matching_rows(claim, facts);

        // Zero matches is an explicit zero result, not a skip; several
        // matches represent an intentionally partitioned line item and sum
        let mut actual = 0.0;
        let mut plan = 0.0;
        for &row in &matching {
            actual += facts.numeric(row, &self.config.actual_column).unwrap_or(0.0);
            plan += facts.numeric(row, &self.config.plan_column).unwrap_or(0.0);
        }

        let mut expected_actual = claim.expected_actual;
        let mut expected_plan = claim.expected_plan;
        if claim.normalize_sign {
            actual = actual.abs();
            plan = plan.abs();
            expected_actual = expected_actual.abs();
            expected_plan = expected_plan.map(f64::abs);
        }

        let variance_pct = if plan != 0.0 {
            (actual - plan) / plan * 100.0
        } else {
            0.0
        };

        let variance_tolerance = claim
            .variance_tolerance
            .unwrap_or(self.config.default_variance_tolerance);

        // Each comparison without an expected counterpart is vacuously true
        let mut is_valid = (actual - expected_actual).abs() < claim.tolerance;
        if let Some(ep) = expected_plan {
            is_valid = is_valid && (plan - ep).abs() < claim.tolerance;
        }
        if let Some(ev) = claim.expected_variance_pct {
            is_valid = is_valid && (variance_pct - ev).abs() < variance_tolerance;
        }

        // Reporting magnitude only; pass/fail is the threshold test above
        let delta = match claim.expected_variance_pct {
            Some(ev) => (variance_pct - ev).abs(),
            None => (actual - expected_actual).abs(),
        };

        let notes = format!(
            "matched {} row(s): actual={:.0}, plan={:.0}, variance={:.1}%",
            matching.len(),
            actual,
            plan,
            variance_pct
        );

        debug!(claim = %claim.description, is_valid, delta, "claim checked");

        ValidationOutcome {
            claim: claim.clone(),
            computed_actual: actual,
            computed_plan: plan,
            computed_variance_pct: variance_pct,
            is_valid,
            delta,
            notes,
        }
    }

    /// Indices of fact rows accepted by every matcher of the claim
    fn matching_rows(&self, claim: &Claim, facts: &Table) -> Vec<usize> {
        (0..facts.rows.len())
            .filter(|&row| {
                claim.matchers.iter().all(|matcher| {
                    facts
                        .value(row, &matcher.column)
                        .is_some_and(|cell| matcher.predicate.matches(cell))
                })
            })
            .collect()
    }
}

/// Aggregate a run's outcomes into summary statistics
pub fn summarize(outcomes: &[ValidationOutcome]) -> ValidationSummary {
    let total = outcomes.len();
    let valid_count = outcomes.iter().filter(|o| o.is_valid).count();
    let invalid_count = total - valid_count;
    let accuracy_rate_pct = if total > 0 {
        valid_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    ValidationSummary {
        total,
        valid_count,
        invalid_count,
        accuracy_rate_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use margin_domain::{AccuracyBand, Matcher};

    fn pnl_facts() -> Table {
        Table::new(
            vec![
                "Type".to_string(),
                "LineItem".to_string(),
                "Actual".to_string(),
                "Plan".to_string(),
            ],
            vec![
                vec![
                    "Net Sales".to_string(),
                    "Sales_Food".to_string(),
                    "320433".to_string(),
                    "341386".to_string(),
                ],
                vec![
                    "Net Sales".to_string(),
                    "Sales_Beverage".to_string(),
                    "15826".to_string(),
                    "19442".to_string(),
                ],
                vec![
                    "Net Sales".to_string(),
                    "Sales_Promotion".to_string(),
                    "-19458".to_string(),
                    "-14164".to_string(),
                ],
                vec![
                    "Labor".to_string(),
                    "Labor_Hourly".to_string(),
                    "48000".to_string(),
                    "45000".to_string(),
                ],
                vec![
                    "Labor".to_string(),
                    "Labor_Management".to_string(),
                    "22000".to_string(),
                    "21000".to_string(),
                ],
            ],
        )
    }

    fn food_sales_claim() -> Claim {
        Claim::new(
            "Food Sales: $320,433 actual vs $341,386 plan (-6.1%)",
            vec![
                Matcher::equals("Type", "Net Sales"),
                Matcher::contains("LineItem", "Sales_Food"),
            ],
        )
        .expect_actual(320433.0)
        .expect_plan(341386.0)
        .expect_variance_pct(-6.1)
    }

    #[test]
    fn test_single_matching_row_valid() {
        let validator = Validator::default_config();
        let outcomes = validator.validate(&[food_sales_claim()], &pnl_facts());

        let outcome = &outcomes[0];
        assert!(outcome.is_valid);
        assert_eq!(outcome.computed_actual, 320433.0);
        assert_eq!(outcome.computed_plan, 341386.0);
        // (320433 - 341386) / 341386 * 100 ≈ -6.14
        assert!((outcome.computed_variance_pct - (-6.14)).abs() < 0.01);
        assert!(outcome.delta < 0.5);
    }

    #[test]
    fn test_no_matching_rows_reports_zero_invalid() {
        let validator = Validator::default_config();
        let claim = Claim::new(
            "Retail sales",
            vec![
                Matcher::equals("Type", "Net Sales"),
                Matcher::contains("LineItem", "Sales_Retail"),
            ],
        )
        .expect_actual(320433.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert_eq!(outcome.computed_actual, 0.0);
        assert_eq!(outcome.computed_plan, 0.0);
        assert_eq!(outcome.computed_variance_pct, 0.0);
        assert!(!outcome.is_valid);
        assert!(outcome.notes.contains("matched 0 row(s)"));
    }

    #[test]
    fn test_no_matching_rows_with_zero_expectation_valid() {
        let validator = Validator::default_config();
        let claim = Claim::new(
            "No retail revenue this period",
            vec![Matcher::contains("LineItem", "Sales_Retail")],
        )
        .expect_actual(0.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_multiple_matching_rows_summed() {
        let validator = Validator::default_config();
        let claim = Claim::new("Total labor", vec![Matcher::equals("Type", "Labor")])
            .expect_actual(70000.0)
            .expect_plan(66000.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert_eq!(outcome.computed_actual, 70000.0);
        assert_eq!(outcome.computed_plan, 66000.0);
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_sign_normalization() {
        let validator = Validator::default_config();
        // Promotions are stored negative; the claim quotes them positive
        let claim = Claim::new(
            "Sales Promotions: $19,458 vs $14,164 (+37.4%)",
            vec![Matcher::contains("LineItem", "Sales_Promotion")],
        )
        .expect_actual(19458.0)
        .expect_plan(14164.0)
        .expect_variance_pct(37.4)
        .with_sign_normalization();

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert_eq!(outcome.computed_actual, 19458.0);
        assert_eq!(outcome.computed_plan, 14164.0);
        assert!((outcome.computed_variance_pct - 37.4).abs() < 0.1);
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_without_sign_normalization_negative_rows_fail() {
        let validator = Validator::default_config();
        let claim = Claim::new(
            "Sales Promotions, sign not normalized",
            vec![Matcher::contains("LineItem", "Sales_Promotion")],
        )
        .expect_actual(19458.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert_eq!(outcome.computed_actual, -19458.0);
        assert!(!outcome.is_valid);
    }

    #[test]
    fn test_zero_plan_yields_zero_variance() {
        let validator = Validator::default_config();
        let facts = Table::new(
            vec!["Type".to_string(), "Actual".to_string(), "Plan".to_string()],
            vec![vec!["Other".to_string(), "500".to_string(), "0".to_string()]],
        );
        let claim = Claim::new("Unplanned income", vec![Matcher::equals("Type", "Other")])
            .expect_actual(500.0);

        let outcome = &validator.validate(&[claim], &facts)[0];
        assert_eq!(outcome.computed_variance_pct, 0.0);
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_missing_expectations_vacuously_true() {
        let validator = Validator::default_config();
        // Plan and variance expectations omitted: only the actual is checked
        let claim = Claim::new(
            "Beverage actual only",
            vec![Matcher::contains("LineItem", "Sales_Beverage")],
        )
        .expect_actual(15826.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_variance_beyond_tolerance_invalid() {
        let validator = Validator::default_config();
        let claim = food_sales_claim().expect_variance_pct(-3.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert!(!outcome.is_valid);
        // delta reports the variance gap: |-6.14 - (-3.0)| ≈ 3.14
        assert!((outcome.delta - 3.14).abs() < 0.01);
    }

    #[test]
    fn test_claim_tolerance_overrides_default() {
        let validator = Validator::default_config();
        let claim = food_sales_claim()
            .expect_variance_pct(-3.0)
            .with_variance_tolerance(5.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert!(outcome.is_valid);
    }

    #[test]
    fn test_missing_column_matches_nothing() {
        let validator = Validator::default_config();
        let claim = Claim::new("Bad column", vec![Matcher::equals("Nope", "x")])
            .expect_actual(100.0);

        let outcome = &validator.validate(&[claim], &pnl_facts())[0];
        assert_eq!(outcome.computed_actual, 0.0);
        assert!(!outcome.is_valid);
    }

    #[test]
    fn test_empty_facts_table() {
        let validator = Validator::default_config();
        let outcome = &validator.validate(&[food_sales_claim()], &Table::empty())[0];
        assert_eq!(outcome.computed_actual, 0.0);
        assert!(!outcome.is_valid);
    }

    #[test]
    fn test_summarize_counts_and_rate() {
        let validator = Validator::default_config();
        let claims = vec![
            food_sales_claim(),
            Claim::new("Wrong", vec![Matcher::equals("Type", "Net Sales")])
                .expect_actual(1.0),
        ];
        let outcomes = validator.validate(&claims, &pnl_facts());
        let summary = summarize(&outcomes);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.accuracy_rate_pct, 50.0);
        assert_eq!(summary.band(), AccuracyBand::Poor);
    }

    #[test]
    fn test_summarize_empty_run() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.accuracy_rate_pct, 0.0);
    }
}
