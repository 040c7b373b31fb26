//! Claim module - an assertion of an expected metric value
//!
//! Claims are checked against a ground-truth fact table by the validator.
//! They are plain data: a description, a declarative row filter, the
//! expected numbers, and the tolerances that decide pass/fail. Claim sets
//! are typically loaded from TOML files.

use serde::{Deserialize, Serialize};

/// How a matcher compares a cell against its target value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPredicate {
    /// Exact string equality, for categorical columns like `Type`
    Equals(String),

    /// Case-sensitive substring containment, for text columns like a
    /// line-item label fragment
    Contains(String),
}

impl MatchPredicate {
    /// Test a cell value against this predicate
    pub fn matches(&self, cell: &str) -> bool {
        match self {
            MatchPredicate::Equals(expected) => cell == expected,
            MatchPredicate::Contains(fragment) => cell.contains(fragment),
        }
    }
}

/// One column filter of a claim.
///
/// In TOML a matcher reads as either
/// `{ column = "Type", equals = "Net Sales" }` or
/// `{ column = "LineItem", contains = "Sales_Food" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matcher {
    /// Fact-table column the predicate applies to
    pub column: String,

    /// The comparison to perform
    #[serde(flatten)]
    pub predicate: MatchPredicate,
}

impl Matcher {
    /// Exact-equality matcher
    pub fn equals(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            predicate: MatchPredicate::Equals(value.into()),
        }
    }

    /// Substring matcher
    pub fn contains(column: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            predicate: MatchPredicate::Contains(fragment.into()),
        }
    }
}

/// An assertion of an expected metric value.
///
/// A fact row belongs to the claim when every matcher accepts it. The
/// validator recomputes actual/plan from the matching rows and compares
/// against the expected values within the declared tolerances; expectations
/// that are not supplied are skipped (vacuously true).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Human-readable statement of the claim
    pub description: String,

    /// Row filter; all matchers must accept a row
    #[serde(default)]
    pub matchers: Vec<Matcher>,

    /// Expected actual value
    pub expected_actual: f64,

    /// Expected plan value, when the claim asserts one
    #[serde(default)]
    pub expected_plan: Option<f64>,

    /// Expected variance percentage, when the claim asserts one
    #[serde(default)]
    pub expected_variance_pct: Option<f64>,

    /// Absolute tolerance for the actual/plan comparisons (dollars)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Tolerance for the variance comparison, in percentage points.
    /// Falls back to the validator's default when not declared.
    #[serde(default)]
    pub variance_tolerance: Option<f64>,

    /// Compare absolute values on both sides.
    ///
    /// Cost and promotion line items are stored negative in the fact data
    /// while reports quote them positive; claims over such items declare
    /// this explicitly instead of the validator guessing from context.
    #[serde(default)]
    pub normalize_sign: bool,
}

/// Default absolute tolerance: one dollar
fn default_tolerance() -> f64 {
    1.0
}

impl Claim {
    /// Create a claim with the given description and matchers; expected
    /// values start at zero and the default tolerance applies.
    pub fn new(description: impl Into<String>, matchers: Vec<Matcher>) -> Self {
        Self {
            description: description.into(),
            matchers,
            expected_actual: 0.0,
            expected_plan: None,
            expected_variance_pct: None,
            tolerance: default_tolerance(),
            variance_tolerance: None,
            normalize_sign: false,
        }
    }

    /// Set the expected actual value
    pub fn expect_actual(mut self, value: f64) -> Self {
        self.expected_actual = value;
        self
    }

    /// Set the expected plan value
    pub fn expect_plan(mut self, value: f64) -> Self {
        self.expected_plan = Some(value);
        self
    }

    /// Set the expected variance percentage
    pub fn expect_variance_pct(mut self, value: f64) -> Self {
        self.expected_variance_pct = Some(value);
        self
    }

    /// Set the absolute tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the variance tolerance in percentage points
    pub fn with_variance_tolerance(mut self, tolerance: f64) -> Self {
        self.variance_tolerance = Some(tolerance);
        self
    }

    /// Compare absolute values on both sides
    pub fn with_sign_normalization(mut self) -> Self {
        self.normalize_sign = true;
        self
    }
}
