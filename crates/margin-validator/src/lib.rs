//! Margin Validator
//!
//! Re-derives analytical claims from raw fact rows and checks them for
//! consistency within tolerance.
//!
//! The validator is the audit half of the pipeline: an assistant-generated
//! report asserts numbers ("Food Sales came in at $320,433 against a
//! $341,386 plan"), and the validator recomputes each number from the
//! authoritative fact table and reports pass/fail plus the numeric gap.
//!
//! Mismatches are results, not errors: a claim that misses tolerance comes
//! back as `is_valid = false` with its delta, a claim whose filter matches
//! no rows comes back with explicit zero values. Nothing in this crate
//! panics or returns early for degenerate input.
//!
//! # Examples
//!
//! ```
//! use margin_domain::{Claim, Matcher, Table};
//! use margin_validator::Validator;
//!
//! let facts = Table::new(
//!     vec!["Type".into(), "Actual".into(), "Plan".into()],
//!     vec![vec!["Net Sales".into(), "320433".into(), "341386".into()]],
//! );
//!
//! let claim = Claim::new("Food sales", vec![Matcher::equals("Type", "Net Sales")])
//!     .expect_actual(320433.0)
//!     .expect_plan(341386.0);
//!
//! let validator = Validator::default_config();
//! let outcomes = validator.validate(&[claim], &facts);
//! assert!(outcomes[0].is_valid);
//! ```

#![warn(missing_docs)]

mod claims;
mod config;
mod validator;

pub use claims::ClaimSet;
pub use config::ValidatorConfig;
pub use validator::{summarize, Validator};
