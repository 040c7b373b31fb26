//! Claim set loading

use margin_domain::Claim;
use serde::{Deserialize, Serialize};

/// A named collection of claims, loadable from a TOML document.
///
/// The file format is an array of `[[claims]]` tables; see
/// [`Claim`](margin_domain::Claim) for the per-claim fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// The claims to validate, in file order
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl ClaimSet {
    /// Parse a claim set from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize the claim set to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
