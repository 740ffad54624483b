//! Type-safe identifiers and enumerations for agreetui
//!
//! Catalog references are carried as newtype ids rather than bare strings so a
//! price id can never be passed where a contract id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Key of a price in the price catalog (e.g. `base`, `support+`)
    PriceId
);

string_id!(
    /// Key of a contract in the contract catalog (e.g. `239`)
    ContractId
);

/// Billing term of a catalog price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum BillingTerm {
    #[strum(serialize = "annual")]
    #[serde(rename = "annual")]
    Annual,
    #[strum(serialize = "per hour")]
    #[serde(rename = "per hour")]
    PerHour,
    #[strum(serialize = "one-time")]
    #[serde(rename = "one-time")]
    OneTime,
}

/// How a contract's override state resolves into payload prices.
///
/// `Verbatim` uses an explicit override set as-is and resolves a contract
/// without an override to no prices. `Delta` treats overrides as additions and
/// removals against the common prices, so an untouched contract inherits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    #[default]
    Verbatim,
    Delta,
}

impl ResolutionMode {
    /// Whether contracts without an override inherit the common prices
    pub fn inherits_common(&self) -> bool {
        matches!(self, Self::Delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_billing_term_display_matches_catalog_copy() {
        assert_eq!(BillingTerm::Annual.to_string(), "annual");
        assert_eq!(BillingTerm::PerHour.to_string(), "per hour");
        assert_eq!(BillingTerm::OneTime.to_string(), "one-time");
    }

    #[test]
    fn test_billing_term_serde_uses_display_strings() {
        for term in BillingTerm::iter() {
            let json = serde_json::to_string(&term).unwrap();
            assert_eq!(json, format!("\"{}\"", term));
        }
    }

    #[test]
    fn test_resolution_mode_parse() {
        assert_eq!("verbatim".parse::<ResolutionMode>().unwrap(), ResolutionMode::Verbatim);
        assert_eq!("delta".parse::<ResolutionMode>().unwrap(), ResolutionMode::Delta);
        assert!("replace".parse::<ResolutionMode>().is_err());
        assert_eq!(ResolutionMode::default(), ResolutionMode::Verbatim);
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = PriceId::from("support+");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"support+\"");
        let back: ContractId = serde_json::from_str("\"239\"").unwrap();
        assert_eq!(back, "239");
    }
}
