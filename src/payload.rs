//! Submission payload shapes
//!
//! The payload is derived from the selection store on every read and never
//! stored. Field names serialize in camelCase to match the agreement API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Attachment;
use crate::error::Result;
use crate::types::{ContractId, PriceId};

/// Ordered, duplicate-free list of price ids.
///
/// Insertion order is kept so a toggled price appears at the end, the way it
/// was picked. Membership is what matters semantically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSelection(Vec<PriceId>);

impl PriceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &PriceId) -> bool {
        self.0.contains(id)
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is now selected.
    pub fn toggle(&mut self, id: &PriceId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.0.push(id.clone());
            true
        }
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: PriceId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: &PriceId) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p != id);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PriceId] {
        &self.0
    }
}

impl FromIterator<PriceId> for PriceSelection {
    fn from_iter<I: IntoIterator<Item = PriceId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl<'a> FromIterator<&'a str> for PriceSelection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(PriceId::from).collect()
    }
}

impl<'a> IntoIterator for &'a PriceSelection {
    type Item = &'a PriceId;
    type IntoIter = std::slice::Iter<'a, PriceId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Attributes shared by every contract in the agreement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonData {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub attachments: Vec<Attachment>,
    /// Baseline price selection
    pub prices: PriceSelection,
}

/// Per-contract section of the payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayload {
    pub contract_id: ContractId,
    pub data: ContractData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractData {
    pub prices: PriceSelection,
}

/// The submission payload: resolved prices per selected contract plus the common data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub contracts: Vec<ContractPayload>,
    pub data: CommonData,
}

impl Payload {
    /// Resolved prices for `contract_id`, if it is part of the payload
    pub fn prices_for(&self, contract_id: &ContractId) -> Option<&PriceSelection> {
        self.contracts
            .iter()
            .find(|c| &c.contract_id == contract_id)
            .map(|c| &c.data.prices)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(selection: &PriceSelection) -> Vec<&str> {
        selection.iter().map(PriceId::as_str).collect()
    }

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut selection: PriceSelection = ["base", "support+"].into_iter().collect();
        assert!(selection.toggle(&PriceId::from("training")));
        assert_eq!(ids(&selection), vec!["base", "support+", "training"]);
        assert!(!selection.toggle(&PriceId::from("training")));
        assert_eq!(ids(&selection), vec!["base", "support+"]);
    }

    #[test]
    fn test_collect_drops_duplicates() {
        let selection: PriceSelection = ["base", "payg", "base"].into_iter().collect();
        assert_eq!(ids(&selection), vec!["base", "payg"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut selection: PriceSelection = ["base"].into_iter().collect();
        assert!(!selection.remove(&PriceId::from("payg")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = Payload {
            contracts: vec![ContractPayload {
                contract_id: ContractId::from("239"),
                data: ContractData {
                    prices: ["base", "payg"].into_iter().collect(),
                },
            }],
            data: CommonData {
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                attachments: vec![Attachment::new("msa", "Master Services Agreement.pdf")],
                prices: ["base"].into_iter().collect(),
            },
        };

        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contracts": [
                    { "contractId": "239", "data": { "prices": ["base", "payg"] } }
                ],
                "data": {
                    "startDate": "2025-01-01",
                    "endDate": "2030-01-01",
                    "attachments": [ { "id": "msa", "name": "Master Services Agreement.pdf" } ],
                    "prices": ["base"]
                }
            })
        );
    }
}
