//! Scenario files: the initial session a wizard starts from.
//!
//! A scenario names dates, baseline prices, selected contracts, and explicit
//! overrides using catalog ids. It is read once at startup and checked against
//! the catalog before it touches the store. Nothing is ever written back.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{self, AgreeTuiError};
use crate::store::SelectionStore;
use crate::types::{ContractId, PriceId};

/// Initial wizard state loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Baseline prices
    #[serde(default)]
    pub prices: Vec<PriceId>,
    #[serde(default)]
    pub selected_contracts: Vec<ContractId>,
    /// Explicit per-contract price sets
    #[serde(default)]
    pub overrides: BTreeMap<ContractId, Vec<PriceId>>,
}

impl Scenario {
    /// The demo session: two contracts selected, one with an explicit override
    pub fn demo() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            prices: vec![PriceId::from("base"), PriceId::from("support+")],
            selected_contracts: vec![ContractId::from("123"), ContractId::from("239")],
            overrides: BTreeMap::from([(
                ContractId::from("239"),
                vec![PriceId::from("base"), PriceId::from("payg")],
            )]),
        }
    }

    /// Load a scenario from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario from {:?}", path.as_ref()))?;

        let scenario: Self =
            serde_json::from_str(&content).context("Failed to parse scenario JSON")?;

        info!(path = ?path.as_ref(), "loaded scenario file");
        Ok(scenario)
    }

    /// Check every referenced id against the catalog
    pub fn validate(&self, catalog: &Catalog) -> error::Result<()> {
        if let Some(price_id) = self.prices.iter().find(|p| !catalog.has_price(p)) {
            return Err(AgreeTuiError::scenario(format!(
                "Baseline price {:?} is not in the price catalog",
                price_id.as_str()
            )));
        }

        if let Some(contract_id) = self
            .selected_contracts
            .iter()
            .find(|c| !catalog.has_contract(c))
        {
            return Err(AgreeTuiError::scenario(format!(
                "Selected contract {:?} is not in the contract catalog",
                contract_id.as_str()
            )));
        }

        for (contract_id, prices) in &self.overrides {
            if !catalog.has_contract(contract_id) {
                return Err(AgreeTuiError::scenario(format!(
                    "Override for contract {:?} which is not in the contract catalog",
                    contract_id.as_str()
                )));
            }
            if let Some(price_id) = prices.iter().find(|p| !catalog.has_price(p)) {
                return Err(AgreeTuiError::scenario(format!(
                    "Override for contract {:?} names unknown price {:?}",
                    contract_id.as_str(),
                    price_id.as_str()
                )));
            }
        }

        Ok(())
    }

    /// Validate, then write the scenario into `store`
    pub fn apply(&self, store: &mut SelectionStore) -> Result<()> {
        self.validate(store.catalog())?;

        if let Some(date) = self.start_date {
            store.set_start_date(date);
        }
        if let Some(date) = self.end_date {
            store.set_end_date(date);
        }

        for price_id in &self.prices {
            if !store.common().prices.contains(price_id) {
                store.toggle_common_price(price_id)?;
            }
        }

        for contract_id in &self.selected_contracts {
            if !store.is_selected(contract_id) {
                store.toggle_contract(contract_id)?;
            }
        }

        for (contract_id, prices) in &self.overrides {
            store.set_override(contract_id, prices.iter().cloned().collect())?;
        }

        Ok(())
    }
}
