//! Selection store
//!
//! Owns the three pieces of wizard state: common data, the ordered contract
//! selection, and the per-contract override map. All mutation goes through the
//! toggle/set/clear operations here; the submission payload is a pure function
//! of the current state.
//!
//! # Override states
//!
//! ```text
//! Inheriting --toggle--> Explicit / Adjusted --clear_override--> Inheriting
//! ```
//!
//! A contract with no map entry is inheriting. Override entries outlive
//! deselection so reselecting a contract restores the user's edits.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::catalog::{Attachment, Catalog};
use crate::error::{AgreeTuiError, Result};
use crate::payload::{CommonData, ContractData, ContractPayload, Payload, PriceSelection};
use crate::types::{ContractId, PriceId, ResolutionMode};

/// Additions and removals relative to the common price selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceDelta {
    pub added: PriceSelection,
    pub removed: PriceSelection,
}

impl PriceDelta {
    /// Apply the delta on top of `common`: common order first, then additions.
    pub fn apply(&self, common: &PriceSelection) -> PriceSelection {
        common
            .iter()
            .filter(|id| !self.removed.contains(id))
            .chain(self.added.iter())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// A recorded per-contract price override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceOverride {
    /// Replacement set, used verbatim. May be empty, meaning "no prices".
    Explicit(PriceSelection),
    /// Deltas against the common prices.
    Adjusted(PriceDelta),
}

/// Counts shown on a contract's allocation card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSummary {
    pub inherited: usize,
    pub overridden: usize,
    pub has_override: bool,
    pub resolved: PriceSelection,
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| AgreeTuiError::invalid_date(format!("{:?}: {}", text.trim(), e)))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal calendar date")
}

/// Wizard state: common data, contract selection, and overrides
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: Catalog,
    mode: ResolutionMode,
    common: CommonData,
    selected: Vec<ContractId>,
    overrides: BTreeMap<ContractId, PriceOverride>,
}

impl SelectionStore {
    /// Empty selection over `catalog`, with the default agreement term and attachments
    pub fn new(catalog: Catalog, mode: ResolutionMode) -> Self {
        let common = CommonData {
            start_date: ymd(2025, 1, 1),
            end_date: ymd(2030, 1, 1),
            attachments: catalog.default_attachments().to_vec(),
            prices: PriceSelection::new(),
        };
        Self {
            catalog,
            mode,
            common,
            selected: Vec::new(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn common(&self) -> &CommonData {
        &self.common
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.common.attachments
    }

    /// Selected contracts in selection order
    pub fn selected(&self) -> &[ContractId] {
        &self.selected
    }

    pub fn is_selected(&self, contract_id: &ContractId) -> bool {
        self.selected.contains(contract_id)
    }

    /// The recorded override, or `None` while the contract is inheriting
    pub fn override_for(&self, contract_id: &ContractId) -> Option<&PriceOverride> {
        self.overrides.get(contract_id)
    }

    pub fn is_inheriting(&self, contract_id: &ContractId) -> bool {
        !self.overrides.contains_key(contract_id)
    }

    fn check_price(&self, price_id: &PriceId) -> Result<()> {
        if self.catalog.has_price(price_id) {
            Ok(())
        } else {
            Err(AgreeTuiError::unknown_price(price_id.as_str()))
        }
    }

    fn check_contract(&self, contract_id: &ContractId) -> Result<()> {
        if self.catalog.has_contract(contract_id) {
            Ok(())
        } else {
            Err(AgreeTuiError::unknown_contract(contract_id.as_str()))
        }
    }

    /// Toggle a baseline price. Returns whether it is now selected.
    pub fn toggle_common_price(&mut self, price_id: &PriceId) -> Result<bool> {
        self.check_price(price_id)?;
        let selected = self.common.prices.toggle(price_id);
        debug!(price = %price_id, selected, "toggled common price");
        Ok(selected)
    }

    /// Toggle a contract's membership in the selection. Returns whether it is now selected.
    ///
    /// Deselecting keeps the contract's override entry.
    pub fn toggle_contract(&mut self, contract_id: &ContractId) -> Result<bool> {
        self.check_contract(contract_id)?;
        let selected = if let Some(pos) = self.selected.iter().position(|c| c == contract_id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(contract_id.clone());
            true
        };
        debug!(contract = %contract_id, selected, "toggled contract");
        Ok(selected)
    }

    /// Toggle a price for one contract. Returns whether the price is now in the
    /// contract's override selection.
    ///
    /// Always leaves an entry for the contract, even when the resulting set is
    /// empty. Under [`ResolutionMode::Verbatim`] the entry is an explicit set;
    /// under [`ResolutionMode::Delta`] the toggle flips membership in the
    /// resolved prices and is recorded as a delta against common prices.
    pub fn toggle_override_price(
        &mut self,
        contract_id: &ContractId,
        price_id: &PriceId,
    ) -> Result<bool> {
        self.check_contract(contract_id)?;
        self.check_price(price_id)?;

        let entry = self.overrides.get(contract_id).cloned();
        let (next, selected) = match (self.mode, entry) {
            (_, Some(PriceOverride::Explicit(mut prices))) => {
                let selected = prices.toggle(price_id);
                (PriceOverride::Explicit(prices), selected)
            }
            (ResolutionMode::Verbatim, entry) => {
                let mut prices = match entry {
                    Some(PriceOverride::Adjusted(delta)) => delta.apply(&self.common.prices),
                    _ => PriceSelection::new(),
                };
                let selected = prices.toggle(price_id);
                (PriceOverride::Explicit(prices), selected)
            }
            (ResolutionMode::Delta, entry) => {
                let mut delta = match entry {
                    Some(PriceOverride::Adjusted(delta)) => delta,
                    _ => PriceDelta::default(),
                };
                let in_common = self.common.prices.contains(price_id);
                if delta.apply(&self.common.prices).contains(price_id) {
                    delta.added.remove(price_id);
                    if in_common {
                        delta.removed.insert(price_id.clone());
                    }
                    (PriceOverride::Adjusted(delta), false)
                } else {
                    delta.removed.remove(price_id);
                    if !in_common {
                        delta.added.insert(price_id.clone());
                    }
                    (PriceOverride::Adjusted(delta), true)
                }
            }
        };

        self.overrides.insert(contract_id.clone(), next);
        debug!(contract = %contract_id, price = %price_id, selected, "toggled override price");
        Ok(selected)
    }

    /// Replace a contract's override with an explicit price set
    pub fn set_override(&mut self, contract_id: &ContractId, prices: PriceSelection) -> Result<()> {
        self.check_contract(contract_id)?;
        for price_id in &prices {
            self.check_price(price_id)?;
        }
        info!(contract = %contract_id, count = prices.len(), "set explicit override");
        self.overrides
            .insert(contract_id.clone(), PriceOverride::Explicit(prices));
        Ok(())
    }

    /// Drop a contract's override so it inherits again. Returns whether an entry existed.
    pub fn clear_override(&mut self, contract_id: &ContractId) -> Result<bool> {
        self.check_contract(contract_id)?;
        let existed = self.overrides.remove(contract_id).is_some();
        if existed {
            info!(contract = %contract_id, "cleared override");
        }
        Ok(existed)
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        debug!(%date, "set start date");
        self.common.start_date = date;
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        debug!(%date, "set end date");
        self.common.end_date = date;
    }

    /// The prices a contract carries into the payload
    pub fn resolved_prices(&self, contract_id: &ContractId) -> PriceSelection {
        match self.overrides.get(contract_id) {
            Some(PriceOverride::Explicit(prices)) => prices.clone(),
            Some(PriceOverride::Adjusted(delta)) => delta.apply(&self.common.prices),
            None if self.mode.inherits_common() => self.common.prices.clone(),
            None => PriceSelection::new(),
        }
    }

    /// Counts for a contract's allocation card.
    ///
    /// Verbatim resolution reports the common price count as inherited and the
    /// explicit set size as overrides. Delta resolution reports common prices
    /// kept as inherited and every price that differs from common as overridden.
    pub fn contract_summary(&self, contract_id: &ContractId) -> ContractSummary {
        let resolved = self.resolved_prices(contract_id);
        let has_override = self.overrides.contains_key(contract_id);
        let common = &self.common.prices;

        let (inherited, overridden) = match self.mode {
            ResolutionMode::Verbatim => {
                let overridden = if has_override { resolved.len() } else { 0 };
                (common.len(), overridden)
            }
            ResolutionMode::Delta => {
                let kept = common.iter().filter(|id| resolved.contains(id)).count();
                let added = resolved.iter().filter(|id| !common.contains(id)).count();
                (kept, added + (common.len() - kept))
            }
        };

        ContractSummary {
            inherited,
            overridden,
            has_override,
            resolved,
        }
    }

    /// Derive the submission payload. Contracts appear in selection order.
    pub fn derive_payload(&self) -> Payload {
        let contracts = self
            .selected
            .iter()
            .map(|contract_id| ContractPayload {
                contract_id: contract_id.clone(),
                data: ContractData {
                    prices: self.resolved_prices(contract_id),
                },
            })
            .collect();

        Payload {
            contracts,
            data: self.common.clone(),
        }
    }
}
