//! Reference data for the agreement wizard
//!
//! The price library, contract list, and default attachments are fixed at
//! startup and never mutated. Every id the selection store accepts is checked
//! against this catalog.

use serde::{Deserialize, Serialize};

use crate::types::{BillingTerm, ContractId, PriceId};

/// A priced item that can be attached to an agreement
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub id: PriceId,
    pub label: String,
    /// ISO currency code
    pub currency: String,
    pub amount: f64,
    pub term: BillingTerm,
    pub tags: Vec<String>,
}

impl Price {
    /// Amount with its currency, as shown on price chips (e.g. `USD 0.08`)
    pub fn display_amount(&self) -> String {
        format!("{} {}", self.currency, self.amount)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A contract an agreement can be cloned into
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    pub name: String,
    pub region: String,
    pub owner: String,
}

/// A document attached to the common data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
}

impl Attachment {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Immutable price, contract, and attachment reference data
#[derive(Debug, Clone)]
pub struct Catalog {
    prices: Vec<Price>,
    contracts: Vec<Contract>,
    default_attachments: Vec<Attachment>,
}

impl Catalog {
    /// The built-in demo catalog
    pub fn builtin() -> Self {
        Self {
            prices: builtin_prices(),
            contracts: builtin_contracts(),
            default_attachments: builtin_attachments(),
        }
    }

    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn default_attachments(&self) -> &[Attachment] {
        &self.default_attachments
    }

    pub fn price(&self, id: &PriceId) -> Option<&Price> {
        self.prices.iter().find(|p| &p.id == id)
    }

    pub fn contract(&self, id: &ContractId) -> Option<&Contract> {
        self.contracts.iter().find(|c| &c.id == id)
    }

    pub fn has_price(&self, id: &PriceId) -> bool {
        self.price(id).is_some()
    }

    pub fn has_contract(&self, id: &ContractId) -> bool {
        self.contract(id).is_some()
    }

    /// Distinct price tags in first-seen catalog order
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.prices.iter().flat_map(|p| p.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Prices carrying `tag`, or every price when no tag filter is set
    pub fn prices_with_tag(&self, tag: Option<&str>) -> Vec<&Price> {
        match tag {
            Some(tag) => self.prices.iter().filter(|p| p.has_tag(tag)).collect(),
            None => self.prices.iter().collect(),
        }
    }
}

fn price(
    id: &str,
    label: &str,
    amount: f64,
    term: BillingTerm,
    tags: &[&str],
) -> Price {
    Price {
        id: PriceId::from(id),
        label: label.to_string(),
        currency: "USD".to_string(),
        amount,
        term,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn contract(id: &str, name: &str, region: &str, owner: &str) -> Contract {
    Contract {
        id: ContractId::from(id),
        name: name.to_string(),
        region: region.to_string(),
        owner: owner.to_string(),
    }
}

fn builtin_prices() -> Vec<Price> {
    vec![
        price("base", "Base platform access", 12000.0, BillingTerm::Annual, &["core"]),
        price("support+", "Premium support (24/7)", 4200.0, BillingTerm::Annual, &["support"]),
        price("payg", "Usage-based compute", 0.08, BillingTerm::PerHour, &["usage", "compute"]),
        price("training", "Onboarding & training", 3000.0, BillingTerm::OneTime, &["services"]),
    ]
}

fn builtin_contracts() -> Vec<Contract> {
    vec![
        contract("123", "Acme Renewable Energy", "US-East", "D. Carter"),
        contract("239", "Northwind Logistics", "EMEA-North", "M. Hegde"),
        contract("441", "Helios Telecom", "APAC-South", "L. Chen"),
        contract("998", "Contoso Manufacturing", "US-Central", "S. Patel"),
    ]
}

fn builtin_attachments() -> Vec<Attachment> {
    vec![
        Attachment::new("msa", "Master Services Agreement.pdf"),
        Attachment::new("sow", "Statement of Work v2.docx"),
    ]
}
