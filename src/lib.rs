//! agreetui
//!
//! Guided terminal flow for composing one agreement across several contracts.
//! Common data and baseline prices are captured once; each selected contract
//! can then carry its own price override, and the result is derived into a
//! single submission payload.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod payload;
pub mod scenario;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{Attachment, Catalog, Contract, Price};
pub use config::AppConfig;
pub use error::{AgreeTuiError, Result};
pub use payload::{CommonData, ContractData, ContractPayload, Payload, PriceSelection};
pub use scenario::Scenario;
pub use store::{ContractSummary, PriceDelta, PriceOverride, SelectionStore};
pub use types::{BillingTerm, ContractId, PriceId, ResolutionMode};
pub use wizard::{WizardStep, CURRENT_STEP};
