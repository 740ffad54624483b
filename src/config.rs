//! Runtime configuration
//!
//! Folds the command line into an [`AppConfig`] and builds the initial
//! selection store from it.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::scenario::Scenario;
use crate::store::SelectionStore;
use crate::types::ResolutionMode;

/// Environment variable holding the tracing filter directives
pub const LOG_ENV: &str = "AGREETUI_LOG";

/// Filter used when logging to a file and `AGREETUI_LOG` is unset
pub const FILE_LOG_FILTER: &str = "agreetui=info,warn";

/// Filter used when logging to stderr; the wizard owns the terminal
pub const STDERR_LOG_FILTER: &str = "warn";

/// Settings for one run of the wizard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub resolution: ResolutionMode,
    /// Scenario to start from; the demo session when `None`
    pub scenario: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            resolution: cli.resolution,
            scenario: cli.scenario.clone(),
            log_file: cli.log_file.clone(),
        }
    }

    /// Default tracing filter for the configured log destination
    pub fn default_log_filter(&self) -> &'static str {
        if self.log_file.is_some() {
            FILE_LOG_FILTER
        } else {
            STDERR_LOG_FILTER
        }
    }

    /// Load the configured scenario, falling back to the demo session
    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.scenario {
            Some(path) => Scenario::load_from_file(path),
            None => {
                debug!("no scenario file given, using the demo session");
                Ok(Scenario::demo())
            }
        }
    }

    /// Build the selection store over the built-in catalog
    pub fn build_store(&self) -> Result<SelectionStore> {
        let mut store = SelectionStore::new(Catalog::builtin(), self.resolution);
        self.load_scenario()?.apply(&mut store)?;
        Ok(store)
    }
}
