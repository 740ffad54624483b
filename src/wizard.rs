//! Wizard step model
//!
//! The agreement flow has four steps. The active step is fixed: every panel
//! is shown at once and the stepper only marks progress.
//!
//! ```text
//! CommonData -> ContractSelection -> PriceAllocation -> ReviewSubmit
//! ```

use strum::{Display, EnumIter, IntoEnumIterator};

/// One step of the agreement creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum WizardStep {
    #[strum(serialize = "Common data")]
    CommonData,
    #[strum(serialize = "Contract selection")]
    ContractSelection,
    #[strum(serialize = "Price allocation")]
    PriceAllocation,
    #[strum(serialize = "Review & submit")]
    ReviewSubmit,
}

/// The step the stepper marks as active
pub const CURRENT_STEP: WizardStep = WizardStep::PriceAllocation;

/// Progress of a step relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Active,
    Pending,
}

impl WizardStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;

    /// All steps in flow order
    pub fn all() -> impl Iterator<Item = WizardStep> {
        Self::iter()
    }

    /// Step number (1-indexed for display).
    pub fn number(&self) -> usize {
        match self {
            Self::CommonData => 1,
            Self::ContractSelection => 2,
            Self::PriceAllocation => 3,
            Self::ReviewSubmit => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CommonData => "Common data",
            Self::ContractSelection => "Contract selection",
            Self::PriceAllocation => "Price allocation",
            Self::ReviewSubmit => "Review & submit",
        }
    }

    /// Short description under the step title
    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::CommonData => "Dates, attachments, baseline prices",
            Self::ContractSelection => "Pick the contracts to clone into",
            Self::PriceAllocation => "Override or fine-tune prices per contract",
            Self::ReviewSubmit => "Validate payload and submit",
        }
    }

    pub fn status(&self, current: WizardStep) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Marker shown in the stepper: a check for finished steps, else the number
    pub fn marker(&self, current: WizardStep) -> String {
        match self.status(current) {
            StepStatus::Complete => "✓".to_string(),
            _ => self.number().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_follow_order() {
        let numbers: Vec<usize> = WizardStep::all().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::all().count(), WizardStep::TOTAL_STEPS);
    }

    #[test]
    fn test_status_relative_to_current_step() {
        assert_eq!(WizardStep::CommonData.status(CURRENT_STEP), StepStatus::Complete);
        assert_eq!(WizardStep::ContractSelection.status(CURRENT_STEP), StepStatus::Complete);
        assert_eq!(WizardStep::PriceAllocation.status(CURRENT_STEP), StepStatus::Active);
        assert_eq!(WizardStep::ReviewSubmit.status(CURRENT_STEP), StepStatus::Pending);
    }

    #[test]
    fn test_markers() {
        assert_eq!(WizardStep::CommonData.marker(CURRENT_STEP), "✓");
        assert_eq!(WizardStep::PriceAllocation.marker(CURRENT_STEP), "3");
        assert_eq!(WizardStep::ReviewSubmit.marker(CURRENT_STEP), "4");
    }

    #[test]
    fn test_display_matches_title() {
        for step in WizardStep::all() {
            assert_eq!(step.to_string(), step.title());
        }
    }
}
