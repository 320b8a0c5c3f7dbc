use std::sync::Arc;

use crate::chatbot::ChatbotPanel;
use crate::reference::{ReferenceStatus, ReferenceTable};
use crate::routine::{self, Routine, UserProfile};
use crate::screening::{self, ScreeningError, ScreeningOptions, ScreeningReport};

/// Entry point shared by the HTTP router and the CLI.
///
/// Holds the read-only reference table; every operation is a pure function of
/// its input and that table.
#[derive(Debug, Clone)]
pub struct SkincareService {
    reference: Arc<ReferenceTable>,
    options: ScreeningOptions,
}

impl SkincareService {
    pub fn new(reference: Arc<ReferenceTable>, options: ScreeningOptions) -> Self {
        Self { reference, options }
    }

    pub fn compose_routine(&self, profile: &UserProfile) -> Routine {
        routine::compose(profile)
    }

    pub fn check_ingredients(&self, raw: &str) -> Result<ScreeningReport, ScreeningError> {
        screening::screen_with(raw, &self.reference, self.options)
    }

    pub fn chatbot(&self) -> ChatbotPanel {
        ChatbotPanel::coming_soon()
    }

    pub fn reference_status(&self) -> ReferenceStatus {
        self.reference.status()
    }
}
