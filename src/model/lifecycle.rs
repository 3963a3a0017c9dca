use thiserror::Error;

use crate::model::prediction::PredictionRecord;

/// Why a submission ended without results. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitFailure {
    #[error("select at least one symptom")]
    NoSymptoms,
    #[error("no results found for the selected symptoms; add more")]
    NoResults,
    #[error("error connecting to backend")]
    Transport,
}

impl SubmitFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitFailure::NoSymptoms => "no_symptoms",
            SubmitFailure::NoResults => "no_results",
            SubmitFailure::Transport => "transport",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<PredictionRecord>),
    Failed(SubmitFailure),
}

impl RequestLifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestLifecycle::Idle => "idle",
            RequestLifecycle::Loading => "loading",
            RequestLifecycle::Succeeded(_) => "succeeded",
            RequestLifecycle::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestLifecycle::Loading)
    }

    pub fn results(&self) -> &[PredictionRecord] {
        match self {
            RequestLifecycle::Succeeded(records) => records.as_slice(),
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<SubmitFailure> {
        match self {
            RequestLifecycle::Failed(failure) => Some(*failure),
            _ => None,
        }
    }

    /// User-facing message for a failed submission.
    pub fn error_message(&self) -> Option<String> {
        self.failure().map(|f| f.to_string())
    }
}
