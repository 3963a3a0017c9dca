pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod model;
pub mod predict;
pub mod report;

pub mod prelude {
    pub use crate::catalog::{SYMPTOMS, SymptomFilter, filter_symptoms};
    pub use crate::controller::{Controller, ControllerEvent, ControllerState};
    pub use crate::model::lifecycle::{RequestLifecycle, SubmitFailure};
    pub use crate::model::prediction::PredictionRecord;
    pub use crate::predict::client::{HttpBackend, PredictionBackend};
}
