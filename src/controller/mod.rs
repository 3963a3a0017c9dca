use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::catalog::{SYMPTOMS, SymptomFilter};
use crate::model::lifecycle::{RequestLifecycle, SubmitFailure};
use crate::model::selection::SelectionSet;
use crate::predict::client::PredictionBackend;
use crate::predict::normalize::RawResponse;

/// Which part of [`ControllerState`] just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    SearchChanged,
    SelectionChanged,
    LifecycleChanged,
}

/// Everything a presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub search: String,
    pub selection: SelectionSet,
    pub lifecycle: RequestLifecycle,
}

pub type Listener = Box<dyn FnMut(ControllerEvent, &ControllerState)>;

/// Owns the symptom selection and the lifecycle of the prediction request.
///
/// `submit` takes `&mut self` and blocks until the backend answers, so one
/// controller never has two requests in flight.
pub struct Controller<B> {
    state: ControllerState,
    backend: B,
    listeners: Vec<Listener>,
}

impl<B: PredictionBackend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: ControllerState::default(),
            backend,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ControllerEvent, &ControllerState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.state.selection
    }

    pub fn lifecycle(&self) -> &RequestLifecycle {
        &self.state.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.state.lifecycle.is_loading()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_search(&mut self, text: &str) {
        if self.state.search == text {
            return;
        }
        self.state.search = text.to_string();
        self.notify(ControllerEvent::SearchChanged);
    }

    /// Catalog entries matching the current search text.
    pub fn filtered(&self) -> Vec<&'static str> {
        SymptomFilter::new(SYMPTOMS, &self.state.search)
            .iter()
            .collect()
    }

    /// Appends `name` to the selection and clears the search text. A name
    /// already selected leaves the state untouched.
    pub fn add_symptom(&mut self, name: &str) -> bool {
        if !self.state.selection.add(name) {
            debug!(symptom = name, "symptom already selected");
            return false;
        }
        debug!(symptom = name, selected = self.state.selection.len(), "symptom added");
        self.notify(ControllerEvent::SelectionChanged);
        self.set_search("");
        true
    }

    pub fn remove_symptom(&mut self, name: &str) -> bool {
        if !self.state.selection.remove(name) {
            return false;
        }
        debug!(symptom = name, selected = self.state.selection.len(), "symptom removed");
        self.notify(ControllerEvent::SelectionChanged);
        true
    }

    pub fn clear_selection(&mut self) {
        if self.state.selection.is_empty() {
            return;
        }
        self.state.selection.clear();
        self.notify(ControllerEvent::SelectionChanged);
    }

    /// Sends the current selection to the backend and records the outcome.
    /// Never leaves the lifecycle at `Loading`.
    pub fn submit(&mut self) -> &RequestLifecycle {
        if self.state.selection.is_empty() {
            warn!("submit with no symptoms selected");
            self.set_lifecycle(RequestLifecycle::Failed(SubmitFailure::NoSymptoms));
            return &self.state.lifecycle;
        }

        self.set_lifecycle(RequestLifecycle::Loading);
        let symptoms = self.state.selection.as_slice().to_vec();
        info!(symptoms = symptoms.len(), "submitting prediction request");

        let start = Instant::now();
        let backend = &self.backend;
        let outcome = catch_unwind(AssertUnwindSafe(|| backend.predict(&symptoms)));
        let elapsed_ms = start.elapsed().as_millis();

        let next = match outcome {
            Ok(Ok(body)) => {
                let raw = RawResponse::decode(body);
                let shape = raw.kind();
                let records = raw.into_records();
                info!(shape, records = records.len(), elapsed_ms, "prediction resolved");
                if records.is_empty() {
                    RequestLifecycle::Failed(SubmitFailure::NoResults)
                } else {
                    RequestLifecycle::Succeeded(records)
                }
            }
            Ok(Err(err)) => {
                error!(error = %err, elapsed_ms, "prediction request failed");
                RequestLifecycle::Failed(SubmitFailure::Transport)
            }
            Err(_) => {
                error!(elapsed_ms, "prediction backend panicked");
                RequestLifecycle::Failed(SubmitFailure::Transport)
            }
        };
        self.set_lifecycle(next);
        &self.state.lifecycle
    }

    fn set_lifecycle(&mut self, lifecycle: RequestLifecycle) {
        self.state.lifecycle = lifecycle;
        self.notify(ControllerEvent::LifecycleChanged);
    }

    fn notify(&mut self, event: ControllerEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event, &self.state);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/controller/mod.rs"]
mod tests;
