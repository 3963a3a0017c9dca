use super::*;
use crate::predict::PredictError;
use crate::predict::client::HttpBackend;
use httpmock::prelude::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Default)]
struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<Value, PredictError>>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedBackend {
    fn replying(replies: Vec<Result<Value, PredictError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PredictionBackend for ScriptedBackend {
    fn predict(&self, symptoms: &[String]) -> Result<Value, PredictError> {
        self.calls.borrow_mut().push(symptoms.to_vec());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

struct PanickingBackend;

impl PredictionBackend for PanickingBackend {
    fn predict(&self, _symptoms: &[String]) -> Result<Value, PredictError> {
        panic!("backend exploded");
    }
}

fn server_error() -> PredictError {
    PredictError::Status {
        status: 500,
        body: "internal".to_string(),
    }
}

fn flu_reply() -> Value {
    json!([{
        "disease": "Flu",
        "probability": "80%",
        "description": "...",
        "precautions": ["rest", "", "  ", "hydrate"]
    }])
}

#[test]
fn starts_idle_and_empty() {
    let controller = Controller::new(ScriptedBackend::default());
    assert_eq!(controller.lifecycle(), &RequestLifecycle::Idle);
    assert!(controller.selection().is_empty());
    assert_eq!(controller.search(), "");
}

#[test]
fn add_clears_search_text() {
    let mut controller = Controller::new(ScriptedBackend::default());
    controller.set_search("itch");
    assert_eq!(controller.filtered(), vec!["itching", "internal_itching"]);

    assert!(controller.add_symptom("itching"));
    assert_eq!(controller.search(), "");
    assert_eq!(controller.selection().as_slice(), &["itching".to_string()]);
}

#[test]
fn duplicate_add_is_a_no_op() {
    let mut controller = Controller::new(ScriptedBackend::default());
    controller.add_symptom("itching");
    let before = controller.selection().clone();

    controller.set_search("rash");
    assert!(!controller.add_symptom("itching"));
    assert_eq!(controller.selection(), &before);
    assert_eq!(controller.search(), "rash");
}

#[test]
fn remove_absent_is_a_no_op() {
    let mut controller = Controller::new(ScriptedBackend::default());
    controller.add_symptom("chills");
    assert!(!controller.remove_symptom("cough"));
    assert!(controller.remove_symptom("chills"));
    assert!(controller.selection().is_empty());
}

#[test]
fn submit_without_symptoms_skips_network() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(flu_reply())]));
    let state = controller.submit().clone();

    assert_eq!(state, RequestLifecycle::Failed(SubmitFailure::NoSymptoms));
    assert_eq!(
        state.error_message().as_deref(),
        Some("select at least one symptom")
    );
    assert_eq!(controller.backend().call_count(), 0);
}

#[test]
fn submit_sends_selection_in_order() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(flu_reply())]));
    controller.add_symptom("skin_rash");
    controller.add_symptom("itching");
    controller.submit();

    let calls = controller.backend().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec!["skin_rash".to_string(), "itching".to_string()]);
}

#[test]
fn submit_success_cleans_precautions() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(flu_reply())]));
    controller.add_symptom("chills");
    let records = controller.submit().results().to_vec();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].disease, "Flu");
    assert_eq!(records[0].precautions, vec!["rest", "hydrate"]);
}

#[test]
fn single_object_reply_succeeds_with_one_record() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(json!({}))]));
    controller.add_symptom("chills");
    assert_eq!(controller.submit().results().len(), 1);
}

#[test]
fn null_or_scalar_reply_means_no_results() {
    for reply in [json!(null), json!(42), json!([])] {
        let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(reply)]));
        controller.add_symptom("chills");
        let state = controller.submit().clone();
        assert_eq!(state, RequestLifecycle::Failed(SubmitFailure::NoResults));
        assert_eq!(
            state.error_message().as_deref(),
            Some("no results found for the selected symptoms; add more")
        );
    }
}

#[test]
fn transport_error_hides_detail() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![Err(server_error())]));
    controller.add_symptom("chills");
    let state = controller.submit().clone();
    assert_eq!(state, RequestLifecycle::Failed(SubmitFailure::Transport));
    assert_eq!(
        state.error_message().as_deref(),
        Some("error connecting to backend")
    );
}

#[test]
fn panicking_backend_does_not_leave_loading() {
    let mut controller = Controller::new(PanickingBackend);
    controller.add_symptom("chills");
    controller.submit();
    assert!(!controller.is_loading());
    assert_eq!(
        controller.lifecycle(),
        &RequestLifecycle::Failed(SubmitFailure::Transport)
    );
}

#[test]
fn resubmit_replaces_previous_outcome() {
    let mut controller = Controller::new(ScriptedBackend::replying(vec![
        Err(server_error()),
        Ok(flu_reply()),
        Ok(json!(null)),
    ]));
    controller.add_symptom("chills");

    assert_eq!(controller.submit().failure(), Some(SubmitFailure::Transport));
    assert_eq!(controller.submit().results().len(), 1);
    assert_eq!(controller.submit().failure(), Some(SubmitFailure::NoResults));
    assert_eq!(controller.backend().call_count(), 3);
}

#[test]
fn listeners_observe_loading_then_resolution() {
    let seen: Rc<RefCell<Vec<(ControllerEvent, &'static str)>>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut controller = Controller::new(ScriptedBackend::replying(vec![Ok(flu_reply())]));
    controller.subscribe(move |event, state| {
        sink.borrow_mut().push((event, state.lifecycle.as_str()));
    });

    controller.set_search("chi");
    controller.add_symptom("chills");
    controller.submit();

    let seen = seen.borrow();
    assert_eq!(
        seen.as_slice(),
        &[
            (ControllerEvent::SearchChanged, "idle"),
            (ControllerEvent::SelectionChanged, "idle"),
            (ControllerEvent::SearchChanged, "idle"),
            (ControllerEvent::LifecycleChanged, "loading"),
            (ControllerEvent::LifecycleChanged, "succeeded"),
        ]
    );
}

#[test]
fn lifecycle_never_rests_at_loading() {
    let replies = vec![
        Ok(flu_reply()),
        Ok(json!(null)),
        Err(server_error()),
        Ok(json!({"disease": "Acne"})),
    ];
    let mut controller = Controller::new(ScriptedBackend::replying(replies));
    controller.add_symptom("blackheads");
    for _ in 0..4 {
        controller.submit();
        assert!(!controller.is_loading());
    }
}

#[test]
fn end_to_end_against_http_backend() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(json!({"symptoms": ["itching", "skin_rash"]}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {
                    "disease": "Fungal infection",
                    "probability": "83.33%",
                    "description": "A fungal infection of the skin.",
                    "precautions": ["bath twice", "use detol or neem in bathing water", "keep infected area dry", "use clean cloths"]
                },
                {
                    "disease": "Impetigo",
                    "probability": "8.1%",
                    "description": "A contagious skin infection.",
                    "precautions": ["soak affected area in warm water", "", "remove scabs with wet compressed cloth", null]
                }
            ]));
    });

    let backend = HttpBackend::new(&server.base_url(), None).expect("backend");
    let mut controller = Controller::new(backend);
    controller.set_search("itch");
    controller.add_symptom("itching");
    controller.set_search("rash");
    controller.add_symptom("skin_rash");
    controller.submit();

    mock.assert();
    let records = controller.lifecycle().results();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].disease, "Fungal infection");
    assert_eq!(records[1].disease, "Impetigo");
    assert_eq!(records[1].precautions.len(), 2);
}

#[test]
fn end_to_end_unreachable_backend() {
    let backend = HttpBackend::new("http://127.0.0.1:1", None).expect("backend");
    let mut controller = Controller::new(backend);
    controller.add_symptom("cough");
    assert_eq!(
        controller.submit().failure(),
        Some(SubmitFailure::Transport)
    );
}
