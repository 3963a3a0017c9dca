use serde_json::{Map, Value};

use crate::model::prediction::PredictionRecord;

/// Shape of a raw `/predict` response body.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// A JSON array, used as-is.
    Sequence(Vec<Value>),
    /// A single JSON object, treated as a one-element sequence.
    Single(Map<String, Value>),
    /// `null` or any scalar; yields no records.
    Other(Value),
}

impl RawResponse {
    pub fn decode(body: Value) -> Self {
        match body {
            Value::Array(items) => RawResponse::Sequence(items),
            Value::Object(obj) => RawResponse::Single(obj),
            other => RawResponse::Other(other),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RawResponse::Sequence(_) => "sequence",
            RawResponse::Single(_) => "single",
            RawResponse::Other(_) => "other",
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            RawResponse::Sequence(items) => items,
            RawResponse::Single(obj) => vec![Value::Object(obj)],
            RawResponse::Other(_) => Vec::new(),
        }
    }

    pub fn into_records(self) -> Vec<PredictionRecord> {
        self.into_values()
            .iter()
            .map(PredictionRecord::from_value)
            .collect()
    }
}

pub fn normalize_response(body: Value) -> Vec<PredictionRecord> {
    RawResponse::decode(body).into_records()
}

#[cfg(test)]
#[path = "../../tests/src_inline/predict/normalize.rs"]
mod tests;
