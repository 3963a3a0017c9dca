use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One disease guess as returned by the prediction service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub disease: String,
    /// Preformatted by the service, e.g. `"83.33%"`.
    pub probability: String,
    pub description: String,
    #[serde(default)]
    pub precautions: Vec<String>,
}

impl PredictionRecord {
    /// Builds a record from one element of a response body.
    ///
    /// Missing or null text fields become empty strings, numbers and booleans
    /// are rendered as text, and precautions pass through [`clean_precautions`].
    /// Non-object values produce an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let precautions = obj
            .get("precautions")
            .and_then(Value::as_array)
            .map(|items| clean_precautions(items))
            .unwrap_or_default();
        Self {
            disease: text_field(obj.get("disease")),
            probability: text_field(obj.get("probability")),
            description: text_field(obj.get("description")),
            precautions,
        }
    }
}

/// Keeps string entries with visible content, in their original order.
pub fn clean_precautions(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/prediction.rs"]
mod tests;
