use serde::Serialize;

use crate::model::lifecycle::RequestLifecycle;
use crate::model::prediction::PredictionRecord;
use crate::model::selection::SelectionSet;

#[derive(Debug, Serialize)]
pub struct PredictionReport<'a> {
    pub status: &'static str,
    pub symptoms: &'a SelectionSet,
    pub results: &'a [PredictionRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> PredictionReport<'a> {
    pub fn new(symptoms: &'a SelectionSet, lifecycle: &'a RequestLifecycle) -> Self {
        Self {
            status: lifecycle.as_str(),
            symptoms,
            results: lifecycle.results(),
            error: lifecycle.error_message(),
        }
    }
}

pub fn render_json(report: &PredictionReport<'_>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_report(path: &std::path::Path, report: &PredictionReport<'_>) -> anyhow::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, render_json(report)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
