use crate::model::lifecycle::RequestLifecycle;
use crate::model::prediction::PredictionRecord;

pub fn render_lifecycle(lifecycle: &RequestLifecycle) -> String {
    match lifecycle {
        RequestLifecycle::Idle => String::new(),
        RequestLifecycle::Loading => "Predicting...\n".to_string(),
        RequestLifecycle::Succeeded(records) => render_records(records),
        RequestLifecycle::Failed(failure) => format!("{failure}\n"),
    }
}

pub fn render_records(records: &[PredictionRecord]) -> String {
    let mut out = String::new();
    out.push_str("Possible Diseases:\n");
    out.push_str("==================\n");
    for record in records {
        out.push('\n');
        out.push_str(&record.disease);
        out.push('\n');
        out.push_str(&format!("Probability: {}\n", record.probability));
        if !record.description.is_empty() {
            out.push_str(&record.description);
            out.push('\n');
        }
        for precaution in &record.precautions {
            out.push_str(&format!("  - {precaution}\n"));
        }
    }
    out
}

pub fn render_selection<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return "Selected Symptoms: (none)\n".to_string();
    }
    format!("Selected Symptoms: {}\n", names.join(", "))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
