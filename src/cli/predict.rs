use std::path::PathBuf;

use clap::Args;

use crate::catalog::{filter_symptoms, find};
use crate::cli::BackendArgs;
use crate::model::lifecycle::RequestLifecycle;
use crate::report::json::{PredictionReport, render_json, write_report};
use crate::report::text::render_lifecycle;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Symptom name from the catalog (repeatable)
    #[arg(long = "symptom", short = 's')]
    pub(crate) symptoms: Vec<String>,

    #[command(flatten)]
    pub(crate) backend: BackendArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,

    /// Also write the JSON result to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: PredictArgs) -> anyhow::Result<()> {
    let names = resolve_names(&args.symptoms)?;

    let mut controller = args.backend.controller()?;
    for name in names {
        controller.add_symptom(name);
    }
    controller.submit();

    let report = PredictionReport::new(controller.selection(), controller.lifecycle());
    if let Some(path) = &args.out {
        write_report(path, &report)?;
    }
    if args.json {
        println!("{}", render_json(&report)?);
    }

    match controller.lifecycle() {
        RequestLifecycle::Failed(failure) => Err(anyhow::Error::new(*failure)),
        lifecycle => {
            if !args.json {
                print!("{}", render_lifecycle(lifecycle));
            }
            Ok(())
        }
    }
}

/// Maps user spellings onto catalog entries, rejecting unknown names.
pub(crate) fn resolve_names(input: &[String]) -> anyhow::Result<Vec<&'static str>> {
    let mut names = Vec::with_capacity(input.len());
    for raw in input {
        match find(raw) {
            Some(name) => names.push(name),
            None => {
                let close: Vec<&str> = filter_symptoms(raw.trim()).into_iter().take(5).collect();
                if close.is_empty() || raw.trim().is_empty() {
                    anyhow::bail!("unknown symptom: {raw:?}");
                }
                anyhow::bail!("unknown symptom: {raw:?} (did you mean: {})", close.join(", "));
            }
        }
    }
    Ok(names)
}
