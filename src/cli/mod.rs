use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::resolve_config;
use crate::controller::Controller;
use crate::predict::client::HttpBackend;

mod predict;
mod session;
mod symptoms;

#[derive(Parser, Debug)]
#[command(name = "disease-detector", version, about = "Disease Detector CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List or search the symptom catalog
    Symptoms(symptoms::SymptomsArgs),
    /// Predict diseases for a set of symptoms
    Predict(predict::PredictArgs),
    /// Interactive symptom selection on stdin
    Session(session::SessionArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Symptoms(args) => symptoms::handle(args),
            Command::Predict(args) => predict::handle(args),
            Command::Session(args) => session::handle(args),
        }
    }
}

#[derive(Args, Debug)]
pub struct BackendArgs {
    /// Prediction service base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BackendArgs {
    fn controller(&self) -> anyhow::Result<Controller<HttpBackend>> {
        let config = resolve_config(self.config.as_deref(), self.api_url.as_deref())?;
        let backend = HttpBackend::from_config(&config.backend)?;
        info!(endpoint = backend.endpoint(), "prediction backend configured");
        Ok(Controller::new(backend))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
