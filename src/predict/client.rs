use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::BackendConfig;
use crate::predict::PredictError;

/// Anything that can turn a list of symptom names into a raw prediction body.
pub trait PredictionBackend {
    fn predict(&self, symptoms: &[String]) -> Result<Value, PredictError>;
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    symptoms: &'a [String],
}

/// Blocking HTTP client for the `/predict` endpoint.
pub struct HttpBackend {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoint: format!("{}/predict", base_url.trim_end_matches('/')),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, PredictError> {
        Self::new(&config.url, config.timeout_secs.map(Duration::from_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionBackend for HttpBackend {
    fn predict(&self, symptoms: &[String]) -> Result<Value, PredictError> {
        debug!(
            endpoint = %self.endpoint,
            symptoms = symptoms.len(),
            "posting prediction request"
        );
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { symptoms })
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes()?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "received response");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/predict/client.rs"]
mod tests;
