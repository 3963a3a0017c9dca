pub mod client;
pub mod normalize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
