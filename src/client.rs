// HTTP client for the remote sentiment-comparison service
use serde_json::Value;
use tokio::sync::mpsc;

use crate::model::{normalize_response, AnalysisRequest, AnalysisResult};
use crate::types::{Result, SentiError};

const ANALYZE_PATH: &str = "/analyze-comparison";

#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One best-effort POST; no retries, no timeout beyond reqwest defaults.
    /// Callers must hold the busy flag so only one request is in flight.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = format!("{}{}", self.endpoint, ANALYZE_PATH);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SentiError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| SentiError::Request(e.to_string()))?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| SentiError::Request(format!("non-JSON body: {}", e)))?;

        normalize_response(value)
    }
}

/// Run one analysis on a background task and hand the outcome back through a
/// channel the event loop can drain without blocking.
pub fn spawn_analysis(
    client: &AnalysisClient,
    request: AnalysisRequest,
) -> mpsc::Receiver<Result<AnalysisResult>> {
    let (tx, rx) = mpsc::channel(1);
    let client = client.clone();
    tokio::spawn(async move {
        let outcome = client.analyze(&request).await;
        // Receiver may be gone if the app exited mid-request
        let _ = tx.send(outcome).await;
    });
    rx
}
