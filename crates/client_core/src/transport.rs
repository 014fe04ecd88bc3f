//! Outbound call to the analysis service.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ServiceErrorBody,
    protocol::{AnalyzeRequest, VerificationResult},
};
use tracing::{debug, warn};

use crate::{config::ClientSettings, error::AnalyzeError};

/// Performs exactly one analysis call per invocation. Implementations never retry.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, code: &str) -> Result<VerificationResult, AnalyzeError>;
}

pub struct HttpAnalysisClient {
    http: Client,
    analyze_url: String,
}

impl HttpAnalysisClient {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("failed to build analysis http client")?;

        Ok(Self {
            http,
            analyze_url: settings.analyze_url(),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisClient {
    async fn analyze(&self, code: &str) -> Result<VerificationResult, AnalyzeError> {
        let response = self
            .http
            .post(&self.analyze_url)
            .json(&AnalyzeRequest::new(code))
            .send()
            .await
            .map_err(|err| AnalyzeError::Transport(describe_transport_error(&err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.detail_text())
            {
                Some(detail) => {
                    debug!(status = status.as_u16(), %detail, "analysis service reported failure")
                }
                None => debug!(status = status.as_u16(), "analysis service failed without detail"),
            }
            return Err(AnalyzeError::status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| AnalyzeError::Transport(describe_transport_error(&err)))?;

        serde_json::from_slice::<VerificationResult>(&bytes).map_err(|err| {
            warn!(error = %err, body_len = bytes.len(), "undecodable analysis response");
            AnalyzeError::MalformedResponse(err.to_string())
        })
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "The analysis request timed out".to_string();
    }
    if err.is_connect() {
        return match err.url() {
            Some(url) => format!("Could not reach the analysis service at {url}"),
            None => "Could not reach the analysis service".to_string(),
        };
    }
    err.to_string()
}
