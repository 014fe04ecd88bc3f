use thiserror::Error;

/// Message shown when a failure carries no usable description.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Message shown for a 2xx response whose body is not a report document.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "The analysis service returned an unreadable response";

/// Every way an analysis call can fail once it has been issued.
///
/// Blank input never reaches this type; the controller rejects it before a
/// call exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("analysis service responded with {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl AnalyzeError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        Self::Status {
            status: status.as_u16(),
            reason,
        }
    }

    /// Text placed in the `Failed` state. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(description) if description.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::Transport(description) => description.clone(),
            Self::Status { status, reason } if reason.trim().is_empty() => {
                format!("Execution failed: HTTP {status}")
            }
            Self::Status { reason, .. } => format!("Execution failed: {reason}"),
            Self::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
        }
    }
}
