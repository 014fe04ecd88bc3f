//! Backend-to-UI events and failure classification for the status bar.

use client_core::{AnalyzeError, Completion};

pub enum UiEvent {
    Info(String),
    BackendReady { server_url: String },
    BackendUnavailable(String),
    AnalysisCompleted(Completion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Response,
}

impl UiErrorCategory {
    pub fn of(err: &AnalyzeError) -> Self {
        match err {
            AnalyzeError::Transport(_) => Self::Transport,
            AnalyzeError::Status { .. } => Self::Server,
            AnalyzeError::MalformedResponse(_) => Self::Response,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "service unreachable",
            Self::Server => "server error",
            Self::Response => "unreadable response",
        }
    }
}

/// Status-bar text for an applied completion.
pub fn completion_status(failure: Option<UiErrorCategory>, finished_at: &str) -> String {
    match failure {
        None => format!("Analysis finished at {finished_at}"),
        Some(category) => format!("Analysis failed ({}) at {finished_at}", category.label()),
    }
}
