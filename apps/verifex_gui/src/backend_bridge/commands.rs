//! Backend commands queued from UI to backend worker.

use client_core::Submission;

pub enum BackendCommand {
    Analyze(Submission),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analyze(_) => "analyze",
        }
    }
}
