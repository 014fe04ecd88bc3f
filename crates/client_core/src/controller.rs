//! Request lifecycle: one outstanding analysis at a time, guarded by a
//! generation counter so a superseded call can never overwrite newer state.

use shared::protocol::VerificationResult;
use tracing::{debug, info, warn};

use crate::{error::AnalyzeError, transport::AnalysisTransport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending { submitted_code: String },
    Resolved { result: VerificationResult },
    Failed { message: String },
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// An accepted submission. Dispatching it issues the single outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: Generation,
    pub code: String,
}

impl Submission {
    pub async fn dispatch<T>(self, transport: &T) -> Completion
    where
        T: AnalysisTransport + ?Sized,
    {
        debug!(generation = self.generation.0, "dispatching analysis");
        let outcome = transport.analyze(&self.code).await;
        Completion {
            generation: self.generation,
            outcome,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub generation: Generation,
    pub outcome: Result<VerificationResult, AnalyzeError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct RequestController {
    state: RequestState,
    input: String,
    generation: Generation,
}

impl Default for RequestController {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestController {
    pub fn new() -> Self {
        Self::with_input(String::new())
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            state: RequestState::Idle,
            input: input.into(),
            generation: Generation::default(),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Editable at any time; lifecycle state is unaffected.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.trim().is_empty()
    }

    /// Starts a submission for `code`, superseding any in-flight one.
    ///
    /// Blank code is a no-op and returns `None`.
    pub fn submit(&mut self, code: &str) -> Option<Submission> {
        if code.trim().is_empty() {
            debug!("ignoring blank submission");
            return None;
        }

        if self.is_pending() {
            warn!(
                superseded = self.generation.0,
                "new submission supersedes in-flight analysis"
            );
        }

        self.generation = self.generation.next();
        self.state = RequestState::Pending {
            submitted_code: code.to_string(),
        };
        info!(generation = self.generation.0, bytes = code.len(), "analysis submitted");

        Some(Submission {
            generation: self.generation,
            code: code.to_string(),
        })
    }

    /// Submits the current input unless a request is pending or the input is blank.
    pub fn submit_input(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let code = self.input.clone();
        self.submit(&code)
    }

    pub fn resolve(
        &mut self,
        generation: Generation,
        outcome: Result<VerificationResult, AnalyzeError>,
    ) -> Resolution {
        if generation != self.generation || !self.is_pending() {
            debug!(
                generation = generation.0,
                current = self.generation.0,
                "discarding stale analysis resolution"
            );
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(result) => {
                info!(
                    generation = generation.0,
                    function = %result.metadata.function_name,
                    "analysis resolved"
                );
                RequestState::Resolved { result }
            }
            Err(err) => {
                warn!(generation = generation.0, error = %err, "analysis failed");
                RequestState::Failed {
                    message: err.user_message(),
                }
            }
        };
        Resolution::Applied
    }

    pub fn complete(&mut self, completion: Completion) -> Resolution {
        self.resolve(completion.generation, completion.outcome)
    }

    /// Submits `code`, awaits the call and applies its resolution.
    pub async fn submit_with<T>(&mut self, transport: &T, code: &str) -> &RequestState
    where
        T: AnalysisTransport + ?Sized,
    {
        if let Some(submission) = self.submit(code) {
            let completion = submission.dispatch(transport).await;
            self.complete(completion);
        }
        &self.state
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
