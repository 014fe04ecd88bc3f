//! Pure mapping from [`RequestState`] to the regions a front end displays.
//!
//! Absent optional lists are handled asymmetrically: missing or empty
//! invariants produce a single placeholder item, while missing or empty
//! assumptions produce an empty badge collection.

use serde::Serialize;
use shared::protocol::VerificationResult;

use crate::controller::RequestState;

pub const READY_TITLE: &str = "Ready to verify";
pub const READY_HINT: &str = "Click analyze to begin formal verification";
pub const LOADING_LABEL: &str = "Verifying logic...";
pub const ERROR_TITLE: &str = "Analysis Failed";
pub const REPORT_TITLE: &str = "Verification Complete";
pub const VERDICT_LABEL: &str = "SAFE";
pub const NO_INVARIANTS_PLACEHOLDER: &str = "No formal invariants detected.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportView {
    Placeholder {
        title: &'static str,
        hint: &'static str,
    },
    Loading {
        label: &'static str,
    },
    Error {
        title: &'static str,
        message: String,
    },
    Report(Box<ResultView>),
}

impl ReportView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn shows_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn shows_result(&self) -> bool {
        matches!(self, Self::Report(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub header: SummaryHeader,
    pub correctness_argument: String,
    pub complexity: ComplexityFigures,
    pub invariants: Vec<InvariantItem>,
    pub assumptions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailsView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryHeader {
    pub title: &'static str,
    pub signature: String,
    pub verdict: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityFigures {
    pub time: String,
    pub space: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantItem {
    Tagged {
        index: usize,
        tag: String,
        text: String,
    },
    Placeholder {
        text: &'static str,
    },
}

impl InvariantItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Tagged { text, .. } => text,
            Self::Placeholder { text } => text,
        }
    }
}

/// Optional prose the service may attach beyond the core report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_argument: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edge_cases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DetailsView {
    fn is_empty(&self) -> bool {
        self.goal.is_none()
            && self.termination_argument.is_none()
            && self.edge_cases.is_empty()
            && self.arguments.is_empty()
            && self.note.is_none()
    }
}

pub fn render(state: &RequestState) -> ReportView {
    match state {
        RequestState::Idle => ReportView::Placeholder {
            title: READY_TITLE,
            hint: READY_HINT,
        },
        RequestState::Pending { .. } => ReportView::Loading {
            label: LOADING_LABEL,
        },
        RequestState::Failed { message } => ReportView::Error {
            title: ERROR_TITLE,
            message: message.clone(),
        },
        RequestState::Resolved { result } => ReportView::Report(Box::new(render_result(result))),
    }
}

pub fn render_result(result: &VerificationResult) -> ResultView {
    let explanation = &result.explanation;

    let invariants = if explanation.invariants().is_empty() {
        vec![InvariantItem::Placeholder {
            text: NO_INVARIANTS_PLACEHOLDER,
        }]
    } else {
        explanation
            .invariants()
            .iter()
            .enumerate()
            .map(|(index, text)| InvariantItem::Tagged {
                index,
                tag: format!("Inv_{index}"),
                text: text.clone(),
            })
            .collect()
    };

    let details = DetailsView {
        goal: non_blank(explanation.goal.as_deref()),
        termination_argument: non_blank(explanation.termination_argument.as_deref()),
        edge_cases: non_blank_items(explanation.edge_cases.as_deref()),
        arguments: non_blank_items(result.metadata.args.as_deref()),
        note: non_blank(explanation.note.as_deref()),
    };

    ResultView {
        header: SummaryHeader {
            title: REPORT_TITLE,
            signature: format!("{}()", result.metadata.function_name),
            verdict: VERDICT_LABEL,
        },
        correctness_argument: explanation.correctness_argument.clone(),
        complexity: ComplexityFigures {
            time: explanation.complexity.time.clone(),
            space: explanation.complexity.space.clone(),
        },
        invariants,
        assumptions: explanation.assumptions().to_vec(),
        details: (!details.is_empty()).then_some(details),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

fn non_blank_items(items: Option<&[String]>) -> Vec<String> {
    items
        .unwrap_or_default()
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
