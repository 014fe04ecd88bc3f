use std::fmt;

use client_core::{render::DetailsView, InvariantItem, ReportView, ResultView};

/// Plain-text rendering of a [`ReportView`] for terminal output.
pub struct TextReport<'a>(pub &'a ReportView);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ReportView::Placeholder { title, hint } => {
                writeln!(f, "{title}")?;
                writeln!(f, "{hint}")
            }
            ReportView::Loading { label } => writeln!(f, "{label}"),
            ReportView::Error { title, message } => {
                writeln!(f, "{title}")?;
                write_indented(f, message, "  ")
            }
            ReportView::Report(report) => write_report(f, report),
        }
    }
}

fn write_report(f: &mut fmt::Formatter<'_>, report: &ResultView) -> fmt::Result {
    writeln!(f, "{} [{}]", report.header.title, report.header.verdict)?;
    writeln!(f, "{}", report.header.signature)?;

    writeln!(f)?;
    writeln!(f, "Correctness Argument")?;
    write_indented(f, &report.correctness_argument, "  ")?;

    writeln!(f)?;
    writeln!(f, "Time Complexity   {}", report.complexity.time)?;
    writeln!(f, "Space Complexity  {}", report.complexity.space)?;

    writeln!(f)?;
    writeln!(f, "Loop Invariants")?;
    for item in &report.invariants {
        match item {
            InvariantItem::Tagged { tag, text, .. } => writeln!(f, "  {tag}  {text}")?,
            InvariantItem::Placeholder { text } => writeln!(f, "  {text}")?,
        }
    }

    writeln!(f)?;
    writeln!(f, "Assumptions")?;
    if !report.assumptions.is_empty() {
        let badges: Vec<String> = report
            .assumptions
            .iter()
            .map(|assumption| format!("[{assumption}]"))
            .collect();
        writeln!(f, "  {}", badges.join(" "))?;
    }

    if let Some(details) = &report.details {
        writeln!(f)?;
        write_details(f, details)?;
    }
    Ok(())
}

fn write_details(f: &mut fmt::Formatter<'_>, details: &DetailsView) -> fmt::Result {
    writeln!(f, "Details")?;
    if let Some(goal) = &details.goal {
        writeln!(f, "  Goal: {goal}")?;
    }
    if !details.arguments.is_empty() {
        writeln!(f, "  Arguments: {}", details.arguments.join(", "))?;
    }
    if let Some(termination) = &details.termination_argument {
        writeln!(f, "  Termination:")?;
        write_indented(f, termination, "    ")?;
    }
    if !details.edge_cases.is_empty() {
        writeln!(f, "  Edge cases:")?;
        for case in &details.edge_cases {
            writeln!(f, "    - {case}")?;
        }
    }
    if let Some(note) = &details.note {
        writeln!(f, "  Note: {note}")?;
    }
    Ok(())
}

fn write_indented(f: &mut fmt::Formatter<'_>, text: &str, indent: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "{indent}{line}")?;
    }
    if text.is_empty() {
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use client_core::{render, RequestState};
    use shared::protocol::{CodeMetadata, Complexity, Explanation, VerificationResult};

    use super::*;

    fn sample(invariants: Vec<&str>) -> VerificationResult {
        VerificationResult {
            metadata: CodeMetadata {
                function_name: "f".to_string(),
                args: None,
            },
            explanation: Explanation {
                correctness_argument: "trivial".to_string(),
                complexity: Complexity {
                    time: "O(1)".to_string(),
                    space: "O(1)".to_string(),
                },
                invariants: Some(invariants.into_iter().map(str::to_string).collect()),
                assumptions: Some(vec!["n is an integer".to_string()]),
                goal: None,
                termination_argument: None,
                edge_cases: None,
                note: None,
            },
        }
    }

    fn text_for(state: &RequestState) -> String {
        TextReport(&render(state)).to_string()
    }

    #[test]
    fn sample_report_shows_header_placeholder_and_badge() {
        let text = text_for(&RequestState::Resolved {
            result: sample(Vec::new()),
        });

        assert!(text.starts_with("Verification Complete [SAFE]\nf()\n"));
        assert!(text.contains("  No formal invariants detected.\n"));
        assert!(text.contains("Assumptions\n  [n is an integer]\n"));
        assert!(!text.contains("Details"));
    }

    #[test]
    fn tagged_invariants_keep_order() {
        let text = text_for(&RequestState::Resolved {
            result: sample(vec!["x > 0", "y <= n"]),
        });
        let first = text.find("Inv_0  x > 0").expect("first invariant");
        let second = text.find("Inv_1  y <= n").expect("second invariant");
        assert!(first < second);
    }

    #[test]
    fn failure_prints_title_and_message_only() {
        let text = text_for(&RequestState::Failed {
            message: "Execution failed: Internal Server Error".to_string(),
        });
        assert_eq!(
            text,
            "Analysis Failed\n  Execution failed: Internal Server Error\n"
        );
    }

    #[test]
    fn details_section_lists_supplementary_fields() {
        let mut result = sample(Vec::new());
        result.explanation.goal = Some("Return n unchanged".to_string());
        result.explanation.edge_cases = Some(vec!["n == 0".to_string()]);

        let text = text_for(&RequestState::Resolved { result });
        assert!(text.contains("Details\n  Goal: Return n unchanged\n"));
        assert!(text.contains("  Edge cases:\n    - n == 0\n"));
    }
}
