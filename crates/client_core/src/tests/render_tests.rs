use super::*;
use shared::protocol::{CodeMetadata, Complexity, Explanation};

fn document(invariants: Option<Vec<&str>>, assumptions: Option<Vec<&str>>) -> VerificationResult {
    let owned = |items: Vec<&str>| items.into_iter().map(str::to_string).collect::<Vec<_>>();
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
            invariants: invariants.map(owned),
            assumptions: assumptions.map(owned),
            goal: None,
            termination_argument: None,
            edge_cases: None,
            note: None,
        },
    }
}

fn resolved(result: VerificationResult) -> ResultView {
    match render(&RequestState::Resolved { result }) {
        ReportView::Report(view) => *view,
        other => panic!("expected report view, got {other:?}"),
    }
}

#[test]
fn idle_and_pending_render_placeholders_only() {
    assert_eq!(
        render(&RequestState::Idle),
        ReportView::Placeholder {
            title: READY_TITLE,
            hint: READY_HINT
        }
    );
    assert_eq!(
        render(&RequestState::Pending {
            submitted_code: "x".to_string()
        }),
        ReportView::Loading {
            label: LOADING_LABEL
        }
    );
}

#[test]
fn failure_message_is_rendered_verbatim() {
    let message = "Execution failed: Service Unavailable <retry later>";
    assert_eq!(
        render(&RequestState::Failed {
            message: message.to_string()
        }),
        ReportView::Error {
            title: ERROR_TITLE,
            message: message.to_string()
        }
    );
}

#[test]
fn empty_invariants_render_a_single_placeholder() {
    let view = resolved(document(Some(Vec::new()), None));
    assert_eq!(
        view.invariants,
        vec![InvariantItem::Placeholder {
            text: NO_INVARIANTS_PLACEHOLDER
        }]
    );
}

#[test]
fn absent_invariants_render_the_same_placeholder() {
    let view = resolved(document(None, None));
    assert_eq!(view.invariants.len(), 1);
    assert_eq!(view.invariants[0].text(), NO_INVARIANTS_PLACEHOLDER);
}

#[test]
fn invariants_are_tagged_with_their_position() {
    let view = resolved(document(Some(vec!["x > 0", "y <= n"]), None));
    assert_eq!(
        view.invariants,
        vec![
            InvariantItem::Tagged {
                index: 0,
                tag: "Inv_0".to_string(),
                text: "x > 0".to_string()
            },
            InvariantItem::Tagged {
                index: 1,
                tag: "Inv_1".to_string(),
                text: "y <= n".to_string()
            },
        ]
    );
}

#[test]
fn missing_assumptions_render_no_badges_and_no_placeholder() {
    assert!(resolved(document(None, None)).assumptions.is_empty());
    assert!(resolved(document(None, Some(Vec::new()))).assumptions.is_empty());
}

#[test]
fn assumptions_render_in_order() {
    let view = resolved(document(None, Some(vec!["n >= 0", "n is an integer"])));
    assert_eq!(view.assumptions, vec!["n >= 0", "n is an integer"]);
}

#[test]
fn header_complexity_and_argument_are_copied_verbatim() {
    let mut doc = document(None, None);
    doc.explanation.complexity.time = "O(n log n) due to sorting".to_string();
    let view = resolved(doc);

    assert_eq!(view.header.title, REPORT_TITLE);
    assert_eq!(view.header.signature, "f()");
    assert_eq!(view.header.verdict, VERDICT_LABEL);
    assert_eq!(view.correctness_argument, "trivial");
    assert_eq!(view.complexity.time, "O(n log n) due to sorting");
    assert_eq!(view.complexity.space, "O(1)");
}

#[test]
fn empty_function_name_is_tolerated() {
    let mut doc = document(None, None);
    doc.metadata.function_name.clear();
    assert_eq!(resolved(doc).header.signature, "()");
}

#[test]
fn details_are_omitted_when_service_sends_none() {
    assert_eq!(resolved(document(None, None)).details, None);
}

#[test]
fn details_collect_supplementary_fields_and_skip_blanks() {
    let mut doc = document(None, None);
    doc.metadata.args = Some(vec!["n".to_string()]);
    doc.explanation.goal = Some("Compute n!".to_string());
    doc.explanation.termination_argument = Some("   ".to_string());
    doc.explanation.edge_cases = Some(vec!["n == 0".to_string(), String::new()]);

    let details = resolved(doc).details.expect("details");
    assert_eq!(details.goal.as_deref(), Some("Compute n!"));
    assert_eq!(details.termination_argument, None);
    assert_eq!(details.edge_cases, vec!["n == 0"]);
    assert_eq!(details.arguments, vec!["n"]);
    assert_eq!(details.note, None);
}

#[test]
fn rendering_does_not_touch_the_document() {
    let doc = document(Some(vec!["x > 0"]), Some(vec!["x is an int"]));
    let state = RequestState::Resolved {
        result: doc.clone(),
    };
    let first = render(&state);
    let second = render(&state);

    assert_eq!(first, second);
    assert_eq!(state, RequestState::Resolved { result: doc });
}

#[test]
fn view_serializes_with_kind_tags() {
    let json = serde_json::to_value(render(&RequestState::Resolved {
        result: document(Some(Vec::new()), Some(vec!["n is an integer"])),
    }))
    .expect("serialize view");

    assert_eq!(json["kind"], "report");
    assert_eq!(json["header"]["signature"], "f()");
    assert_eq!(json["invariants"][0]["kind"], "placeholder");
    assert_eq!(json["assumptions"][0], "n is an integer");
    assert!(json.get("details").is_none());
}
