//! Draws a [`ReportView`] into the central pane. All text comes from the view;
//! nothing here inspects request state directly.

use client_core::{
    render::{ComplexityFigures, DetailsView},
    InvariantItem, ReportView, ResultView,
};
use eframe::egui;

use crate::ui::theme;

pub fn show_report(ui: &mut egui::Ui, view: &ReportView) {
    match view {
        ReportView::Placeholder { title, hint } => show_placeholder(ui, title, hint),
        ReportView::Loading { label } => show_loading(ui, label),
        ReportView::Error { title, message } => show_error(ui, title, message),
        ReportView::Report(report) => show_result(ui, report),
    }
}

fn show_placeholder(ui: &mut egui::Ui, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(64.0);
        ui.label(
            egui::RichText::new(title)
                .size(20.0)
                .strong()
                .color(theme::MUTED_TEXT),
        );
        ui.label(egui::RichText::new(hint).color(theme::MUTED_TEXT));
    });
}

fn show_loading(ui: &mut egui::Ui, label: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(64.0);
        ui.spinner();
        ui.label(egui::RichText::new(label).size(16.0).color(theme::ACCENT));
    });
}

fn show_error(ui: &mut egui::Ui, title: &str, message: &str) {
    egui::Frame::NONE
        .fill(theme::DANGER_FILL)
        .stroke(egui::Stroke::new(1.0, theme::DANGER))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().color(theme::DANGER));
            ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
        });
}

fn show_result(ui: &mut egui::Ui, report: &ResultView) {
    egui::ScrollArea::vertical()
        .id_salt("report_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            show_header(ui, report);
            ui.add_space(6.0);

            theme::card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                section_title(ui, "Correctness Argument");
                ui.label(report.correctness_argument.as_str());
            });
            ui.add_space(6.0);

            show_complexity(ui, &report.complexity);
            ui.add_space(6.0);

            theme::card().show(ui, |ui| {
                ui.set_width(ui.available_width());
                section_title(ui, "Loop Invariants");
                for item in &report.invariants {
                    show_invariant(ui, item);
                }

                ui.add_space(6.0);
                section_title(ui, "Assumptions");
                ui.horizontal_wrapped(|ui| {
                    for assumption in &report.assumptions {
                        theme::badge(ui, assumption);
                    }
                });
            });

            if let Some(details) = &report.details {
                ui.add_space(6.0);
                show_details(ui, details);
            }
        });
}

fn show_header(ui: &mut egui::Ui, report: &ResultView) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(report.header.title)
                    .size(20.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(&report.header.signature)
                    .monospace()
                    .color(theme::MUTED_TEXT),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::Frame::NONE
                .fill(theme::SUCCESS)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(report.header.verdict)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
        });
    });
}

fn show_complexity(ui: &mut egui::Ui, complexity: &ComplexityFigures) {
    ui.columns(2, |columns| {
        complexity_card(
            &mut columns[0],
            "Time Complexity",
            &complexity.time,
            theme::TIME_ACCENT,
        );
        complexity_card(
            &mut columns[1],
            "Space Complexity",
            &complexity.space,
            theme::SPACE_ACCENT,
        );
    });
}

fn complexity_card(ui: &mut egui::Ui, label: &str, value: &str, accent: egui::Color32) {
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).small().color(theme::MUTED_TEXT));
        ui.label(
            egui::RichText::new(value)
                .monospace()
                .size(18.0)
                .color(accent),
        );
    });
}

fn show_invariant(ui: &mut egui::Ui, item: &InvariantItem) {
    match item {
        InvariantItem::Tagged { tag, text, .. } => {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(tag)
                        .monospace()
                        .strong()
                        .color(theme::INVARIANT_TAG),
                );
                ui.label(egui::RichText::new(text).monospace());
            });
        }
        InvariantItem::Placeholder { text } => {
            ui.label(
                egui::RichText::new(*text)
                    .italics()
                    .color(theme::MUTED_TEXT),
            );
        }
    }
}

fn show_details(ui: &mut egui::Ui, details: &DetailsView) {
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        section_title(ui, "Details");
        if let Some(goal) = &details.goal {
            labeled_line(ui, "Goal", goal);
        }
        if !details.arguments.is_empty() {
            labeled_line(ui, "Arguments", &details.arguments.join(", "));
        }
        if let Some(termination) = &details.termination_argument {
            labeled_line(ui, "Termination", termination);
        }
        if !details.edge_cases.is_empty() {
            ui.label(egui::RichText::new("Edge cases").strong());
            for case in &details.edge_cases {
                ui.label(format!("• {case}"));
            }
        }
        if let Some(note) = &details.note {
            labeled_line(ui, "Note", note);
        }
    });
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(15.0));
}

fn labeled_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}
