use std::time::Duration;

use chrono::Local;
use client_core::{config::DEFAULT_SERVER_URL, render, AnalyzeError, RequestController, Resolution};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{completion_status, UiErrorCategory, UiEvent};
use crate::controller::orchestration::submit_analysis;
use crate::ui::{panels, theme};

pub const SAMPLE_CODE: &str =
    "def factorial(n):\n    if n <= 1:\n        return 1\n    return n * factorial(n - 1)";

const ANALYZE_LABEL: &str = "Analyze Correctness";
const ANALYZING_LABEL: &str = "Verifying Logic...";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    pub initial_code: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            initial_code: SAMPLE_CODE.to_string(),
        }
    }
}

pub struct VerifexApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: RequestController,
    server_url: String,
    status: String,
    backend_ready: bool,
    theme_applied: bool,
}

impl VerifexApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            controller: RequestController::with_input(startup.initial_code),
            server_url: startup.server_url,
            status: "Starting analysis worker".to_string(),
            backend_ready: false,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendReady { server_url } => {
                    self.backend_ready = true;
                    self.status = format!("Ready: {server_url}");
                    self.server_url = server_url;
                }
                UiEvent::BackendUnavailable(reason) => {
                    self.backend_ready = false;
                    if self.controller.is_pending() {
                        let generation = self.controller.generation();
                        self.controller
                            .resolve(generation, Err(AnalyzeError::Transport(reason.clone())));
                    }
                    self.status = reason;
                }
                UiEvent::AnalysisCompleted(completion) => {
                    let failure = completion.outcome.as_ref().err().map(UiErrorCategory::of);
                    if self.controller.complete(completion) == Resolution::Applied {
                        let finished_at = Local::now().format("%H:%M:%S").to_string();
                        self.status = completion_status(failure, &finished_at);
                    }
                }
            }
        }
    }

    fn submit(&mut self) {
        submit_analysis(&mut self.controller, &self.cmd_tx, &mut self.status);
    }

    fn show_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("app_header")
            .frame(
                egui::Frame::new()
                    .fill(theme::CARD_FILL)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Verifex")
                            .strong()
                            .size(20.0)
                            .color(theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new("Neuro-symbolic verification for Python")
                            .color(theme::MUTED_TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(self.server_url.as_str())
                                .monospace()
                                .small()
                                .color(theme::MUTED_TEXT),
                        );
                    });
                });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let indicator = if self.backend_ready {
                    theme::SUCCESS
                } else {
                    theme::DANGER
                };
                ui.colored_label(indicator, "●");
                ui.label(egui::RichText::new(self.status.as_str()).small());
            });
        });
    }

    fn show_source_panel(&mut self, ctx: &egui::Context) {
        let mut submit_requested = false;

        egui::SidePanel::left("source_panel")
            .resizable(true)
            .default_width(520.0)
            .min_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Source Code").strong().size(16.0));
                ui.label(
                    egui::RichText::new("Paste the Python function to verify.")
                        .small()
                        .color(theme::MUTED_TEXT),
                );

                let editor_height = (ui.available_height() - 56.0).max(120.0);
                egui::ScrollArea::vertical()
                    .id_salt("source_scroll")
                    .max_height(editor_height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(self.controller.input_mut())
                                .id_salt("source_editor")
                                .code_editor()
                                .desired_rows(24)
                                .desired_width(f32::INFINITY)
                                .hint_text("def f(n): ..."),
                        );
                    });

                ui.add_space(8.0);
                let label = if self.controller.is_pending() {
                    ANALYZING_LABEL
                } else {
                    ANALYZE_LABEL
                };
                let button = egui::Button::new(egui::RichText::new(label).strong())
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add_enabled(self.controller.can_submit(), button).clicked() {
                    submit_requested = true;
                }
            });

        let shortcut = ctx.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);
        if submit_requested || shortcut {
            self.submit();
        }
    }

    fn show_report_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::show_report(ui, &render(self.controller.state()));
        });
    }
}

impl eframe::App for VerifexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        self.process_ui_events();

        self.show_top_bar(ctx);
        self.show_status_bar(ctx);
        self.show_source_panel(ctx);
        self.show_report_panel(ctx);

        if self.controller.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
