//! Palette and frame helpers shared by the panes.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(35, 165, 90);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(240, 71, 71);
pub const DANGER_FILL: egui::Color32 = egui::Color32::from_rgb(63, 39, 43);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(43, 45, 49);
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(58, 60, 70);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(148, 155, 164);
pub const INVARIANT_TAG: egui::Color32 = egui::Color32::from_rgb(168, 120, 255);
pub const BADGE_FILL: egui::Color32 = egui::Color32::from_rgb(37, 45, 86);
pub const BADGE_TEXT: egui::Color32 = egui::Color32::from_rgb(185, 197, 255);
pub const TIME_ACCENT: egui::Color32 = egui::Color32::from_rgb(245, 140, 60);
pub const SPACE_ACCENT: egui::Color32 = egui::Color32::from_rgb(60, 190, 220);

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    });
}

pub fn card() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(BADGE_FILL)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(BADGE_TEXT));
        });
}
