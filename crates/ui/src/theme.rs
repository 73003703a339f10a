use bevy_egui::{egui, EguiContexts};

/// Light dashboard theme: white cards on a pale slate background.
pub fn apply_light_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::WHITE;
    let canvas = egui::Color32::from_rgb(248, 250, 252);
    let inactive = egui::Color32::from_rgb(241, 245, 249);
    let hover = egui::Color32::from_rgb(226, 232, 240);
    let accent = egui::Color32::from_rgb(29, 78, 216);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.faint_bg_color = canvas;
    style.visuals.extreme_bg_color = inactive;

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = accent;

    style.visuals.selection.bg_fill = egui::Color32::from_rgb(219, 234, 254);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

// Shared palette for custom-painted elements.

pub const TEXT_STRONG: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);
pub const GOOD: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const BAD: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
