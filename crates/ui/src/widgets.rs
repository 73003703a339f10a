//! Small shared drawing helpers for the dashboard pages.

use bevy_egui::egui;

use crate::theme;

/// Colored status dot followed by a label.
pub fn status_dot(ui: &mut egui::Ui, color: [u8; 3], label: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("●")
                .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                .size(10.0),
        );
        ui.label(egui::RichText::new(label).color(theme::TEXT_STRONG));
    });
}

/// Headline stat card: title, value, optional week-over-week change.
/// A positive change means more traffic, so it renders red; negative green.
pub fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, change: Option<i32>) {
    ui.group(|ui| {
        ui.set_min_width(180.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).color(theme::TEXT_MUTED).size(12.0));
            ui.label(
                egui::RichText::new(value)
                    .color(theme::TEXT_STRONG)
                    .size(22.0)
                    .strong(),
            );
            if let Some(change) = change {
                let (arrow, color) = if change > 0 {
                    ("▲", theme::BAD)
                } else {
                    ("▼", theme::GOOD)
                };
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{arrow} {}%", change.abs()))
                            .color(color)
                            .size(11.0),
                    );
                    ui.label(
                        egui::RichText::new("from last week")
                            .color(theme::TEXT_MUTED)
                            .size(11.0),
                    );
                });
            }
        });
    });
}

/// Section heading with a muted subtitle underneath.
pub fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.label(
        egui::RichText::new(title)
            .color(theme::TEXT_STRONG)
            .size(16.0)
            .strong(),
    );
    ui.label(egui::RichText::new(subtitle).color(theme::TEXT_MUTED).size(12.0));
}

/// Painter-drawn bar chart over a fixed-height strip. Bars are normalized
/// against the series maximum.
pub fn draw_bars(ui: &mut egui::Ui, data: &[u32], color: egui::Color32) {
    let width = ui.available_width().max(120.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 120.0), egui::Sense::hover());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(248, 250, 252));

    if data.is_empty() {
        return;
    }
    let max = data.iter().copied().max().unwrap_or(1).max(1) as f32;
    let slot = rect.width() / data.len() as f32;
    let bar_width = (slot * 0.7).max(1.0);

    for (i, &value) in data.iter().enumerate() {
        let height = (value as f32 / max) * (rect.height() - 8.0);
        let x = rect.min.x + i as f32 * slot + (slot - bar_width) / 2.0;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.max.y - 4.0 - height),
            egui::pos2(x + bar_width, rect.max.y - 4.0),
        );
        painter.rect_filled(bar, 1.0, color);
    }
}

/// Painter-drawn trend line over a fixed-height strip.
pub fn draw_sparkline(ui: &mut egui::Ui, data: &[f32], color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(180.0, 40.0), egui::Sense::hover());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(248, 250, 252));

    if data.len() < 2 {
        return;
    }

    let min_val = data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_val = data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = (max_val - min_val).max(1.0);

    let points: Vec<egui::Pos2> = data
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.min.x + (i as f32 / (data.len() - 1) as f32) * rect.width();
            let y = rect.max.y - ((v - min_val) / range) * rect.height();
            egui::pos2(x, y)
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
}
