//! Dashboard page: stat cards, the city map viewport, the incident list,
//! and the two-hour forecast strip.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::forecast::ForecastBoard;
use model::incidents::IncidentLog;
use model::stats::NetworkStats;

use crate::nav::{ActivePage, Page};
use crate::theme;
use crate::widgets;

pub fn dashboard_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    stats: Res<NetworkStats>,
    incidents: Res<IncidentLog>,
    forecast: Res<ForecastBoard>,
) {
    if page.0 != Page::Dashboard {
        return;
    }
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("dashboard_stats")
        .exact_height(96.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.columns(4, |cols| {
                widgets::stat_card(
                    &mut cols[0],
                    "Average Traffic Speed",
                    &format!("{} km/h", stats.avg_speed_kmh),
                    Some(stats.avg_speed_change_pct),
                );
                widgets::stat_card(
                    &mut cols[1],
                    "Congestion Level",
                    stats.congestion.label(),
                    Some(stats.congestion_change_pct),
                );
                widgets::stat_card(
                    &mut cols[2],
                    "Active Traffic Signals",
                    &stats.active_signals.to_string(),
                    None,
                );
                widgets::stat_card(
                    &mut cols[3],
                    "Optimized Routes",
                    &stats.optimized_routes.to_string(),
                    Some(stats.optimized_routes_change_pct),
                );
            });
        });

    egui::SidePanel::right("dashboard_incidents")
        .exact_width(300.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            widgets::section_heading(ui, "Traffic Incidents", "Recent alerts and congestion");
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                for incident in &incidents.incidents {
                    let [r, g, b] = incident.severity.color();
                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(r, g, b, 18))
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(incident.title)
                                    .color(egui::Color32::from_rgb(r, g, b))
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(incident.detail)
                                    .color(theme::TEXT_STRONG)
                                    .size(12.0),
                            );
                            ui.label(
                                egui::RichText::new(incident.age_label())
                                    .color(theme::TEXT_MUTED)
                                    .size(10.0),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
        });

    egui::TopBottomPanel::bottom("dashboard_forecast")
        .exact_height(132.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            widgets::section_heading(
                ui,
                "Traffic Flow Prediction",
                "AI-powered forecast for next 2 hours",
            );
            ui.add_space(6.0);
            ui.columns(forecast.slots.len(), |cols| {
                for (col, slot) in cols.iter_mut().zip(&forecast.slots) {
                    col.group(|ui| {
                        ui.set_min_width(160.0);
                        ui.label(
                            egui::RichText::new(slot.label)
                                .color(theme::TEXT_STRONG)
                                .strong(),
                        );
                        widgets::status_dot(
                            ui,
                            slot.congestion.color(),
                            slot.congestion.forecast_label(),
                        );
                        ui.label(
                            egui::RichText::new(format!("Avg Speed: {} km/h", slot.avg_speed_kmh))
                                .color(theme::TEXT_MUTED)
                                .size(12.0),
                        );
                        ui.label(
                            egui::RichText::new(format!("Delay: {} min", slot.delay_min))
                                .color(theme::TEXT_MUTED)
                                .size(12.0),
                        );
                    });
                }
            });
        });

    // Floating caption over the 3D map region (offset past sidebar + stats).
    egui::Window::new("City Traffic Map")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(228.0, 168.0))
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("3D visualization with real-time traffic data")
                    .color(theme::TEXT_MUTED)
                    .size(11.0),
            );
        });
}
