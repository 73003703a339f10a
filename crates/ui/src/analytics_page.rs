//! Analytics page: summary cards, the hourly volume chart, road-type
//! distribution, and optimization impact tiles.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::analytics::AnalyticsSummary;

use crate::nav::{ActivePage, Page};
use crate::theme;
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Today,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Quarter => "This Quarter",
            Self::Year => "This Year",
        }
    }
}

const PERIODS: [ReportPeriod; 5] = [
    ReportPeriod::Today,
    ReportPeriod::Week,
    ReportPeriod::Month,
    ReportPeriod::Quarter,
    ReportPeriod::Year,
];

#[derive(Resource, Debug, Default)]
pub struct AnalyticsState {
    pub period: ReportPeriod,
}

pub fn analytics_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut state: ResMut<AnalyticsState>,
    summary: Res<AnalyticsSummary>,
) {
    if page.0 != Page::Analytics {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Period:").color(theme::TEXT_MUTED));
                egui::ComboBox::from_id_salt("report_period")
                    .selected_text(state.period.label())
                    .show_ui(ui, |ui| {
                        for period in PERIODS {
                            ui.selectable_value(&mut state.period, period, period.label());
                        }
                    });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export").clicked() {
                        info!("analytics export requested");
                    }
                });
            });
            ui.add_space(8.0);

            ui.columns(3, |cols| {
                summary_card(
                    &mut cols[0],
                    "Congestion Reduction",
                    &format!("{}%", summary.congestion_reduction_pct),
                    "Lower than previous period",
                    theme::GOOD,
                );
                summary_card(
                    &mut cols[1],
                    "Average Commute Time",
                    &format!("{:.1} min", summary.avg_commute_min),
                    &format!("{:.1} min reduction", summary.commute_reduction_min),
                    egui::Color32::from_rgb(217, 119, 6),
                );
                summary_card(
                    &mut cols[2],
                    "Optimized Routes",
                    &summary.optimized_routes.to_string(),
                    &format!("+{} from previous period", summary.optimized_routes_delta),
                    theme::ACCENT,
                );
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                widgets::section_heading(
                    ui,
                    "Traffic Volume by Time",
                    "Vehicle count by hour of day",
                );
                ui.add_space(4.0);
                widgets::draw_bars(ui, &summary.hourly_volume, theme::ACCENT);
                ui.add_space(4.0);
                ui.columns(3, |cols| {
                    peak_cell(&mut cols[0], "Peak Morning", summary.peak_morning);
                    peak_cell(&mut cols[1], "Peak Evening", summary.peak_evening);
                    peak_cell(&mut cols[2], "Quietest Period", summary.quietest);
                });
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                widgets::section_heading(
                    ui,
                    "Traffic Distribution",
                    "Vehicle distribution by road type",
                );
                ui.add_space(4.0);
                for share in &summary.distribution {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(share.name)
                                .color(theme::TEXT_STRONG)
                                .size(12.0),
                        );
                        ui.add(
                            egui::ProgressBar::new(share.percent as f32 / 100.0)
                                .desired_width(220.0)
                                .text(format!("{}%", share.percent)),
                        );
                    });
                }
            });

            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                widgets::section_heading(
                    ui,
                    "AI Optimization Impact",
                    "Improvement metrics since AI implementation",
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Congestion reduction, last 12 months")
                        .color(theme::TEXT_MUTED)
                        .size(11.0),
                );
                widgets::draw_sparkline(ui, &summary.impact_trend, theme::GOOD);
                ui.add_space(8.0);
                ui.columns(summary.impact.len(), |cols| {
                    for (col, metric) in cols.iter_mut().zip(&summary.impact) {
                        col.group(|ui| {
                            ui.label(
                                egui::RichText::new(metric.title)
                                    .color(theme::TEXT_MUTED)
                                    .size(12.0),
                            );
                            ui.label(
                                egui::RichText::new(metric.value)
                                    .color(theme::ACCENT)
                                    .size(16.0)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(metric.note)
                                    .color(theme::TEXT_MUTED)
                                    .size(10.0),
                            );
                        });
                    }
                });
            });
        });
    });
}

fn summary_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    note: &str,
    value_color: egui::Color32,
) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).color(theme::TEXT_STRONG).strong());
        ui.label(egui::RichText::new(value).color(value_color).size(26.0).strong());
        ui.label(egui::RichText::new(note).color(theme::TEXT_MUTED).size(11.0));
    });
}

fn peak_cell(ui: &mut egui::Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(title).color(theme::TEXT_STRONG).size(12.0));
        ui.label(egui::RichText::new(value).color(theme::TEXT_MUTED).size(12.0));
    });
}
