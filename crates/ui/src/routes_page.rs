//! Route Optimization page: the route-finder form, the sortable route
//! list, and the static recommendation callouts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::routes::{RouteSort, RouteTable, ROUTE_SORTS};

use crate::nav::{ActivePage, Page};
use crate::theme;
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Departure {
    #[default]
    Now,
    In15Min,
    In30Min,
    In1Hour,
}

impl Departure {
    fn label(self) -> &'static str {
        match self {
            Self::Now => "Now",
            Self::In15Min => "In 15 minutes",
            Self::In30Min => "In 30 minutes",
            Self::In1Hour => "In 1 hour",
        }
    }
}

const DEPARTURES: [Departure; 4] = [
    Departure::Now,
    Departure::In15Min,
    Departure::In30Min,
    Departure::In1Hour,
];

#[derive(Resource, Debug, Default)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub departure: Departure,
    pub sort: RouteSort,
}

pub fn routes_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut query: ResMut<RouteQuery>,
    mut table: ResMut<RouteTable>,
) {
    if page.0 != Page::Routes {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                widgets::section_heading(ui, "Find Optimal Route", "");
                ui.add_space(4.0);
                egui::Grid::new("route_form").num_columns(2).show(ui, |ui| {
                    ui.label(egui::RichText::new("Origin").color(theme::TEXT_MUTED));
                    ui.add(
                        egui::TextEdit::singleline(&mut query.origin)
                            .hint_text("Enter starting point")
                            .desired_width(260.0),
                    );
                    ui.end_row();

                    ui.label(egui::RichText::new("Destination").color(theme::TEXT_MUTED));
                    ui.add(
                        egui::TextEdit::singleline(&mut query.destination)
                            .hint_text("Enter destination")
                            .desired_width(260.0),
                    );
                    ui.end_row();

                    ui.label(egui::RichText::new("Departure time").color(theme::TEXT_MUTED));
                    egui::ComboBox::from_id_salt("departure")
                        .selected_text(query.departure.label())
                        .show_ui(ui, |ui| {
                            for departure in DEPARTURES {
                                ui.selectable_value(
                                    &mut query.departure,
                                    departure,
                                    departure.label(),
                                );
                            }
                        });
                    ui.end_row();
                });
                ui.add_space(4.0);
                if ui.button("Find Routes").clicked() {
                    info!(
                        "route search requested: {:?} -> {:?}",
                        query.origin, query.destination
                    );
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                widgets::section_heading(ui, "Optimized Routes", "");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut sort = query.sort;
                    egui::ComboBox::from_id_salt("route_sort")
                        .selected_text(sort.label())
                        .show_ui(ui, |ui| {
                            for choice in ROUTE_SORTS {
                                ui.selectable_value(&mut sort, choice, choice.label());
                            }
                        });
                    if sort != query.sort {
                        query.sort = sort;
                        table.sort_by(sort);
                    }
                    ui.label(egui::RichText::new("Sort by:").color(theme::TEXT_MUTED));
                });
            });
            ui.add_space(4.0);

            for route in &table.routes {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(route.name)
                                    .color(theme::TEXT_STRONG)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(format!("{} → {}", route.start, route.end))
                                    .color(theme::TEXT_MUTED)
                                    .size(12.0),
                            );
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("{:.1} km", route.distance_km))
                                        .color(theme::TEXT_STRONG)
                                        .size(12.0),
                                );
                                ui.label(
                                    egui::RichText::new(format!("{} min", route.duration_min))
                                        .color(theme::TEXT_STRONG)
                                        .size(12.0),
                                );
                                widgets::status_dot(
                                    ui,
                                    route.congestion.color(),
                                    route.congestion.label(),
                                );
                            });
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Use this route").clicked() {
                                info!("route selected: {}", route.name);
                            }
                            ui.label(
                                egui::RichText::new(format!("Save {} min", route.saved_min))
                                    .color(theme::GOOD)
                                    .size(12.0),
                            );
                        });
                    });
                });
                ui.add_space(6.0);
            }

            ui.add_space(12.0);
            widgets::section_heading(ui, "Traffic-Based Recommendations", "");
            ui.add_space(4.0);
            recommendation(
                ui,
                "AI Recommendation",
                "Based on current traffic patterns and your historical travel data, we \
                 recommend leaving 15 minutes earlier tomorrow morning to avoid predicted \
                 heavy congestion on your usual route.",
                egui::Color32::from_rgb(239, 246, 255),
                theme::ACCENT,
            );
            ui.add_space(6.0);
            recommendation(
                ui,
                "Traffic Trend",
                "Rush hour congestion on Highway 101 has increased by 12% over the past \
                 week due to ongoing construction. Consider alternative routes during peak \
                 hours.",
                egui::Color32::from_rgb(248, 250, 252),
                theme::TEXT_STRONG,
            );
        });
    });
}

fn recommendation(
    ui: &mut egui::Ui,
    title: &str,
    body: &str,
    fill: egui::Color32,
    title_color: egui::Color32,
) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).color(title_color).strong());
            ui.label(egui::RichText::new(body).color(theme::TEXT_MUTED).size(12.0));
        });
}
