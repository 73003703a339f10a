//! Signal Management page: filterable signal list with per-signal timing
//! recommendations and the optimization actions.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::signals::{SignalBoard, SignalFilter, SIGNAL_FILTERS};

use crate::nav::{ActivePage, Page};
use crate::theme;
use crate::widgets;

#[derive(Resource, Debug, Default)]
pub struct SignalFilterState(pub SignalFilter);

pub fn signals_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut filter: ResMut<SignalFilterState>,
    mut board: ResMut<SignalBoard>,
) {
    if page.0 != Page::Signals {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            widgets::section_heading(ui, "Traffic Signals", "");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Optimize All Signals").clicked() {
                    board.optimize_all();
                    info!("optimization applied to all signals");
                }
                egui::ComboBox::from_id_salt("signal_filter")
                    .selected_text(filter.0.label())
                    .show_ui(ui, |ui| {
                        for choice in SIGNAL_FILTERS {
                            ui.selectable_value(&mut filter.0, choice, choice.label());
                        }
                    });
                ui.label(egui::RichText::new("Filter:").color(theme::TEXT_MUTED));
            });
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            let mut apply: Option<u32> = None;

            for signal in board.signals.iter().filter(|s| filter.0.matches(s)) {
                egui::CollapsingHeader::new(
                    egui::RichText::new(signal.name).color(theme::TEXT_STRONG).strong(),
                )
                .id_salt(signal.id)
                .show(ui, |ui| {
                    egui::Grid::new(("signal_detail", signal.id))
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new("Location").color(theme::TEXT_MUTED));
                            ui.label(signal.location);
                            ui.end_row();

                            ui.label(egui::RichText::new("Status").color(theme::TEXT_MUTED));
                            ui.label(signal.status.label());
                            ui.end_row();

                            ui.label(egui::RichText::new("Congestion").color(theme::TEXT_MUTED));
                            widgets::status_dot(
                                ui,
                                signal.congestion.color(),
                                signal.congestion.label(),
                            );
                            ui.end_row();

                            ui.label(egui::RichText::new("Timing").color(theme::TEXT_MUTED));
                            if signal.optimized {
                                ui.label(egui::RichText::new("Optimized").color(theme::GOOD));
                            } else {
                                ui.label(
                                    egui::RichText::new("Needs optimization").color(theme::BAD),
                                );
                            }
                            ui.end_row();
                        });

                    if let Some(recommendation) = signal.recommendation {
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(recommendation)
                                .color(theme::TEXT_MUTED)
                                .italics()
                                .size(12.0),
                        );
                    }
                    if !signal.optimized && ui.button("Apply optimization").clicked() {
                        apply = Some(signal.id);
                    }
                });
                ui.add_space(4.0);
            }

            if let Some(id) = apply {
                if board.apply_optimization(id) {
                    info!("optimization applied to signal {id}");
                }
            }
        });
    });
}
