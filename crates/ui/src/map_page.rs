//! Traffic Map page: view toggle between the 3D city scene and the
//! heatmap, display filters, and the heatmap legend overlay.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::camera::OrbitCamera;
use rendering::lifecycle::{SceneCatalog, SceneKind};

use crate::nav::{ActivePage, Page};
use crate::theme;
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoadFilter {
    #[default]
    All,
    Main,
    Highways,
    Downtown,
}

impl RoadFilter {
    fn label(self) -> &'static str {
        match self {
            Self::All => "All Roads",
            Self::Main => "Main Roads",
            Self::Highways => "Highways Only",
            Self::Downtown => "Downtown",
        }
    }
}

const ROAD_FILTERS: [RoadFilter; 4] = [
    RoadFilter::All,
    RoadFilter::Main,
    RoadFilter::Highways,
    RoadFilter::Downtown,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    Current,
    MorningRush,
    Midday,
    EveningRush,
    Night,
}

impl TimeWindow {
    fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::MorningRush => "Morning Rush (7-9 AM)",
            Self::Midday => "Midday (11 AM-1 PM)",
            Self::EveningRush => "Evening Rush (4-6 PM)",
            Self::Night => "Night (8-10 PM)",
        }
    }
}

const TIME_WINDOWS: [TimeWindow; 5] = [
    TimeWindow::Current,
    TimeWindow::MorningRush,
    TimeWindow::Midday,
    TimeWindow::EveningRush,
    TimeWindow::Night,
];

/// Which visualization the Traffic Map page shows, plus its display
/// filters. The filters are presentational, as in the source product.
#[derive(Resource, Debug, Default)]
pub struct MapViewState {
    pub heatmap: bool,
    pub road_filter: RoadFilter,
    pub time_window: TimeWindow,
}

impl MapViewState {
    pub fn scene_kind(&self) -> SceneKind {
        if self.heatmap {
            SceneKind::Heatmap
        } else {
            SceneKind::CityMap
        }
    }
}

pub fn map_controls_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut view: ResMut<MapViewState>,
    catalog: Res<SceneCatalog>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if page.0 != Page::TrafficMap {
        return;
    }
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("map_controls")
        .exact_height(44.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                if ui
                    .selectable_label(!view.heatmap, SceneKind::CityMap.label())
                    .clicked()
                {
                    view.heatmap = false;
                }
                if ui
                    .selectable_label(view.heatmap, SceneKind::Heatmap.label())
                    .clicked()
                {
                    view.heatmap = true;
                }

                ui.separator();

                ui.label(egui::RichText::new("Layer:").color(theme::TEXT_MUTED));
                egui::ComboBox::from_id_salt("road_filter")
                    .selected_text(view.road_filter.label())
                    .show_ui(ui, |ui| {
                        for filter in ROAD_FILTERS {
                            ui.selectable_value(&mut view.road_filter, filter, filter.label());
                        }
                    });

                ui.label(egui::RichText::new("Time:").color(theme::TEXT_MUTED));
                egui::ComboBox::from_id_salt("time_window")
                    .selected_text(view.time_window.label())
                    .show_ui(ui, |ui| {
                        for window in TIME_WINDOWS {
                            ui.selectable_value(&mut view.time_window, window, window.label());
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export Map").clicked() {
                        info!("map export requested");
                    }
                    if ui.button("Reset View").clicked() {
                        if let Some(spec) = catalog.get(view.scene_kind()) {
                            orbit.apply_rig(&spec.rig);
                        }
                    }
                });
            });
        });

    if view.heatmap {
        egui::Window::new("Legend")
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                widgets::status_dot(ui, [239, 68, 68], "High congestion (>70%)");
                widgets::status_dot(ui, [245, 158, 11], "Medium congestion (40-70%)");
                widgets::status_dot(ui, [34, 197, 94], "Low congestion (<40%)");
            });
    }
}
