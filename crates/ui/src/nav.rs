//! Dashboard chrome: header, sidebar navigation, and the end-of-frame
//! handoff that tells the rendering crate which region is free for the 3D
//! viewport and which scene should be mounted.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::lifecycle::{ActiveScene, SceneKind};
use rendering::viewport::ChromeInsets;

use crate::map_page::MapViewState;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    TrafficMap,
    Routes,
    Signals,
    Analytics,
    Settings,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::TrafficMap => "Traffic Map",
            Self::Routes => "Route Optimization",
            Self::Signals => "Signal Management",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "Real-time traffic monitoring and predictions",
            Self::TrafficMap => "Interactive 3D visualization with real-time data",
            Self::Routes => "AI-powered route suggestions to avoid congestion",
            Self::Signals => "Monitor and optimize traffic signal timings",
            Self::Analytics => "Insights and performance metrics for traffic flow",
            Self::Settings => "Configure dashboard preferences",
        }
    }
}

pub const PAGES: [Page; 6] = [
    Page::Dashboard,
    Page::TrafficMap,
    Page::Routes,
    Page::Signals,
    Page::Analytics,
    Page::Settings,
];

#[derive(Resource, Debug, Default)]
pub struct ActivePage(pub Page);

#[derive(Resource, Default)]
pub struct HeaderState {
    pub search: String,
}

pub fn header_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut header: ResMut<HeaderState>,
) {
    egui::TopBottomPanel::top("header")
        .exact_height(56.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal_centered(|ui| {
                ui.vertical(|ui| {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(page.0.label())
                            .color(theme::TEXT_STRONG)
                            .size(18.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(page.0.subtitle())
                            .color(theme::TEXT_MUTED)
                            .size(11.0),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if page.0 == Page::Dashboard {
                        if ui.button("Export Report").clicked() {
                            info!("dashboard report export requested");
                        }
                        if ui.button("Run AI Prediction").clicked() {
                            info!("prediction refresh requested");
                        }
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut header.search)
                            .hint_text("Search locations...")
                            .desired_width(180.0),
                    );
                });
            });
        });
}

pub fn sidebar_ui(mut contexts: EguiContexts, mut page: ResMut<ActivePage>) {
    egui::SidePanel::left("sidebar")
        .exact_width(220.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Traffic Flow AI")
                    .color(theme::ACCENT)
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            for entry in PAGES {
                let selected = page.0 == entry;
                if ui
                    .selectable_label(selected, egui::RichText::new(entry.label()).size(14.0))
                    .clicked()
                {
                    page.0 = entry;
                }
                ui.add_space(2.0);
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.add_space(12.0);
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(239, 246, 255))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            egui::RichText::new("AI Status")
                                .color(theme::ACCENT)
                                .size(12.0)
                                .strong(),
                        );
                        crate::widgets::status_dot(ui, [34, 197, 94], "Prediction Active");
                        ui.label(
                            egui::RichText::new("Last update: 2 mins ago")
                                .color(theme::TEXT_MUTED)
                                .size(10.0),
                        );
                    });
            });
        });
}

/// Runs after every page system: records the egui-free region for the 3D
/// viewport and routes the active scene from the active page.
pub fn finish_chrome(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    map_view: Res<MapViewState>,
    mut insets: ResMut<ChromeInsets>,
    mut active: ResMut<ActiveScene>,
) {
    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();
    let avail = ctx.available_rect();

    let new_insets = ChromeInsets {
        left: (avail.min.x - screen.min.x).max(0.0),
        top: (avail.min.y - screen.min.y).max(0.0),
        right: (screen.max.x - avail.max.x).max(0.0),
        bottom: (screen.max.y - avail.max.y).max(0.0),
    };
    if *insets != new_insets {
        *insets = new_insets;
    }

    let desired = scene_for_page(page.0, &map_view);
    if active.0 != desired {
        active.0 = desired;
    }
}

/// Which scene a page wants mounted. Only the dashboard and the traffic map
/// carry a 3D panel.
pub fn scene_for_page(page: Page, map_view: &MapViewState) -> Option<SceneKind> {
    match page {
        Page::Dashboard => Some(SceneKind::CityMap),
        Page::TrafficMap => Some(map_view.scene_kind()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_routing() {
        let mut view = MapViewState::default();
        assert_eq!(
            scene_for_page(Page::Dashboard, &view),
            Some(SceneKind::CityMap)
        );
        assert_eq!(
            scene_for_page(Page::TrafficMap, &view),
            Some(SceneKind::CityMap)
        );
        view.heatmap = true;
        assert_eq!(
            scene_for_page(Page::TrafficMap, &view),
            Some(SceneKind::Heatmap)
        );
        // Table and form pages unmount the 3D scene entirely.
        assert_eq!(scene_for_page(Page::Routes, &view), None);
        assert_eq!(scene_for_page(Page::Analytics, &view), None);
        assert_eq!(scene_for_page(Page::Settings, &view), None);
    }
}
