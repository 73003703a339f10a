//! Settings page: tabbed in-memory preference form. Nothing persists; the
//! product stores no state between runs.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::nav::{ActivePage, Page};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Notifications,
    AiModel,
}

impl SettingsTab {
    fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Notifications => "Notifications",
            Self::AiModel => "AI Model",
        }
    }
}

const TABS: [SettingsTab; 3] = [
    SettingsTab::General,
    SettingsTab::Notifications,
    SettingsTab::AiModel,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultMapView {
    #[default]
    City3d,
    Heatmap,
}

impl DefaultMapView {
    fn label(self) -> &'static str {
        match self {
            Self::City3d => "3D City View",
            Self::Heatmap => "Traffic Heatmap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshInterval {
    Sec30,
    #[default]
    Min1,
    Min5,
    Min10,
}

impl RefreshInterval {
    fn label(self) -> &'static str {
        match self {
            Self::Sec30 => "Every 30 seconds",
            Self::Min1 => "Every 1 minute",
            Self::Min5 => "Every 5 minutes",
            Self::Min10 => "Every 10 minutes",
        }
    }
}

const REFRESH_INTERVALS: [RefreshInterval; 4] = [
    RefreshInterval::Sec30,
    RefreshInterval::Min1,
    RefreshInterval::Min5,
    RefreshInterval::Min10,
];

#[derive(Resource, Debug)]
pub struct SettingsForm {
    pub tab: SettingsTab,
    pub city_name: String,
    pub default_view: DefaultMapView,
    pub refresh: RefreshInterval,
    pub auto_apply_optimizations: bool,
    pub notify_congestion: bool,
    pub notify_incidents: bool,
    pub notify_signal_faults: bool,
    pub notify_model_updates: bool,
    pub prediction_aggressiveness: u32,
    pub auto_retrain: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            tab: SettingsTab::default(),
            city_name: "Metro City".to_string(),
            default_view: DefaultMapView::default(),
            refresh: RefreshInterval::default(),
            auto_apply_optimizations: false,
            notify_congestion: true,
            notify_incidents: true,
            notify_signal_faults: true,
            notify_model_updates: false,
            prediction_aggressiveness: 50,
            auto_retrain: true,
        }
    }
}

pub fn settings_ui(
    mut contexts: EguiContexts,
    page: Res<ActivePage>,
    mut form: ResMut<SettingsForm>,
) {
    if page.0 != Page::Settings {
        return;
    }

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for tab in TABS {
                if ui.selectable_label(form.tab == tab, tab.label()).clicked() {
                    form.tab = tab;
                }
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match form.tab {
            SettingsTab::General => general_tab(ui, &mut form),
            SettingsTab::Notifications => notifications_tab(ui, &mut form),
            SettingsTab::AiModel => ai_model_tab(ui, &mut form),
        }

        ui.add_space(12.0);
        if ui.button("Apply Settings").clicked() {
            info!("settings applied");
        }
    });
}

fn general_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    egui::Grid::new("settings_general").num_columns(2).show(ui, |ui| {
        ui.label(egui::RichText::new("City name").color(theme::TEXT_MUTED));
        ui.add(egui::TextEdit::singleline(&mut form.city_name).desired_width(220.0));
        ui.end_row();

        ui.label(egui::RichText::new("Default map view").color(theme::TEXT_MUTED));
        egui::ComboBox::from_id_salt("default_view")
            .selected_text(form.default_view.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut form.default_view,
                    DefaultMapView::City3d,
                    DefaultMapView::City3d.label(),
                );
                ui.selectable_value(
                    &mut form.default_view,
                    DefaultMapView::Heatmap,
                    DefaultMapView::Heatmap.label(),
                );
            });
        ui.end_row();

        ui.label(egui::RichText::new("Data refresh").color(theme::TEXT_MUTED));
        egui::ComboBox::from_id_salt("refresh_interval")
            .selected_text(form.refresh.label())
            .show_ui(ui, |ui| {
                for interval in REFRESH_INTERVALS {
                    ui.selectable_value(&mut form.refresh, interval, interval.label());
                }
            });
        ui.end_row();
    });
    ui.add_space(8.0);
    ui.checkbox(
        &mut form.auto_apply_optimizations,
        "Automatically apply AI optimization recommendations",
    );
}

fn notifications_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    ui.checkbox(&mut form.notify_congestion, "Congestion alerts");
    ui.checkbox(&mut form.notify_incidents, "Incident reports");
    ui.checkbox(&mut form.notify_signal_faults, "Signal fault warnings");
    ui.checkbox(&mut form.notify_model_updates, "AI model update notices");
}

fn ai_model_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    ui.label(egui::RichText::new("Prediction aggressiveness").color(theme::TEXT_MUTED));
    ui.add(egui::Slider::new(&mut form.prediction_aggressiveness, 0..=100).suffix("%"));
    ui.add_space(8.0);
    ui.checkbox(&mut form.auto_retrain, "Retrain model automatically with new data");
}
