use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod analytics_page;
pub mod dashboard;
pub mod map_page;
pub mod nav;
pub mod routes_page;
pub mod settings_page;
pub mod signals_page;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<nav::ActivePage>()
            .init_resource::<nav::HeaderState>()
            .init_resource::<map_page::MapViewState>()
            .init_resource::<routes_page::RouteQuery>()
            .init_resource::<signals_page::SignalFilterState>()
            .init_resource::<analytics_page::AnalyticsState>()
            .init_resource::<settings_page::SettingsForm>()
            .add_systems(Startup, theme::apply_light_theme)
            // Chained: egui panel allocation order must be stable per frame,
            // and finish_chrome reads the rect the panels leave free.
            .add_systems(
                Update,
                (
                    nav::header_ui,
                    nav::sidebar_ui,
                    map_page::map_controls_ui,
                    dashboard::dashboard_ui,
                    routes_page::routes_ui,
                    signals_page::signals_ui,
                    analytics_page::analytics_ui,
                    settings_page::settings_ui,
                    nav::finish_chrome,
                )
                    .chain(),
            );
    }
}
