use bevy::prelude::*;

pub mod analytics;
pub mod config;
pub mod congestion;
pub mod forecast;
pub mod heatmap;
pub mod incidents;
pub mod rng;
pub mod routes;
pub mod signals;
pub mod stats;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<rng::CityRng>()
            .init_resource::<stats::NetworkStats>()
            .init_resource::<incidents::IncidentLog>()
            .init_resource::<forecast::ForecastBoard>()
            .init_resource::<routes::RouteTable>()
            .init_resource::<signals::SignalBoard>()
            .init_resource::<analytics::AnalyticsSummary>();
    }
}
