//! Network-wide headline figures for the dashboard stat cards.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::congestion::CongestionLevel;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    pub avg_speed_kmh: u32,
    /// Week-over-week change in average speed, percent.
    pub avg_speed_change_pct: i32,
    pub congestion: CongestionLevel,
    pub congestion_change_pct: i32,
    pub active_signals: u32,
    pub optimized_routes: u32,
    pub optimized_routes_change_pct: i32,
}

impl Default for NetworkStats {
    fn default() -> Self {
        Self {
            avg_speed_kmh: 32,
            avg_speed_change_pct: -15,
            congestion: CongestionLevel::Medium,
            congestion_change_pct: 5,
            active_signals: 124,
            optimized_routes: 18,
            optimized_routes_change_pct: -8,
        }
    }
}
