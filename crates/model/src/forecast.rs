//! Two-hour congestion outlook for the dashboard forecast panel.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::congestion::CongestionLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSlot {
    pub label: &'static str,
    pub congestion: CongestionLevel,
    pub avg_speed_kmh: u32,
    pub delay_min: u32,
}

#[derive(Resource, Debug, Clone)]
pub struct ForecastBoard {
    pub slots: Vec<ForecastSlot>,
}

impl Default for ForecastBoard {
    fn default() -> Self {
        Self {
            slots: vec![
                ForecastSlot {
                    label: "Current Status",
                    congestion: CongestionLevel::Medium,
                    avg_speed_kmh: 28,
                    delay_min: 12,
                },
                ForecastSlot {
                    label: "+1 Hour Prediction",
                    congestion: CongestionLevel::High,
                    avg_speed_kmh: 18,
                    delay_min: 25,
                },
                ForecastSlot {
                    label: "+2 Hour Prediction",
                    congestion: CongestionLevel::Low,
                    avg_speed_kmh: 42,
                    delay_min: 5,
                },
            ],
        }
    }
}
