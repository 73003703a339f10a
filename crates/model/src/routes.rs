//! Suggested routes shown on the Route Optimization page.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::congestion::CongestionLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub distance_km: f32,
    pub duration_min: u32,
    pub congestion: CongestionLevel,
    pub saved_min: u32,
}

/// Sort order for the route list, matching the page's "Sort by" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteSort {
    #[default]
    TimeSaved,
    Distance,
    Congestion,
}

impl RouteSort {
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeSaved => "Time Saved",
            Self::Distance => "Distance",
            Self::Congestion => "Congestion Level",
        }
    }
}

pub const ROUTE_SORTS: [RouteSort; 3] =
    [RouteSort::TimeSaved, RouteSort::Distance, RouteSort::Congestion];

#[derive(Resource, Debug, Clone)]
pub struct RouteTable {
    pub routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![
                Route {
                    id: 1,
                    name: "Main Route",
                    start: "Downtown",
                    end: "Tech District",
                    distance_km: 12.3,
                    duration_min: 24,
                    congestion: CongestionLevel::Medium,
                    saved_min: 0,
                },
                Route {
                    id: 2,
                    name: "Alternate Route 1",
                    start: "Downtown",
                    end: "Tech District",
                    distance_km: 14.1,
                    duration_min: 19,
                    congestion: CongestionLevel::Low,
                    saved_min: 5,
                },
                Route {
                    id: 3,
                    name: "Highway Route",
                    start: "Downtown",
                    end: "Tech District",
                    distance_km: 15.7,
                    duration_min: 18,
                    congestion: CongestionLevel::Low,
                    saved_min: 6,
                },
                Route {
                    id: 4,
                    name: "Scenic Route",
                    start: "Downtown",
                    end: "Tech District",
                    distance_km: 13.5,
                    duration_min: 22,
                    congestion: CongestionLevel::Medium,
                    saved_min: 2,
                },
            ],
        }
    }
}

impl RouteTable {
    /// Reorder the table in place. Time saved sorts descending (best first);
    /// distance and congestion sort ascending.
    pub fn sort_by(&mut self, sort: RouteSort) {
        match sort {
            RouteSort::TimeSaved => self.routes.sort_by(|a, b| b.saved_min.cmp(&a.saved_min)),
            RouteSort::Distance => self
                .routes
                .sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
            RouteSort::Congestion => self.routes.sort_by(|a, b| {
                a.congestion
                    .cmp(&b.congestion)
                    .then(a.duration_min.cmp(&b.duration_min))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_time_saved_descending() {
        let mut table = RouteTable::default();
        table.sort_by(RouteSort::TimeSaved);
        let saved: Vec<u32> = table.routes.iter().map(|r| r.saved_min).collect();
        assert_eq!(saved, vec![6, 5, 2, 0]);
    }

    #[test]
    fn test_sort_distance_ascending() {
        let mut table = RouteTable::default();
        table.sort_by(RouteSort::Distance);
        assert_eq!(table.routes.first().map(|r| r.id), Some(1));
        assert_eq!(table.routes.last().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_sort_congestion_breaks_ties_by_duration() {
        let mut table = RouteTable::default();
        table.sort_by(RouteSort::Congestion);
        // Both Low-congestion routes first, faster one leading.
        assert_eq!(table.routes[0].id, 3);
        assert_eq!(table.routes[1].id, 2);
    }
}
