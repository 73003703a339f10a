//! Traffic-signal inventory for the Signal Management page.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::congestion::CongestionLevel;
use crate::congestion::SignalStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSignal {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub status: SignalStatus,
    pub congestion: CongestionLevel,
    pub optimized: bool,
    /// Timing recommendation shown in the expanded row, when one exists.
    pub recommendation: Option<&'static str>,
}

/// Filter choices for the signal list, matching the page's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalFilter {
    #[default]
    All,
    Active,
    Inactive,
    Maintenance,
    Optimized,
    NeedsOptimization,
}

impl SignalFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Signals",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
            Self::Optimized => "Optimized",
            Self::NeedsOptimization => "Needs Optimization",
        }
    }

    pub fn matches(self, signal: &TrafficSignal) -> bool {
        match self {
            Self::All => true,
            Self::Active => signal.status == SignalStatus::Active,
            Self::Inactive => signal.status == SignalStatus::Inactive,
            Self::Maintenance => signal.status == SignalStatus::Maintenance,
            Self::Optimized => signal.optimized,
            Self::NeedsOptimization => !signal.optimized,
        }
    }
}

pub const SIGNAL_FILTERS: [SignalFilter; 6] = [
    SignalFilter::All,
    SignalFilter::Active,
    SignalFilter::Inactive,
    SignalFilter::Maintenance,
    SignalFilter::Optimized,
    SignalFilter::NeedsOptimization,
];

#[derive(Resource, Debug, Clone)]
pub struct SignalBoard {
    pub signals: Vec<TrafficSignal>,
}

impl Default for SignalBoard {
    fn default() -> Self {
        Self {
            signals: vec![
                TrafficSignal {
                    id: 1,
                    name: "Main & 5th Intersection",
                    location: "Downtown",
                    status: SignalStatus::Active,
                    congestion: CongestionLevel::High,
                    optimized: false,
                    recommendation: Some(
                        "Extend green light duration by 15 seconds during peak hours",
                    ),
                },
                TrafficSignal {
                    id: 2,
                    name: "Highway 101 Entrance",
                    location: "North District",
                    status: SignalStatus::Active,
                    congestion: CongestionLevel::Medium,
                    optimized: true,
                    recommendation: None,
                },
                TrafficSignal {
                    id: 3,
                    name: "Park Avenue & 3rd",
                    location: "East District",
                    status: SignalStatus::Maintenance,
                    congestion: CongestionLevel::Low,
                    optimized: false,
                    recommendation: Some("Resume normal operation within 2 hours"),
                },
                TrafficSignal {
                    id: 4,
                    name: "Commerce & State St",
                    location: "Business District",
                    status: SignalStatus::Active,
                    congestion: CongestionLevel::High,
                    optimized: false,
                    recommendation: Some("Synchronize with adjacent signals for better flow"),
                },
                TrafficSignal {
                    id: 5,
                    name: "University Blvd",
                    location: "Campus Area",
                    status: SignalStatus::Active,
                    congestion: CongestionLevel::Medium,
                    optimized: true,
                    recommendation: None,
                },
            ],
        }
    }
}

impl SignalBoard {
    /// Mark one signal optimized. Returns false when the id is unknown.
    pub fn apply_optimization(&mut self, id: u32) -> bool {
        match self.signals.iter_mut().find(|s| s.id == id) {
            Some(signal) => {
                signal.optimized = true;
                true
            }
            None => false,
        }
    }

    /// Mark every signal optimized ("Optimize All Signals" button).
    pub fn optimize_all(&mut self) {
        for signal in &mut self.signals {
            signal.optimized = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_needs_optimization() {
        let board = SignalBoard::default();
        let pending: Vec<u32> = board
            .signals
            .iter()
            .filter(|s| SignalFilter::NeedsOptimization.matches(s))
            .map(|s| s.id)
            .collect();
        assert_eq!(pending, vec![1, 3, 4]);
    }

    #[test]
    fn test_filter_maintenance() {
        let board = SignalBoard::default();
        let count = board
            .signals
            .iter()
            .filter(|s| SignalFilter::Maintenance.matches(s))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_apply_optimization() {
        let mut board = SignalBoard::default();
        assert!(board.apply_optimization(1));
        assert!(board.signals[0].optimized);
        assert!(!board.apply_optimization(999));
    }

    #[test]
    fn test_optimize_all() {
        let mut board = SignalBoard::default();
        board.optimize_all();
        assert!(board.signals.iter().all(|s| s.optimized));
    }
}
