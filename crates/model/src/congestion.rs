//! Congestion and signal-status vocabularies used across the dashboard.

use serde::{Deserialize, Serialize};

/// Congestion severity for routes, signals, and forecasts.
///
/// Ordered so `High > Medium > Low`; sorting route lists by congestion
/// relies on the derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum CongestionLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl CongestionLevel {
    /// Short label used in tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Long form used by the forecast cards ("Light Congestion" etc).
    pub fn forecast_label(self) -> &'static str {
        match self {
            Self::Low => "Light Congestion",
            Self::Medium => "Medium Congestion",
            Self::High => "Heavy Congestion",
        }
    }

    /// Indicator color as sRGB bytes (green / amber / red).
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Low => [34, 197, 94],
            Self::Medium => [245, 158, 11],
            Self::High => [239, 68, 68],
        }
    }
}

/// Operational state of a traffic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignalStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl SignalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_congestion_ordering() {
        assert!(CongestionLevel::High > CongestionLevel::Medium);
        assert!(CongestionLevel::Medium > CongestionLevel::Low);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CongestionLevel::High.forecast_label(), "Heavy Congestion");
        assert_eq!(CongestionLevel::Low.label(), "Low");
        assert_eq!(SignalStatus::Maintenance.label(), "Maintenance");
    }
}
