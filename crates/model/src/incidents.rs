//! Recent alerts shown in the dashboard incidents panel.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Visual weight of an incident entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentSeverity {
    Warning,
    Critical,
    Notice,
    Info,
}

impl IncidentSeverity {
    /// Accent color as sRGB bytes (amber / red / green / slate).
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Warning => [217, 119, 6],
            Self::Critical => [220, 38, 38],
            Self::Notice => [22, 163, 74],
            Self::Info => [71, 85, 105],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub severity: IncidentSeverity,
    pub title: &'static str,
    pub detail: &'static str,
    pub minutes_ago: u32,
}

impl Incident {
    /// "10 minutes ago" / "2 hours ago" style age string.
    pub fn age_label(&self) -> String {
        if self.minutes_ago < 60 {
            format!("{} minutes ago", self.minutes_ago)
        } else {
            let hours = self.minutes_ago / 60;
            if hours == 1 {
                "1 hour ago".to_string()
            } else {
                format!("{hours} hours ago")
            }
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct IncidentLog {
    pub incidents: Vec<Incident>,
}

impl Default for IncidentLog {
    fn default() -> Self {
        Self {
            incidents: vec![
                Incident {
                    severity: IncidentSeverity::Warning,
                    title: "Congestion Alert",
                    detail: "Heavy traffic on Main Street due to accident",
                    minutes_ago: 10,
                },
                Incident {
                    severity: IncidentSeverity::Critical,
                    title: "Road Closure",
                    detail: "5th Avenue closed due to construction",
                    minutes_ago: 25,
                },
                Incident {
                    severity: IncidentSeverity::Notice,
                    title: "Route Optimized",
                    detail: "Downtown signal timing updated for rush hour",
                    minutes_ago: 45,
                },
                Incident {
                    severity: IncidentSeverity::Info,
                    title: "AI Model Update",
                    detail: "Traffic prediction model retrained with latest data",
                    minutes_ago: 120,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label() {
        let mut incident = Incident {
            severity: IncidentSeverity::Info,
            title: "t",
            detail: "d",
            minutes_ago: 45,
        };
        assert_eq!(incident.age_label(), "45 minutes ago");
        incident.minutes_ago = 60;
        assert_eq!(incident.age_label(), "1 hour ago");
        incident.minutes_ago = 120;
        assert_eq!(incident.age_label(), "2 hours ago");
    }
}
