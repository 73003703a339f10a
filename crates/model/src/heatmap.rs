//! Traffic-intensity sample points and the color/size ramps for the
//! heatmap scene.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeatPoint {
    pub x: f32,
    pub z: f32,
    /// Normalized traffic intensity, 0.0..=1.0.
    pub intensity: f32,
}

/// Measured congestion points: the main intersection, the two arterial
/// roads, and a handful of secondary hot spots.
pub const SAMPLE_HEAT_POINTS: [HeatPoint; 13] = [
    HeatPoint { x: 0.0, z: 0.0, intensity: 0.9 },
    HeatPoint { x: -40.0, z: 0.0, intensity: 0.7 },
    HeatPoint { x: -80.0, z: 0.0, intensity: 0.5 },
    HeatPoint { x: 40.0, z: 0.0, intensity: 0.8 },
    HeatPoint { x: 80.0, z: 0.0, intensity: 0.6 },
    HeatPoint { x: 0.0, z: -40.0, intensity: 0.7 },
    HeatPoint { x: 0.0, z: -80.0, intensity: 0.4 },
    HeatPoint { x: 0.0, z: 40.0, intensity: 0.9 },
    HeatPoint { x: 0.0, z: 80.0, intensity: 0.7 },
    HeatPoint { x: -30.0, z: 30.0, intensity: 0.6 },
    HeatPoint { x: 60.0, z: -20.0, intensity: 0.8 },
    HeatPoint { x: -50.0, z: -50.0, intensity: 0.5 },
    HeatPoint { x: 70.0, z: 70.0, intensity: 0.3 },
];

/// Stepped heat ramp: red above 0.7, yellow above 0.4, green otherwise.
pub fn heat_color(intensity: f32) -> [f32; 3] {
    if intensity > 0.7 {
        [1.0, 0.0, 0.0]
    } else if intensity > 0.4 {
        [1.0, 1.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    }
}

/// Disc radius grows with intensity: 15..=30 world units.
pub fn heat_radius(intensity: f32) -> f32 {
    15.0 + intensity * 15.0
}

/// Disc opacity grows with intensity: 0.4..=0.7.
pub fn heat_opacity(intensity: f32) -> f32 {
    0.4 + intensity * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_color_thresholds() {
        assert_eq!(heat_color(0.9), [1.0, 0.0, 0.0]);
        assert_eq!(heat_color(0.71), [1.0, 0.0, 0.0]);
        // Boundary values fall to the lower band.
        assert_eq!(heat_color(0.7), [1.0, 1.0, 0.0]);
        assert_eq!(heat_color(0.5), [1.0, 1.0, 0.0]);
        assert_eq!(heat_color(0.4), [0.0, 1.0, 0.0]);
        assert_eq!(heat_color(0.1), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_heat_radius_range() {
        assert_eq!(heat_radius(0.0), 15.0);
        assert_eq!(heat_radius(1.0), 30.0);
    }

    #[test]
    fn test_heat_opacity_range() {
        assert!((heat_opacity(0.0) - 0.4).abs() < f32::EPSILON);
        assert!((heat_opacity(1.0) - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sample_points_normalized() {
        for p in SAMPLE_HEAT_POINTS {
            assert!((0.0..=1.0).contains(&p.intensity));
        }
    }
}
