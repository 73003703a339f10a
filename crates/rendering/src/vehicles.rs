//! Looping vehicle animation on the city-map scene.
//!
//! Vehicles advance along the east-west arterial at a fixed per-vehicle
//! speed and wrap back to the west end after crossing the east boundary.
//! Purely cosmetic: no interaction between vehicles.

use bevy::prelude::*;

use model::config::{
    ANIM_FPS, VEHICLE_BASE_SPEED, VEHICLE_MAX_X, VEHICLE_MIN_X, VEHICLE_SPEED_STEP,
};

#[derive(Component)]
pub struct Vehicle {
    /// World units per second along +X.
    pub speed: f32,
}

/// Speed for the i-th spawned vehicle: three tiers, cycling.
pub fn vehicle_speed(index: usize) -> f32 {
    (VEHICLE_BASE_SPEED + (index % 3) as f32 * VEHICLE_SPEED_STEP) * ANIM_FPS
}

/// One animation step: advance and wrap past the east boundary.
pub fn advance_x(x: f32, speed: f32, dt: f32) -> f32 {
    let next = x + speed * dt;
    if next > VEHICLE_MAX_X {
        VEHICLE_MIN_X
    } else {
        next
    }
}

/// System: move every vehicle. Vehicles only exist while the city scene is
/// mounted, so no gating is needed.
pub fn animate_vehicles(time: Res<Time>, mut vehicles: Query<(&Vehicle, &mut Transform)>) {
    let dt = time.delta_secs();
    for (vehicle, mut transform) in &mut vehicles {
        transform.translation.x = advance_x(transform.translation.x, vehicle.speed, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_forward() {
        let x = advance_x(0.0, 12.0, 0.5);
        assert!((x - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_wraps_to_west_boundary() {
        let x = advance_x(VEHICLE_MAX_X - 0.1, 30.0, 0.1);
        assert_eq!(x, VEHICLE_MIN_X);
    }

    #[test]
    fn test_never_escapes_bounds() {
        let mut x = VEHICLE_MIN_X;
        for _ in 0..100_000 {
            x = advance_x(x, vehicle_speed(2), 1.0 / 60.0);
            assert!((VEHICLE_MIN_X..=VEHICLE_MAX_X).contains(&x));
        }
    }

    #[test]
    fn test_speed_tiers_cycle() {
        assert_eq!(vehicle_speed(0), vehicle_speed(3));
        assert!(vehicle_speed(1) > vehicle_speed(0));
        assert!(vehicle_speed(2) > vehicle_speed(1));
    }
}
