//! Ground reference grid, redrawn with gizmos each frame for the mounted
//! scene. Center lines are darker than the rest, matching a classic grid
//! helper.

use bevy::prelude::*;

use model::config::{CITY_GRID_DIVISIONS, CITY_GROUND_SIZE, HEAT_GRID_DIVISIONS, HEAT_GROUND_SIZE};

use crate::lifecycle::{ActiveScene, SceneKind};

const GRID_Y: f32 = 0.05;
const CENTER_COLOR: Color = Color::srgb(153.0 / 255.0, 153.0 / 255.0, 153.0 / 255.0);
const LINE_COLOR: Color = Color::srgb(221.0 / 255.0, 221.0 / 255.0, 221.0 / 255.0);

pub fn draw_scene_grid(active: Res<ActiveScene>, mut gizmos: Gizmos) {
    let (size, divisions) = match active.0 {
        Some(SceneKind::CityMap) => (CITY_GROUND_SIZE, CITY_GRID_DIVISIONS),
        Some(SceneKind::Heatmap) => (HEAT_GROUND_SIZE, HEAT_GRID_DIVISIONS),
        None => return,
    };

    let half = size / 2.0;
    let step = size / divisions as f32;
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let color = if i == divisions / 2 {
            CENTER_COLOR
        } else {
            LINE_COLOR
        };
        gizmos.line(
            Vec3::new(offset, GRID_Y, -half),
            Vec3::new(offset, GRID_Y, half),
            color,
        );
        gizmos.line(
            Vec3::new(-half, GRID_Y, offset),
            Vec3::new(half, GRID_Y, offset),
            color,
        );
    }
}
