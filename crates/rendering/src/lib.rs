use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

pub mod camera;
pub mod city;
pub mod grid;
pub mod heatmap;
pub mod lifecycle;
pub mod vehicles;
pub mod viewport;

use camera::{CameraDrag, CameraOrbitDrag};
use lifecycle::{ActiveScene, SceneCatalog};
use viewport::ChromeInsets;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(248, 250, 252)))
            .insert_resource(DirectionalLightShadowMap { size: 2048 })
            .init_resource::<CameraDrag>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<ActiveScene>()
            .init_resource::<SceneCatalog>()
            .init_resource::<ChromeInsets>()
            .add_systems(Startup, (camera::setup_camera, setup_lighting))
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_pan_drag,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            .add_systems(
                Update,
                (
                    lifecycle::mount_scenes,
                    lifecycle::sync_camera_fog,
                    vehicles::animate_vehicles,
                    grid::draw_scene_grid,
                    viewport::sync_camera_viewport,
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    // Directional light (sun) from the south-east, with shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 200.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
