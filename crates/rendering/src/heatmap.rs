//! Traffic-intensity heatmap scene: translucent ground, the two arterial
//! roads, color-ramped intensity discs, and peak markers.

use bevy::prelude::*;

use model::config::{
    HEAT_GROUND_SIZE, HEAT_MARKER_HEIGHT, HEAT_MARKER_THRESHOLD, HEAT_ROAD_LENGTH, HEAT_ROAD_WIDTH,
};
use model::heatmap::{heat_color, heat_opacity, heat_radius, SAMPLE_HEAT_POINTS};
use model::rng::CityRng;

use crate::lifecycle::{CameraRig, SceneKind, SceneSpec};

pub fn spec() -> SceneSpec {
    SceneSpec {
        kind: SceneKind::Heatmap,
        rig: CameraRig {
            // Near top-down start, as in the city overview drawings.
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 1.55,
            distance: 150.0,
            min_distance: 50.0,
            max_distance: 300.0,
            min_pitch: 0.1,
            max_pitch: 1.55,
            pan_bound: 100.0,
        },
        populate: populate_heatmap,
    }
}

fn populate_heatmap(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    _rng: &mut CityRng,
) {
    // Translucent ground so the grid reads through it.
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(HEAT_GROUND_SIZE, HEAT_GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(238, 238, 238).with_alpha(0.8),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
    ));

    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(51, 51, 51),
        ..default()
    });
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(HEAT_ROAD_LENGTH, HEAT_ROAD_WIDTH))),
        MeshMaterial3d(road_material.clone()),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(HEAT_ROAD_WIDTH, HEAT_ROAD_LENGTH))),
        MeshMaterial3d(road_material),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));

    // One disc per measured point, sized and tinted by intensity.
    for point in SAMPLE_HEAT_POINTS {
        let [r, g, b] = heat_color(point.intensity);
        parent.spawn((
            Mesh3d(meshes.add(Circle::new(heat_radius(point.intensity)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(r, g, b, heat_opacity(point.intensity)),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_xyz(point.x, 0.2, point.z)
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        ));
    }

    // Hovering markers call out the worst congestion points.
    let marker_mesh = meshes.add(Sphere::new(2.0));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.0, 0.0),
        unlit: true,
        ..default()
    });
    for point in SAMPLE_HEAT_POINTS
        .iter()
        .filter(|p| p.intensity > HEAT_MARKER_THRESHOLD)
    {
        parent.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_xyz(point.x, HEAT_MARKER_HEIGHT, point.z),
        ));
    }
}
