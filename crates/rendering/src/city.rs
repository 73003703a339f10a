//! City-map scene: ground, crossed arterial roads, procedural buildings,
//! a traffic-light assembly, and the looping vehicles.

use bevy::prelude::*;
use rand::Rng;

use model::config::{
    BUILDING_COUNT, BUILDING_FOOTPRINT_MIN, BUILDING_FOOTPRINT_RANGE, BUILDING_HEIGHT_MIN,
    BUILDING_HEIGHT_RANGE, CITY_GROUND_SIZE, CITY_RADIUS, LANE_OFFSET, MARKING_EXTENT,
    MARKING_SPACING, ROAD_LENGTH, ROAD_WIDTH, VEHICLE_COUNT, VEHICLE_MIN_X, VEHICLE_SPACING,
};
use model::rng::CityRng;

use crate::lifecycle::{CameraRig, SceneKind, SceneSpec};
use crate::vehicles::{vehicle_speed, Vehicle};

pub fn spec() -> SceneSpec {
    SceneSpec {
        kind: SceneKind::CityMap,
        rig: CameraRig::default(),
        populate: populate_city,
    }
}

const VEHICLE_COLORS: [Color; 6] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(0.0, 0.0, 1.0),
    Color::srgb(1.0, 1.0, 0.0),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(1.0, 1.0, 1.0),
    Color::srgb(0.0, 0.0, 0.0),
];

fn populate_city(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut CityRng,
) {
    spawn_ground(parent, meshes, materials);
    spawn_roads(parent, meshes, materials);
    spawn_traffic_light(parent, meshes, materials);
    spawn_buildings(parent, meshes, materials, rng);
    spawn_vehicles(parent, meshes, materials);
}

fn spawn_ground(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(238, 238, 238),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(CITY_GROUND_SIZE, CITY_GROUND_SIZE))),
        MeshMaterial3d(ground_material),
        Transform::default(),
    ));
}

fn spawn_roads(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(51, 51, 51),
        perceptual_roughness: 0.8,
        metallic: 0.2,
        ..default()
    });

    // Main east-west and north-south arterials, just above the ground.
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROAD_LENGTH, ROAD_WIDTH))),
        MeshMaterial3d(road_material.clone()),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROAD_WIDTH, ROAD_LENGTH))),
        MeshMaterial3d(road_material.clone()),
        Transform::from_xyz(0.0, 0.1, 0.0),
    ));

    // Dashed center-line markings along both arterials.
    let marking_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.5,
        ..default()
    });
    let ew_marking = meshes.add(Plane3d::default().mesh().size(5.0, 1.0));
    let ns_marking = meshes.add(Plane3d::default().mesh().size(1.0, 5.0));

    let mut offset = -MARKING_EXTENT;
    while offset <= MARKING_EXTENT {
        parent.spawn((
            Mesh3d(ew_marking.clone()),
            MeshMaterial3d(marking_material.clone()),
            Transform::from_xyz(offset, 0.2, 0.0),
        ));
        parent.spawn((
            Mesh3d(ns_marking.clone()),
            MeshMaterial3d(marking_material.clone()),
            Transform::from_xyz(0.0, 0.2, offset),
        ));
        offset += MARKING_SPACING;
    }

    // Intersection patch sits above the road planes.
    parent.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROAD_WIDTH, ROAD_WIDTH))),
        MeshMaterial3d(road_material),
        Transform::from_xyz(0.0, 0.15, 0.0),
    ));
}

fn spawn_traffic_light(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 10.0, 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(102, 102, 102),
            ..default()
        })),
        Transform::from_xyz(15.0, 5.0, 15.0),
    ));
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::new(4.0, 8.0, 3.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(51, 51, 51),
            ..default()
        })),
        Transform::from_xyz(15.0, 12.0, 15.0),
    ));

    // Indicator discs face east, red on top.
    let disc = meshes.add(Circle::new(1.0));
    let lamps = [
        (Color::srgb(1.0, 0.0, 0.0), 14.0),
        (Color::srgb(1.0, 1.0, 0.0), 12.0),
        (Color::srgb(0.0, 1.0, 0.0), 10.0),
    ];
    for (color, height) in lamps {
        parent.spawn((
            Mesh3d(disc.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..default()
            })),
            Transform::from_xyz(15.5, height, 13.5)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        ));
    }
}

fn spawn_buildings(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut CityRng,
) {
    for _ in 0..BUILDING_COUNT {
        let angle = rng.0.gen::<f32>() * std::f32::consts::TAU;
        let radius = rng.0.gen::<f32>() * CITY_RADIUS * 0.8;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;

        let width = BUILDING_FOOTPRINT_MIN + rng.0.gen::<f32>() * BUILDING_FOOTPRINT_RANGE;
        let depth = BUILDING_FOOTPRINT_MIN + rng.0.gen::<f32>() * BUILDING_FOOTPRINT_RANGE;
        let height = BUILDING_HEIGHT_MIN + rng.0.gen::<f32>() * BUILDING_HEIGHT_RANGE;

        // Pale, mostly-blue facade palette.
        let hue = (0.6 + rng.0.gen::<f32>() * 0.1) * 360.0;
        let saturation = 0.1 + rng.0.gen::<f32>() * 0.3;
        let lightness = 0.7 + rng.0.gen::<f32>() * 0.3;

        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(hue, saturation, lightness),
                ..default()
            })),
            Transform::from_xyz(x, height / 2.0, z),
        ));
    }
}

fn spawn_vehicles(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let body_mesh = meshes.add(Cuboid::new(4.0, 1.5, 2.0));
    let cabin_mesh = meshes.add(Cuboid::new(2.0, 1.0, 1.8));

    for i in 0..VEHICLE_COUNT {
        let body_material = materials.add(StandardMaterial {
            base_color: VEHICLE_COLORS[i % VEHICLE_COLORS.len()],
            perceptual_roughness: 0.2,
            metallic: 0.8,
            ..default()
        });

        // Two lanes on the east-west arterial.
        let lane = if i % 2 == 0 { -LANE_OFFSET } else { LANE_OFFSET };
        let x = VEHICLE_MIN_X + i as f32 * VEHICLE_SPACING;

        parent
            .spawn((
                Vehicle {
                    speed: vehicle_speed(i),
                },
                Mesh3d(body_mesh.clone()),
                MeshMaterial3d(body_material.clone()),
                Transform::from_xyz(x, 1.0, lane),
            ))
            .with_children(|body| {
                body.spawn((
                    Mesh3d(cabin_mesh.clone()),
                    MeshMaterial3d(body_material),
                    Transform::from_xyz(-0.5, 1.25, 0.0),
                ));
            });
    }
}
