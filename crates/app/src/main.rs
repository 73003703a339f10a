use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use model::rng::CityRng;
use rendering::camera::OrbitCamera;
use rendering::lifecycle::{ActiveScene, CameraRig, SceneKind};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Traffic Flow AI".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        model::ModelPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Deterministic building layout override
    if let Ok(seed) = std::env::var("FLOWCITY_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(CityRng::from_seed_u64(seed));
            }
            Err(_) => warn!("FLOWCITY_SEED is not a valid u64, using default seed"),
        }
    }

    // Screenshot mode: takes preset captures of both scenes and exits
    if std::env::var("FLOWCITY_SCREENSHOTS").is_ok() {
        app.insert_resource(ScreenshotQueue {
            frame: 0,
            current: 0,
            presets: vec![
                ShotPreset {
                    name: "01_city_overview",
                    scene: SceneKind::CityMap,
                    yaw: std::f32::consts::FRAC_PI_4,
                    pitch: 0.6155,
                    distance: 346.4,
                },
                ShotPreset {
                    name: "02_intersection",
                    scene: SceneKind::CityMap,
                    yaw: 0.3,
                    pitch: 0.5,
                    distance: 120.0,
                },
                ShotPreset {
                    name: "03_street_level",
                    scene: SceneKind::CityMap,
                    yaw: -0.5,
                    pitch: 0.2,
                    distance: 60.0,
                },
                ShotPreset {
                    name: "04_heatmap_top",
                    scene: SceneKind::Heatmap,
                    yaw: 0.0,
                    pitch: 1.55,
                    distance: 150.0,
                },
                ShotPreset {
                    name: "05_heatmap_tilt",
                    scene: SceneKind::Heatmap,
                    yaw: 0.8,
                    pitch: 0.8,
                    distance: 200.0,
                },
            ],
        });
        app.add_systems(Update, drive_screenshots);
    }

    app.run();
}

#[derive(Resource)]
struct ScreenshotQueue {
    frame: u32,
    current: usize,
    presets: Vec<ShotPreset>,
}

struct ShotPreset {
    name: &'static str,
    scene: SceneKind,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    mut active: ResMut<ActiveScene>,
    mut orbit: ResMut<OrbitCamera>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;

    // Let the first scene mount and render before capturing.
    if queue.frame < 60 {
        return;
    }

    let idx = queue.current;
    if idx >= queue.presets.len() {
        // All done — wait a few frames for the last save, then exit
        if queue.frame > 60 + queue.presets.len() as u32 * 12 + 20 {
            exit.send(AppExit::Success);
        }
        return;
    }

    let phase = (queue.frame - 60) % 12;

    if phase == 0 {
        // Mount the preset's scene
        let p = &queue.presets[idx];
        if active.0 != Some(p.scene) {
            active.0 = Some(p.scene);
        }
    } else if phase == 3 {
        // Snap the camera onto the preset, after the mount has re-rigged it
        let p = &queue.presets[idx];
        orbit.apply_rig(&CameraRig {
            yaw: p.yaw,
            pitch: p.pitch,
            distance: p.distance,
            ..default()
        });
    } else if phase == 8 {
        // Capture after a few frames so the render settles
        let name = queue.presets[idx].name;
        let path = format!("/tmp/flowcity_{}.png", name);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path));
        queue.current += 1;
    }
}
