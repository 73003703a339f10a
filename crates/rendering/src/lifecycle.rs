//! Scene lifecycle management.
//!
//! The dashboard shows at most one 3D scene at a time (city map or traffic
//! heatmap). Both variants share one lifecycle: a registered [`SceneSpec`]
//! describes how to populate the scene and how to rig the orbit camera, and
//! [`mount_scenes`] swaps the mounted scene whenever [`ActiveScene`] changes.
//! All scene content hangs beneath a single [`ViewRoot`] entity, so unmount
//! is one recursive despawn and mesh/material assets are freed as their
//! handles drop with it.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use model::rng::CityRng;

/// Which 3D visualization a scene shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    CityMap,
    Heatmap,
}

impl SceneKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::CityMap => "3D View",
            Self::Heatmap => "Heatmap",
        }
    }
}

/// Initial orbit-camera placement and clamp bounds for one scene.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub pan_bound: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        // City view: camera starts on the diagonal at (200, 200, 200).
        Self {
            focus: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.6155,
            distance: 346.4,
            min_distance: 50.0,
            max_distance: 400.0,
            min_pitch: 0.1,
            max_pitch: 1.55,
            pan_bound: 250.0,
        }
    }
}

/// Callback that builds a scene's static geometry beneath the given root.
pub type PopulateFn = fn(
    &mut ChildBuilder,
    &mut Assets<Mesh>,
    &mut Assets<StandardMaterial>,
    &mut CityRng,
);

pub struct SceneSpec {
    pub kind: SceneKind,
    pub rig: CameraRig,
    pub populate: PopulateFn,
}

/// Registered scene variants. Populated at plugin build with the city and
/// heatmap specs.
#[derive(Resource)]
pub struct SceneCatalog {
    pub specs: Vec<SceneSpec>,
}

impl SceneCatalog {
    pub fn get(&self, kind: SceneKind) -> Option<&SceneSpec> {
        self.specs.iter().find(|s| s.kind == kind)
    }
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self {
            specs: vec![crate::city::spec(), crate::heatmap::spec()],
        }
    }
}

/// Which scene should currently be mounted. `None` unmounts everything
/// (pages without a 3D panel).
#[derive(Resource, Debug, Default, PartialEq, Eq)]
pub struct ActiveScene(pub Option<SceneKind>);

/// Marker on the root entity of the mounted scene tree.
#[derive(Component)]
pub struct ViewRoot(pub SceneKind);

/// System: swap the mounted scene tree when [`ActiveScene`] changes.
///
/// Despawns the old root recursively on every path, including a scene that
/// never rendered a frame, then spawns and populates the new one and snaps
/// the orbit camera onto its rig.
pub fn mount_scenes(
    mut commands: Commands,
    active: Res<ActiveScene>,
    catalog: Res<SceneCatalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rng: ResMut<CityRng>,
    mut orbit: ResMut<crate::camera::OrbitCamera>,
    roots: Query<(Entity, &ViewRoot)>,
) {
    if !active.is_changed() {
        return;
    }

    let mounted = roots.iter().next().map(|(_, root)| root.0);
    if mounted == active.0 {
        return;
    }

    for (entity, _) in &roots {
        commands.entity(entity).despawn_recursive();
    }

    let Some(kind) = active.0 else {
        return;
    };
    let Some(spec) = catalog.get(kind) else {
        warn!("no scene registered for {kind:?}");
        return;
    };

    commands
        .spawn((ViewRoot(kind), Transform::default(), Visibility::default()))
        .with_children(|parent| {
            (spec.populate)(parent, &mut meshes, &mut materials, &mut rng);
        });
    orbit.apply_rig(&spec.rig);
    info!("mounted {kind:?} scene");
}

/// System: the city view carries linear distance fog; other scenes do not.
pub fn sync_camera_fog(
    mut commands: Commands,
    active: Res<ActiveScene>,
    camera: Query<Entity, With<Camera3d>>,
) {
    if !active.is_changed() {
        return;
    }
    let Ok(entity) = camera.get_single() else {
        return;
    };
    match active.0 {
        Some(SceneKind::CityMap) => {
            commands.entity(entity).insert(DistanceFog {
                color: Color::srgb_u8(248, 250, 252),
                falloff: FogFalloff::Linear {
                    start: model::config::FOG_START,
                    end: model::config::FOG_END,
                },
                ..default()
            });
        }
        _ => {
            commands.entity(entity).remove::<DistanceFog>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitCamera;
    use crate::vehicles::Vehicle;
    use bevy::asset::AssetPlugin;

    /// Headless harness: no window, no renderer, real asset storage.
    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(AssetPlugin::default());
        app.init_asset::<Mesh>();
        app.init_asset::<StandardMaterial>();
        app.init_resource::<CityRng>();
        app.init_resource::<ActiveScene>();
        app.init_resource::<SceneCatalog>();
        app.insert_resource(OrbitCamera::default());
        app.add_systems(Update, mount_scenes);
        app
    }

    fn set_scene(app: &mut App, kind: Option<SceneKind>) {
        app.world_mut().resource_mut::<ActiveScene>().0 = kind;
    }

    fn count_roots(app: &mut App) -> usize {
        app.world_mut()
            .query::<&ViewRoot>()
            .iter(app.world())
            .count()
    }

    fn count_scene_entities(app: &mut App) -> usize {
        // Everything a populate callback spawns carries a Transform; nothing
        // else in the harness does.
        app.world_mut()
            .query::<&Transform>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn test_mount_spawns_single_root() {
        let mut app = test_app();
        set_scene(&mut app, Some(SceneKind::CityMap));
        app.update();
        assert_eq!(count_roots(&mut app), 1);
        assert!(count_scene_entities(&mut app) > 1);
    }

    #[test]
    fn test_mount_unmount_cycles_leak_nothing() {
        let mut app = test_app();
        for _ in 0..5 {
            set_scene(&mut app, Some(SceneKind::CityMap));
            app.update();
            assert_eq!(count_roots(&mut app), 1);

            set_scene(&mut app, None);
            app.update();
            assert_eq!(count_roots(&mut app), 0);
            assert_eq!(count_scene_entities(&mut app), 0);
        }

        // Asset handles dropped with the tree; storage drains once the drop
        // events are processed.
        app.update();
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 0);
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 0);
    }

    #[test]
    fn test_switching_scenes_replaces_root() {
        let mut app = test_app();
        set_scene(&mut app, Some(SceneKind::CityMap));
        app.update();

        let vehicles = app
            .world_mut()
            .query::<&Vehicle>()
            .iter(app.world())
            .count();
        assert_eq!(vehicles, model::config::VEHICLE_COUNT);

        set_scene(&mut app, Some(SceneKind::Heatmap));
        app.update();

        assert_eq!(count_roots(&mut app), 1);
        let kind = app
            .world_mut()
            .query::<&ViewRoot>()
            .iter(app.world())
            .next()
            .map(|r| r.0);
        assert_eq!(kind, Some(SceneKind::Heatmap));

        // No vehicle survived the swap.
        let vehicles = app
            .world_mut()
            .query::<&Vehicle>()
            .iter(app.world())
            .count();
        assert_eq!(vehicles, 0);
    }

    #[test]
    fn test_unmount_before_first_frame() {
        let mut app = test_app();
        // Mount and unmount before the scene ever updates.
        set_scene(&mut app, Some(SceneKind::Heatmap));
        set_scene(&mut app, None);
        app.update();
        assert_eq!(count_roots(&mut app), 0);
        assert_eq!(count_scene_entities(&mut app), 0);
    }

    #[test]
    fn test_mount_applies_camera_rig() {
        let mut app = test_app();
        set_scene(&mut app, Some(SceneKind::Heatmap));
        app.update();

        let rig = app
            .world()
            .resource::<SceneCatalog>()
            .get(SceneKind::Heatmap)
            .map(|s| s.rig.clone())
            .expect("heatmap spec registered");
        let orbit = app.world().resource::<OrbitCamera>();
        assert_eq!(orbit.target_distance, rig.distance);
        assert_eq!(orbit.max_distance, rig.max_distance);
        assert_eq!(orbit.target_pitch, rig.pitch);
    }

    #[test]
    fn test_vehicles_spawn_within_wrap_bounds() {
        let mut app = test_app();
        set_scene(&mut app, Some(SceneKind::CityMap));
        app.update();

        let mut query = app.world_mut().query::<(&Vehicle, &Transform)>();
        for (_, transform) in query.iter(app.world()) {
            assert!(transform.translation.x >= model::config::VEHICLE_MIN_X);
            assert!(transform.translation.x <= model::config::VEHICLE_MAX_X);
        }
    }
}
