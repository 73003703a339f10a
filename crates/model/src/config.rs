//! World-geometry constants shared by the scene populators.

// City map scene ------------------------------------------------------------

pub const CITY_GROUND_SIZE: f32 = 500.0;
pub const CITY_GRID_DIVISIONS: u32 = 50;

/// Linear fog band for the city view.
pub const FOG_START: f32 = 100.0;
pub const FOG_END: f32 = 600.0;

pub const BUILDING_COUNT: usize = 50;
/// Buildings are scattered inside 80% of this radius around the intersection.
pub const CITY_RADIUS: f32 = 200.0;
pub const BUILDING_FOOTPRINT_MIN: f32 = 5.0;
pub const BUILDING_FOOTPRINT_RANGE: f32 = 15.0;
pub const BUILDING_HEIGHT_MIN: f32 = 10.0;
pub const BUILDING_HEIGHT_RANGE: f32 = 50.0;

pub const ROAD_LENGTH: f32 = 400.0;
pub const ROAD_WIDTH: f32 = 20.0;
/// Dashed center-line markings are placed every this many units.
pub const MARKING_SPACING: f32 = 20.0;
pub const MARKING_EXTENT: f32 = 180.0;

// Vehicles ------------------------------------------------------------------

pub const VEHICLE_COUNT: usize = 10;
/// Animation axis bounds: a vehicle crossing +100 wraps back to -100.
pub const VEHICLE_MIN_X: f32 = -100.0;
pub const VEHICLE_MAX_X: f32 = 100.0;
pub const VEHICLE_SPACING: f32 = 20.0;
pub const LANE_OFFSET: f32 = 3.0;
/// Per-frame speeds in the source assume a 60 Hz animation callback;
/// world speed is (base + step * (i % 3)) * ANIM_FPS units per second.
pub const VEHICLE_BASE_SPEED: f32 = 0.2;
pub const VEHICLE_SPEED_STEP: f32 = 0.1;
pub const ANIM_FPS: f32 = 60.0;

// Heatmap scene -------------------------------------------------------------

pub const HEAT_GROUND_SIZE: f32 = 200.0;
pub const HEAT_GRID_DIVISIONS: u32 = 20;
pub const HEAT_ROAD_LENGTH: f32 = 200.0;
pub const HEAT_ROAD_WIDTH: f32 = 10.0;
/// Intensity above which a point gets a hovering peak marker.
pub const HEAT_MARKER_THRESHOLD: f32 = 0.7;
pub const HEAT_MARKER_HEIGHT: f32 = 5.0;
