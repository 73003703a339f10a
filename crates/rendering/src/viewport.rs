//! Keeps the 3D camera viewport aligned with the region the egui chrome
//! leaves free.
//!
//! The ui crate writes [`ChromeInsets`] (logical points) after laying out
//! its panels; [`sync_camera_viewport`] converts that to a physical-pixel
//! viewport every frame, so window resizes and panel-width changes are both
//! picked up on the frame they happen.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;

/// Logical-point margins occupied by the dashboard chrome on each side of
/// the window.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ChromeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Compute the physical-pixel viewport for the content region, or `None`
/// when nothing remains visible (minimized window, chrome covering it all).
pub fn viewport_rect(
    physical_size: UVec2,
    scale_factor: f32,
    insets: &ChromeInsets,
) -> Option<(UVec2, UVec2)> {
    let left = ((insets.left * scale_factor).round().max(0.0) as u32).min(physical_size.x);
    let top = ((insets.top * scale_factor).round().max(0.0) as u32).min(physical_size.y);
    let right = (insets.right * scale_factor).round().max(0.0) as u32;
    let bottom = (insets.bottom * scale_factor).round().max(0.0) as u32;

    let width = physical_size.x.saturating_sub(left).saturating_sub(right);
    let height = physical_size.y.saturating_sub(top).saturating_sub(bottom);
    if width == 0 || height == 0 {
        return None;
    }
    Some((UVec2::new(left, top), UVec2::new(width, height)))
}

pub fn sync_camera_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    insets: Res<ChromeInsets>,
    mut cameras: Query<&mut Camera, With<Camera3d>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };

    let physical_size = UVec2::new(
        window.resolution.physical_width(),
        window.resolution.physical_height(),
    );
    if physical_size.x == 0 || physical_size.y == 0 {
        return;
    }

    let viewport = viewport_rect(physical_size, window.resolution.scale_factor(), &insets).map(
        |(position, size)| Viewport {
            physical_position: position,
            physical_size: size,
            ..default()
        },
    );

    // Avoid dirtying the camera when nothing moved.
    let unchanged = match (&camera.viewport, &viewport) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.physical_position == b.physical_position && a.physical_size == b.physical_size
        }
        _ => false,
    };
    if !unchanged {
        camera.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_matches_window_minus_insets() {
        let insets = ChromeInsets {
            left: 220.0,
            top: 56.0,
            right: 0.0,
            bottom: 0.0,
        };
        let (pos, size) = viewport_rect(UVec2::new(1280, 720), 1.0, &insets).unwrap();
        assert_eq!(pos, UVec2::new(220, 56));
        assert_eq!(size, UVec2::new(1060, 664));
    }

    #[test]
    fn test_viewport_scales_with_dpi() {
        let insets = ChromeInsets {
            left: 100.0,
            top: 50.0,
            right: 10.0,
            bottom: 20.0,
        };
        let (pos, size) = viewport_rect(UVec2::new(2560, 1440), 2.0, &insets).unwrap();
        assert_eq!(pos, UVec2::new(200, 100));
        assert_eq!(size, UVec2::new(2560 - 200 - 20, 1440 - 100 - 40));
    }

    #[test]
    fn test_fully_covered_window_yields_none() {
        let insets = ChromeInsets {
            left: 2000.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        };
        assert!(viewport_rect(UVec2::new(1280, 720), 1.0, &insets).is_none());
    }

    #[test]
    fn test_zero_insets_covers_whole_window() {
        let (pos, size) =
            viewport_rect(UVec2::new(800, 600), 1.0, &ChromeInsets::default()).unwrap();
        assert_eq!(pos, UVec2::ZERO);
        assert_eq!(size, UVec2::new(800, 600));
    }
}
