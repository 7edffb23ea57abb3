use bevy::prelude::*;

use crate::components::Player;
use crate::resources::constants::{CAMERA_ZOOM, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::resources::WorldMap;

/// Follow the player, keeping the view inside the map's pixel bounds
pub fn camera_follow(
    map: Res<WorldMap>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.get_single_mut() else {
        return;
    };

    let target = clamp_camera(player_transform.translation.truncate(), map.pixel_size);
    camera_transform.translation = target.extend(camera_transform.translation.z);
}

/// Clamp a camera target so the zoomed view never shows past the map edges.
/// On an axis where the map is smaller than the view, center instead.
pub fn clamp_camera(target: Vec2, map_size: Vec2) -> Vec2 {
    let half_view = Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT) / (2.0 * CAMERA_ZOOM);

    let clamp_axis = |target: f32, half_view: f32, map: f32| {
        if map <= half_view * 2.0 {
            map / 2.0
        } else {
            target.clamp(half_view, map - half_view)
        }
    };

    Vec2::new(
        clamp_axis(target.x, half_view.x, map_size.x),
        clamp_axis(target.y, half_view.y, map_size.y),
    )
}
