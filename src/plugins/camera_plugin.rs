use bevy::prelude::*;

use crate::systems::camera::camera_follow;
use crate::systems::movement::apply_movement;

/// Plugin for the follow camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // Track the player's position from this frame, not last frame's
        app.add_systems(Update, camera_follow.after(apply_movement));
    }
}
