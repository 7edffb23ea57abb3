use bevy::prelude::*;

use crate::systems::animation::animate_player;
use crate::systems::movement::{apply_movement, decide_movement};

/// Plugin for keyboard-driven player movement and animation
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Input decides velocity and clip, movement integrates, animation
        // advances the atlas frame; the order matters within one frame.
        app.add_systems(
            Update,
            (decide_movement, apply_movement, animate_player).chain(),
        );
    }
}
