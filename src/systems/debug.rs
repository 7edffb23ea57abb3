use bevy::prelude::*;

use crate::components::{InteractionState, Player, Velocity};
use crate::debug_log;
use crate::resources::DebugSettings;

/// System to toggle debug mode with the F1 key
pub fn toggle_debug_mode(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut debug_settings: ResMut<DebugSettings>,
) {
    if keyboard_input.just_pressed(KeyCode::F1) {
        debug_settings.debug_mode = !debug_settings.debug_mode;
        info!(
            "Debug mode: {}",
            if debug_settings.debug_mode { "ON" } else { "OFF" }
        );
    }
}

/// Periodic dump of the player's position, velocity, and interaction state
pub fn debug_info(
    debug_settings: Res<DebugSettings>,
    player_query: Query<(&Transform, &Velocity, &InteractionState), With<Player>>,
) {
    let Ok((transform, velocity, state)) = player_query.get_single() else {
        return;
    };

    debug_log!(
        debug_settings,
        "Pos: ({:.1}, {:.1}) | Vel: ({:.0}, {:.0}) | {:?}",
        transform.translation.x,
        transform.translation.y,
        velocity.0.x,
        velocity.0.y,
        state
    );
}
