use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;

use crate::resources::{DebugSettings, WorldColliders};
use crate::systems::debug::{debug_info, toggle_debug_mode};
use crate::systems::setup::{init_resources, spawn_world};

/// Core plugin that handles the basic app setup
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Parse the map document up front; colliders are filled in by setup
        let world_map = init_resources();

        app.insert_resource(world_map)
            .init_resource::<WorldColliders>()
            .init_resource::<DebugSettings>()
            .add_systems(Startup, spawn_world)
            .add_systems(
                Update,
                (
                    toggle_debug_mode,
                    debug_info.run_if(on_timer(std::time::Duration::from_millis(500))),
                ),
            );
    }
}
