mod camera_plugin;
mod core_plugin;
mod interaction_plugin;
mod player_plugin;

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;
use camera_plugin::CameraPlugin;
use core_plugin::CorePlugin;
use interaction_plugin::InteractionPlugin;
use player_plugin::PlayerPlugin;

/// Consolidated plugin struct that groups all application plugins
pub struct AppPlugins;

impl PluginGroup for AppPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(CorePlugin)
            .add(PlayerPlugin)
            .add(CameraPlugin)
            .add(InteractionPlugin)
    }
}
