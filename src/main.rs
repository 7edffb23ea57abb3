use bevy::prelude::*;

mod components;
mod map;
mod plugins;
mod resources;
mod systems;
mod utils;

use resources::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WINDOW_TITLE};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.into(),
                        resolution: (VIEWPORT_WIDTH, VIEWPORT_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // 16x16 sprites look smeared under the default linear filter
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(plugins::AppPlugins)
        .run();
}
