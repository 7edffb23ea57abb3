use bevy::prelude::*;

use crate::components::{AnimationKey, Player, PlayerAnimation};

/// Drive the player's texture atlas index from the current clip.
///
/// A clip change restarts playback from its first frame; otherwise the frame
/// clock advances and loops through the clip's hard-coded sheet indices.
pub fn animate_player(
    time: Res<Time>,
    mut query: Query<(Ref<AnimationKey>, &mut PlayerAnimation, &mut Sprite), With<Player>>,
) {
    let Ok((key, mut animation, mut sprite)) = query.get_single_mut() else {
        return;
    };

    let frames = key.frames();
    let frame_changed = if key.is_changed() {
        animation.restart();
        true
    } else {
        animation.advance(time.delta(), frames.len())
    };

    if frame_changed {
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = frames[animation.frame];
        }
    }
}
