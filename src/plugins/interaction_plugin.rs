use bevy::prelude::*;

use crate::systems::interaction::{
    confirm_interaction, detect_zone_contacts, dismiss_dialog, expire_dialog, open_dialog,
    ZoneContact,
};
use crate::systems::movement::apply_movement;

/// Plugin for the zone-triggered dialog interaction
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ZoneContact>().add_systems(
            Update,
            (
                detect_zone_contacts,
                open_dialog,
                confirm_interaction,
                dismiss_dialog,
                expire_dialog,
            )
                .chain()
                .after(apply_movement),
        );
    }
}
