use bevy::prelude::*;

/// The dialog box root node. The timer is armed when the player confirms
/// the interaction; despawning the dialog drops the timer with it, so an
/// early dismissal can never leave a stale countdown behind.
#[derive(Component, Default)]
pub struct Dialog {
    pub timer: Option<Timer>,
}

/// Marker for the text child inside the dialog box
#[derive(Component)]
pub struct DialogText;
