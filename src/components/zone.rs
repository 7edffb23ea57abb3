use bevy::prelude::*;

/// An invisible rectangular region from the map's interaction object layer
#[derive(Component)]
pub struct InteractionZone {
    pub name: String,
    /// World-space bounds used for overlap tests
    pub bounds: Rect,
}

/// Marks a zone whose contacts feed the dialog trigger
#[derive(Component)]
pub struct Interactable;
