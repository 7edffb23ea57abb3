use bevy::prelude::*;

use crate::map::MapDocument;

/// The parsed map document plus its pixel dimensions, loaded once at startup.
#[derive(Resource)]
pub struct WorldMap {
    pub document: MapDocument,
    pub pixel_size: Vec2,
}

/// Static collision rectangles: every tile flagged `collides` plus every
/// object in the boundary layer. Built once during world setup and read by
/// the movement system every frame.
#[derive(Resource, Default)]
pub struct WorldColliders {
    pub solids: Vec<Rect>,
}
