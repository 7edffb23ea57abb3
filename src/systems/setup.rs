use bevy::prelude::*;

use crate::components::{
    AnimationKey, Interactable, InteractionState, InteractionZone, Player, PlayerAnimation,
    Velocity,
};
use crate::map::{split_gid, MapDocument};
use crate::resources::constants::{
    BED_ZONE_NAME, BOUNDARY_LAYER, CAMERA_Z, CAMERA_ZOOM, IDLE_DOWN_FRAMES, INTERACTION_LAYER,
    MAP_PATH, PLAYER_FRAME_SIZE, PLAYER_SCALE, PLAYER_SHEET_COLUMNS, PLAYER_SHEET_PATH,
    PLAYER_SHEET_ROWS, PLAYER_Z, SPAWNPOINT_LAYER, SPAWNPOINT_NAME,
};
use crate::resources::{WorldColliders, WorldMap};
use crate::utils::coordinate_conversion::{
    map_point_to_world, object_rect_to_world, tile_center_to_world,
};

/// Load the map document before the app schedule starts
pub fn init_resources() -> WorldMap {
    let document =
        crate::map::load_map_document(MAP_PATH).expect("failed to load the map document");
    let pixel_size = document.pixel_size();
    WorldMap {
        document,
        pixel_size,
    }
}

/// One-time world construction: tile sprites, static colliders, interaction
/// zones, the player, and the camera.
pub fn spawn_world(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    map: Res<WorldMap>,
    mut colliders: ResMut<WorldColliders>,
) {
    let map_height = map.pixel_size.y;
    let tile_size = map.document.tile_size();

    // One image + atlas layout per tileset, indexed in document order
    let tileset_atlases: Vec<(Handle<Image>, Handle<TextureAtlasLayout>)> = map
        .document
        .tilesets
        .iter()
        .map(|tileset| {
            info!("tileset '{}': {} tiles from {}", tileset.name, tileset.tilecount, tileset.image);
            let image = asset_server.load(tileset.image.clone());
            let layout = layouts.add(TextureAtlasLayout::from_grid(
                UVec2::new(tileset.tilewidth, tileset.tileheight),
                tileset.columns,
                tileset.tilecount.div_ceil(tileset.columns),
                None,
                None,
            ));
            (image, layout)
        })
        .collect();

    let mut tile_count = 0usize;
    for (layer_index, layer) in map.document.tile_layers().enumerate() {
        for (col, row, raw) in layer.cells() {
            let (gid, flip_x, flip_y) = split_gid(raw);
            let Some((tileset_index, atlas_index)) = map.document.tileset_for_gid(gid) else {
                warn!("layer '{}' references unknown tile id {}", layer.name, gid);
                continue;
            };

            let (image, layout) = &tileset_atlases[tileset_index];
            let mut sprite = Sprite::from_atlas_image(
                image.clone(),
                TextureAtlas {
                    layout: layout.clone(),
                    index: atlas_index,
                },
            );
            sprite.flip_x = flip_x;
            sprite.flip_y = flip_y;

            let center = tile_center_to_world(col, row, tile_size, map_height);
            commands.spawn((
                sprite,
                Transform::from_translation(center.extend(layer_index as f32)),
            ));
            tile_count += 1;
        }
    }

    colliders.solids = collect_solids(&map.document);

    #[cfg(feature = "collider_debug")]
    for solid in &colliders.solids {
        commands.spawn((
            Sprite::from_color(
                Color::srgba(1.0, 0.0, 0.0, 0.3),
                solid.size(),
            ),
            Transform::from_translation(
                solid
                    .center()
                    .extend(crate::resources::constants::COLLIDER_OVERLAY_Z),
            ),
        ));
    }

    let mut zone_count = 0usize;
    for object in map.document.objects(INTERACTION_LAYER) {
        let bounds =
            object_rect_to_world(object.x, object.y, object.width, object.height, map_height);
        let mut zone = commands.spawn((
            InteractionZone {
                name: object.name.clone(),
                bounds,
            },
            Transform::from_translation(bounds.center().extend(0.0)),
        ));
        if object.name == BED_ZONE_NAME {
            zone.insert(Interactable);
        }
        zone_count += 1;
    }

    let spawn = map.document.resolve_spawn(SPAWNPOINT_LAYER, SPAWNPOINT_NAME);
    let position = map_point_to_world(spawn, map_height);

    let player_layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(PLAYER_FRAME_SIZE),
        PLAYER_SHEET_COLUMNS,
        PLAYER_SHEET_ROWS,
        None,
        None,
    ));
    commands.spawn((
        Player,
        Velocity::default(),
        InteractionState::default(),
        AnimationKey::IdleDown,
        PlayerAnimation::default(),
        Sprite::from_atlas_image(
            asset_server.load(PLAYER_SHEET_PATH),
            TextureAtlas {
                layout: player_layout,
                index: IDLE_DOWN_FRAMES[0],
            },
        ),
        Transform::from_translation(position.extend(PLAYER_Z))
            .with_scale(Vec3::splat(PLAYER_SCALE)),
    ));

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / CAMERA_ZOOM,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_translation(position.extend(CAMERA_Z)),
    ));

    info!(
        "world ready: {} tiles, {} solids, {} interaction zones",
        tile_count,
        colliders.solids.len(),
        zone_count
    );
}

/// Static collision rectangles: tiles flagged `collides` in any tile layer,
/// plus every rectangle in the boundary object layer.
pub fn collect_solids(document: &MapDocument) -> Vec<Rect> {
    let map_height = document.pixel_size().y;
    let tile_size = document.tile_size();
    let colliding = document.colliding_gids();

    let mut solids = Vec::new();
    for layer in document.tile_layers() {
        for (col, row, raw) in layer.cells() {
            let (gid, _, _) = split_gid(raw);
            if colliding.contains(&gid) {
                let center = tile_center_to_world(col, row, tile_size, map_height);
                solids.push(Rect::from_center_size(center, tile_size));
            }
        }
    }

    for object in document.objects(BOUNDARY_LAYER) {
        solids.push(object_rect_to_world(
            object.x,
            object.y,
            object.width,
            object.height,
            map_height,
        ));
    }

    solids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> MapDocument {
        serde_json::from_value(json!({
            "width": 4,
            "height": 2,
            "tilewidth": 16,
            "tileheight": 16,
            "layers": [
                {
                    "type": "tilelayer",
                    "name": "Tile Layer 1",
                    "width": 4,
                    "height": 2,
                    "data": [1, 2, 1, 1,
                             1, 1, 1, 2]
                },
                {
                    "type": "objectgroup",
                    "name": "boundary",
                    "objects": [
                        { "id": 1, "x": 0.0, "y": 24.0, "width": 64.0, "height": 8.0 }
                    ]
                }
            ],
            "tilesets": [
                {
                    "firstgid": 1,
                    "name": "interior",
                    "image": "tiles/interior.png",
                    "columns": 2,
                    "tilecount": 4,
                    "tilewidth": 16,
                    "tileheight": 16,
                    "tiles": [
                        {
                            "id": 1,
                            "properties": [
                                { "name": "collides", "type": "bool", "value": true }
                            ]
                        }
                    ]
                }
            ]
        }))
        .expect("document should deserialize")
    }

    #[test]
    fn solids_come_from_flagged_tiles_and_boundaries() {
        let solids = collect_solids(&document());

        // Two cells hold gid 2 (the flagged tile), plus one boundary rect.
        assert_eq!(solids.len(), 3);

        // gid 2 at (col 1, row 0): map center (24, 8) -> world (24, 24).
        assert_eq!(solids[0], Rect::from_center_size(Vec2::new(24.0, 24.0), Vec2::splat(16.0)));
        // gid 2 at (col 3, row 1): map center (56, 24) -> world (56, 8).
        assert_eq!(solids[1], Rect::from_center_size(Vec2::new(56.0, 8.0), Vec2::splat(16.0)));
        // Boundary rect spans the bottom edge: center (32, 28) -> world (32, 4).
        assert_eq!(solids[2], Rect::from_center_size(Vec2::new(32.0, 4.0), Vec2::new(64.0, 8.0)));
    }
}
