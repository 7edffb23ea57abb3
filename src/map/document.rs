use std::collections::HashSet;

use bevy::prelude::*;
use serde::Deserialize;

// Tiled packs flip flags into the top bits of each cell value; the low 29
// bits are the actual tile id.
pub const FLIP_HORIZONTAL: u32 = 0x8000_0000;
pub const FLIP_VERTICAL: u32 = 0x4000_0000;
pub const FLIP_DIAGONAL: u32 = 0x2000_0000;
pub const GID_MASK: u32 = !(FLIP_HORIZONTAL | FLIP_VERTICAL | FLIP_DIAGONAL);

/// Name of the per-tile boolean property that makes a tile solid
pub const COLLIDES_PROPERTY: &str = "collides";

/// A tile map document in the Tiled JSON format: a grid of tile layers plus
/// named object layers carrying gameplay metadata (boundaries, interaction
/// zones, spawn points), and the tilesets the grid cells index into.
#[derive(Debug, Deserialize)]
pub struct MapDocument {
    pub width: u32,
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    pub layers: Vec<MapLayer>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MapLayer {
    Tilelayer(TileLayer),
    Objectgroup(ObjectLayer),
}

#[derive(Debug, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major cell values, one per (col, row); 0 means empty
    pub data: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectLayer {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

/// A rectangle or point in an object layer. Rectangles are anchored at their
/// top-left corner; point objects have zero size.
#[derive(Debug, Deserialize)]
pub struct MapObject {
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

#[derive(Debug, Deserialize)]
pub struct Tileset {
    pub firstgid: u32,
    pub name: String,
    pub image: String,
    pub columns: u32,
    pub tilecount: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub tiles: Vec<TileDef>,
}

/// Per-tile metadata inside a tileset; only tiles with custom properties
/// appear here.
#[derive(Debug, Deserialize)]
pub struct TileDef {
    pub id: u32,
    #[serde(default)]
    pub properties: Vec<TileProperty>,
}

#[derive(Debug, Deserialize)]
pub struct TileProperty {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Split a raw cell value into (tile id, flip x, flip y). The diagonal flag
/// encodes rotation, which this scene never uses, so it is masked off.
pub fn split_gid(raw: u32) -> (u32, bool, bool) {
    (
        raw & GID_MASK,
        raw & FLIP_HORIZONTAL != 0,
        raw & FLIP_VERTICAL != 0,
    )
}

impl MapDocument {
    /// Map dimensions in pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            (self.width * self.tilewidth) as f32,
            (self.height * self.tileheight) as f32,
        )
    }

    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tilewidth as f32, self.tileheight as f32)
    }

    pub fn tile_layers(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter().filter_map(|layer| match layer {
            MapLayer::Tilelayer(tiles) => Some(tiles),
            MapLayer::Objectgroup(_) => None,
        })
    }

    pub fn object_layer(&self, name: &str) -> Option<&ObjectLayer> {
        self.layers.iter().find_map(|layer| match layer {
            MapLayer::Objectgroup(objects) if objects.name == name => Some(objects),
            _ => None,
        })
    }

    /// Objects of a named layer; a missing layer degrades to no objects
    pub fn objects(&self, layer: &str) -> &[MapObject] {
        self.object_layer(layer)
            .map(|layer| layer.objects.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_object(&self, layer: &str, name: &str) -> Option<&MapObject> {
        self.objects(layer).iter().find(|obj| obj.name == name)
    }

    /// Spawn position in map pixel coordinates: the object named `spawn` in
    /// the spawnpoints layer, or the map origin when absent.
    pub fn resolve_spawn(&self, layer: &str, name: &str) -> Vec2 {
        self.find_object(layer, name)
            .map(|obj| Vec2::new(obj.x, obj.y))
            .unwrap_or(Vec2::ZERO)
    }

    /// Global ids of every tile carrying a truthy `collides` property
    pub fn colliding_gids(&self) -> HashSet<u32> {
        let mut gids = HashSet::new();
        for tileset in &self.tilesets {
            for tile in &tileset.tiles {
                let collides = tile.properties.iter().any(|prop| {
                    prop.name == COLLIDES_PROPERTY && prop.value.as_bool() == Some(true)
                });
                if collides {
                    gids.insert(tileset.firstgid + tile.id);
                }
            }
        }
        gids
    }

    /// Resolve a global tile id to (tileset index, local atlas index).
    /// Each tileset owns the gid range [firstgid, firstgid + tilecount).
    pub fn tileset_for_gid(&self, gid: u32) -> Option<(usize, usize)> {
        self.tilesets
            .iter()
            .enumerate()
            .filter(|(_, ts)| ts.firstgid <= gid && gid < ts.firstgid + ts.tilecount)
            .max_by_key(|(_, ts)| ts.firstgid)
            .map(|(index, ts)| (index, (gid - ts.firstgid) as usize))
    }
}

impl TileLayer {
    /// Iterate non-empty cells as (col, row, raw cell value)
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        debug_assert_eq!(self.data.len(), (self.width * self.height) as usize);
        self.data.iter().enumerate().filter_map(|(i, &raw)| {
            if raw == 0 {
                return None;
            }
            Some((i as u32 % self.width, i as u32 / self.width, raw))
        })
    }
}
