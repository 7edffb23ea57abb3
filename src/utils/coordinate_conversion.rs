use bevy::prelude::*;

/// Convert a point from map coordinates to world coordinates.
///
/// The map document uses a top-left origin with Y increasing downward
/// (the Tiled convention); Bevy's world space has Y increasing upward.
/// X maps directly, Y is flipped around the map's pixel height.
pub fn map_point_to_world(point: Vec2, map_height_px: f32) -> Vec2 {
    Vec2::new(point.x, map_height_px - point.y)
}

/// World-space center of the tile at (col, row) in a tile layer.
pub fn tile_center_to_world(col: u32, row: u32, tile_size: Vec2, map_height_px: f32) -> Vec2 {
    let center = Vec2::new(
        col as f32 * tile_size.x + tile_size.x / 2.0,
        row as f32 * tile_size.y + tile_size.y / 2.0,
    );
    map_point_to_world(center, map_height_px)
}

/// World-space rectangle for a map object.
///
/// Rectangle objects in the map document are anchored at their top-left
/// corner, so the center sits half a width right and half a height *down*
/// from (x, y) before the Y flip.
pub fn object_rect_to_world(x: f32, y: f32, width: f32, height: f32, map_height_px: f32) -> Rect {
    let center = map_point_to_world(Vec2::new(x + width / 2.0, y + height / 2.0), map_height_px);
    Rect::from_center_size(center, Vec2::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_conversion_flips_y() {
        let world = map_point_to_world(Vec2::new(10.0, 30.0), 400.0);
        assert_eq!(world, Vec2::new(10.0, 370.0));
    }

    #[test]
    fn map_origin_lands_at_top_left() {
        // (0, 0) in map space is the top-left corner, i.e. (0, height) in world space.
        assert_eq!(map_point_to_world(Vec2::ZERO, 400.0), Vec2::new(0.0, 400.0));
    }

    #[test]
    fn tile_centers_round_trip() {
        // First tile of a 16px grid: map center (8, 8) -> world (8, height - 8).
        let world = tile_center_to_world(0, 0, Vec2::splat(16.0), 400.0);
        assert_eq!(world, Vec2::new(8.0, 392.0));

        // One tile right, one tile down.
        let world = tile_center_to_world(1, 1, Vec2::splat(16.0), 400.0);
        assert_eq!(world, Vec2::new(24.0, 376.0));
    }

    #[test]
    fn object_rects_keep_their_size() {
        let rect = object_rect_to_world(32.0, 48.0, 64.0, 16.0, 400.0);
        assert_eq!(rect.size(), Vec2::new(64.0, 16.0));
        // Top-left (32, 48) in map space -> center (64, 56) -> world center (64, 344).
        assert_eq!(rect.center(), Vec2::new(64.0, 344.0));
    }
}
