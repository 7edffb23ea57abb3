/// Constants for the walk-around scene
pub const WINDOW_TITLE: &str = "Walkabout";

// Fixed viewport; the camera never resizes with the window
pub const VIEWPORT_WIDTH: f32 = 1200.0;
pub const VIEWPORT_HEIGHT: f32 = 600.0;
pub const CAMERA_ZOOM: f32 = 2.0;

/// Map document, read from disk at startup (not through the asset server,
/// which only hands out handles; the document is needed synchronously to
/// build colliders and resolve the spawn point).
pub const MAP_PATH: &str = "assets/maps/interior.json";

// Object layers the map document is expected to carry
pub const BOUNDARY_LAYER: &str = "boundary";
pub const INTERACTION_LAYER: &str = "interaction";
pub const SPAWNPOINT_LAYER: &str = "spawnpoints";
pub const SPAWNPOINT_NAME: &str = "spawn";
pub const BED_ZONE_NAME: &str = "bed";

// Player sprite sheet: 16x16 frames on a 39-column grid. The frame indices
// below are positions on that grid, matching the sheet's walk cycles.
pub const PLAYER_SHEET_PATH: &str = "sprites/player.png";
pub const PLAYER_FRAME_SIZE: u32 = 16;
pub const PLAYER_SHEET_COLUMNS: u32 = 39;
pub const PLAYER_SHEET_ROWS: u32 = 27;
pub const PLAYER_SCALE: f32 = 1.5;

pub const IDLE_DOWN_FRAMES: [usize; 1] = [936];
pub const WALK_DOWN_FRAMES: [usize; 4] = [936, 937, 938, 939];
pub const IDLE_SIDE_FRAMES: [usize; 1] = [975];
pub const WALK_SIDE_FRAMES: [usize; 4] = [975, 976, 977, 978];
pub const IDLE_UP_FRAMES: [usize; 1] = [1014];
pub const WALK_UP_FRAMES: [usize; 4] = [1014, 1015, 1016, 1017];

pub const PLAYER_SPEED: f32 = 100.0;
pub const WALK_FRAME_RATE: f32 = 8.0;

/// Half extent of the player's collision box (scaled sprite size).
pub const PLAYER_COLLIDER_HALF: f32 = PLAYER_FRAME_SIZE as f32 * PLAYER_SCALE / 2.0;

// Dialog box geometry, anchored to the bottom of the viewport
pub const DIALOG_WIDTH_PERCENT: f32 = 80.0;
pub const DIALOG_LEFT_PERCENT: f32 = 10.0;
pub const DIALOG_HEIGHT: f32 = 100.0;
pub const DIALOG_BOTTOM_MARGIN: f32 = 20.0;
pub const DIALOG_TEXT_INSET: f32 = 20.0;
pub const DIALOG_FONT_SIZE: f32 = 18.0;

pub const DIALOG_PROMPT_TEXT: &str = "Press F to interact";
pub const DIALOG_ENGAGED_TEXT: &str = "Interacting with the bed...";

/// How long the dialog stays up after confirming the interaction.
pub const INTERACTION_TIMEOUT_SECS: f32 = 2.0;

// Z layering: tile layers start at 0 and stack by layer index, the player
// walks above them, debug overlays sit on top of everything.
pub const PLAYER_Z: f32 = 10.0;
pub const CAMERA_Z: f32 = 1000.0;
#[cfg(feature = "collider_debug")]
pub const COLLIDER_OVERLAY_Z: f32 = 50.0;
