pub mod animation;
pub mod camera;
pub mod debug;
pub mod interaction;
pub mod movement;
pub mod setup;

// Systems are imported directly where needed
