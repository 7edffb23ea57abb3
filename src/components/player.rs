use bevy::prelude::*;

use crate::resources::constants::{
    IDLE_DOWN_FRAMES, IDLE_SIDE_FRAMES, IDLE_UP_FRAMES, WALK_DOWN_FRAMES, WALK_FRAME_RATE,
    WALK_SIDE_FRAMES, WALK_UP_FRAMES,
};

/// Marker component for the player entity
#[derive(Component)]
pub struct Player;

/// Per-frame movement vector in world units per second. Reset to zero at the
/// start of every frame before the decision table runs.
#[derive(Component, Default)]
pub struct Velocity(pub Vec2);

/// Dialog lock, owned by the player entity. While `Interacting` a dialog is
/// on screen and further zone contacts are ignored.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Interacting,
}

/// Which animation clip the player is currently showing
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKey {
    IdleDown,
    WalkDown,
    // The side/up idle frames exist on the sheet but the controller always
    // rests facing down - kept for when idling remembers the last direction
    #[allow(dead_code)]
    IdleSide,
    WalkSide,
    #[allow(dead_code)]
    IdleUp,
    WalkUp,
}

impl AnimationKey {
    /// Sprite sheet indices of this clip, in playback order
    pub fn frames(self) -> &'static [usize] {
        match self {
            AnimationKey::IdleDown => &IDLE_DOWN_FRAMES,
            AnimationKey::WalkDown => &WALK_DOWN_FRAMES,
            AnimationKey::IdleSide => &IDLE_SIDE_FRAMES,
            AnimationKey::WalkSide => &WALK_SIDE_FRAMES,
            AnimationKey::IdleUp => &IDLE_UP_FRAMES,
            AnimationKey::WalkUp => &WALK_UP_FRAMES,
        }
    }
}

/// Frame clock for the player's current clip
#[derive(Component)]
pub struct PlayerAnimation {
    pub frame: usize,
    clock: Timer,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            frame: 0,
            clock: Timer::from_seconds(1.0 / WALK_FRAME_RATE, TimerMode::Repeating),
        }
    }
}

impl PlayerAnimation {
    /// Restart from the first frame of a freshly selected clip
    pub fn restart(&mut self) {
        self.frame = 0;
        self.clock.reset();
    }

    /// Advance the clock; returns true when the clip moved to a new frame.
    /// Clips loop, so the frame after the last is the first again.
    pub fn advance(&mut self, delta: std::time::Duration, frame_count: usize) -> bool {
        if frame_count <= 1 {
            return false;
        }
        if self.clock.tick(delta).just_finished() {
            self.frame = (self.frame + 1) % frame_count;
            return true;
        }
        false
    }
}
