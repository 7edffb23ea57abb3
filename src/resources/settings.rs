use bevy::prelude::*;

// Runtime-toggleable debug logging, see systems/debug.rs
#[derive(Resource, Default)]
pub struct DebugSettings {
    pub debug_mode: bool,
}
