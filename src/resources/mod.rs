pub mod constants;
pub mod settings;
pub mod world;

pub use settings::*;
pub use world::*;
