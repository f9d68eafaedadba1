//! World module - arena data, loading and construction.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{
    load_definitions, read_ron, ArenaLayout, GameData, Placement, Platform, Prop, DATA_DIR,
};
pub use error::DataLoadError;
pub use plugin::WorldPlugin;
pub use spawning::{setup_arena, ArenaGeometry};
