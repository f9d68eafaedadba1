//! Player module - player characters, input, movement and melee.

mod attack;
mod components;
pub mod data;
mod input;
mod movement;
mod plugin;
mod spawning;

pub use attack::{player_melee, SLASH_ANIMATION};
pub use components::*;
pub use data::{PlayerDefinition, PlayerRegistry};
pub use input::sample_player_input;
pub use movement::{apply_player_run, player_jump};
pub use plugin::PlayerPlugin;
pub use spawning::spawn_player;
