//! Enemies module - enemy entities, behaviour and spawning.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

pub use ai::{enemy_attack, enemy_wander};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
