//! Combat module - damage capability, lifecycle, melee sweeps.

mod components;
mod melee;
mod plugin;
mod systems;

pub use components::*;
pub use melee::{draw_melee_ranges, resolve_melee_sweeps, strike_targets, MeleeAttack};
pub use plugin::{CombatPlugin, CombatSet};
pub use systems::{apply_damage, on_agent_death, on_agent_respawn, tick_respawns};
