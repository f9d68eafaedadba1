//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::components::EnemyHealth;
use crate::combat::{apply_damage, tick_respawns, CombatSet};
use crate::core::GameplaySet;

/// Enemy plugin - handles enemy wandering, attacks, damage and respawn.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (ai::enemy_wander, ai::enemy_attack).in_set(GameplaySet::Act),
        )
        .add_systems(
            Update,
            tick_respawns::<EnemyHealth>.in_set(CombatSet::Respawn),
        )
        .add_systems(Update, apply_damage::<EnemyHealth>.in_set(CombatSet::Apply));
    }
}
