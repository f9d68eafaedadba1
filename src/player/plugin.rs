//! Player plugin - input, movement, melee and player lifecycle.

use bevy::prelude::*;

use super::attack::player_melee;
use super::components::PlayerHealth;
use super::input::sample_player_input;
use super::movement::{apply_player_run, player_jump};
use crate::combat::{apply_damage, tick_respawns, CombatSet};
use crate::core::GameplaySet;

/// Player plugin - handles input sampling, movement and melee attacks.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sample_player_input.in_set(GameplaySet::Intent))
            .add_systems(
                Update,
                (player_jump, player_melee).chain().in_set(GameplaySet::Act),
            )
            .add_systems(FixedUpdate, apply_player_run)
            .add_systems(
                Update,
                tick_respawns::<PlayerHealth>.in_set(CombatSet::Respawn),
            )
            .add_systems(Update, apply_damage::<PlayerHealth>.in_set(CombatSet::Apply));
    }
}
