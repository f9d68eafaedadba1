//! Combat plugin - melee resolution and shared death/respawn handling.

use bevy::prelude::*;

use super::melee::resolve_melee_sweeps;
use super::systems::{on_agent_death, on_agent_respawn};
use crate::core::GameplaySet;

/// Ordering inside `GameplaySet::Damage`.
///
/// Respawn timers tick before this frame's damage lands, so an agent never
/// loses time off its respawn delay on the frame it dies.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// `tick_respawns::<T>` for every damageable type.
    Respawn,
    /// Melee sweeps turn attacks into damage events.
    Sweep,
    /// `apply_damage::<T>` for every damageable type.
    Apply,
}

/// Combat plugin - handles damage flow shared by all agents.
///
/// Agent plugins register `tick_respawns::<T>` in [`CombatSet::Respawn`] and
/// `apply_damage::<T>` in [`CombatSet::Apply`] for their own `Damageable`.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (CombatSet::Respawn, CombatSet::Sweep, CombatSet::Apply)
                .chain()
                .in_set(GameplaySet::Damage),
        )
        .add_systems(Update, resolve_melee_sweeps.in_set(CombatSet::Sweep))
        .add_systems(
            Update,
            (on_agent_respawn, on_agent_death)
                .chain()
                .in_set(GameplaySet::Lifecycle),
        );
    }
}
