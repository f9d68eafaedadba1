//! Core plugin that sets up events, system ordering and shared resources.

use bevy::prelude::*;

use super::events::*;
use super::random::GameRng;

/// Per-frame ordering of gameplay systems.
///
/// Input and sensing happen before agents act, damage is resolved after
/// every attack of the frame, and lifecycle transitions follow damage.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Reading player input into intents.
    Intent,
    /// Refreshing sensor components (ground contact).
    Sense,
    /// Agents decide and act: movement, jumps, attacks.
    Act,
    /// Melee sweeps and damage application.
    Damage,
    /// Death and respawn transitions.
    Lifecycle,
    /// Sounds, animation triggers.
    Feedback,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Global events (DamageEvent, DeathEvent, RespawnEvent, ...)
/// - The chained `GameplaySet` ordering in `Update`
/// - The shared `GameRng`
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameRng>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<RespawnEvent>()
            .add_event::<AttackEvent>()
            .add_event::<EnemyAttackEvent>()
            .add_event::<CombatCue>()
            .add_event::<AnimationTrigger>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Intent,
                    GameplaySet::Sense,
                    GameplaySet::Act,
                    GameplaySet::Damage,
                    GameplaySet::Lifecycle,
                    GameplaySet::Feedback,
                )
                    .chain(),
            );
    }
}
