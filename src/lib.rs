//! Platform Brawl - a small 2D platformer arena in Bevy.
//!
//! Enemies wander, hop and periodically attack; players run, jump and swing
//! a cooldown-gated melee sweep. Enemies and players share one health and
//! lifecycle model (alive, dead, respawned after a delay).
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Gameplay events, system ordering, shared randomness
//! - **Physics**: Collision layers, ground probes
//! - **Combat**: Damageable capability, lifecycle, melee sweeps
//! - **Enemies**: Wander and attack loops, definitions, spawning
//! - **Player**: Input, jumping, running, melee, definitions, spawning
//! - **Rendering**: Startup visibility pass, animation triggers, debug overlay
//! - **Audio**: Combat sound cues
//! - **World**: Arena data loading and construction

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod rendering;
pub mod world;

use bevy::prelude::*;

use world::GameData;

/// Main game plugin that adds all sub-plugins.
///
/// Expects rapier's physics plugin and bevy_kira_audio's plugin to be added
/// by the caller.
pub struct BrawlPlugin {
    data: GameData,
}

impl BrawlPlugin {
    pub fn new(data: GameData) -> Self {
        Self { data }
    }
}

impl Plugin for BrawlPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(physics::SensorPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(rendering::DebugOverlayPlugin)
            .add_plugins(audio::AudioFeedbackPlugin)
            .add_plugins(world::WorldPlugin {
                data: self.data.clone(),
            });
    }
}
