//! Global events used for cross-system communication.
//!
//! Agents never touch each other directly. A melee swing becomes an
//! `AttackEvent`, the sweep turns it into `DamageEvent`s, and the damage
//! systems answer with `DeathEvent`/`RespawnEvent`. Presentation systems
//! listen to `CombatCue` and `AnimationTrigger`.

use bevy::prelude::*;

use crate::physics::LayerMask;

/// Sent when an entity should receive damage.
///
/// Delivered to whichever `Damageable` component the target carries.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Raw damage amount
    pub amount: f32,
}

/// Sent once when an agent's health drops to zero or below.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathEvent {
    pub entity: Entity,
    /// Entity that dealt the killing blow
    pub killed_by: Entity,
}

/// Sent once when a dead agent's respawn delay has elapsed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RespawnEvent {
    pub entity: Entity,
}

/// A melee sweep that has passed its cooldown and must be resolved
/// against every overlapping collider this frame.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackEvent {
    pub attacker: Entity,
    /// World-space centre of the sweep
    pub origin: Vec2,
    pub radius: f32,
    pub damage: f32,
    /// Layers the sweep may hit
    pub targets: LayerMask,
}

/// Sent when an enemy's attack timer fires.
///
/// Enemy attacks are telegraphed only; nothing converts this into damage.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyAttackEvent {
    pub attacker: Entity,
}

/// Audible combat feedback.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatCue {
    /// A melee attack was executed, hit or miss.
    Swing { attacker: Entity },
    /// A melee attack connected with a damageable target.
    Hit { attacker: Entity, target: Entity },
}

/// Request to start a named animation state on an entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTrigger {
    pub entity: Entity,
    pub name: &'static str,
}
