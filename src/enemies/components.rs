//! Enemy-related components.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::combat::{DamageOutcome, Damageable, Hurtbox, Lifecycle};
use crate::physics::Grounded;

/// Marker component for all enemies.
///
/// Pulls in every component the enemy behaviours read, so a spawned enemy
/// can never be missing its body state or timers.
#[derive(Component)]
#[require(EnemyStats, Wander, AttackSchedule, Grounded, Velocity)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// Movement and attack tuning for one enemy.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct EnemyStats {
    /// Horizontal speed at full wander intensity
    pub move_speed: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,
    pub attack_interval_min: f32,
    pub attack_interval_max: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            move_speed: 50.0,
            jump_force: 25.0,
            attack_interval_min: 1.0,
            attack_interval_max: 3.0,
        }
    }
}

/// Fractional health pool of an enemy.
#[derive(Component, Clone, Debug)]
#[require(Hurtbox)]
pub struct EnemyHealth {
    current: f32,
    pool: f32,
    lifecycle: Lifecycle,
}

impl EnemyHealth {
    pub fn new(pool: f32, respawn_time: f32) -> Self {
        Self {
            current: pool,
            pool,
            lifecycle: Lifecycle::new(respawn_time),
        }
    }

    pub fn pool(&self) -> f32 {
        self.pool
    }
}

impl Damageable for EnemyHealth {
    fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.lifecycle.is_alive() {
            return DamageOutcome::Ignored;
        }

        self.current = (self.current - amount).min(self.pool);
        if self.current <= 0.0 && self.lifecycle.kill() {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Wounded
        }
    }

    fn restore(&mut self) {
        self.current = self.pool;
    }

    fn current_health(&self) -> f32 {
        self.current
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

/// Countdown to the next random wander step.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Wander {
    pub countdown: f32,
}

/// When the enemy may attack next, in seconds since startup.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AttackSchedule {
    pub next_attack_at: f32,
}
