//! Player-related components.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use serde::Deserialize;

use crate::combat::{DamageOutcome, Damageable, Hurtbox, Lifecycle};
use crate::physics::Grounded;
use crate::rendering::Animator;

/// Marker component for player-controlled characters.
#[derive(Component)]
#[require(PlayerIntent, Grounded, Velocity, Animator)]
pub struct Player;

/// Whole-number hit points of a player.
///
/// Incoming damage is truncated toward zero before it is subtracted, so a
/// hit of 2.9 costs two points.
#[derive(Component, Clone, Debug)]
#[require(Hurtbox)]
pub struct PlayerHealth {
    current: i32,
    max: i32,
    lifecycle: Lifecycle,
}

impl PlayerHealth {
    pub fn new(max: i32, respawn_time: f32) -> Self {
        Self {
            current: max,
            max,
            lifecycle: Lifecycle::new(respawn_time),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

impl Damageable for PlayerHealth {
    fn apply_damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.lifecycle.is_alive() {
            return DamageOutcome::Ignored;
        }

        self.current = self
            .current
            .saturating_sub(amount.trunc() as i32)
            .min(self.max);
        if self.current <= 0 && self.lifecycle.kill() {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Wounded
        }
    }

    fn restore(&mut self) {
        self.current = self.max;
    }

    fn current_health(&self) -> f32 {
        self.current as f32
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

/// Key bindings of one player.
///
/// The horizontal axis is digital: `move_right` minus `move_left`.
#[derive(Component, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlayerControls {
    pub melee_key: KeyCode,
    pub jump_key: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
}

impl Default for PlayerControls {
    fn default() -> Self {
        Self {
            melee_key: KeyCode::Slash,
            jump_key: KeyCode::ShiftRight,
            move_left: KeyCode::ArrowLeft,
            move_right: KeyCode::ArrowRight,
        }
    }
}

/// What the player asked for this frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Horizontal axis in `[-1, 1]`
    pub move_x: f32,
    /// Jump key went down this frame
    pub jump: bool,
    /// Melee key went down this frame
    pub melee: bool,
}

/// Movement tuning of one player.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerMotion {
    /// Horizontal speed at full axis deflection
    pub speed: f32,
    /// Upward velocity applied by a jump
    pub jump_force: f32,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_force: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_truncated_to_whole_points() {
        let mut health = PlayerHealth::new(3, 3.0);

        assert_eq!(health.apply_damage(2.9), DamageOutcome::Wounded);
        assert_eq!(health.current(), 1);
        assert_eq!(health.apply_damage(0.5), DamageOutcome::Wounded);
        assert_eq!(health.current(), 1);
    }

    #[test]
    fn dies_at_zero_and_ignores_further_hits() {
        let mut health = PlayerHealth::new(3, 3.0);
        health.apply_damage(2.0);

        assert_eq!(health.apply_damage(2.0), DamageOutcome::Killed);
        assert_eq!(health.current(), -1);
        assert_eq!(health.apply_damage(2.0), DamageOutcome::Ignored);
        assert_eq!(health.current(), -1);
    }

    #[test]
    fn huge_negative_damage_heals_to_max_without_overflow() {
        let mut health = PlayerHealth::new(3, 3.0);
        health.apply_damage(2.0);

        assert_eq!(health.apply_damage(-3.0e9), DamageOutcome::Wounded);
        assert_eq!(health.current(), health.max());
    }

    #[test]
    fn controls_parse_from_ron() {
        let controls: PlayerControls =
            ron::from_str("(melee_key: KeyF, jump_key: Space, move_left: KeyA, move_right: KeyD)")
                .unwrap();
        assert_eq!(controls.melee_key, KeyCode::KeyF);
        assert_eq!(controls.jump_key, KeyCode::Space);
    }
}
