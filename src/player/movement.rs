//! Side-view player movement: jumping every frame, running every physics step.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use super::components::{Player, PlayerHealth, PlayerIntent, PlayerMotion};
use crate::combat::Damageable;
use crate::physics::Grounded;

/// Launch grounded players that asked to jump.
pub fn player_jump(
    mut player_query: Query<
        (&PlayerIntent, &PlayerMotion, &PlayerHealth, &mut Grounded, &mut Velocity),
        With<Player>,
    >,
) {
    for (intent, motion, health, mut grounded, mut velocity) in player_query.iter_mut() {
        if !health.is_alive() || !intent.jump || !grounded.0 {
            continue;
        }

        velocity.linvel.y = motion.jump_force;
        grounded.0 = false;
    }
}

/// Turn the sprite toward the move direction and set horizontal velocity.
///
/// Runs in `FixedUpdate`. Vertical velocity is left to jumps and gravity.
pub fn apply_player_run(
    mut player_query: Query<
        (&PlayerIntent, &PlayerMotion, &PlayerHealth, &mut Transform, &mut Velocity),
        With<Player>,
    >,
) {
    for (intent, motion, health, mut transform, mut velocity) in player_query.iter_mut() {
        if !health.is_alive() {
            continue;
        }

        if intent.move_x > 0.0 {
            transform.scale.x = transform.scale.x.abs();
        } else if intent.move_x < 0.0 {
            transform.scale.x = -transform.scale.x.abs();
        }

        velocity.linvel.x = intent.move_x * motion.speed;
    }
}
