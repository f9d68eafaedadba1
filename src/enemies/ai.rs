//! Enemy behaviour systems: random wandering and timed attacks.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use super::components::{AttackSchedule, Enemy, EnemyHealth, EnemyStats, Wander};
use crate::combat::{agent_label, Damageable};
use crate::core::{EnemyAttackEvent, GameRng};
use crate::physics::Grounded;

/// A grounded enemy jumps when its roll lands above this (60% of steps).
pub const JUMP_ROLL_THRESHOLD: f32 = 0.4;
/// Shortest pause between wander steps, in seconds.
pub const WANDER_PAUSE_MIN: f32 = 0.2;
/// Longest pause between wander steps, in seconds.
pub const WANDER_PAUSE_MAX: f32 = 0.7;

/// Pick a new random horizontal velocity (and maybe jump) whenever the
/// wander countdown runs out.
///
/// Dead enemies are left alone; their countdown is held at zero so they move
/// again on the first frame after respawning.
pub fn enemy_wander(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut enemy_query: Query<
        (&EnemyStats, &EnemyHealth, &Grounded, &mut Wander, &mut Velocity),
        With<Enemy>,
    >,
) {
    let dt = time.delta_secs();

    for (stats, health, grounded, mut wander, mut velocity) in enemy_query.iter_mut() {
        if !health.is_alive() {
            wander.countdown = 0.0;
            continue;
        }

        wander.countdown -= dt;
        if wander.countdown > 0.0 {
            continue;
        }

        let direction = rng.range(-1.0, 1.0);
        velocity.linvel.x = direction * stats.move_speed;

        if grounded.0 && rng.roll() > JUMP_ROLL_THRESHOLD {
            velocity.linvel.y = stats.jump_force;
        }

        wander.countdown = rng.range(WANDER_PAUSE_MIN, WANDER_PAUSE_MAX);
    }
}

/// Fire each living enemy's attack when its schedule comes due and pick the
/// next attack time.
pub fn enemy_attack(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut enemy_query: Query<
        (Entity, Option<&Name>, &EnemyStats, &EnemyHealth, &mut AttackSchedule),
        With<Enemy>,
    >,
    mut attack_events: EventWriter<EnemyAttackEvent>,
) {
    let now = time.elapsed_secs();

    for (entity, name, stats, health, mut schedule) in enemy_query.iter_mut() {
        if !health.is_alive() || now < schedule.next_attack_at {
            continue;
        }

        info!("{} is attacking!", agent_label(entity, name));
        attack_events.send(EnemyAttackEvent { attacker: entity });

        schedule.next_attack_at =
            now + rng.range(stats.attack_interval_min, stats.attack_interval_max);
    }
}
