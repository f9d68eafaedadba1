//! Enemy spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, EnemyHealth, EnemyType};
use super::data::EnemyDefinition;
use crate::combat::RespawnPoint;
use crate::physics::{GroundProbe, Grounded, Layer};

/// Spawn one enemy of `enemy_type` at `position`.
///
/// The spawn position doubles as the enemy's respawn point.
pub fn spawn_enemy(
    commands: &mut Commands,
    enemy_type: &str,
    definition: &EnemyDefinition,
    position: Vec2,
) -> Entity {
    let size = Vec2::new(definition.size.0, definition.size.1);
    let (r, g, b) = definition.color;

    commands
        .spawn((
            Enemy,
            EnemyType(enemy_type.to_string()),
            Name::new(definition.name.clone()),
            definition.to_stats(),
            EnemyHealth::new(definition.health_pool, definition.respawn_time),
            RespawnPoint(position),
            // Starts grounded until the first probe says otherwise
            Grounded(true),
            GroundProbe {
                distance: definition.ground_probe_distance,
                foot_offset: size.y / 2.0,
                layers: definition.ground_layers,
            },
            Sprite::from_color(Color::srgb(r, g, b), size),
            Transform::from_translation(position.extend(1.0)),
            (
                RigidBody::Dynamic,
                Collider::cuboid(size.x / 2.0, size.y / 2.0),
                LockedAxes::ROTATION_LOCKED,
                Layer::Enemy.membership(),
            ),
        ))
        .id()
}
