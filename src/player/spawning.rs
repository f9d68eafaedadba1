//! Player spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Player, PlayerHealth};
use super::data::PlayerDefinition;
use crate::audio::CombatSounds;
use crate::combat::{MeleeAttack, RespawnPoint};
use crate::physics::{GroundProbe, Layer};

/// Spawn one player from its definition at `position`.
///
/// The player respawns at the definition's `respawn_point`, not at
/// `position`.
pub fn spawn_player(
    commands: &mut Commands,
    asset_server: &AssetServer,
    definition: &PlayerDefinition,
    position: Vec2,
) -> Entity {
    let size = Vec2::new(definition.size.0, definition.size.1);
    let (r, g, b) = definition.color;
    let (respawn_x, respawn_y) = definition.respawn_point;

    let sounds = CombatSounds {
        swing: definition
            .attack_sound
            .as_ref()
            .map(|path| asset_server.load(path.clone())),
        hit: definition
            .hit_sound
            .as_ref()
            .map(|path| asset_server.load(path.clone())),
    };

    commands
        .spawn((
            Player,
            Name::new(definition.name.clone()),
            definition.controls.clone(),
            definition.to_motion(),
            PlayerHealth::new(definition.max_health, definition.respawn_time),
            MeleeAttack::new(
                definition.melee_attack_radius,
                definition.melee_damage,
                definition.melee_attack_delay,
                definition.melee_origin.map(|(x, y)| Vec2::new(x, y)),
                definition.melee_targets,
            ),
            RespawnPoint(Vec2::new(respawn_x, respawn_y)),
            GroundProbe {
                distance: definition.grounded_leeway,
                foot_offset: size.y / 2.0,
                layers: definition.ground_layers,
            },
            sounds,
            Sprite::from_color(Color::srgb(r, g, b), size),
            Transform::from_translation(position.extend(2.0)),
            (
                RigidBody::Dynamic,
                Collider::cuboid(size.x / 2.0, size.y / 2.0),
                LockedAxes::ROTATION_LOCKED,
                Layer::Player.membership(),
            ),
        ))
        .id()
}
