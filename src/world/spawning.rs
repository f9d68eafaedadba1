//! Arena construction from the loaded layout.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::data::{ArenaLayout, Platform, Prop};
use crate::enemies::{spawn_enemy, EnemyRegistry};
use crate::physics::Layer;
use crate::player::{spawn_player, PlayerRegistry};

/// Marker for static arena pieces (platforms and props).
#[derive(Component, Debug)]
pub struct ArenaGeometry;

/// Build the arena: camera, platforms, props, players and enemies.
pub fn setup_arena(
    mut commands: Commands,
    layout: Res<ArenaLayout>,
    enemies: Res<EnemyRegistry>,
    players: Res<PlayerRegistry>,
    asset_server: Res<AssetServer>,
) {
    info!("Building arena: {}", layout.name);

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / layout.pixels_per_unit,
            ..OrthographicProjection::default_2d()
        },
    ));

    for platform in &layout.platforms {
        spawn_platform(&mut commands, platform);
    }
    for prop in &layout.props {
        spawn_prop(&mut commands, prop);
    }

    for placement in &layout.players {
        let Some(definition) = players.get(&placement.definition) else {
            warn!("Unknown player definition: {}", placement.definition);
            continue;
        };
        spawn_player(
            &mut commands,
            &asset_server,
            definition,
            placement.position(),
        );
    }

    for placement in &layout.enemies {
        let Some(definition) = enemies.get(&placement.definition) else {
            warn!("Unknown enemy type: {}", placement.definition);
            continue;
        };
        spawn_enemy(
            &mut commands,
            &placement.definition,
            definition,
            placement.position(),
        );
    }

    info!(
        "Arena ready: {} platforms, {} players, {} enemies",
        layout.platforms.len(),
        layout.players.len(),
        layout.enemies.len()
    );
}

fn spawn_platform(commands: &mut Commands, platform: &Platform) {
    let size = Vec2::new(platform.size.0, platform.size.1);
    let (r, g, b) = platform.color;

    commands.spawn((
        ArenaGeometry,
        Name::new("Platform"),
        Sprite::from_color(Color::srgb(r, g, b), size),
        Transform::from_xyz(platform.position.0, platform.position.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        Layer::Ground.membership(),
    ));
}

fn spawn_prop(commands: &mut Commands, prop: &Prop) {
    let (r, g, b) = prop.color;
    let visibility = if prop.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands.spawn((
        ArenaGeometry,
        Name::new(prop.name.clone()),
        Sprite::from_color(Color::srgb(r, g, b), Vec2::new(prop.size.0, prop.size.1)),
        Transform::from_xyz(prop.position.0, prop.position.1, -1.0),
        visibility,
    ));
}
