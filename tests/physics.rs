//! Melee sweeps and ground probes run against a live rapier context.

use std::time::Duration;

use bevy::hierarchy::HierarchyPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;
use bevy_rapier2d::prelude::*;

use platform_brawl::combat::{CombatPlugin, Damageable};
use platform_brawl::core::{AttackEvent, CorePlugin, DamageEvent};
use platform_brawl::enemies::{EnemyHealth, EnemyPlugin};
use platform_brawl::physics::{GroundProbe, Grounded, Layer, LayerMask, SensorPlugin};
use platform_brawl::player::{Player, PlayerHealth};

fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        HierarchyPlugin,
        AssetPlugin::default(),
    ))
    .init_asset::<Mesh>()
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins((CorePlugin, SensorPlugin, CombatPlugin, EnemyPlugin));
    app
}

/// Let rapier create its context and index every collider.
fn settle(app: &mut App) {
    for _ in 0..3 {
        app.update();
    }
}

fn damage_targets(app: &App) -> Vec<Entity> {
    let events = app.world().resource::<Events<DamageEvent>>();
    events.get_cursor().read(events).map(|event| event.target).collect()
}

fn health(app: &App, entity: Entity) -> f32 {
    app.world().get::<EnemyHealth>(entity).unwrap().current_health()
}

struct Arena {
    attacker: Entity,
    near: Entity,
    far: Entity,
}

/// Attacker at the origin, a damageable enemy in reach, one out of reach and
/// a wall in reach that cannot take damage.
fn spawn_arena(app: &mut App) -> Arena {
    let world = app.world_mut();
    let attacker = world
        .spawn((
            Player,
            PlayerHealth::new(3, 3.0),
            Transform::default(),
            RigidBody::Fixed,
            Collider::ball(0.4),
            Layer::Player.membership(),
        ))
        .id();
    let mut enemy_at = |x: f32| {
        world
            .spawn((
                EnemyHealth::new(10.0, 2.0),
                Transform::from_xyz(x, 0.0, 0.0),
                RigidBody::Fixed,
                Collider::ball(0.4),
                Layer::Enemy.membership(),
            ))
            .id()
    };
    let near = enemy_at(1.0);
    let far = enemy_at(5.0);
    world.spawn((
        Transform::from_xyz(-1.0, 0.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(0.2, 1.0),
        Layer::Ground.membership(),
    ));

    Arena {
        attacker,
        near,
        far,
    }
}

fn swing(app: &mut App, attacker: Entity, targets: LayerMask) {
    app.world_mut().send_event(AttackEvent {
        attacker,
        origin: Vec2::ZERO,
        radius: 1.5,
        damage: 2.0,
        targets,
    });
    app.update();
}

#[test]
fn sweep_damages_only_reachable_damageables() {
    let mut app = physics_app();
    let arena = spawn_arena(&mut app);
    settle(&mut app);

    swing(&mut app, arena.attacker, LayerMask::ALL);

    // Attacker and wall overlap too, but only the near enemy is struck
    assert_eq!(damage_targets(&app), vec![arena.near]);
    assert_eq!(health(&app, arena.near), 8.0);
    assert_eq!(health(&app, arena.far), 10.0);
}

#[test]
fn sweep_ignores_layers_outside_its_targets() {
    let mut app = physics_app();
    let arena = spawn_arena(&mut app);
    settle(&mut app);

    swing(&mut app, arena.attacker, LayerMask::from(Layer::Player));

    assert!(damage_targets(&app).is_empty());
    assert_eq!(health(&app, arena.near), 10.0);
}

#[test]
fn probe_detects_ground_below_feet_only() {
    let mut app = physics_app();
    let world = app.world_mut();
    world.spawn((
        Transform::from_xyz(0.0, -1.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(5.0, 0.5),
        Layer::Ground.membership(),
    ));

    let probe = GroundProbe {
        distance: 0.2,
        foot_offset: 0.5,
        layers: LayerMask::from(Layer::Ground),
    };
    let mut agent_at = |x: f32, y: f32| {
        world
            .spawn((
                Transform::from_xyz(x, y, 0.0),
                RigidBody::Fixed,
                Collider::cuboid(0.5, 0.5),
                Layer::Enemy.membership(),
                probe,
                Grounded(false),
            ))
            .id()
    };
    let standing = agent_at(0.0, 0.05);
    let airborne = agent_at(3.0, 3.0);

    settle(&mut app);

    assert_eq!(app.world().get::<Grounded>(standing), Some(&Grounded(true)));
    assert_eq!(app.world().get::<Grounded>(airborne), Some(&Grounded(false)));
}
