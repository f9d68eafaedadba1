//! Headless runs of the gameplay plugins: damage, death, respawn and the
//! melee cooldown, driven by a manually advanced clock.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;

use platform_brawl::audio::AudioFeedbackPlugin;
use platform_brawl::combat::{CombatPlugin, Damageable, MeleeAttack, RespawnPoint};
use platform_brawl::core::{AttackEvent, CorePlugin, DamageEvent, DeathEvent, GameRng};
use platform_brawl::enemies::{spawn_enemy, Enemy, EnemyDefinition, EnemyHealth, EnemyPlugin};
use platform_brawl::physics::{LayerMask, SensorPlugin};
use platform_brawl::player::{
    spawn_player, Player, PlayerControls, PlayerDefinition, PlayerHealth, PlayerPlugin,
};
use platform_brawl::rendering::RenderingPlugin;

const SPAWN: Vec2 = Vec2::new(3.0, 1.0);

fn headless_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((
            CorePlugin,
            SensorPlugin,
            CombatPlugin,
            EnemyPlugin,
            PlayerPlugin,
            RenderingPlugin,
            AudioFeedbackPlugin,
        ))
        .insert_resource(GameRng::seeded(7));
    app
}

fn step(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

/// Spawn a 10 HP grunt through the regular spawn helper and return it.
fn spawn_grunt(app: &mut App) -> Entity {
    let definition = EnemyDefinition {
        name: "Grunt".to_string(),
        health_pool: 10.0,
        respawn_time: 2.0,
        ..default()
    };
    app.add_systems(Startup, move |mut commands: Commands| {
        spawn_enemy(&mut commands, "grunt", &definition, SPAWN);
    });
    app.update();

    let mut enemies = app.world_mut().query_filtered::<Entity, With<Enemy>>();
    enemies.single(app.world())
}

fn health(app: &App, enemy: Entity) -> &EnemyHealth {
    app.world().get::<EnemyHealth>(enemy).unwrap()
}

#[test]
fn enemy_dies_and_respawns_whole() {
    let mut app = headless_app();
    let enemy = spawn_grunt(&mut app);
    let attacker = app.world_mut().spawn_empty().id();

    let mut remaining = Vec::new();
    for _ in 0..3 {
        app.world_mut().send_event(DamageEvent {
            target: enemy,
            source: attacker,
            amount: 4.0,
        });
        step(&mut app, 0.1);
        remaining.push(health(&app, enemy).current_health());
    }

    assert_eq!(remaining, vec![6.0, 2.0, -2.0]);
    assert!(!health(&app, enemy).is_alive());
    assert_eq!(app.world().resource::<Events<DeathEvent>>().len(), 1);
    assert_eq!(
        app.world().get::<Visibility>(enemy),
        Some(&Visibility::Hidden)
    );
    assert!(app.world().get::<ColliderDisabled>(enemy).is_some());

    // Knocked away while dead; respawn puts it back where it spawned
    app.world_mut()
        .get_mut::<Transform>(enemy)
        .unwrap()
        .translation = Vec3::new(40.0, -20.0, 1.0);

    for _ in 0..3 {
        step(&mut app, 0.5);
    }
    assert!(!health(&app, enemy).is_alive());

    step(&mut app, 0.5);
    let revived = health(&app, enemy);
    assert!(revived.is_alive());
    assert_eq!(revived.current_health(), 10.0);

    let transform = app.world().get::<Transform>(enemy).unwrap();
    assert_eq!(transform.translation, SPAWN.extend(1.0));
    assert_eq!(
        app.world().get::<Visibility>(enemy),
        Some(&Visibility::Inherited)
    );
    assert!(app.world().get::<ColliderDisabled>(enemy).is_none());
    assert_eq!(app.world().get::<RespawnPoint>(enemy).unwrap().0, SPAWN);
}

#[test]
fn damage_while_dead_changes_nothing() {
    let mut app = headless_app();
    let enemy = spawn_grunt(&mut app);

    for _ in 0..4 {
        app.world_mut().send_event(DamageEvent {
            target: enemy,
            source: enemy,
            amount: 5.0,
        });
        step(&mut app, 0.1);
    }

    assert_eq!(health(&app, enemy).current_health(), 0.0);
    assert!(!health(&app, enemy).is_alive());
}

#[test]
fn held_melee_key_is_limited_by_cooldown() {
    let mut app = headless_app();
    let controls = PlayerControls::default();
    let melee_key = controls.melee_key;
    let player = app
        .world_mut()
        .spawn((
            Player,
            controls,
            PlayerHealth::new(3, 3.0),
            MeleeAttack::new(1.5, 2.0, 1.0, None, LayerMask::ALL),
            Transform::default(),
        ))
        .id();

    let mut attacks = 0;
    for _ in 0..20 {
        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.release(melee_key);
            keyboard.clear();
            keyboard.press(melee_key);
        }
        step(&mut app, 0.25);
        attacks += app
            .world_mut()
            .resource_mut::<Events<AttackEvent>>()
            .drain()
            .filter(|attack| attack.attacker == player)
            .count();
    }

    // A fresh 1s cooldown, then one attack per second of mashing
    assert_eq!(attacks, 4);
}

#[test]
fn dead_player_cannot_attack() {
    let mut app = headless_app();
    let controls = PlayerControls::default();
    let melee_key = controls.melee_key;
    let player = app
        .world_mut()
        .spawn((
            Player,
            controls,
            PlayerHealth::new(1, 30.0),
            MeleeAttack::new(1.5, 2.0, 0.0, None, LayerMask::ALL),
            Transform::default(),
        ))
        .id();

    app.world_mut().send_event(DamageEvent {
        target: player,
        source: player,
        amount: 1.5,
    });
    step(&mut app, 0.1);
    assert!(!app.world().get::<PlayerHealth>(player).unwrap().is_alive());
    app.world_mut()
        .resource_mut::<Events<AttackEvent>>()
        .clear();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(melee_key);
    step(&mut app, 0.1);

    assert!(app.world().resource::<Events<AttackEvent>>().is_empty());
}

#[test]
fn player_respawns_at_world_origin_by_default() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((CorePlugin, CombatPlugin, PlayerPlugin));

    let definition = PlayerDefinition::default();
    app.add_systems(
        Startup,
        move |mut commands: Commands, asset_server: Res<AssetServer>| {
            spawn_player(&mut commands, &asset_server, &definition, Vec2::new(6.0, 4.0));
        },
    );
    app.update();

    let mut players = app.world_mut().query_filtered::<Entity, With<Player>>();
    let player = players.single(app.world());
    let translation = |app: &App| {
        app.world()
            .get::<Transform>(player)
            .unwrap()
            .translation
            .truncate()
    };
    assert_eq!(translation(&app), Vec2::new(6.0, 4.0));

    app.world_mut().send_event(DamageEvent {
        target: player,
        source: player,
        amount: 5.0,
    });
    app.update();
    assert!(!app.world().get::<PlayerHealth>(player).unwrap().is_alive());

    for _ in 0..29 {
        app.update();
    }
    assert!(!app.world().get::<PlayerHealth>(player).unwrap().is_alive());

    app.update();
    let health = app.world().get::<PlayerHealth>(player).unwrap();
    assert!(health.is_alive());
    assert_eq!(health.current(), health.max());
    assert_eq!(translation(&app), Vec2::ZERO);
}
