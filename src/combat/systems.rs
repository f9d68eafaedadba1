//! Damage, death and respawn systems shared by every agent type.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::core::{DamageEvent, DeathEvent, RespawnEvent};

/// Deliver damage events to targets carrying the `T` capability.
///
/// Registered once per concrete `Damageable` component. Events aimed at
/// entities without `T` are left for the other instantiations.
pub fn apply_damage<T: Component + Damageable>(
    mut damage_events: EventReader<DamageEvent>,
    mut targets: Query<(&mut T, Option<&Name>)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok((mut target, name)) = targets.get_mut(event.target) else {
            continue;
        };

        match target.apply_damage(event.amount) {
            DamageOutcome::Killed => {
                info!(
                    "{} died, respawning in {:.1}s",
                    agent_label(event.target, name),
                    target.lifecycle().respawn_delay().as_secs_f32()
                );
                death_events.send(DeathEvent {
                    entity: event.target,
                    killed_by: event.source,
                });
            }
            DamageOutcome::Wounded => {
                debug!(
                    "{} took {} damage, {} left",
                    agent_label(event.target, name),
                    event.amount,
                    target.current_health()
                );
            }
            DamageOutcome::Ignored => {}
        }
    }
}

/// Advance respawn timers of dead `T` agents and revive the ones whose
/// delay has elapsed.
pub fn tick_respawns<T: Component + Damageable>(
    time: Res<Time>,
    mut agents: Query<(Entity, &mut T)>,
    mut respawn_events: EventWriter<RespawnEvent>,
) {
    for (entity, mut agent) in agents.iter_mut() {
        if agent.is_alive() {
            continue;
        }

        if agent.lifecycle_mut().tick(time.delta()) {
            agent.restore();
            respawn_events.send(RespawnEvent { entity });
        }
    }
}

/// Take a freshly dead agent out of the world: stop it, hide it and switch
/// off its collider and body.
pub fn on_agent_death(
    mut commands: Commands,
    mut death_events: EventReader<DeathEvent>,
    mut agents: Query<(&mut Velocity, &mut Visibility)>,
) {
    for event in death_events.read() {
        let Ok((mut velocity, mut visibility)) = agents.get_mut(event.entity) else {
            continue;
        };

        *velocity = Velocity::zero();
        *visibility = Visibility::Hidden;
        commands
            .entity(event.entity)
            .insert((ColliderDisabled, RigidBodyDisabled));
    }
}

/// Put a respawned agent back at its respawn point, visible and solid.
pub fn on_agent_respawn(
    mut commands: Commands,
    mut respawn_events: EventReader<RespawnEvent>,
    mut agents: Query<(
        &RespawnPoint,
        &mut Transform,
        &mut Velocity,
        &mut Visibility,
        Option<&Name>,
    )>,
) {
    for event in respawn_events.read() {
        let Ok((point, mut transform, mut velocity, mut visibility, name)) =
            agents.get_mut(event.entity)
        else {
            continue;
        };

        transform.translation = point.0.extend(transform.translation.z);
        *velocity = Velocity::zero();
        *visibility = Visibility::Inherited;
        commands
            .entity(event.entity)
            .remove::<(ColliderDisabled, RigidBodyDisabled)>();

        info!(
            "{} respawned at {}",
            agent_label(event.entity, name),
            point.0
        );
    }
}
