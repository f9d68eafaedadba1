//! Player melee attack trigger.

use bevy::prelude::*;

use super::components::{Player, PlayerHealth, PlayerIntent};
use crate::combat::{agent_label, Damageable, MeleeAttack};
use crate::core::{AnimationTrigger, AttackEvent, CombatCue};

/// Animation state started by every executed melee attack.
pub const SLASH_ANIMATION: &str = "Slash";

/// Gate melee requests through the weapon cooldown and launch the sweeps
/// that get through.
///
/// The swing cue and slash animation fire for every executed attack, even
/// one that ends up hitting nothing.
pub fn player_melee(
    time: Res<Time>,
    mut player_query: Query<
        (
            Entity,
            Option<&Name>,
            &Transform,
            &PlayerIntent,
            &PlayerHealth,
            &mut MeleeAttack,
        ),
        With<Player>,
    >,
    mut attack_events: EventWriter<AttackEvent>,
    mut cues: EventWriter<CombatCue>,
    mut animations: EventWriter<AnimationTrigger>,
) {
    let dt = time.delta_secs();

    for (entity, name, transform, intent, health, mut melee) in player_query.iter_mut() {
        if !health.is_alive() || !melee.try_trigger(intent.melee, dt) {
            continue;
        }

        info!("{} attacking", agent_label(entity, name));

        cues.send(CombatCue::Swing { attacker: entity });
        animations.send(AnimationTrigger {
            entity,
            name: SLASH_ANIMATION,
        });
        attack_events.send(AttackEvent {
            attacker: entity,
            origin: melee.origin_for(transform.translation.truncate(), transform.scale.x),
            radius: melee.radius,
            damage: melee.damage,
            targets: melee.targets,
        });
    }
}
