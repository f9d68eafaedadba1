//! Melee attacks - cooldown gating and overlap sweep resolution.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::Hurtbox;
use crate::core::{AttackEvent, CombatCue, DamageEvent};
use crate::physics::LayerMask;

/// Melee weapon carried by an agent.
#[derive(Component, Debug, Clone)]
pub struct MeleeAttack {
    /// Sweep radius in world units
    pub radius: f32,
    /// Damage dealt to each struck target
    pub damage: f32,
    /// Minimum time between two executed attacks, in seconds
    pub delay: f32,
    /// Sweep centre relative to the agent, for an agent facing right.
    /// `None` sweeps around the agent itself.
    pub origin: Option<Vec2>,
    /// Layers the sweep may hit
    pub targets: LayerMask,
    /// Seconds until the next attack is allowed
    cooldown: f32,
}

impl MeleeAttack {
    /// A fresh weapon starts on a full cooldown.
    pub fn new(radius: f32, damage: f32, delay: f32, origin: Option<Vec2>, targets: LayerMask) -> Self {
        Self {
            radius,
            damage,
            delay,
            origin,
            targets,
            cooldown: delay,
        }
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Per-frame attack gate.
    ///
    /// Executes (returns `true`) only when an attack was requested and the
    /// cooldown has run out, which re-arms the cooldown. Any other frame
    /// counts the cooldown down; requests made while cooling down are dropped.
    pub fn try_trigger(&mut self, requested: bool, delta: f32) -> bool {
        if requested && self.is_ready() {
            self.cooldown = self.delay;
            true
        } else {
            self.cooldown -= delta;
            false
        }
    }

    /// World-space sweep centre for an agent at `position` whose horizontal
    /// scale sign is `facing`.
    pub fn origin_for(&self, position: Vec2, facing: f32) -> Vec2 {
        match self.origin {
            Some(offset) => position + Vec2::new(offset.x * facing.signum(), offset.y),
            None => position,
        }
    }
}

/// Draw each agent's melee reach, dimmed while cooling down.
pub fn draw_melee_ranges(mut gizmos: Gizmos, query: Query<(&Transform, &MeleeAttack)>) {
    for (transform, melee) in query.iter() {
        let origin = melee.origin_for(transform.translation.truncate(), transform.scale.x);
        let color = if melee.is_ready() {
            Color::srgb(0.9, 0.2, 0.2)
        } else {
            Color::srgba(0.9, 0.2, 0.2, 0.3)
        };
        gizmos.circle_2d(Isometry2d::from_translation(origin), melee.radius, color);
    }
}

/// Pick the entities a sweep actually damages: everything it overlapped
/// except the attacker, keeping only damageable ones.
pub fn strike_targets(
    attacker: Entity,
    overlapping: impl IntoIterator<Item = Entity>,
    is_damageable: impl Fn(Entity) -> bool,
) -> Vec<Entity> {
    overlapping
        .into_iter()
        .filter(|&entity| entity != attacker && is_damageable(entity))
        .collect()
}

/// Resolve each executed melee attack against the colliders overlapping its
/// sweep circle.
pub fn resolve_melee_sweeps(
    mut attack_events: EventReader<AttackEvent>,
    rapier_context: Query<&RapierContext>,
    hurtboxes: Query<(), With<Hurtbox>>,
    mut damage_events: EventWriter<DamageEvent>,
    mut cues: EventWriter<CombatCue>,
) {
    let Ok(context) = rapier_context.get_single() else {
        attack_events.clear();
        return;
    };

    for attack in attack_events.read() {
        let mut overlapping = Vec::new();
        context.intersections_with_shape(
            attack.origin,
            0.0,
            &Collider::ball(attack.radius),
            attack.targets.query_filter(),
            |entity| {
                overlapping.push(entity);
                true // Continue checking other colliders
            },
        );
        debug!("Melee sweep overlapped {} collider(s)", overlapping.len());

        for target in strike_targets(attack.attacker, overlapping, |entity| {
            hurtboxes.contains(entity)
        }) {
            debug!("Melee hit {}", target);
            damage_events.send(DamageEvent {
                target,
                source: attack.attacker,
                amount: attack.damage,
            });
            cues.send(CombatCue::Hit {
                attacker: attack.attacker,
                target,
            });
        }
    }
}
