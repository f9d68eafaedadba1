//! Named animation state driven by `AnimationTrigger` events.

use bevy::prelude::*;

use crate::core::AnimationTrigger;

/// The animation state an entity was last told to play.
///
/// Tracks which state is current and how often it was triggered. There are
/// no animation clips; the state is only recorded.
#[derive(Component, Debug, Default, Clone)]
pub struct Animator {
    state: Option<&'static str>,
    triggers: u32,
}

impl Animator {
    pub fn trigger(&mut self, name: &'static str) {
        self.state = Some(name);
        self.triggers += 1;
    }

    pub fn state(&self) -> Option<&'static str> {
        self.state
    }

    pub fn trigger_count(&self) -> u32 {
        self.triggers
    }
}

pub fn apply_animation_triggers(
    mut triggers: EventReader<AnimationTrigger>,
    mut animators: Query<&mut Animator>,
) {
    for trigger in triggers.read() {
        if let Ok(mut animator) = animators.get_mut(trigger.entity) {
            animator.trigger(trigger.name);
        }
    }
}
