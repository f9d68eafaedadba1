//! Combat-related components and the damage capability.

use std::time::Duration;

use bevy::prelude::*;

/// What a single `apply_damage` call did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was already dead; nothing changed.
    Ignored,
    /// Health dropped but the target is still alive.
    Wounded,
    /// This hit took health to zero or below.
    Killed,
}

/// Capability of anything that can receive damage.
///
/// Implementors own their health pool and a [`Lifecycle`]. Damage against a
/// dead implementor must be ignored, and `Killed` must be returned at most
/// once per life.
pub trait Damageable {
    fn apply_damage(&mut self, amount: f32) -> DamageOutcome;

    /// Refill health to its maximum. Called when the respawn delay elapses.
    fn restore(&mut self);

    fn current_health(&self) -> f32;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    fn is_alive(&self) -> bool {
        self.lifecycle().is_alive()
    }
}

#[derive(Debug, Clone)]
enum LifeState {
    Alive,
    Dead { respawn: Timer },
}

/// Alive/dead state machine with a timed respawn.
///
/// `Alive --kill--> Dead --respawn delay elapsed--> Alive`. There are no
/// other transitions.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: LifeState,
    respawn_delay: Duration,
}

impl Lifecycle {
    /// Negative or NaN delays respawn immediately; delays too long for a
    /// `Duration` never elapse.
    pub fn new(respawn_delay_secs: f32) -> Self {
        let respawn_delay =
            Duration::try_from_secs_f32(respawn_delay_secs.max(0.0)).unwrap_or(Duration::MAX);
        Self {
            state: LifeState::Alive,
            respawn_delay,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.state, LifeState::Alive)
    }

    pub fn respawn_delay(&self) -> Duration {
        self.respawn_delay
    }

    /// Time left before respawning, `None` while alive.
    pub fn respawn_remaining(&self) -> Option<Duration> {
        match &self.state {
            LifeState::Alive => None,
            LifeState::Dead { respawn } => Some(respawn.remaining()),
        }
    }

    /// Enter the dead state and arm the respawn timer.
    ///
    /// Returns `false` if already dead.
    pub fn kill(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.state = LifeState::Dead {
            respawn: Timer::new(self.respawn_delay, TimerMode::Once),
        };
        true
    }

    /// Advance the respawn timer. Returns `true` on the tick that brings the
    /// agent back to life.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let LifeState::Dead { respawn } = &mut self.state else {
            return false;
        };
        if respawn.tick(delta).finished() {
            self.state = LifeState::Alive;
            true
        } else {
            false
        }
    }
}

/// Marks an entity whose colliders can be struck by melee sweeps.
///
/// Required by every `Damageable` component, so a sweep can tell damageable
/// colliders apart without knowing the concrete agent types.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Hurtbox;

/// Where an agent reappears after its respawn delay.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RespawnPoint(pub Vec2);

/// Human-readable label for log lines.
pub fn agent_label(entity: Entity, name: Option<&Name>) -> String {
    name.map_or_else(|| entity.to_string(), |name| name.as_str().to_owned())
}
