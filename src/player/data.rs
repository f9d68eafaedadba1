//! Player definitions loaded from RON files.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use super::components::{PlayerControls, PlayerMotion};
use crate::physics::{Layer, LayerMask};
use crate::world::DataLoadError;

/// Player definition loaded from `assets/data/players/<id>.ron`.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PlayerDefinition {
    pub name: String,
    pub controls: PlayerControls,
    pub speed: f32,
    pub jump_force: f32,
    /// Ground probe length below the feet
    pub grounded_leeway: f32,
    /// Layers that count as ground (all layers by default)
    pub ground_layers: LayerMask,
    /// Sweep centre relative to the player when facing right
    pub melee_origin: Option<(f32, f32)>,
    pub melee_attack_radius: f32,
    pub melee_damage: f32,
    /// Cooldown between executed melee attacks, in seconds
    pub melee_attack_delay: f32,
    pub melee_targets: LayerMask,
    pub max_health: i32,
    pub respawn_time: f32,
    /// Where the player reappears; the world origin unless configured
    pub respawn_point: (f32, f32),
    /// Asset path of the swing sound
    pub attack_sound: Option<String>,
    /// Asset path of the sound played per struck target
    pub hit_sound: Option<String>,
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
}

impl Default for PlayerDefinition {
    fn default() -> Self {
        let motion = PlayerMotion::default();
        Self {
            name: "Player".to_string(),
            controls: PlayerControls::default(),
            speed: motion.speed,
            jump_force: motion.jump_force,
            grounded_leeway: 0.1,
            ground_layers: LayerMask::ALL,
            melee_origin: None,
            melee_attack_radius: 1.5,
            melee_damage: 2.0,
            melee_attack_delay: 1.1,
            melee_targets: LayerMask::from(vec![Layer::Enemy, Layer::Player]),
            max_health: 3,
            respawn_time: 3.0,
            respawn_point: (0.0, 0.0),
            attack_sound: None,
            hit_sound: None,
            size: (0.8, 1.2),
            color: (0.2, 0.5, 0.9),
        }
    }
}

impl PlayerDefinition {
    pub fn to_motion(&self) -> PlayerMotion {
        PlayerMotion {
            speed: self.speed,
            jump_force: self.jump_force,
        }
    }

    pub fn validate(&self, id: &str) -> Result<(), DataLoadError> {
        let invalid = |reason: &str| {
            Err(DataLoadError::InvalidDefinition {
                name: id.to_string(),
                reason: reason.to_string(),
            })
        };

        let (origin_x, origin_y) = self.melee_origin.unwrap_or_default();
        let numbers = [
            ("speed", self.speed),
            ("jump_force", self.jump_force),
            ("grounded_leeway", self.grounded_leeway),
            ("melee_origin", origin_x),
            ("melee_origin", origin_y),
            ("melee_attack_radius", self.melee_attack_radius),
            ("melee_damage", self.melee_damage),
            ("melee_attack_delay", self.melee_attack_delay),
            ("respawn_time", self.respawn_time),
            ("respawn_point", self.respawn_point.0),
            ("respawn_point", self.respawn_point.1),
            ("size", self.size.0),
            ("size", self.size.1),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(&format!("{field} must be a finite number"));
        }

        if self.max_health <= 0 {
            return invalid("max_health must be positive");
        }
        if self.melee_attack_radius < 0.0 {
            return invalid("melee_attack_radius must not be negative");
        }
        if self.melee_attack_delay < 0.0 {
            return invalid("melee_attack_delay must not be negative");
        }
        if self.respawn_time < 0.0 {
            return invalid("respawn_time must not be negative");
        }
        if Duration::try_from_secs_f32(self.respawn_time).is_err() {
            return invalid("respawn_time is too long");
        }
        if self.grounded_leeway < 0.0 {
            return invalid("grounded_leeway must not be negative");
        }
        Ok(())
    }
}

/// Resource holding all loaded player definitions, keyed by file stem.
#[derive(Resource, Default, Clone, Debug)]
pub struct PlayerRegistry {
    pub definitions: HashMap<String, PlayerDefinition>,
}

impl PlayerRegistry {
    pub fn get(&self, id: &str) -> Option<&PlayerDefinition> {
        self.definitions.get(id)
    }
}
