//! Enemy definitions loaded from RON files.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use super::components::EnemyStats;
use crate::physics::{Layer, LayerMask};
use crate::world::DataLoadError;

/// Enemy definition loaded from `assets/data/enemies/<type>.ron`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EnemyDefinition {
    pub name: String,
    pub health_pool: f32,
    pub move_speed: f32,
    pub jump_force: f32,
    pub attack_interval_min: f32,
    pub attack_interval_max: f32,
    /// Seconds spent dead before respawning
    pub respawn_time: f32,
    /// Length of the ground probe below the feet
    pub ground_probe_distance: f32,
    pub ground_layers: LayerMask,
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
}

impl Default for EnemyDefinition {
    fn default() -> Self {
        let stats = EnemyStats::default();
        Self {
            name: "Enemy".to_string(),
            health_pool: 10.0,
            move_speed: stats.move_speed,
            jump_force: stats.jump_force,
            attack_interval_min: stats.attack_interval_min,
            attack_interval_max: stats.attack_interval_max,
            respawn_time: 2.0,
            ground_probe_distance: 0.2,
            ground_layers: LayerMask::from(Layer::Ground),
            size: (1.0, 1.0),
            color: (0.8, 0.2, 0.2),
        }
    }
}

impl EnemyDefinition {
    /// Convert to EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            move_speed: self.move_speed,
            jump_force: self.jump_force,
            attack_interval_min: self.attack_interval_min,
            attack_interval_max: self.attack_interval_max,
        }
    }

    pub fn validate(&self, id: &str) -> Result<(), DataLoadError> {
        let invalid = |reason: &str| {
            Err(DataLoadError::InvalidDefinition {
                name: id.to_string(),
                reason: reason.to_string(),
            })
        };

        let numbers = [
            ("health_pool", self.health_pool),
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("attack_interval_min", self.attack_interval_min),
            ("attack_interval_max", self.attack_interval_max),
            ("respawn_time", self.respawn_time),
            ("ground_probe_distance", self.ground_probe_distance),
            ("size", self.size.0),
            ("size", self.size.1),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(&format!("{field} must be a finite number"));
        }

        if self.health_pool <= 0.0 {
            return invalid("health_pool must be positive");
        }
        if self.attack_interval_min < 0.0 || self.attack_interval_min > self.attack_interval_max {
            return invalid("attack interval must satisfy 0 <= min <= max");
        }
        if self.respawn_time < 0.0 {
            return invalid("respawn_time must not be negative");
        }
        if Duration::try_from_secs_f32(self.respawn_time).is_err() {
            return invalid("respawn_time is too long");
        }
        if self.ground_probe_distance < 0.0 {
            return invalid("ground_probe_distance must not be negative");
        }
        Ok(())
    }
}

/// Resource holding all loaded enemy definitions, keyed by file stem.
#[derive(Resource, Default, Clone, Debug)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }
}
