//! Sensor plugin - refreshes physics-derived sensor components each frame.

use bevy::prelude::*;

use super::sensors::probe_ground;
use crate::core::GameplaySet;

pub struct SensorPlugin;

impl Plugin for SensorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, probe_ground.in_set(GameplaySet::Sense));
    }
}
