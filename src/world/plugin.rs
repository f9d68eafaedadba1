//! World plugin - arena data and construction.

use bevy::prelude::*;

use super::data::GameData;
use super::spawning::setup_arena;

/// Inserts the loaded game data and builds the arena at startup.
pub struct WorldPlugin {
    pub data: GameData,
}

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.data.layout.clone())
            .insert_resource(self.data.enemies.clone())
            .insert_resource(self.data.players.clone())
            .add_systems(Startup, setup_arena);
    }
}
