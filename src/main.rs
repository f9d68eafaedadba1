//! Platform Brawl - Entry Point
//!
//! Loads arena and character data from `assets/data`, then runs the game.
//! Key bindings come from each player's definition file.

use std::path::Path;

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier2d::prelude::*;

use platform_brawl::world::{DataLoadError, GameData, DATA_DIR};
use platform_brawl::BrawlPlugin;

fn main() -> Result<(), DataLoadError> {
    let data = GameData::load(Path::new(DATA_DIR))?;

    App::new()
        // Bevy default plugins, with kira replacing bevy's own audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: format!("Platform Brawl - {}", data.layout.name),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )
        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(AudioPlugin)
        // Our game plugin
        .add_plugins(BrawlPlugin::new(data))
        .run();

    Ok(())
}
