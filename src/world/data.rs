//! Arena layout and game data loading from RON files.
//!
//! Everything the game needs is read once, before the app starts:
//!
//! ```text
//! assets/data/
//!   arena.ron            ArenaLayout
//!   enemies/<type>.ron   EnemyDefinition, keyed by file stem
//!   players/<id>.ron     PlayerDefinition, keyed by file stem
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::DataLoadError;
use crate::enemies::EnemyRegistry;
use crate::player::PlayerRegistry;

/// Root of the game data directory, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

fn default_pixels_per_unit() -> f32 {
    48.0
}

fn default_visible() -> bool {
    true
}

fn default_platform_color() -> (f32, f32, f32) {
    (0.35, 0.3, 0.25)
}

/// A static rectangle on the ground layer.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Platform {
    pub position: (f32, f32),
    pub size: (f32, f32),
    #[serde(default = "default_platform_color")]
    pub color: (f32, f32, f32),
}

/// Places one instance of a named definition.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Registry key (file stem of the definition)
    pub definition: String,
    pub position: (f32, f32),
}

impl Placement {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }
}

/// Decorative sprite. Props authored as hidden are switched on by the
/// startup renderer pass.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Prop {
    pub name: String,
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// The arena loaded from `arena.ron`.
#[derive(Resource, Deserialize, Clone, Debug)]
pub struct ArenaLayout {
    pub name: String,
    /// Screen pixels per world unit
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub players: Vec<Placement>,
    #[serde(default)]
    pub enemies: Vec<Placement>,
    #[serde(default)]
    pub props: Vec<Prop>,
}

/// Everything loaded from the data directory, validated.
#[derive(Clone, Debug)]
pub struct GameData {
    pub layout: ArenaLayout,
    pub enemies: EnemyRegistry,
    pub players: PlayerRegistry,
}

impl GameData {
    /// Load and validate all game data under `root`.
    pub fn load(root: &Path) -> Result<Self, DataLoadError> {
        let layout = read_ron(&root.join("arena.ron"))?;
        let enemies = EnemyRegistry {
            definitions: load_definitions(&root.join("enemies"))?,
        };
        let players = PlayerRegistry {
            definitions: load_definitions(&root.join("players"))?,
        };

        Self::from_parts(layout, enemies, players)
    }

    /// Validate already-parsed data.
    pub fn from_parts(
        layout: ArenaLayout,
        enemies: EnemyRegistry,
        players: PlayerRegistry,
    ) -> Result<Self, DataLoadError> {
        for (id, definition) in &enemies.definitions {
            definition.validate(id)?;
        }
        for (id, definition) in &players.definitions {
            definition.validate(id)?;
        }

        if layout.pixels_per_unit <= 0.0 {
            return Err(DataLoadError::InvalidDefinition {
                name: layout.name.clone(),
                reason: "pixels_per_unit must be positive".to_string(),
            });
        }

        for placement in &layout.enemies {
            if enemies.get(&placement.definition).is_none() {
                return Err(DataLoadError::UnknownDefinition {
                    kind: "enemy",
                    name: placement.definition.clone(),
                });
            }
        }
        for placement in &layout.players {
            if players.get(&placement.definition).is_none() {
                return Err(DataLoadError::UnknownDefinition {
                    kind: "player",
                    name: placement.definition.clone(),
                });
            }
        }

        Ok(Self {
            layout,
            enemies,
            players,
        })
    }
}

/// Read and parse one RON file.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Load every `.ron` file in `dir`, keyed by file stem.
pub fn load_definitions<T: DeserializeOwned>(
    dir: &Path,
) -> Result<HashMap<String, T>, DataLoadError> {
    if !dir.is_dir() {
        return Err(DataLoadError::FileNotFound(dir.display().to_string()));
    }

    let read_error = |e: std::io::Error| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    };

    let mut definitions = HashMap::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        definitions.insert(stem.to_string(), read_ron(&path)?);
    }

    Ok(definitions)
}
