//! Core game module - events, system ordering and shared resources.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod random;

pub use events::*;
pub use plugin::{CorePlugin, GameplaySet};
pub use random::GameRng;
