//! Rendering plugin - startup visibility pass and animation triggers.

use bevy::prelude::*;

use super::animation::apply_animation_triggers;
use super::enabler::force_enable_renderers;
use crate::core::GameplaySet;

/// Rendering plugin.
///
/// The renderer pass runs in `PostStartup`, after the arena has been
/// spawned during `Startup`.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, force_enable_renderers)
            .add_systems(
                Update,
                apply_animation_triggers.in_set(GameplaySet::Feedback),
            );
    }
}
