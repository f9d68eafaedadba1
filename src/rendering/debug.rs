//! Debug overlay: ground probe rays and melee reach drawn with gizmos.

use bevy::prelude::*;

use crate::combat::draw_melee_ranges;
use crate::core::GameplaySet;
use crate::physics::draw_ground_probes;

/// Key that flips the overlay on and off.
pub const DEBUG_OVERLAY_KEY: KeyCode = KeyCode::F3;

/// Whether the debug overlay is drawn. Off by default.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugOverlay(pub bool);

pub fn toggle_debug_overlay(mut overlay: ResMut<DebugOverlay>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(DEBUG_OVERLAY_KEY) {
        overlay.0 = !overlay.0;
        info!("Debug overlay {}", if overlay.0 { "on" } else { "off" });
    }
}

/// Debug overlay plugin. Needs the gizmo and input plugins from
/// `DefaultPlugins`.
pub struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(Update, toggle_debug_overlay)
            .add_systems(
                Update,
                (draw_ground_probes, draw_melee_ranges)
                    .in_set(GameplaySet::Feedback)
                    .run_if(resource_equals(DebugOverlay(true))),
            );
    }
}
