//! Sensor components refreshed from rapier scene queries.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::layers::LayerMask;

/// Short downward ray used to decide whether an agent stands on something.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    /// Ray length below the agent's feet
    pub distance: f32,
    /// Distance from the agent's centre down to its feet
    pub foot_offset: f32,
    /// Layers that count as ground
    pub layers: LayerMask,
}

impl GroundProbe {
    /// Start and end of the probe ray for an agent centred at `position`.
    pub fn segment(&self, position: Vec2) -> (Vec2, Vec2) {
        let start = position - Vec2::Y * self.foot_offset;
        (start, start - Vec2::Y * self.distance)
    }
}

/// Whether the agent's ground probe hit something on its last check.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grounded(pub bool);

/// Cast every active agent's ground probe.
///
/// Agents whose collider is disabled (dead) keep their last reading.
pub fn probe_ground(
    rapier_context: Query<&RapierContext>,
    mut query: Query<(Entity, &Transform, &GroundProbe, &mut Grounded), Without<ColliderDisabled>>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    for (entity, transform, probe, mut grounded) in query.iter_mut() {
        let (origin, _) = probe.segment(transform.translation.truncate());
        let hit = context.cast_ray(
            origin,
            Vec2::NEG_Y,
            probe.distance,
            true,
            probe.layers.query_filter().exclude_collider(entity),
        );
        grounded.0 = hit.is_some();
    }
}

/// Draw each ground probe ray, green while grounded.
pub fn draw_ground_probes(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundProbe, &Grounded)>,
) {
    for (transform, probe, grounded) in query.iter() {
        let (start, end) = probe.segment(transform.translation.truncate());
        let color = if grounded.0 {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.line_2d(start, end, color);
    }
}
