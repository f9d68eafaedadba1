//! One-shot pass that makes every renderer in the scene visible.

use bevy::prelude::*;

/// Any entity that draws something: a sprite or a 2D mesh.
type RendererFilter = Or<(With<Sprite>, With<Mesh2d>)>;

/// Force every hidden sprite or mesh renderer back on.
///
/// Entities without a renderer are never touched.
pub fn force_enable_renderers(
    mut renderers: Query<(Entity, Option<&Name>, &mut Visibility), RendererFilter>,
) {
    let mut enabled = 0;

    for (entity, name, mut visibility) in renderers.iter_mut() {
        if *visibility != Visibility::Hidden {
            continue;
        }

        *visibility = Visibility::Inherited;
        enabled += 1;
        match name {
            Some(name) => info!("Enabling renderer for: {}", name),
            None => info!("Enabling renderer for: {}", entity),
        }
    }

    info!("Renderer pass enabled {} hidden renderer(s)", enabled);
}
