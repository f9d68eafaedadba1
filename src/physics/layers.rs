//! Named collision layers mapped onto rapier collision groups.

use bevy_rapier2d::prelude::*;
use serde::Deserialize;

/// Collision layers used by the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Layer {
    /// Platforms and floors; the only thing ground probes look for by default.
    Ground,
    Player,
    Enemy,
    /// Decorative scenery with colliders.
    Prop,
}

impl Layer {
    pub fn group(self) -> Group {
        match self {
            Layer::Ground => Group::GROUP_1,
            Layer::Player => Group::GROUP_2,
            Layer::Enemy => Group::GROUP_3,
            Layer::Prop => Group::GROUP_4,
        }
    }

    /// Membership for a collider on this layer that collides with everything.
    pub fn membership(self) -> CollisionGroups {
        CollisionGroups::new(self.group(), Group::ALL)
    }
}

/// A set of layers, written as a list in RON files: `[Enemy, Player]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Layer>")]
pub struct LayerMask(Group);

impl LayerMask {
    pub const ALL: Self = Self(Group::ALL);
    pub const NONE: Self = Self(Group::NONE);

    pub fn contains(self, layer: Layer) -> bool {
        self.0.contains(layer.group())
    }

    pub fn groups(self) -> Group {
        self.0
    }

    /// Scene-query filter that only reports colliders belonging to one of these layers.
    pub fn query_filter(self) -> QueryFilter<'static> {
        QueryFilter::new().groups(CollisionGroups::new(Group::ALL, self.groups()))
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Vec<Layer>> for LayerMask {
    fn from(layers: Vec<Layer>) -> Self {
        layers.into_iter().collect()
    }
}

impl FromIterator<Layer> for LayerMask {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self(iter.into_iter().fold(Group::NONE, |acc, layer| acc | layer.group()))
    }
}

impl From<Layer> for LayerMask {
    fn from(layer: Layer) -> Self {
        Self(layer.group())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_from_list_contains_only_listed_layers() {
        let mask = LayerMask::from(vec![Layer::Enemy, Layer::Player]);
        assert!(mask.contains(Layer::Enemy));
        assert!(mask.contains(Layer::Player));
        assert!(!mask.contains(Layer::Ground));
    }

    #[test]
    fn mask_parses_from_ron_list() {
        let mask: LayerMask = ron::from_str("[Ground]").unwrap();
        assert_eq!(mask, LayerMask::from(Layer::Ground));

        let empty: LayerMask = ron::from_str("[]").unwrap();
        assert_eq!(empty, LayerMask::NONE);
    }
}
