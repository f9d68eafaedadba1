//! Physics glue - collision layers and sensor components fed by rapier queries.

mod layers;
mod plugin;
mod sensors;

pub use layers::{Layer, LayerMask};
pub use plugin::SensorPlugin;
pub use sensors::{draw_ground_probes, probe_ground, GroundProbe, Grounded};
