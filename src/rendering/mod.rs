//! Rendering module - renderer visibility pass, animation state and the
//! debug overlay.

mod animation;
mod debug;
mod enabler;
mod plugin;

pub use animation::{apply_animation_triggers, Animator};
pub use debug::{toggle_debug_overlay, DebugOverlay, DebugOverlayPlugin, DEBUG_OVERLAY_KEY};
pub use enabler::force_enable_renderers;
pub use plugin::RenderingPlugin;
