//! Audio module - combat sound playback through bevy_kira_audio.

mod plugin;

pub use plugin::{play_combat_cues, AudioFeedbackPlugin, CombatSounds};
