//! Combat sound effects.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};

use crate::core::{CombatCue, GameplaySet};

/// Per-agent combat sounds. Either clip may be absent.
#[derive(Component, Debug, Default, Clone)]
pub struct CombatSounds {
    /// Played for every executed attack
    pub swing: Option<Handle<AudioSource>>,
    /// Played once per struck target
    pub hit: Option<Handle<AudioSource>>,
}

impl CombatSounds {
    fn clip_for(&self, cue: &CombatCue) -> Option<&Handle<AudioSource>> {
        match cue {
            CombatCue::Swing { .. } => self.swing.as_ref(),
            CombatCue::Hit { .. } => self.hit.as_ref(),
        }
    }
}

/// Play the attacker's clip for each combat cue.
///
/// Without an audio backend the cues are simply consumed.
pub fn play_combat_cues(
    mut cues: EventReader<CombatCue>,
    audio: Option<Res<Audio>>,
    sounds: Query<&CombatSounds>,
) {
    let Some(audio) = audio else {
        cues.clear();
        return;
    };

    for cue in cues.read() {
        let attacker = match *cue {
            CombatCue::Swing { attacker } | CombatCue::Hit { attacker, .. } => attacker,
        };

        let Some(clip) = sounds
            .get(attacker)
            .ok()
            .and_then(|sounds| sounds.clip_for(cue))
        else {
            continue;
        };

        audio.play(clip.clone());
    }
}

/// Audio feedback plugin. Expects `bevy_kira_audio::AudioPlugin` to be added
/// by the application.
pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_combat_cues.in_set(GameplaySet::Feedback));
    }
}
