//! Sound effect dispatch
//!
//! The simulation only asks for sounds by slot; playing them is up to the
//! host. `AudioManager` applies mute/volume and forwards to an [`AudioSink`].

use serde::{Deserialize, Serialize};

use crate::settings::AudioSettings;

/// A fire-and-forget request to play `sound` on `channel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundRequest {
    pub channel: u8,
    pub sound: u8,
}

/// Something that can actually make noise
pub trait AudioSink {
    fn play(&mut self, request: SoundRequest, volume: f32);
}

/// Sink that only logs what would be played
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, request: SoundRequest, volume: f32) {
        log::debug!(
            "play sound {} on channel {} (volume {:.2})",
            request.sound,
            request.channel,
            volume
        );
    }
}

/// Sink that remembers every request
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<(SoundRequest, f32)>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, request: SoundRequest, volume: f32) {
        self.played.push((request, volume));
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &AudioSettings) -> Self {
        Self {
            sink,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect. Silent requests are dropped.
    pub fn play(&mut self, request: SoundRequest) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(request, vol);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
