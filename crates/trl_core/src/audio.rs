//! Audio collaborator boundary.
//!
//! Playback is fire-and-forget from the simulation's point of view. Backends
//! report failures as [`AudioError`]; gameplay code routes every call through
//! the `*_best_effort` helpers, which log the failure and carry on so a broken
//! mixer can never stall or corrupt a frame.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("unknown sound '{0}'")]
    UnknownSound(String),
    #[error("audio device unavailable")]
    DeviceUnavailable,
}

pub trait AudioBackend {
    fn play_sound(&mut self, sound_id: &str) -> Result<(), AudioError>;
    fn play_music(&mut self, music_id: &str) -> Result<(), AudioError>;
    fn set_music_volume(&mut self, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self) -> Result<(), AudioError>;
}

pub fn play_sound_best_effort(audio: &mut dyn AudioBackend, sound_id: &str) {
    if let Err(err) = audio.play_sound(sound_id) {
        log::warn!("Sound '{}' failed: {}", sound_id, err);
    }
}

/// Start `music_id` and set its volume. A failed start skips the volume call.
pub fn play_music_best_effort(audio: &mut dyn AudioBackend, music_id: &str, volume: f32) {
    let result = audio
        .play_music(music_id)
        .and_then(|()| audio.set_music_volume(volume));
    if let Err(err) = result {
        log::warn!("Music '{}' failed: {}", music_id, err);
    }
}

pub fn stop_music_best_effort(audio: &mut dyn AudioBackend) {
    if let Err(err) = audio.stop_music() {
        log::warn!("Stopping music failed: {}", err);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    Sound(String),
    Music(String),
    Volume(f32),
    StopMusic,
}

/// Backend that records every successful trigger. With `failing` set, every
/// call errors instead and nothing is recorded.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub events: Vec<AudioEvent>,
    pub failing: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            failing: true,
        }
    }

    pub fn sound_count(&self, sound_id: &str) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AudioEvent::Sound(id) if id == sound_id))
            .count()
    }

    fn record(&mut self, event: AudioEvent) -> Result<(), AudioError> {
        if self.failing {
            return Err(AudioError::DeviceUnavailable);
        }
        self.events.push(event);
        Ok(())
    }
}

impl AudioBackend for RecordingAudio {
    fn play_sound(&mut self, sound_id: &str) -> Result<(), AudioError> {
        self.record(AudioEvent::Sound(sound_id.to_string()))
    }

    fn play_music(&mut self, music_id: &str) -> Result<(), AudioError> {
        self.record(AudioEvent::Music(music_id.to_string()))
    }

    fn set_music_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        self.record(AudioEvent::Volume(volume))
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.record(AudioEvent::StopMusic)
    }
}
