//! Synthesized interaction chimes.
//!
//! One [`SoundService`] instance is owned by the application and passed
//! wherever playback is triggered; there is no global audio state. The
//! output stream opens lazily on the first audible play, and a machine
//! with no usable audio device downgrades the service to a permanent
//! no-op instead of erroring the UI.

pub mod chime;

use chime::Chime;
use rand::Rng;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Pentatonic click notes, a pleasant scale for random picks.
pub const MAGIC_NOTES: [f32; 5] = [523.25, 659.25, 783.99, 880.0, 1046.5];
/// Fixed hover note (B5).
pub const HOVER_NOTE: f32 = 987.77;
/// Applied to every sink so individual chimes stay gentle.
const MASTER_GAIN: f32 = 0.08;

enum Output {
    Untried,
    Ready {
        // Held so the stream outlives detached sinks.
        _stream: OutputStream,
        handle: OutputStreamHandle,
    },
    Unavailable,
}

/// Plays short synthesized chimes for clicks and hovers.
pub struct SoundService {
    enabled: bool,
    coarse_pointer: bool,
    output: Output,
}

impl SoundService {
    /// Creates the service without touching any audio device yet.
    ///
    /// Coarse-pointer installs never chime; the flag mirrors the
    /// persisted pointer classification.
    pub fn new(enabled: bool, coarse_pointer: bool) -> SoundService {
        SoundService {
            enabled,
            coarse_pointer,
            output: Output::Untried,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gates future plays only; a chime already sounding (at most
    /// 150 ms) is left to finish.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Sparkle chime on a random pentatonic note.
    pub fn play_click(&mut self) {
        let note = MAGIC_NOTES[rand::thread_rng().gen_range(0..MAGIC_NOTES.len())];
        self.play(Chime::click(note));
    }

    /// Soft cue for hovering an interactive element.
    pub fn play_hover(&mut self) {
        self.play(Chime::hover(HOVER_NOTE));
    }

    fn play(&mut self, chime: Chime) {
        if !self.enabled || self.coarse_pointer {
            return;
        }
        let Some(handle) = self.handle() else {
            return;
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(MASTER_GAIN);
                sink.append(chime);
                sink.detach();
            }
            Err(err) => {
                tracing::warn!("audio sink failed: {err}");
            }
        }
    }

    fn handle(&mut self) -> Option<&OutputStreamHandle> {
        if matches!(self.output, Output::Untried) {
            self.output = match OutputStream::try_default() {
                Ok((stream, handle)) => Output::Ready {
                    _stream: stream,
                    handle,
                },
                Err(err) => {
                    tracing::warn!("no audio output, chimes disabled: {err}");
                    Output::Unavailable
                }
            };
        }
        match &self.output {
            Output::Ready { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_service_never_opens_output() {
        let mut service = SoundService::new(false, false);
        service.play_click();
        service.play_hover();
        assert!(matches!(service.output, Output::Untried));
    }

    #[test]
    fn test_coarse_pointer_never_opens_output() {
        let mut service = SoundService::new(true, true);
        service.play_click();
        assert!(matches!(service.output, Output::Untried));
    }

    #[test]
    fn test_enable_toggle_round_trip() {
        let mut service = SoundService::new(true, false);
        assert!(service.is_enabled());
        service.set_enabled(false);
        assert!(!service.is_enabled());
        service.set_enabled(true);
        assert!(service.is_enabled());
    }

    #[test]
    fn test_note_tables() {
        assert_eq!(MAGIC_NOTES.len(), 5);
        assert!(MAGIC_NOTES.iter().all(|f| *f > 400.0 && *f < 1200.0));
        assert!(HOVER_NOTE > MAGIC_NOTES[0]);
    }
}
