//! Chime synthesis as rodio sources.
//!
//! The interaction sounds are generated, not sampled: each chime is a
//! short enveloped oscillator (plus an optional octave shimmer for
//! clicks). rodio has no gain-ramp automation, so the envelope is baked
//! into the sample iterator: a linear attack, then an exponential decay
//! toward a floor.

use rodio::Source;
use std::time::Duration;

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy)]
enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    fn at(self, phase: f32) -> f32 {
        let p = phase.fract();
        match self {
            Waveform::Sine => (p * std::f32::consts::TAU).sin(),
            Waveform::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
        }
    }
}

/// One enveloped oscillator voice.
#[derive(Debug, Clone, Copy)]
struct Voice {
    waveform: Waveform,
    freq: f32,
    peak: f32,
    attack: usize,
    length: usize,
    /// Decay target relative to the peak.
    floor: f32,
}

impl Voice {
    fn sample(&self, position: usize) -> f32 {
        if position >= self.length {
            return 0.0;
        }
        let envelope = if position < self.attack {
            position as f32 / self.attack as f32
        } else {
            let progress = (position - self.attack) as f32 / (self.length - self.attack) as f32;
            self.floor.powf(progress)
        };
        let phase = self.freq * position as f32 / SAMPLE_RATE as f32;
        self.waveform.at(phase) * envelope * self.peak
    }
}

fn samples(ms: usize) -> usize {
    SAMPLE_RATE as usize * ms / 1000
}

/// A complete chime: the fundamental plus an optional octave shimmer.
#[derive(Debug, Clone)]
pub struct Chime {
    tone: Voice,
    shimmer: Option<Voice>,
    position: usize,
    total: usize,
}

impl Chime {
    /// Sparkly press chime at the given fundamental frequency.
    pub fn click(freq: f32) -> Chime {
        let tone = Voice {
            waveform: Waveform::Sine,
            freq,
            peak: 0.3,
            attack: samples(20),
            length: samples(150),
            floor: 0.01 / 0.3,
        };
        let shimmer = Voice {
            waveform: Waveform::Triangle,
            freq: freq * 2.0,
            peak: 0.1,
            attack: samples(10),
            length: samples(100),
            floor: 0.001 / 0.1,
        };
        Chime {
            total: tone.length,
            tone,
            shimmer: Some(shimmer),
            position: 0,
        }
    }

    /// Soft single-note hover cue.
    pub fn hover(freq: f32) -> Chime {
        let tone = Voice {
            waveform: Waveform::Sine,
            freq,
            peak: 0.05,
            attack: samples(10),
            length: samples(60),
            floor: 0.001 / 0.05,
        };
        Chime {
            total: tone.length,
            tone,
            shimmer: None,
            position: 0,
        }
    }
}

impl Iterator for Chime {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total {
            return None;
        }
        let mut value = self.tone.sample(self.position);
        if let Some(shimmer) = &self.shimmer {
            value += shimmer.sample(self.position);
        }
        self.position += 1;
        Some(value)
    }
}

impl Source for Chime {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_micros(
            self.total as u64 * 1_000_000 / SAMPLE_RATE as u64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_runs_for_its_authored_length() {
        let chime = Chime::click(523.25);
        let count = chime.count();
        assert_eq!(count, samples(150));
    }

    #[test]
    fn test_hover_is_short_and_unshimmered() {
        let chime = Chime::hover(987.77);
        assert!(chime.shimmer.is_none());
        assert_eq!(chime.count(), samples(60));
    }

    #[test]
    fn test_samples_stay_inside_mix_headroom() {
        for sample in Chime::click(1046.5) {
            assert!(sample.abs() <= 0.4, "sample {sample} clips the mix");
        }
    }

    #[test]
    fn test_envelope_attacks_from_silence_and_decays_out() {
        let all: Vec<f32> = Chime::click(659.25).collect();
        assert_eq!(all[0], 0.0);

        // The decay floor leaves only a whisper by the final samples.
        let tail = &all[all.len() - samples(5)..];
        assert!(tail.iter().all(|s| s.abs() < 0.02));

        // Peak energy sits right after the attack.
        let attack_end = samples(20);
        let peak = all[attack_end..attack_end + samples(10)]
            .iter()
            .fold(0.0_f32, |m, s| m.max(s.abs()));
        assert!(peak > 0.15, "attack never reached level, peak {peak}");
    }

    #[test]
    fn test_source_metadata() {
        let chime = Chime::click(880.0);
        assert_eq!(chime.channels(), 1);
        assert_eq!(chime.sample_rate(), SAMPLE_RATE);
        assert_eq!(chime.total_duration(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_triangle_wave_shape() {
        assert_eq!(Waveform::Triangle.at(0.0), 0.0);
        assert!((Waveform::Triangle.at(0.25) - 1.0).abs() < 1e-6);
        assert!((Waveform::Triangle.at(0.5)).abs() < 1e-6);
        assert!((Waveform::Triangle.at(0.75) + 1.0).abs() < 1e-6);
    }
}
