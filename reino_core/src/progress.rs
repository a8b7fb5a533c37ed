//! Loading countdown model.
//!
//! One authoritative implementation: accumulated monotonic time drives
//! a 0..=100 progress value with staged messages, a hard cutoff at the
//! configured duration, and a skip affordance that completes the
//! countdown immediately. The caller feeds in measured deltas between
//! ticks; nothing here counts frames.

use std::time::Duration;

/// Default countdown length for the entry experience.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Progress percentages at which the message advances.
pub const DEFAULT_THRESHOLDS: [f32; 3] = [25.0, 50.0, 75.0];

/// Countdown stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Stars,
    Castle,
    Wand,
    AlmostThere,
}

impl LoadingPhase {
    pub fn message(self) -> &'static str {
        match self {
            LoadingPhase::Stars => "Acendendo as estrelas...",
            LoadingPhase::Castle => "Construindo o castelo...",
            LoadingPhase::Wand => "Preparando a varinha mágica...",
            LoadingPhase::AlmostThere => "Quase lá...",
        }
    }
}

/// Timed countdown producing a 0..=100 progress value.
#[derive(Debug, Clone)]
pub struct LoadingProgress {
    duration: Duration,
    thresholds: [f32; 3],
    elapsed: Duration,
    skipped: bool,
}

impl LoadingProgress {
    pub fn new(duration: Duration) -> LoadingProgress {
        LoadingProgress {
            duration,
            thresholds: DEFAULT_THRESHOLDS,
            elapsed: Duration::ZERO,
            skipped: false,
        }
    }

    pub fn with_thresholds(duration: Duration, thresholds: [f32; 3]) -> LoadingProgress {
        LoadingProgress {
            thresholds,
            ..LoadingProgress::new(duration)
        }
    }

    /// Advances by a measured delta. Once accumulated time reaches the
    /// duration the countdown is complete no matter how irregular the
    /// tick cadence was; a single late, large delta still lands it.
    pub fn advance(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Completes the countdown immediately.
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Progress in percent, saturating at 100.
    pub fn percent(&self) -> f32 {
        if self.skipped || self.duration.is_zero() {
            return 100.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32() * 100.0).min(100.0)
    }

    pub fn phase(&self) -> LoadingPhase {
        let p = self.percent();
        if p < self.thresholds[0] {
            LoadingPhase::Stars
        } else if p < self.thresholds[1] {
            LoadingPhase::Castle
        } else if p < self.thresholds[2] {
            LoadingPhase::Wand
        } else {
            LoadingPhase::AlmostThere
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped || self.elapsed >= self.duration
    }
}

impl Default for LoadingProgress {
    fn default() -> LoadingProgress {
        LoadingProgress::new(DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accumulates_measured_deltas() {
        let mut loading = LoadingProgress::new(Duration::from_secs(4));
        assert_eq!(loading.percent(), 0.0);

        loading.advance(Duration::from_millis(1000));
        assert!((loading.percent() - 25.0).abs() < 0.1);

        loading.advance(Duration::from_millis(1000));
        assert!((loading.percent() - 50.0).abs() < 0.1);
        assert!(!loading.is_complete());
    }

    #[test]
    fn test_phases_follow_thresholds() {
        let mut loading = LoadingProgress::new(Duration::from_secs(4));
        assert_eq!(loading.phase(), LoadingPhase::Stars);

        loading.advance(Duration::from_millis(1200));
        assert_eq!(loading.phase(), LoadingPhase::Castle);

        loading.advance(Duration::from_millis(1200));
        assert_eq!(loading.phase(), LoadingPhase::Wand);

        loading.advance(Duration::from_millis(900));
        assert_eq!(loading.phase(), LoadingPhase::AlmostThere);
    }

    #[test]
    fn test_hard_cutoff_saturates() {
        let mut loading = LoadingProgress::new(Duration::from_secs(4));
        loading.advance(Duration::from_secs(60));
        assert_eq!(loading.percent(), 100.0);
        assert!(loading.is_complete());

        // Further deltas are inert.
        loading.advance(Duration::from_secs(60));
        assert_eq!(loading.percent(), 100.0);
    }

    #[test]
    fn test_one_late_delta_still_completes() {
        // A stalled tick stream delivers everything in one burst.
        let mut loading = LoadingProgress::new(Duration::from_secs(4));
        loading.advance(Duration::from_millis(400));
        loading.advance(Duration::from_millis(3600));
        assert!(loading.is_complete());
    }

    #[test]
    fn test_skip_completes_instantly() {
        let mut loading = LoadingProgress::default();
        loading.advance(Duration::from_millis(300));
        loading.skip();
        assert!(loading.is_complete());
        assert_eq!(loading.percent(), 100.0);
        assert_eq!(loading.phase(), LoadingPhase::AlmostThere);
    }

    #[test]
    fn test_zero_duration_is_complete_immediately() {
        let loading = LoadingProgress::new(Duration::ZERO);
        assert!(loading.is_complete());
        assert_eq!(loading.percent(), 100.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut loading =
            LoadingProgress::with_thresholds(Duration::from_secs(10), [10.0, 20.0, 30.0]);
        loading.advance(Duration::from_millis(1500));
        assert_eq!(loading.phase(), LoadingPhase::Castle);
        loading.advance(Duration::from_millis(2000));
        assert_eq!(loading.phase(), LoadingPhase::AlmostThere);
    }
}
