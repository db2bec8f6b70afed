//! Day/night cycle driven by a phase accumulator.

/// Day sky tint (RGB).
const DAY_TINT: (u8, u8, u8) = (28, 56, 96);
/// Night sky tint (RGB).
const NIGHT_TINT: (u8, u8, u8) = (8, 10, 28);

/// What the renderer should settle on for the current phase. The core
/// never tweens; it only states the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyTargets {
    pub sun_alpha: f64,
    pub moon_alpha: f64,
    pub tint: (u8, u8, u8),
}

/// Toggles between day and night every fixed period of running time.
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    is_day: bool,
    elapsed_in_phase: f64,
    phase_length: f64,
}

impl DayNightCycle {
    /// Start at daybreak. `phase_length` is seconds per phase.
    pub fn new(phase_length: f64) -> Self {
        Self {
            is_day: true,
            elapsed_in_phase: 0.0,
            phase_length,
        }
    }

    /// Accumulate `dt`. Each time a full phase elapses the flag toggles
    /// and the remainder carries over, so no time is lost on a large
    /// delta; a delta spanning several phases toggles several times.
    pub fn update(&mut self, dt: f64) {
        if self.phase_length <= 0.0 {
            return;
        }
        self.elapsed_in_phase += dt;
        while self.elapsed_in_phase >= self.phase_length {
            self.elapsed_in_phase -= self.phase_length;
            self.is_day = !self.is_day;
        }
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    /// Seconds into the current phase, always in [0, phase length).
    pub fn elapsed_in_phase(&self) -> f64 {
        self.elapsed_in_phase
    }

    /// Fraction of the current phase elapsed, in [0, 1).
    pub fn phase_progress(&self) -> f64 {
        if self.phase_length <= 0.0 {
            return 0.0;
        }
        self.elapsed_in_phase / self.phase_length
    }

    pub fn targets(&self) -> SkyTargets {
        if self.is_day {
            SkyTargets {
                sun_alpha: 1.0,
                moon_alpha: 0.0,
                tint: DAY_TINT,
            }
        } else {
            SkyTargets {
                sun_alpha: 0.0,
                moon_alpha: 1.0,
                tint: NIGHT_TINT,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_daybreak() {
        let sky = DayNightCycle::new(60.0);
        assert!(sky.is_day());
        assert!((sky.elapsed_in_phase() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_toggle_before_phase_length() {
        let mut sky = DayNightCycle::new(60.0);
        for _ in 0..3839 {
            sky.update(0.015625); // 3839/64 s = 59.984375 s
        }
        assert!(sky.is_day());
    }

    #[test]
    fn test_toggles_at_exactly_phase_length() {
        let mut sky = DayNightCycle::new(60.0);
        for _ in 0..3840 {
            sky.update(0.015625); // exactly 60 s
        }
        assert!(!sky.is_day());
        assert!((sky.elapsed_in_phase() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut sky = DayNightCycle::new(60.0);
        sky.update(90.0);
        assert!(!sky.is_day());
        assert!((sky.elapsed_in_phase() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_delta_toggles_multiple_times() {
        let mut sky = DayNightCycle::new(60.0);
        sky.update(185.0); // three full phases + 5 s
        assert!(!sky.is_day(), "Odd number of toggles should land on night");
        assert!((sky.elapsed_in_phase() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_stays_below_phase_length() {
        let mut sky = DayNightCycle::new(10.0);
        for _ in 0..5000 {
            sky.update(0.21);
            assert!(sky.elapsed_in_phase() >= 0.0);
            assert!(sky.elapsed_in_phase() < 10.0);
        }
    }

    #[test]
    fn test_targets_follow_flag() {
        let mut sky = DayNightCycle::new(60.0);
        let day = sky.targets();
        assert!((day.sun_alpha - 1.0).abs() < f64::EPSILON);
        assert!((day.moon_alpha - 0.0).abs() < f64::EPSILON);

        sky.update(60.0);
        let night = sky.targets();
        assert!((night.sun_alpha - 0.0).abs() < f64::EPSILON);
        assert!((night.moon_alpha - 1.0).abs() < f64::EPSILON);
        assert_ne!(day.tint, night.tint);
    }

    #[test]
    fn test_phase_progress_fraction() {
        let mut sky = DayNightCycle::new(60.0);
        sky.update(15.0);
        assert!((sky.phase_progress() - 0.25).abs() < 1e-9);
    }
}
