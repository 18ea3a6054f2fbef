//! Motion execution - per-step interval generation.

use super::profile::{MotionPhase, RampProfile};

/// Runtime state while a ramp is being stepped.
#[derive(Debug, Clone)]
pub struct RampExecutor {
    /// The planned ramp being executed.
    profile: RampProfile,

    /// Steps already emitted.
    current_step: u32,

    /// Interval to wait after the step about to be emitted, in nanoseconds.
    current_interval_ns: f32,
}

impl RampExecutor {
    /// Create a new executor for a ramp profile.
    pub fn new(profile: RampProfile) -> Self {
        let interval = profile.initial_interval_ns;
        Self {
            profile,
            current_step: 0,
            current_interval_ns: interval,
        }
    }

    /// Check if motion is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current_step >= self.profile.total_steps
    }

    /// Get the number of steps already emitted.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Get steps remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.profile.total_steps.saturating_sub(self.current_step)
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.profile.phase_at(self.current_step)
    }

    /// Get the current step interval in nanoseconds.
    #[inline]
    pub fn current_interval_ns(&self) -> u32 {
        if self.current_interval_ns.is_finite() {
            self.current_interval_ns as u32
        } else {
            u32::MAX
        }
    }

    /// Get the ramp profile.
    #[inline]
    pub fn profile(&self) -> &RampProfile {
        &self.profile
    }

    /// Record one emitted step and compute the next interval.
    ///
    /// Returns `true` if more steps remain.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.current_step += 1;
        if self.is_complete() {
            return false;
        }

        let c = self.current_interval_ns;
        let profile = &self.profile;
        self.current_interval_ns = match self.phase() {
            MotionPhase::Accelerating => {
                let n = self.current_step as f32;
                (c - 2.0 * c / (4.0 * n + 1.0)).max(profile.min_interval_ns)
            }
            MotionPhase::Cruising => profile.min_interval_ns,
            MotionPhase::Decelerating => {
                let m = self.steps_remaining() as f32;
                (c + 2.0 * c / (4.0 * m - 1.0)).min(profile.initial_interval_ns)
            }
            MotionPhase::Complete => f32::INFINITY,
        };

        true
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.profile.total_steps == 0 {
            1.0
        } else {
            self.current_step as f32 / self.profile.total_steps as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_complete() {
        let profile = RampProfile::plan(10, 1000.0, 2000.0);
        let mut executor = RampExecutor::new(profile);

        assert!(!executor.is_complete());
        assert_eq!(executor.current_step(), 0);

        while executor.advance() {}

        assert!(executor.is_complete());
        assert_eq!(executor.current_step(), 10);
        assert_eq!(executor.progress(), 1.0);
    }

    #[test]
    fn test_zero_profile() {
        let executor = RampExecutor::new(RampProfile::zero());

        assert!(executor.is_complete());
        assert_eq!(executor.steps_remaining(), 0);
        assert_eq!(executor.current_interval_ns(), u32::MAX);
    }

    #[test]
    fn test_intervals_shrink_then_grow() {
        let profile = RampProfile::plan(2000, 1000.0, 1000.0);
        let min = profile.min_interval_ns as u32;
        let mut executor = RampExecutor::new(profile);

        let first = executor.current_interval_ns();
        let mut fastest = first;
        let mut last = first;
        while executor.advance() {
            let interval = executor.current_interval_ns();
            fastest = fastest.min(interval);
            last = interval;
        }

        assert!(fastest < first);
        assert!(fastest >= min);
        assert!(last > fastest);
    }

    #[test]
    fn test_cruise_runs_at_max_speed() {
        let profile = RampProfile::plan(4000, 1000.0, 1000.0);
        let mut executor = RampExecutor::new(profile);

        while executor.phase() != MotionPhase::Cruising {
            executor.advance();
        }
        executor.advance();
        assert_eq!(executor.current_interval_ns(), 1_000_000);
    }
}
