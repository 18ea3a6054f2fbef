//! Motion ramp planning.
//!
//! Plans symmetric trapezoidal ramps for a move that starts and ends at
//! rest. Step timing follows David Austin's "Generate stepper-motor speed
//! profiles in real time" (2005), the same scheme AccelStepper uses.

use libm::sqrtf;

/// Direction of axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward increasing step counts.
    Forward,
    /// Toward decreasing step counts.
    Reverse,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Current phase of motion execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Accelerating from rest toward max speed.
    Accelerating,
    /// Moving at max speed.
    Cruising,
    /// Decelerating to rest at the target.
    Decelerating,
    /// Motion complete.
    Complete,
}

/// Austin's correction for the first step interval.
const FIRST_STEP_FACTOR: f32 = 0.676;

/// A planned ramp for one move.
#[derive(Debug, Clone, PartialEq)]
pub struct RampProfile {
    /// Total steps to move (absolute value).
    pub total_steps: u32,

    /// Direction of motion.
    pub direction: Direction,

    /// Steps spent accelerating. Deceleration uses the same count.
    pub ramp_steps: u32,

    /// First step interval in nanoseconds (starting from rest).
    pub initial_interval_ns: f32,

    /// Step interval at max speed in nanoseconds.
    pub min_interval_ns: f32,
}

impl RampProfile {
    /// Plan a ramp for a signed move.
    ///
    /// # Arguments
    ///
    /// * `distance` - Signed step count (positive = forward)
    /// * `max_speed` - Maximum speed in steps/sec
    /// * `acceleration` - Acceleration and deceleration rate in steps/sec²
    ///
    /// Distances beyond `u32::MAX` steps are cut to `u32::MAX`; callers that
    /// track a target must clamp it to match.
    pub fn plan(distance: i64, max_speed: f32, acceleration: f32) -> Self {
        let direction = Direction::from_steps(distance);
        let steps = u32::try_from(distance.unsigned_abs()).unwrap_or(u32::MAX);

        if steps == 0 || !(max_speed > 0.0) || !(acceleration > 0.0) {
            return Self::zero();
        }

        // Steps needed to reach max speed from rest: n = v² / 2a
        let to_max_speed = (max_speed * max_speed) / (2.0 * acceleration);
        let half = steps / 2;
        let ramp_steps = if to_max_speed >= half as f32 {
            // Triangle: never reaches max speed
            half
        } else {
            to_max_speed as u32
        };

        let min_interval_ns = 1_000_000_000.0 / max_speed;
        let initial_interval_ns =
            (FIRST_STEP_FACTOR * sqrtf(2.0 / acceleration) * 1_000_000_000.0).max(min_interval_ns);

        Self {
            total_steps: steps,
            direction,
            ramp_steps,
            initial_interval_ns,
            min_interval_ns,
        }
    }

    /// Create a zero-length profile (no motion).
    pub fn zero() -> Self {
        Self {
            total_steps: 0,
            direction: Direction::Forward,
            ramp_steps: 0,
            initial_interval_ns: f32::INFINITY,
            min_interval_ns: f32::INFINITY,
        }
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Steps spent at max speed.
    #[inline]
    pub fn cruise_steps(&self) -> u32 {
        self.total_steps.saturating_sub(2 * self.ramp_steps)
    }

    /// Get the phase for a zero-based step index.
    pub fn phase_at(&self, step: u32) -> MotionPhase {
        if step >= self.total_steps {
            MotionPhase::Complete
        } else if step < self.ramp_steps {
            MotionPhase::Accelerating
        } else if step < self.total_steps - self.ramp_steps {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }
}
