//! Unit types for physical quantities.
//!
//! Keeps operator-facing millimeters and driver-facing micro-steps apart so a
//! raw millimeter value can never reach an axis driver unscaled.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Steps per millimeter of the stock rig (40 pulses per mm).
pub const DEFAULT_STEPS_PER_MM: i32 = 40;

/// Linear distance or position in whole millimeters.
///
/// This is the unit of every numeric argument on the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub i32);

/// Axis position in motor micro-steps (absolute from the zero reference).
///
/// Uses i64 so that `i32::MAX` millimeters scaled by any sane
/// steps-per-mm value cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// Zero steps.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

/// Scale factor between millimeters and micro-steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StepsPerMm(pub i32);

impl StepsPerMm {
    /// Create a new scale factor.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Convert a millimeter quantity to steps (multiplicative).
    #[inline]
    pub fn to_steps(self, mm: Millimeters) -> Steps {
        Steps(i64::from(mm.0) * i64::from(self.0))
    }

    /// Convert a step position back to whole millimeters.
    ///
    /// Truncates toward zero, so `-39` steps at 40 steps/mm reports `0`.
    #[inline]
    pub fn to_mm(self, steps: Steps) -> i64 {
        if self.0 == 0 {
            0
        } else {
            steps.0 / i64::from(self.0)
        }
    }
}

impl Default for StepsPerMm {
    fn default() -> Self {
        Self(DEFAULT_STEPS_PER_MM)
    }
}
