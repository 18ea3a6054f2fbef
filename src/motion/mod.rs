//! Motion module for dispense-rig.
//!
//! Provides acceleration ramp planning and per-step timing for the reference
//! axis driver.

mod executor;
mod profile;

pub use executor::RampExecutor;
pub use profile::{Direction, MotionPhase, RampProfile};
