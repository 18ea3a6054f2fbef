//! Axis module for dispense-rig.
//!
//! Defines the [`AxisDriver`] capability the interpreter drives, a software
//! STEP/DIR implementation of it, and the three-axis container.

mod accel;
mod axes;
mod builder;
mod driver;

pub use accel::AccelAxis;
pub use axes::Axes;
pub use builder::AccelAxisBuilder;
pub use driver::{run_until_idle, AxisDriver};
