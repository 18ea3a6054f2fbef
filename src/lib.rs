//! # dispense-rig
//!
//! Serial command interpreter and move-then-dispense sequencer for stepper
//! driven XYZ rigs, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Two modes**: `HandMode` for single-letter jog and tuning commands,
//!   `AutoMode` for `Y<yyy>X<xxx>...` coordinate batches
//! - **Relay sequencing**: one timed dispense pulse on every X arrival
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR and the relay, `DelayNs`
//!   for timing
//! - **no_std compatible**: fixed-capacity buffers, no allocation
//! - **Configuration-driven**: scale, speeds and relay timing from TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dispense_rig::{AccelAxisBuilder, Axes, AxisId, Relay, RigController};
//!
//! let config = dispense_rig::load_config("rig.toml")?;
//!
//! let x = AccelAxisBuilder::new(AxisId::X)
//!     .from_config(&config)
//!     .step_pin(x_step)
//!     .dir_pin(x_dir)
//!     .delay(x_delay)
//!     .build()?;
//! // ... y and z likewise
//!
//! let mut rig: RigController<_, _, _> = RigController::from_config(
//!     &config,
//!     Axes::new(x, y, z),
//!     Relay::new(relay_pin)?,
//!     delay,
//! );
//! rig.start(&mut serial)?;
//! rig.handle_line("Y010X100200300", &mut serial)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod mode;
pub mod motion;
pub mod protocol;
pub mod relay;
pub mod rig;

// Re-exports for ergonomic API
pub use axis::{AccelAxis, AccelAxisBuilder, Axes, AxisDriver};
pub use config::{validate_config, AxisConfig, AxisId, DispenseTiming, RigConfig};
pub use error::{Error, Result};
pub use mode::{AxisTarget, Mode};
pub use protocol::{CoordinateBatch, HandCommand, Line, LineReader};
pub use relay::Relay;
pub use rig::{Reply, RigController, RigSettings};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millimeters, Steps, StepsPerMm};
