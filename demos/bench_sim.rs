//! Run the rig controller against simulated hardware.
//!
//! Reads protocol lines from stdin and prints acknowledgments to stdout.
//! STEP/DIR and relay pins are simulated; step timing uses real sleeps.
//!
//! ```text
//! cargo run --example bench_sim -- [rig.toml]
//! ```

use std::convert::Infallible;
use std::fmt;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use dispense_rig::{AccelAxisBuilder, Axes, AxisId, Relay, RigConfig, RigController};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

/// Pin that goes nowhere.
struct SimPin;

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Relay pin that prints its edges.
struct LoggedRelay;

impl ErrorType for LoggedRelay {
    type Error = Infallible;
}

impl OutputPin for LoggedRelay {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        eprintln!("[relay] low");
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        eprintln!("[relay] high");
        Ok(())
    }
}

/// Delay backed by `thread::sleep`.
struct SleepDelay;

impl DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// `fmt::Write` over stdout.
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

fn build_axis(
    axis: AxisId,
    config: &RigConfig,
) -> dispense_rig::Result<dispense_rig::AccelAxis<SimPin, SimPin, SleepDelay>> {
    AccelAxisBuilder::new(axis)
        .from_config(config)
        .step_pin(SimPin)
        .dir_pin(SimPin)
        .delay(SleepDelay)
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => dispense_rig::load_config(path)?,
        None => RigConfig::default(),
    };

    let axes = Axes::new(
        build_axis(AxisId::X, &config)?,
        build_axis(AxisId::Y, &config)?,
        build_axis(AxisId::Z, &config)?,
    );
    let relay = Relay::new(LoggedRelay)?;

    let mut rig: RigController<_, _, _> =
        RigController::from_config(&config, axes, relay, SleepDelay);
    let mut out = Stdout;
    rig.start(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        // errors are already reported on stdout
        let _ = rig.handle_line(line.trim_end_matches('\r'), &mut out);
    }

    Ok(())
}
