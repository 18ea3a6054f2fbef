//! The line-at-a-time rig controller.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::axis::{Axes, AxisDriver};
use crate::config::{DispenseTiming, RigConfig, StepsPerMm};
use crate::error::{Error, Result};
use crate::mode::{AxisTarget, Mode, ModeState};
use crate::protocol::{Line, LineReader, DEFAULT_LINE_CAPACITY};
use crate::relay::Relay;

use super::{auto, hand, reply::Reply};

/// Settings the controller needs at run time.
#[derive(Debug, Clone, PartialEq)]
pub struct RigSettings {
    /// Millimeter to step scale.
    pub steps_per_mm: StepsPerMm,
    /// Relay timing for each dispense point.
    pub dispense: DispenseTiming,
    /// Line written by [`RigController::start`].
    pub ready_marker: String<8>,
}

impl RigSettings {
    /// Extract the run-time settings from a configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            steps_per_mm: config.steps_per_mm,
            dispense: config.dispense,
            ready_marker: config.ready_marker.clone(),
        }
    }
}

impl Default for RigSettings {
    fn default() -> Self {
        Self::from_config(&RigConfig::default())
    }
}

/// Serial command interpreter for a three-axis rig with a dispensing relay.
///
/// Owns the axes, the relay, the delay provider and the mode state. Lines are
/// processed one at a time and fully, including any wait for motion, before
/// the call returns.
///
/// # Example
///
/// ```rust,ignore
/// let mut rig: RigController<_, _, _> = RigController::from_config(&config, axes, relay, delay);
/// rig.start(&mut serial)?;
/// loop {
///     let byte = read_byte(&mut serial);
///     let _ = rig.feed(byte, &mut serial);
/// }
/// ```
pub struct RigController<A, R, D, const N: usize = DEFAULT_LINE_CAPACITY>
where
    A: AxisDriver,
    R: OutputPin,
    D: DelayNs,
{
    axes: Axes<A>,
    relay: Relay<R>,
    delay: D,
    state: ModeState,
    settings: RigSettings,
    reader: LineReader<N>,
}

impl<A, R, D, const N: usize> RigController<A, R, D, N>
where
    A: AxisDriver,
    R: OutputPin,
    D: DelayNs,
{
    /// Create a controller. Axis speeds are left as the drivers have them.
    pub fn new(axes: Axes<A>, relay: Relay<R>, delay: D, settings: RigSettings) -> Self {
        Self {
            axes,
            relay,
            delay,
            state: ModeState::new(),
            settings,
            reader: LineReader::new(),
        }
    }

    /// Create a controller and apply the configured speed and acceleration
    /// to every axis.
    pub fn from_config(config: &RigConfig, mut axes: Axes<A>, relay: Relay<R>, delay: D) -> Self {
        axes.apply_config(config);
        Self::new(axes, relay, delay, RigSettings::from_config(config))
    }

    /// Take the power-on position as the zero reference and announce
    /// readiness.
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.axes.zero_all();
        writeln!(out, "{}", self.settings.ready_marker)?;
        info!("rig ready");
        Ok(())
    }

    /// Process one line (without its terminator) and acknowledge it.
    ///
    /// # Errors
    ///
    /// Hardware failures are written to `out` as `ERROR: ...` and returned.
    /// The controller remains usable afterwards.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Reply> {
        match self.dispatch(line) {
            Ok(reply) => {
                if !reply.is_silent() {
                    writeln!(out, "{}", reply)?;
                }
                Ok(reply)
            }
            Err(e) => {
                writeln!(out, "ERROR: {}", e)?;
                Err(e)
            }
        }
    }

    /// Feed one received byte.
    ///
    /// Returns the reply once `byte` completes a line, `None` otherwise.
    /// Framing errors are reported like [`handle_line`](Self::handle_line)
    /// errors.
    pub fn feed<W: Write>(&mut self, byte: u8, out: &mut W) -> Result<Option<Reply>> {
        match self.reader.feed(byte) {
            Ok(Some(line)) => self.handle_line(&line, out).map(Some),
            Ok(None) => Ok(None),
            Err(e) => {
                let e = Error::from(e);
                writeln!(out, "ERROR: {}", e)?;
                Err(e)
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Reply> {
        match Line::classify(line, self.state.mode()) {
            Line::ModeSwitch(mode) => {
                self.state.switch(mode);
                Ok(Reply::ModeSwitched(mode))
            }
            Line::Hand(command) => Ok(hand::execute(
                command,
                &mut self.state,
                &mut self.axes,
                self.settings.steps_per_mm,
            )?),
            Line::Batch(batch) => auto::run_batch(
                &batch,
                &mut self.axes,
                &mut self.relay,
                &mut self.delay,
                self.settings.steps_per_mm,
                &self.settings.dispense,
            ),
            Line::Ignored => {
                debug!("ignored line in auto mode");
                Ok(Reply::Ignored)
            }
        }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Current Hand-mode selection.
    #[inline]
    pub fn selection(&self) -> Option<AxisTarget> {
        self.state.selection()
    }

    /// The axes.
    #[inline]
    pub fn axes(&self) -> &Axes<A> {
        &self.axes
    }

    /// The axes, mutably.
    #[inline]
    pub fn axes_mut(&mut self) -> &mut Axes<A> {
        &mut self.axes
    }

    /// The dispensing relay.
    #[inline]
    pub fn relay(&self) -> &Relay<R> {
        &self.relay
    }

    /// Tear down and give back the hardware.
    pub fn release(self) -> (Axes<A>, Relay<R>, D) {
        (self.axes, self.relay, self.delay)
    }
}
