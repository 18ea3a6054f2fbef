//! Acknowledgments written back to the host.

use core::fmt;

use crate::config::AxisId;
use crate::mode::{AxisTarget, Mode};

/// The outcome of one input line, rendered to the host via [`Display`].
///
/// Multi-line replies ([`Reply::Report`]) use `\n` between lines; the
/// controller appends the final newline.
///
/// [`Display`]: core::fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Mode switch accepted; echoes the literal.
    ModeSwitched(Mode),
    /// `O`: positions of X, Y and Z in millimeters, plus the selection.
    Report {
        /// Truncated millimeter positions, X first.
        positions_mm: [i64; 3],
        /// Selection at report time.
        selection: Option<AxisTarget>,
    },
    /// `V`
    MoveTo {
        /// Axes the move was issued to.
        target: AxisTarget,
        /// Target in millimeters.
        mm: i32,
    },
    /// `M`
    MoveBy {
        /// Axes the move was issued to.
        target: AxisTarget,
        /// Offset in millimeters.
        mm: i32,
    },
    /// `R`
    RunTo {
        /// Axes that were run.
        target: AxisTarget,
        /// Target in millimeters.
        mm: i32,
    },
    /// `S`
    SetPosition {
        /// Axes whose position was redefined.
        target: AxisTarget,
        /// New position in millimeters.
        mm: i32,
    },
    /// `A`
    SetAcceleration {
        /// Axes updated.
        target: AxisTarget,
        /// Raw acceleration value.
        value: i32,
    },
    /// `X`
    SetMaxSpeed {
        /// Axes updated.
        target: AxisTarget,
        /// Raw speed value.
        value: i32,
    },
    /// `D` accepted.
    Selected(AxisTarget),
    /// `D` with a selector outside 0-3.
    InvalidMotor(i32),
    /// A motion or setting command arrived before any `D`.
    NoMotorSelected,
    /// Unrecognised command letter.
    UnknownCommand,
    /// Auto-mode batch finished.
    BatchComplete {
        /// Row position in millimeters.
        y: i32,
        /// Dispense points visited.
        points: usize,
    },
    /// Nothing to acknowledge.
    Ignored,
}

impl Reply {
    /// Whether this reply produces output.
    #[inline]
    pub fn is_silent(&self) -> bool {
        matches!(self, Reply::Ignored)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::ModeSwitched(mode) => write!(f, "{}", mode),
            Reply::Report {
                positions_mm,
                selection,
            } => {
                for (axis, mm) in AxisId::ALL.iter().zip(positions_mm) {
                    writeln!(f, "stepper{} Position: {}", axis.letter(), mm)?;
                }
                f.write_str("Current Running Motor: ")?;
                match selection {
                    Some(AxisTarget::Single(axis)) => write!(f, "Motor# {}", axis.motor_number()),
                    Some(AxisTarget::All) => f.write_str("All Motors"),
                    None => f.write_str("None"),
                }
            }
            Reply::MoveTo { target, mm } => write!(f, "{} 'moveTo' {}", target, mm),
            Reply::MoveBy { target, mm } => write!(f, "{} 'move' {}", target, mm),
            Reply::RunTo { target, mm } => write!(f, "{} 'runToNewPosition' {}", target, mm),
            Reply::SetPosition { target, mm } => {
                write!(f, "Set {} Current Position to {}", target, mm)
            }
            Reply::SetAcceleration { target, value } => {
                write!(f, "{} 'setAcceleration' {}", target, value)
            }
            Reply::SetMaxSpeed { target, value } => write!(f, "{} 'setMaxSpeed' {}", target, value),
            Reply::Selected(AxisTarget::Single(axis)) => {
                write!(f, "Running Motor {}", axis.motor_number())
            }
            Reply::Selected(AxisTarget::All) => f.write_str("Running All Motors"),
            Reply::InvalidMotor(_) => f.write_str("Motor Number Wrong."),
            Reply::NoMotorSelected => f.write_str("No Motor Selected"),
            Reply::UnknownCommand => f.write_str("Unknown Command"),
            Reply::BatchComplete { y, points } => {
                write!(f, "Batch Y{} done, {} points", y, points)
            }
            Reply::Ignored => Ok(()),
        }
    }
}
