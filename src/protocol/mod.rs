//! Serial line protocol.
//!
//! Every input line is one of:
//!
//! - a mode switch, `HandMode` or `AutoMode`
//! - in Hand mode, a command letter plus integer argument, e.g. `V50`
//! - in Auto mode, a coordinate batch, e.g. `Y010X100200300`
//!
//! Anything else is ignored. Parsing never fails; malformed numbers read
//! as `0`.

mod batch;
mod command;
mod line;
mod number;

pub use batch::{CoordinateBatch, FIELD_WIDTH, MAX_X_POINTS};
pub use command::{CommandKind, HandCommand};
pub use line::{LineReader, DEFAULT_LINE_CAPACITY};
pub use number::{forgiving_int, forgiving_int_bytes};

use crate::mode::Mode;

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Exact `HandMode` / `AutoMode` line, accepted in either mode.
    ModeSwitch(Mode),
    /// Hand-mode command.
    Hand(HandCommand),
    /// Auto-mode coordinate batch.
    Batch(CoordinateBatch),
    /// Auto-mode line without the batch shape.
    Ignored,
}

impl Line {
    /// Classify `text` given the current mode.
    pub fn classify(text: &str, mode: Mode) -> Self {
        if let Some(target) = Mode::from_literal(text) {
            return Line::ModeSwitch(target);
        }

        match mode {
            Mode::Hand => Line::Hand(HandCommand::parse(text)),
            Mode::Auto => CoordinateBatch::parse(text).map_or(Line::Ignored, Line::Batch),
        }
    }
}
