//! Hand-mode command execution.

use crate::axis::{Axes, AxisDriver};
use crate::config::{Millimeters, StepsPerMm};
use crate::error::AxisError;
use crate::mode::{AxisTarget, ModeState};
use crate::protocol::{CommandKind, HandCommand};

use super::reply::Reply;

/// Run one Hand-mode command, then settle every axis.
///
/// Movement started by `V` or `M` is driven to completion before this
/// returns, so the next line always sees idle axes.
pub fn execute<A: AxisDriver>(
    command: HandCommand,
    state: &mut ModeState,
    axes: &mut Axes<A>,
    steps_per_mm: StepsPerMm,
) -> Result<Reply, AxisError> {
    let reply = dispatch(command, state, axes, steps_per_mm)?;
    axes.settle()?;
    Ok(reply)
}

fn dispatch<A: AxisDriver>(
    command: HandCommand,
    state: &mut ModeState,
    axes: &mut Axes<A>,
    steps_per_mm: StepsPerMm,
) -> Result<Reply, AxisError> {
    let HandCommand { kind, arg } = command;
    let steps = steps_per_mm.to_steps(Millimeters(arg));

    match kind {
        CommandKind::Report => Ok(report(state, axes, steps_per_mm)),
        CommandKind::Select => Ok(match state.select(arg) {
            Ok(target) => Reply::Selected(target),
            Err(rejected) => Reply::InvalidMotor(rejected),
        }),
        CommandKind::Unknown => Ok(Reply::UnknownCommand),
        kind => {
            let Some(target) = state.selection() else {
                debug!("no motor selected, command dropped");
                return Ok(Reply::NoMotorSelected);
            };

            for &axis in target.axes() {
                let driver = axes.get_mut(axis);
                match kind {
                    CommandKind::MoveTo => driver.move_absolute(steps),
                    CommandKind::MoveBy => driver.move_relative(steps),
                    CommandKind::RunTo => driver.move_absolute_blocking(steps)?,
                    CommandKind::SetPosition => driver.set_current_position(steps),
                    CommandKind::SetAcceleration => driver.set_acceleration(arg as f32),
                    CommandKind::SetMaxSpeed => driver.set_max_speed(arg as f32),
                    CommandKind::Report | CommandKind::Select | CommandKind::Unknown => {}
                }
            }

            Ok(acknowledge(kind, target, arg))
        }
    }
}

fn report<A: AxisDriver>(state: &ModeState, axes: &Axes<A>, steps_per_mm: StepsPerMm) -> Reply {
    let positions = axes.positions();
    Reply::Report {
        positions_mm: positions.map(|steps| steps_per_mm.to_mm(steps)),
        selection: state.selection(),
    }
}

fn acknowledge(kind: CommandKind, target: AxisTarget, arg: i32) -> Reply {
    match kind {
        CommandKind::MoveTo => Reply::MoveTo { target, mm: arg },
        CommandKind::MoveBy => Reply::MoveBy { target, mm: arg },
        CommandKind::RunTo => Reply::RunTo { target, mm: arg },
        CommandKind::SetPosition => Reply::SetPosition { target, mm: arg },
        CommandKind::SetAcceleration => Reply::SetAcceleration { target, value: arg },
        CommandKind::SetMaxSpeed => Reply::SetMaxSpeed { target, value: arg },
        CommandKind::Report | CommandKind::Select | CommandKind::Unknown => Reply::UnknownCommand,
    }
}
