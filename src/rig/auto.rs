//! Auto-mode move-then-dispense sequencing.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::axis::{run_until_idle, Axes, AxisDriver};
use crate::config::{AxisId, DispenseTiming, Millimeters, StepsPerMm};
use crate::error::Result;
use crate::protocol::CoordinateBatch;
use crate::relay::Relay;

use super::reply::Reply;

/// Run one coordinate batch to completion.
///
/// Y goes to the row position first. X then visits each point in order, and
/// the relay pulses once on every arrival. Only the axis being waited on is
/// stepped.
pub fn run_batch<A, R, D>(
    batch: &CoordinateBatch,
    axes: &mut Axes<A>,
    relay: &mut Relay<R>,
    delay: &mut D,
    steps_per_mm: StepsPerMm,
    timing: &DispenseTiming,
) -> Result<Reply>
where
    A: AxisDriver,
    R: OutputPin,
    D: DelayNs,
{
    debug!("batch Y{} with {} points", batch.y, batch.len());

    let y = axes.get_mut(AxisId::Y);
    y.move_absolute(steps_per_mm.to_steps(Millimeters(batch.y)));
    run_until_idle(y)?;

    for (index, &x_mm) in batch.xs.iter().enumerate() {
        let x = axes.get_mut(AxisId::X);
        x.move_absolute(steps_per_mm.to_steps(Millimeters(x_mm)));
        run_until_idle(x)?;

        trace!("point {} at X{}", index, x_mm);
        relay.pulse(delay, timing)?;
    }

    info!("batch Y{} done", batch.y);
    Ok(Reply::BatchComplete {
        y: batch.y,
        points: batch.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Steps;
    use crate::error::AxisError;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    /// Records every absolute target it is given.
    #[derive(Debug, Default)]
    struct TargetLog {
        position: i64,
        target: i64,
        targets: heapless::Vec<i64, 8>,
    }

    impl AxisDriver for TargetLog {
        fn move_absolute(&mut self, target: Steps) {
            self.target = target.value();
            self.targets.push(target.value()).unwrap();
        }

        fn move_relative(&mut self, delta: Steps) {
            self.move_absolute(Steps(self.position + delta.value()));
        }

        fn set_acceleration(&mut self, _acceleration: f32) {}

        fn set_max_speed(&mut self, _speed: f32) {}

        fn set_current_position(&mut self, position: Steps) {
            self.position = position.value();
            self.target = position.value();
        }

        fn current_position(&self) -> Steps {
            Steps(self.position)
        }

        fn advance_step(&mut self) -> core::result::Result<(), AxisError> {
            self.position = self.target;
            Ok(())
        }

        fn is_moving(&self) -> bool {
            self.position != self.target
        }
    }

    fn axes() -> Axes<TargetLog> {
        Axes::new(TargetLog::default(), TargetLog::default(), TargetLog::default())
    }

    fn pulse_transactions(pulses: usize) -> heapless::Vec<PinTransaction, 16> {
        let mut expected = heapless::Vec::new();
        expected.push(PinTransaction::set(State::Low)).unwrap();
        for _ in 0..pulses {
            expected.push(PinTransaction::set(State::High)).unwrap();
            expected.push(PinTransaction::set(State::Low)).unwrap();
        }
        expected
    }

    #[test]
    fn test_batch_visits_points_in_order() {
        let pin = PinMock::new(&pulse_transactions(3));
        let mut handle = pin.clone();
        let mut relay = Relay::new(pin).unwrap();
        let mut axes = axes();

        let batch = CoordinateBatch::parse("Y010X100200300").unwrap();
        let reply = run_batch(
            &batch,
            &mut axes,
            &mut relay,
            &mut NoopDelay::new(),
            StepsPerMm::default(),
            &DispenseTiming::default(),
        )
        .unwrap();

        assert_eq!(reply, Reply::BatchComplete { y: 10, points: 3 });
        assert_eq!(axes.get(AxisId::Y).targets.as_slice(), &[400]);
        assert_eq!(axes.get(AxisId::X).targets.as_slice(), &[4000, 8000, 12000]);
        assert!(axes.get(AxisId::Z).targets.is_empty());
        handle.done();
    }

    #[test]
    fn test_empty_batch_moves_y_only() {
        let pin = PinMock::new(&pulse_transactions(0));
        let mut handle = pin.clone();
        let mut relay = Relay::new(pin).unwrap();
        let mut axes = axes();

        let batch = CoordinateBatch::parse("Y005X").unwrap();
        let reply = run_batch(
            &batch,
            &mut axes,
            &mut relay,
            &mut NoopDelay::new(),
            StepsPerMm::default(),
            &DispenseTiming::default(),
        )
        .unwrap();

        assert_eq!(reply, Reply::BatchComplete { y: 5, points: 0 });
        assert_eq!(axes.get(AxisId::Y).position, 200);
        assert!(axes.get(AxisId::X).targets.is_empty());
        handle.done();
    }
}
