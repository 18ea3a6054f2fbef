//! Recording test doubles shared by the integration tests.
//!
//! Every axis call, relay edge and millisecond delay is appended to one
//! shared timeline so tests can assert on cross-device ordering.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use dispense_rig::error::AxisError;
use dispense_rig::{Axes, AxisDriver, AxisId, Relay, Reply, RigConfig, RigController, Steps};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

/// Something that happened on the bench.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    MoveTo(AxisId, i64),
    MoveBy(AxisId, i64),
    RunTo(AxisId, i64),
    SetPosition(AxisId, i64),
    SetAcceleration(AxisId, f32),
    SetMaxSpeed(AxisId, f32),
    /// Axis reached its target while being stepped.
    Arrived(AxisId, i64),
    Relay(PinState),
    DelayMs(u32),
}

pub type Timeline = Rc<RefCell<Vec<Event>>>;

/// Axis that reaches its target on the first `advance_step`.
pub struct MockAxis {
    id: AxisId,
    position: i64,
    target: i64,
    pub max_speed: f32,
    pub acceleration: f32,
    timeline: Timeline,
}

impl MockAxis {
    pub fn new(id: AxisId, timeline: Timeline) -> Self {
        Self {
            id,
            position: 0,
            target: 0,
            max_speed: 0.0,
            acceleration: 0.0,
            timeline,
        }
    }

    fn log(&self, event: Event) {
        self.timeline.borrow_mut().push(event);
    }
}

impl AxisDriver for MockAxis {
    fn move_absolute(&mut self, target: Steps) {
        self.log(Event::MoveTo(self.id, target.value()));
        self.target = target.value();
    }

    fn move_relative(&mut self, delta: Steps) {
        self.log(Event::MoveBy(self.id, delta.value()));
        self.target = self.position + delta.value();
    }

    fn set_acceleration(&mut self, acceleration: f32) {
        self.log(Event::SetAcceleration(self.id, acceleration));
        self.acceleration = acceleration;
    }

    fn set_max_speed(&mut self, speed: f32) {
        self.log(Event::SetMaxSpeed(self.id, speed));
        self.max_speed = speed;
    }

    fn set_current_position(&mut self, position: Steps) {
        self.log(Event::SetPosition(self.id, position.value()));
        self.position = position.value();
        self.target = position.value();
    }

    fn current_position(&self) -> Steps {
        Steps(self.position)
    }

    fn advance_step(&mut self) -> Result<(), AxisError> {
        if self.position != self.target {
            self.position = self.target;
            self.log(Event::Arrived(self.id, self.position));
        }
        Ok(())
    }

    fn is_moving(&self) -> bool {
        self.position != self.target
    }

    fn move_absolute_blocking(&mut self, target: Steps) -> Result<(), AxisError> {
        self.log(Event::RunTo(self.id, target.value()));
        self.target = target.value();
        dispense_rig::axis::run_until_idle(self)
    }
}

/// Relay pin that logs every level it is driven to.
pub struct RecordingPin {
    timeline: Timeline,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.timeline.borrow_mut().push(Event::Relay(PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.timeline.borrow_mut().push(Event::Relay(PinState::High));
        Ok(())
    }
}

/// Delay that returns immediately and logs millisecond waits.
pub struct RecordingDelay {
    timeline: Timeline,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type BenchRig = RigController<MockAxis, RecordingPin, RecordingDelay>;

/// A started controller wired to recording doubles.
pub struct Bench {
    pub rig: BenchRig,
    pub timeline: Timeline,
    pub out: String,
}

impl Bench {
    pub fn new() -> Self {
        Self::with_config(&RigConfig::default())
    }

    pub fn with_config(config: &RigConfig) -> Self {
        let timeline: Timeline = Rc::default();
        let axes = Axes::new(
            MockAxis::new(AxisId::X, timeline.clone()),
            MockAxis::new(AxisId::Y, timeline.clone()),
            MockAxis::new(AxisId::Z, timeline.clone()),
        );
        let relay = Relay::new(RecordingPin {
            timeline: timeline.clone(),
        })
        .unwrap();
        let delay = RecordingDelay {
            timeline: timeline.clone(),
        };

        let mut rig = RigController::from_config(config, axes, relay, delay);
        let mut out = String::new();
        rig.start(&mut out).unwrap();

        let bench = Self { rig, timeline, out };
        bench.clear_events();
        bench
    }

    /// Send one line and return its reply.
    pub fn send(&mut self, line: &str) -> Reply {
        self.rig.handle_line(line, &mut self.out).unwrap()
    }

    /// Send several lines, discarding replies.
    pub fn send_all(&mut self, lines: &[&str]) {
        for line in lines {
            self.send(line);
        }
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.timeline.borrow().clone()
    }

    /// Forget recorded events. Output is kept.
    pub fn clear_events(&self) {
        self.timeline.borrow_mut().clear();
    }

    /// Output lines written so far.
    pub fn output_lines(&self) -> Vec<&str> {
        self.out.lines().collect()
    }

    /// Position of one axis in steps.
    pub fn position(&self, axis: AxisId) -> i64 {
        self.rig.axes().get(axis).current_position().value()
    }
}
