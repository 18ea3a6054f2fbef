//! Mode state machine and Hand-mode axis selection.

use core::fmt;

use crate::config::AxisId;

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Each line is a single-letter command against the selected axes.
    Hand,
    /// Each line is a coordinate batch for the dispense sequence.
    #[default]
    Auto,
}

impl Mode {
    /// Line that switches into this mode.
    pub const fn literal(self) -> &'static str {
        match self {
            Mode::Hand => "HandMode",
            Mode::Auto => "AutoMode",
        }
    }

    /// Recognise a mode-switch line (exact, case-sensitive match).
    pub fn from_literal(line: &str) -> Option<Self> {
        match line {
            "HandMode" => Some(Mode::Hand),
            "AutoMode" => Some(Mode::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Which axes a Hand-mode command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisTarget {
    /// A single motor.
    Single(AxisId),
    /// Motors 1, 2 and 3 together.
    All,
}

impl AxisTarget {
    /// Decode a `D` command selector: 1-3 pick one motor, 0 picks all.
    pub fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            0 => Some(AxisTarget::All),
            n => AxisId::from_motor_number(n).map(AxisTarget::Single),
        }
    }

    /// Axes covered by this target, in dispatch order.
    pub fn axes(self) -> &'static [AxisId] {
        match self {
            AxisTarget::Single(AxisId::X) => &[AxisId::X],
            AxisTarget::Single(AxisId::Y) => &[AxisId::Y],
            AxisTarget::Single(AxisId::Z) => &[AxisId::Z],
            AxisTarget::All => &AxisId::ALL,
        }
    }

    /// Whether `axis` is covered by this target.
    pub fn includes(self, axis: AxisId) -> bool {
        match self {
            AxisTarget::Single(selected) => selected == axis,
            AxisTarget::All => true,
        }
    }
}

/// Operator-facing name: `Motor1`..`Motor3` or `All Motors`.
impl fmt::Display for AxisTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisTarget::Single(axis) => write!(f, "Motor{}", axis.motor_number()),
            AxisTarget::All => f.write_str("All Motors"),
        }
    }
}

/// Mode and selection carried from one line to the next.
///
/// Starts in [`Mode::Auto`] with nothing selected. Older firmware left the
/// selector zeroed at power-on, which behaved as [`AxisTarget::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    mode: Mode,
    selection: Option<AxisTarget>,
}

impl ModeState {
    /// Power-on state.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Auto,
            selection: None,
        }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current selection, `None` until the first valid `D` command.
    #[inline]
    pub fn selection(&self) -> Option<AxisTarget> {
        self.selection
    }

    /// Switch mode. Switching to the current mode is allowed.
    pub fn switch(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Apply a `D` selector.
    ///
    /// # Errors
    ///
    /// Returns the rejected selector if it is not 0-3; the selection is left
    /// unchanged.
    pub fn select(&mut self, selector: i32) -> Result<AxisTarget, i32> {
        let target = AxisTarget::from_selector(selector).ok_or(selector)?;
        debug!("selected {}", target);
        self.selection = Some(target);
        Ok(target)
    }
}
