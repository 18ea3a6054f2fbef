//! Single-letter Hand-mode commands.

use super::number::forgiving_int;

/// What a Hand-mode line asks for, keyed by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    /// `O`: report positions and selection.
    Report,
    /// `V`: start an absolute move (mm).
    MoveTo,
    /// `M`: start a relative move (mm).
    MoveBy,
    /// `R`: absolute move that blocks inside the driver (mm).
    RunTo,
    /// `S`: redefine the current position (mm).
    SetPosition,
    /// `A`: set acceleration (raw driver units).
    SetAcceleration,
    /// `X`: set max speed (raw driver units).
    SetMaxSpeed,
    /// `D`: select motor 1-3, or 0 for all.
    Select,
    /// Anything else, including an empty line.
    Unknown,
}

impl CommandKind {
    /// Decode a command letter. Case-sensitive.
    pub fn from_char(c: char) -> Self {
        match c {
            'O' => CommandKind::Report,
            'V' => CommandKind::MoveTo,
            'M' => CommandKind::MoveBy,
            'R' => CommandKind::RunTo,
            'S' => CommandKind::SetPosition,
            'A' => CommandKind::SetAcceleration,
            'X' => CommandKind::SetMaxSpeed,
            'D' => CommandKind::Select,
            _ => CommandKind::Unknown,
        }
    }

    /// Command letter, `None` for [`CommandKind::Unknown`].
    pub fn letter(self) -> Option<char> {
        match self {
            CommandKind::Report => Some('O'),
            CommandKind::MoveTo => Some('V'),
            CommandKind::MoveBy => Some('M'),
            CommandKind::RunTo => Some('R'),
            CommandKind::SetPosition => Some('S'),
            CommandKind::SetAcceleration => Some('A'),
            CommandKind::SetMaxSpeed => Some('X'),
            CommandKind::Select => Some('D'),
            CommandKind::Unknown => None,
        }
    }
}

/// A parsed Hand-mode line: command letter plus numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandCommand {
    /// Command kind.
    pub kind: CommandKind,
    /// Argument; `0` when missing or not numeric.
    pub arg: i32,
}

impl HandCommand {
    /// Create a command.
    pub const fn new(kind: CommandKind, arg: i32) -> Self {
        Self { kind, arg }
    }

    /// Parse a Hand-mode line.
    ///
    /// Never fails: unrecognised letters become [`CommandKind::Unknown`] and
    /// unreadable arguments become `0`.
    pub fn parse(line: &str) -> Self {
        let mut chars = line.chars();
        match chars.next() {
            Some(c) => Self::new(CommandKind::from_char(c), forgiving_int(chars.as_str())),
            None => Self::new(CommandKind::Unknown, 0),
        }
    }
}
