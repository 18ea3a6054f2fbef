//! Error types for dispense-rig.
//!
//! Provides unified error handling across configuration, axis control, relay
//! actuation and the serial line protocol.
//!
//! Operator mistakes on the serial line (unknown commands, bad motor numbers,
//! malformed numbers) are not errors: they are answered with a
//! [`Reply`](crate::rig::Reply) and processing continues.

use core::fmt;

use crate::config::AxisId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all dispense-rig operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Axis driver error
    Axis(AxisError),
    /// Relay output error
    Relay(RelayError),
    /// Serial line framing error
    Protocol(ProtocolError),
    /// Writing an acknowledgment to the output sink failed
    Output,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Steps per millimeter must be positive
    InvalidStepsPerMm(i32),
    /// Invalid max speed (must be finite and > 0)
    InvalidMaxSpeed {
        /// Axis the value belongs to
        axis: AxisId,
        /// Offending value
        value: f32,
    },
    /// Invalid acceleration (must be finite and > 0)
    InvalidAcceleration {
        /// Axis the value belongs to
        axis: AxisId,
        /// Offending value
        value: f32,
    },
    /// Relay high time must be at least one millisecond
    InvalidPulseTiming(u32),
    /// Ready marker must not be empty
    EmptyReadyMarker,
    /// A builder was missing a required field
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Axis driver errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// STEP or DIR pin operation failed
    PinError,
}

/// Relay output errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayError {
    /// Relay pin operation failed
    PinError,
}

/// Serial line framing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Incoming line exceeded the line buffer
    LineTooLong {
        /// Buffer capacity in bytes
        capacity: usize,
    },
    /// Incoming line was not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Relay(e) => write!(f, "Relay error: {}", e),
            Error::Protocol(e) => write!(f, "Protocol error: {}", e),
            Error::Output => write!(f, "Failed to write acknowledgment"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerMm(v) => {
                write!(f, "Invalid steps per mm: {}. Must be > 0", v)
            }
            ConfigError::InvalidMaxSpeed { axis, value } => {
                write!(f, "Invalid max speed for axis {}: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidAcceleration { axis, value } => {
                write!(f, "Invalid acceleration for axis {}: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidPulseTiming(ms) => {
                write!(f, "Invalid relay pulse time: {} ms. Must be > 0", ms)
            }
            ConfigError::EmptyReadyMarker => write!(f, "Ready marker must not be empty"),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::PinError => write!(f, "STEP/DIR pin operation failed"),
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::PinError => write!(f, "relay pin operation failed"),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::LineTooLong { capacity } => {
                write!(f, "Line exceeds {} bytes, discarded", capacity)
            }
            ProtocolError::InvalidUtf8 => write!(f, "Line is not valid UTF-8, discarded"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<RelayError> for Error {
    fn from(e: RelayError) -> Self {
        Error::Relay(e)
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Error::Protocol(e)
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Output
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for RelayError {}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let err = Error::from(ConfigError::InvalidStepsPerMm(0));
        let mut buf: heapless::String<96> = heapless::String::new();
        core::fmt::write(&mut buf, format_args!("{}", err)).unwrap();
        assert_eq!(buf.as_str(), "Configuration error: Invalid steps per mm: 0. Must be > 0");
    }

    #[test]
    fn test_fmt_error_maps_to_output() {
        assert_eq!(Error::from(fmt::Error), Error::Output);
    }
}
