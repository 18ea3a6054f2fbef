//! Coordinate batch lines for Auto mode.
//!
//! Wire format: `Y<yyy>X<xxx><xxx>...`, every field zero-padded to three
//! characters, for example `Y010X100200300`. Values are whole millimeters.

use heapless::Vec;

use super::number::forgiving_int_bytes;

/// Maximum X points accepted from one line. Extra fields are dropped.
pub const MAX_X_POINTS: usize = 40;

/// Width of every coordinate field.
pub const FIELD_WIDTH: usize = 3;

/// One row position and the ordered dispense points along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateBatch {
    /// Row position in millimeters.
    pub y: i32,
    /// Column positions in millimeters, in visiting order.
    pub xs: Vec<i32, MAX_X_POINTS>,
}

impl CoordinateBatch {
    /// Whether a line has the batch shape: a leading `Y` and an `X` marker.
    pub fn matches(line: &str) -> bool {
        line.starts_with('Y') && line.contains('X')
    }

    /// Tokenize a batch line.
    ///
    /// Returns `None` if the line does not have the batch shape. Malformed
    /// fields read as `0`; fields past [`MAX_X_POINTS`] are dropped.
    pub fn parse(line: &str) -> Option<Self> {
        if !Self::matches(line) {
            return None;
        }

        let bytes = line.as_bytes();
        let y = forgiving_int_bytes(window(bytes, 1));

        // matches() guarantees the marker exists
        let x_start = line.find('X')? + 1;
        let mut xs = Vec::new();
        for field in bytes[x_start..].chunks(FIELD_WIDTH) {
            if xs.push(forgiving_int_bytes(field)).is_err() {
                trace!("batch truncated at {} points", MAX_X_POINTS);
                break;
            }
        }

        Some(Self { y, xs })
    }

    /// Number of dispense points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the batch has no dispense points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// A field window starting at `start`, clamped to the end of the input.
fn window(bytes: &[u8], start: usize) -> &[u8] {
    let end = (start + FIELD_WIDTH).min(bytes.len());
    bytes.get(start..end).unwrap_or(&[])
}
