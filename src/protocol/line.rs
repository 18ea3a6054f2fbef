//! Byte-at-a-time line framing for the serial link.

use heapless::{String, Vec};

use crate::error::ProtocolError;

/// Default line buffer capacity. Fits `Y` + 3 + `X` + 40 three-digit fields.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Accumulates bytes into newline-terminated lines.
///
/// A trailing `\r` is stripped so both `\n` and `\r\n` endings work. A line
/// that overflows the buffer is reported once and then skipped up to the
/// next `\n`.
#[derive(Debug, Default)]
pub struct LineReader<const N: usize = DEFAULT_LINE_CAPACITY> {
    buffer: Vec<u8, N>,
    discarding: bool,
}

impl<const N: usize> LineReader<N> {
    /// Create an empty reader.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Ok(Some(line))` when `byte` completes a line and `Ok(None)`
    /// while a line is still being collected.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::LineTooLong`] on the byte that overflows the buffer,
    /// [`ProtocolError::InvalidUtf8`] when a completed line is not UTF-8.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, ProtocolError> {
        if byte == b'\n' {
            if self.discarding {
                self.discarding = false;
                return Ok(None);
            }
            return self.take_line().map(Some);
        }

        if self.discarding {
            return Ok(None);
        }

        if self.buffer.push(byte).is_err() {
            warn!("line overflow at {} bytes", N);
            self.buffer.clear();
            self.discarding = true;
            return Err(ProtocolError::LineTooLong { capacity: N });
        }

        Ok(None)
    }

    /// Bytes collected for the current line.
    #[inline]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Drop any partial line.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    fn take_line(&mut self) -> Result<String<N>, ProtocolError> {
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }
        let bytes = core::mem::take(&mut self.buffer);
        String::from_utf8(bytes).map_err(|_| ProtocolError::InvalidUtf8)
    }
}
