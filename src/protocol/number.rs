//! Forgiving integer conversion for command arguments and coordinate fields.

use winnow::ascii::{digit0, multispace0};
use winnow::combinator::opt;
use winnow::token::one_of;
use winnow::{Parser, Result};

/// Parse a leading signed decimal integer, C `atol` style.
///
/// Leading whitespace and one `+`/`-` sign are accepted, digits are read up
/// to the first non-digit and the rest is ignored. Text with no digits
/// yields `0`. Values outside `i32` saturate.
///
/// ```
/// use dispense_rig::protocol::forgiving_int;
///
/// assert_eq!(forgiving_int("50"), 50);
/// assert_eq!(forgiving_int(" -12abc"), -12);
/// assert_eq!(forgiving_int("10X"), 10);
/// assert_eq!(forgiving_int("abc"), 0);
/// assert_eq!(forgiving_int(""), 0);
/// ```
pub fn forgiving_int(text: &str) -> i32 {
    let mut input = text;
    leading_int.parse_next(&mut input).unwrap_or(0)
}

/// Same as [`forgiving_int`] for a raw byte window.
///
/// Windows that are not UTF-8 (a coordinate field cut through a multi-byte
/// character) yield `0`.
pub fn forgiving_int_bytes(window: &[u8]) -> i32 {
    core::str::from_utf8(window).map(forgiving_int).unwrap_or(0)
}

fn leading_int(input: &mut &str) -> Result<i32> {
    (multispace0, opt(one_of(['+', '-'])), digit0)
        .map(|(_, sign, digits): (&str, Option<char>, &str)| accumulate(sign == Some('-'), digits))
        .parse_next(input)
}

/// Fold ASCII digits into an i32, saturating at the bounds.
fn accumulate(negative: bool, digits: &str) -> i32 {
    digits.bytes().fold(0i32, |acc, b| {
        let digit = i32::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}
