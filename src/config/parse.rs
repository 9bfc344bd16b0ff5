//! Count parsing for positional arguments and batch fields.

use super::ParseMode;

/// A parsed cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCount {
    pub value: u32,
    /// The input was not a plain `u32` and the lenient fallback produced
    /// `value`.
    pub fallback: bool,
}

/// C `atoi` semantics: skip leading `isspace` whitespace (vertical tab too), accept an optional sign and
/// the longest run of digits, ignore the rest. No digits gives 0. The value
/// saturates at the `i64` range like `strtol`, is truncated to `i32`, and is
/// then reinterpreted as `u32`, so `-1` becomes `u32::MAX`.
pub fn lenient_atoi(s: &str) -> u32 {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = (b - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value as i32 as u32
}

/// Parse a count under `mode`.
pub fn parse_count(s: &str, mode: ParseMode) -> Result<ParsedCount, String> {
    match s.parse::<u32>() {
        Ok(value) => Ok(ParsedCount {
            value,
            fallback: false,
        }),
        Err(e) => match mode {
            ParseMode::Lenient => Ok(ParsedCount {
                value: lenient_atoi(s),
                fallback: true,
            }),
            ParseMode::Strict => Err(format!("invalid count '{}': {}", s, e)),
        },
    }
}
