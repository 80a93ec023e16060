//! Duration expressions such as `10m`, `1h30m` or `20.5s`.
//!
//! The grammar is a signed sequence of decimal numbers, each with an optional fraction and a
//! mandatory unit suffix. Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`.
//! The bare string `0` is accepted without a unit.

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of the most negative representable duration, 2^63 nanoseconds.
const LIMIT: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} overflows")]
    Overflow(String),
}

fn unit(name: &str) -> Option<u64> {
    match name {
        "ns" => Some(NANOSECOND),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Consume leading digits, returning the value and the remainder.
///
/// `None` on overflow past 2^63.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    for c in s[..end].bytes() {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(c - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consume leading fractional digits, returning the value, its scale and the remainder.
///
/// Digits beyond the precision of a `u64` are consumed and ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for c in s[..end].bytes() {
        if overflow {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(c - b'0');
        if y > LIMIT {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

/// Parse a duration expression into signed nanoseconds.
pub(crate) fn parse_nanos(input: &str) -> Result<i64, DurationError> {
    let invalid = || DurationError::Invalid(input.to_owned());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (mut value, rest) =
            leading_int(s).ok_or_else(|| DurationError::Overflow(input.to_owned()))?;
        let pre = rest.len() != before;
        s = rest;

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut post = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            fraction = f;
            scale = sc;
            post = rest.len() != before;
            s = rest;
        }
        if !pre && !post {
            return Err(invalid());
        }

        let end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if end == 0 {
            return Err(DurationError::MissingUnit(input.to_owned()));
        }
        let (name, rest) = s.split_at(end);
        s = rest;
        let multiplier = unit(name).ok_or_else(|| DurationError::UnknownUnit {
            unit: name.to_owned(),
            input: input.to_owned(),
        })?;

        if value > LIMIT / multiplier {
            return Err(DurationError::Overflow(input.to_owned()));
        }
        value *= multiplier;
        if fraction > 0 {
            value += (fraction as f64 * (multiplier as f64 / scale)) as u64;
            if value > LIMIT {
                return Err(DurationError::Overflow(input.to_owned()));
            }
        }

        total = total
            .checked_add(value)
            .filter(|total| *total <= LIMIT)
            .ok_or_else(|| DurationError::Overflow(input.to_owned()))?;
    }

    if negative {
        // LIMIT itself is i64::MIN, which has no positive counterpart.
        return Ok((total as i64).wrapping_neg());
    }
    if total > LIMIT - 1 {
        return Err(DurationError::Overflow(input.to_owned()));
    }
    Ok(total as i64)
}

/// Parse a duration expression into whole seconds, truncating toward zero.
pub(crate) fn parse_seconds(input: &str) -> Result<i64, DurationError> {
    parse_nanos(input).map(|nanos| nanos / SECOND as i64)
}
