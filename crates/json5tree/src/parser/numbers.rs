//! Numeric literal scanning and evaluation.
//!
//! The grammar is deliberately loose: an optional sign, then either a
//! `0x`/`0X` hex run, a decimal run with optional fraction, or a bare
//! leading `.` (read as `0.`), then an optional `e`/`E` exponent. Stray hex
//! letters after a decimal run are consumed but contribute nothing to the
//! value, like `strtol` stopping at the first non-decimal digit.
//!
//! The exponent is applied by repeated multiplication, once per unit of
//! magnitude, by `10.0` for a positive or absent sign and `0.1` for a
//! negative sign. That loop, not `pow`, defines the exact result. A present
//! exponent always yields a [`Number::Real`]. The loop runs in `f64`, so an
//! extreme exponent saturates to infinity (or flushes to zero) rather than
//! erroring.

use alloc::string::String;

use super::error::Error;

/// A scanned numeric literal, keeping integers and reals apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Real(f64),
}

/// Scans the numeric literal starting at `at` and evaluates it.
///
/// On success returns the value and the position just past the consumed
/// text. A literal that runs to the end of the buffer with no terminating
/// character is `InvalidValue`.
pub(crate) fn scan_number(buf: &[u8], at: usize) -> Result<(Number, usize), Error> {
    let mut i = at;
    let mut negative = false;
    match buf.get(i) {
        Some(b'-') => {
            negative = true;
            i += 1;
        }
        Some(b'+') => i += 1,
        _ => {}
    }

    let mut is_real = false;
    let mut int_digits: &[u8] = &[];
    let mut frac_digits: &[u8] = &[];
    let mut hex_value: Option<i64> = None;

    if buf.get(i) == Some(&b'.') {
        // Leading dot: read as "0." plus the fraction.
        is_real = true;
        i += 1;
        let start = i;
        while matches!(buf.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
        frac_digits = &buf[start..i];
    } else if buf.get(i) == Some(&b'0') && matches!(buf.get(i + 1), Some(&b'x' | &b'X')) {
        i += 2;
        let start = i;
        while matches!(buf.get(i), Some(c) if c.is_ascii_hexdigit()) {
            i += 1;
        }
        hex_value = Some(fold_hex(&buf[start..i]));
    } else {
        let start = i;
        while matches!(buf.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
        int_digits = &buf[start..i];

        if matches!(buf.get(i), Some(c) if is_stray_hex(*c)) {
            // Bare hex letters without an 0x prefix: consumed, ignored.
            while matches!(buf.get(i), Some(c) if c.is_ascii_hexdigit() || matches!(c, b'x' | b'X'))
            {
                i += 1;
            }
        } else if buf.get(i) == Some(&b'.') {
            is_real = true;
            i += 1;
            let start = i;
            while matches!(buf.get(i), Some(c) if c.is_ascii_digit()) {
                i += 1;
            }
            frac_digits = &buf[start..i];
        }
    }

    let mut has_exponent = false;
    let mut exponent: u32 = 0;
    let mut exponent_base = 10.0f64;
    if matches!(buf.get(i), Some(&b'e' | &b'E')) {
        has_exponent = true;
        i += 1;
        if matches!(buf.get(i), Some(c) if matches!(c, b'+' | b'-') || c.is_ascii_digit()) {
            if buf.get(i) == Some(&b'-') {
                exponent_base = 0.1;
            }
            if !matches!(buf.get(i), Some(c) if c.is_ascii_digit()) {
                i += 1;
            }
            let start = i;
            while matches!(buf.get(i), Some(c) if c.is_ascii_digit()) {
                i += 1;
            }
            exponent = fold_exponent(&buf[start..i]);
        }
    }

    // A literal must end before the buffer does; there is no terminator to
    // stop at otherwise.
    if i >= buf.len() {
        return Err(Error::InvalidValue);
    }

    let number = if is_real || has_exponent {
        let mut value = if let Some(hex) = hex_value {
            let magnitude = hex as f64;
            if negative { -magnitude } else { magnitude }
        } else {
            compose_real(negative, int_digits, frac_digits)
        };
        for _ in 0..exponent {
            value *= exponent_base;
        }
        Number::Real(value)
    } else {
        let magnitude = hex_value.unwrap_or_else(|| fold_decimal(int_digits));
        Number::Integer(if negative {
            magnitude.saturating_neg()
        } else {
            magnitude
        })
    };

    Ok((number, i))
}

/// A hex letter that cannot start an exponent.
fn is_stray_hex(c: u8) -> bool {
    matches!(c, b'a'..=b'd' | b'f' | b'A'..=b'D' | b'F' | b'x' | b'X')
}

/// Decimal digit fold, saturating at `i64::MAX` on overflow.
fn fold_decimal(digits: &[u8]) -> i64 {
    digits.iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    })
}

/// Hex digit fold, saturating at `i64::MAX` on overflow.
fn fold_hex(digits: &[u8]) -> i64 {
    digits.iter().fold(0i64, |acc, d| {
        let nibble = match d {
            b'0'..=b'9' => d - b'0',
            b'a'..=b'f' => d - b'a' + 10,
            _ => d - b'A' + 10,
        };
        acc.saturating_mul(16).saturating_add(i64::from(nibble))
    })
}

fn fold_exponent(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

/// Builds the mantissa text and parses it as `f64`.
///
/// The digit slices are ASCII decimal runs, so the composed text is always a
/// well-formed float literal; missing parts are synthesized as `0`.
fn compose_real(negative: bool, int_digits: &[u8], frac_digits: &[u8]) -> f64 {
    let mut text = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        text.push('-');
    }
    if int_digits.is_empty() {
        text.push('0');
    } else {
        for &d in int_digits {
            text.push(char::from(d));
        }
    }
    text.push('.');
    if frac_digits.is_empty() {
        text.push('0');
    } else {
        for &d in frac_digits {
            text.push(char::from(d));
        }
    }
    text.parse().unwrap_or(0.0)
}
