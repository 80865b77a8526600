//! Byte-size arithmetic for JVM option values.
//!
//! Sizes follow HotSpot conventions: base 1024, optional single-letter
//! unit suffix, bytes when there is no suffix. Anything unparseable is
//! `None` rather than an error so analysis stays total over arbitrary
//! input.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * 1024;
pub const GIGABYTE: u64 = 1024 * 1024 * 1024;

/// A size literal: digits with an optional b/k/m/g suffix, either case.
pub const SIZE_LITERAL: &str = r"((\d{1,})(b|B|k|K|m|M|g|G)?)";

static SIZE_EXACT: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{SIZE_LITERAL}$")).unwrap());
static SIZE_FIND: Lazy<Regex> = Lazy::new(|| Regex::new(SIZE_LITERAL).unwrap());
static NUMBER_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"=(-?\d{1,})$").unwrap());
static STACK_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^-(X)?(ss|X:ThreadStackSize=){SIZE_LITERAL}$")).unwrap());

fn unit_factor(unit: &str) -> u64 {
    match unit {
        "k" | "K" => KILOBYTE,
        "m" | "M" => MEGABYTE,
        "g" | "G" => GIGABYTE,
        _ => 1,
    }
}

/// Groups 2 (digits) and 3 (unit) of [`SIZE_LITERAL`] as bytes.
fn scale(caps: &regex::Captures) -> Option<u64> {
    let digits: u64 = caps.get(2)?.as_str().parse().ok()?;
    let factor = caps.get(3).map_or(1, |m| unit_factor(m.as_str()));
    digits.checked_mul(factor)
}

/// Parses a standalone size literal ("1g", "256k", "2048") to bytes.
pub fn parse_size(literal: &str) -> Option<u64> {
    let caps = SIZE_EXACT.captures(literal)?;
    scale(&caps)
}

/// First size literal found anywhere in an option, as bytes.
///
/// Works for both embedded values ("-Xmx2g") and `=`-separated values
/// ("-XX:MaxMetaspaceSize=256M").
pub fn option_bytes(option: &str) -> Option<u64> {
    let caps = SIZE_FIND.captures(option)?;
    scale(&caps)
}

/// Signed numeric value after the trailing `=` of an option.
pub fn option_number(option: &str) -> Option<i64> {
    let caps = NUMBER_VALUE.captures(option)?;
    caps.get(1)?.as_str().parse().ok()
}

fn div_round_half_even(n: u128, d: u128) -> u128 {
    let quotient = n / d;
    let remainder = n % d;
    match (remainder * 2).cmp(&d) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    }
}

/// Integer division rounding half to even.
pub fn half_even_div(numerator: u64, divisor: u64) -> u64 {
    if divisor == 0 {
        return 0;
    }
    div_round_half_even(numerator as u128, divisor as u128).min(u64::MAX as u128) as u64
}

/// Percentage of `part` in `whole`, rounded half to even.
pub fn percent_of(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 100;
    }
    div_round_half_even(part as u128 * 100, whole as u128).min(u64::MAX as u128) as u64
}

/// Bytes as whole megabytes, rounded half to even. Signed because the
/// metaspace breakdown can go negative when `MaxMetaspaceSize` is smaller
/// than the compressed class space.
pub fn display_mb(bytes: i64) -> i64 {
    let magnitude = div_round_half_even(bytes.unsigned_abs() as u128, MEGABYTE as u128) as i64;
    if bytes < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Byte value of a `-Xss`/`-XX:ThreadStackSize=` option.
///
/// `ThreadStackSize` digits are kilobytes before any unit suffix is
/// applied, matching how HotSpot reads the flag: `-XX:ThreadStackSize=128`
/// and `-Xss128k` are the same stack, and `-XX:ThreadStackSize=256k` is
/// 256m of stack.
pub fn stack_option_bytes(option: &str) -> Option<u64> {
    let caps = STACK_SIZE.captures(option)?;
    let digits: u64 = caps.get(4)?.as_str().parse().ok()?;
    let base = if caps.get(2).map(|m| m.as_str()) == Some("X:ThreadStackSize=") {
        digits.checked_mul(KILOBYTE)?
    } else {
        digits
    };
    let factor = caps.get(5).map_or(1, |m| unit_factor(m.as_str()));
    base.checked_mul(factor)
}

/// Stack size in whole kilobytes, rounded half to even.
pub fn stack_option_kb(option: &str) -> Option<u64> {
    stack_option_bytes(option).map(|bytes| half_even_div(bytes, KILOBYTE))
}
