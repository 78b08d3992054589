//! Display helpers for fluid amounts.
//!
//! Amounts are shown in whole millibuckets with thousands separators. Droplets
//! that don't make up a full millibucket are appended as a unicode fraction
//! over 81, e.g. `1,000 ⁴⁰⁄₈₁`.

use crate::units::MILLIBUCKET;

const SUPERSCRIPT: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const FRACTION_SLASH: char = '⁄';

/// Formats a droplet amount as millibuckets.
#[must_use]
pub fn value_display(droplets: i64) -> String {
    let millibuckets = droplets / MILLIBUCKET;
    let remainder = (droplets % MILLIBUCKET).unsigned_abs();

    if remainder == 0 {
        return group_thousands(millibuckets);
    }

    let fraction = unicode_fraction(remainder, MILLIBUCKET.unsigned_abs());
    if millibuckets == 0 {
        if droplets < 0 {
            format!("-{fraction}")
        } else {
            fraction
        }
    } else {
        format!("{} {fraction}", group_thousands(millibuckets))
    }
}

/// Inserts `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn unicode_fraction(numerator: u64, denominator: u64) -> String {
    let mut out = map_digits(numerator, &SUPERSCRIPT);
    out.push(FRACTION_SLASH);
    out.push_str(&map_digits(denominator, &SUBSCRIPT));
    out
}

fn map_digits(value: u64, table: &[char; 10]) -> String {
    value
        .to_string()
        .bytes()
        .map(|b| table[usize::from(b - b'0')])
        .collect()
}
