use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::server::util::money::round2;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 7] = [
    "",
    " thousand",
    " million",
    " billion",
    " trillion",
    " quadrillion",
    " quintillion",
];

/// Spells out a monetary amount in cheque style.
///
/// The whole part is written in English words and the cents are appended as
/// an `NN/100` fraction, e.g. `"one thousand two hundred and 00/100"`.
/// Negative amounts are prefixed with `"minus"`. Whole parts are expected to
/// fit in 64 bits.
///
/// # Arguments
/// - `amount` - The amount to spell out
///
/// # Returns
/// - `String` - The amount in words
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = round2(amount.abs());
    let whole = rounded.trunc().to_u64().unwrap_or_default();
    let cents = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    let words = format!("{} and {:02}/100", spell_integer(whole), cents);

    if amount.is_sign_negative() && !rounded.is_zero() {
        format!("minus {words}")
    } else {
        words
    }
}

fn spell_integer(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    // Split into groups of three digits, least significant first.
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut parts = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        parts.push(format!("{}{}", spell_group(group), SCALES[scale]));
    }

    parts.join(" ")
}

fn spell_group(n: usize) -> String {
    let mut out = String::new();

    let hundreds = n / 100;
    let rem = n % 100;

    if hundreds > 0 {
        out.push_str(ONES[hundreds]);
        out.push_str(" hundred");
    }

    if rem > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        if rem < 20 {
            out.push_str(ONES[rem]);
        } else {
            out.push_str(TENS[rem / 10]);
            if rem % 10 > 0 {
                out.push('-');
                out.push_str(ONES[rem % 10]);
            }
        }
    }

    out
}
