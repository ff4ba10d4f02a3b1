//! Integer to Roman-numeral formatting for progression labels.
//!
//! Numerals are always uppercase. Chord quality is not reflected in the case.

use std::fmt;

use serde::Serialize;

/// Largest value that will be formatted. Thousands are spelled as repeated
/// `M`, so this bounds the output at 100 leading `M`s.
pub const MAX_VALUE: i64 = 100_999;

/// Text shown for the not-a-number sentinel.
pub const NOT_A_NUMBER: &str = "NaN";

const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];

/// Result of formatting a value as a Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum RomanNumeral {
    Numeral(String),
    /// Input was not a positive integer in range.
    NotANumber,
}

impl RomanNumeral {
    pub fn as_str(&self) -> &str {
        match self {
            RomanNumeral::Numeral(s) => s,
            RomanNumeral::NotANumber => NOT_A_NUMBER,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, RomanNumeral::Numeral(_))
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RomanNumeral> for String {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.as_str().to_string()
    }
}

/// Format a positive integer as an uppercase Roman numeral.
///
/// Zero, negatives and values above [`MAX_VALUE`] yield
/// [`RomanNumeral::NotANumber`].
///
/// # Example
///
/// ```
/// use diatonic_theory::romanize;
///
/// assert_eq!(romanize(4).as_str(), "IV");
/// assert_eq!(romanize(1994).as_str(), "MCMXCIV");
/// assert_eq!(romanize(0).as_str(), "NaN");
/// ```
pub fn romanize(value: i64) -> RomanNumeral {
    if !(1..=MAX_VALUE).contains(&value) {
        return RomanNumeral::NotANumber;
    }
    let value = value as usize;

    let mut out = "M".repeat(value / 1000);
    out.push_str(HUNDREDS[value / 100 % 10]);
    out.push_str(TENS[value / 10 % 10]);
    out.push_str(ONES[value % 10]);
    RomanNumeral::Numeral(out)
}

/// Parse `input` as an integer and format it.
///
/// Non-numeric input yields [`RomanNumeral::NotANumber`] rather than an error,
/// as do values outside `1..=`[`MAX_VALUE`].
pub fn romanize_str(input: &str) -> RomanNumeral {
    match input.trim().parse::<i64>() {
        Ok(value) => romanize(value),
        Err(_) => RomanNumeral::NotANumber,
    }
}
