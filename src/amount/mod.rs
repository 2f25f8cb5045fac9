//! Rewriting raw chip counts as currency amounts.
//!
//! Chip counts in the export are plain integers. For display they are
//! divided by the configured chip scale (100 000 chips to the dollar by
//! default) and written with a leading currency marker.
//!
//! The arithmetic is done on the digit string itself, so there is no
//! rounding and no upper bound on the size of a chip count.

/// Module holding the ordered table of line shapes that carry amounts.
mod rules;
/// Export the rule table and the line converter
pub use self::rules::{pokerstars_rules, AmountConverter, ConversionRule, MatchScope, RuleKind};

use crate::config::ConverterConfig;

/// Turns chip counts into currency strings.
///
/// At least two decimal places are shown. Further places are kept only
/// while they are non zero, so no chips are lost. A whole amount drops
/// the fraction and the separator entirely.
///
/// | chips    | rendered   |
/// |----------|------------|
/// | 150000   | `$1.50`    |
/// | 100000   | `$1`       |
/// | 100      | `$0.001`   |
/// | 12345    | `$0.12345` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipFormatter<'a> {
    symbol: &'a str,
    places: usize,
}

impl<'a> ChipFormatter<'a> {
    pub fn new(config: &'a ConverterConfig) -> Self {
        Self {
            symbol: &config.currency_symbol,
            places: config.decimal_places(),
        }
    }

    pub fn symbol(&self) -> &'a str {
        self.symbol
    }

    /// Scale a run of ASCII digits without the currency marker.
    pub fn decimal(&self, digits: &str) -> String {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

        let digits = digits.trim_start_matches('0');
        let split = digits.len().saturating_sub(self.places);
        let (whole, frac) = digits.split_at(split);
        let whole = if whole.is_empty() { "0" } else { whole };

        let frac = format!("{frac:0>width$}", width = self.places);
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{frac:0<2}")
        }
    }

    /// Scale a run of ASCII digits and prefix the currency marker.
    pub fn format_digits(&self, digits: &str) -> String {
        format!("{}{}", self.symbol, self.decimal(digits))
    }

    pub fn format(&self, chips: u64) -> String {
        self.format_digits(&chips.to_string())
    }
}
