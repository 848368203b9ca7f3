//! # Value Deriver
//!
//! Pure, total normalization functions. Every numeric or textual edge case in the
//! pipeline funnels through here, so the sorter, the composer and any renderer agree on
//! what a malformed field means:
//!
//! - [`parse_scalar_or_range_midpoint`]: `"10-20"` → `15`, `"1500"` → `1500`,
//!   anything else → [`Numeric::NotANumber`].
//! - [`format_currency`]: `1500` → `"$1,500"`, `NotANumber` → `"N/A"`.
//! - [`normalize_tag_list`]: `"software;ai"` → `"Software, Ai"`.
//!
//! None of these functions can fail or panic.

use crate::model::{Column, Record};

/// Literal shown wherever a value could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Result of deriving a number from loosely typed text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Value(f64),
    NotANumber,
}

impl Numeric {
    /// Wraps a float, mapping NaN and infinities to [`Numeric::NotANumber`].
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Numeric::Value(value)
        } else {
            Numeric::NotANumber
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Numeric::Value(v) => Some(v),
            Numeric::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Numeric::NotANumber)
    }
}

const RANGE_SEPARATOR: char = '-';

/// Derives a number from a scalar literal or from the midpoint of a `"<low>-<high>"` range.
///
/// A range must split into exactly two parsable halves; a scalar must parse directly.
/// Whitespace around either form is ignored. Everything else is `NotANumber`.
pub fn parse_scalar_or_range_midpoint(raw: &str) -> Numeric {
    if raw.contains(RANGE_SEPARATOR) {
        let parts: Vec<&str> = raw.split(RANGE_SEPARATOR).collect();
        if let [low, high] = parts.as_slice() {
            if let (Some(low), Some(high)) = (parse_literal(low), parse_literal(high)) {
                return Numeric::from_f64((low + high) / 2.0);
            }
        }
        return Numeric::NotANumber;
    }

    parse_literal(raw).map_or(Numeric::NotANumber, Numeric::from_f64)
}

fn parse_literal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a derived number as US dollars with no fractional digits.
pub fn format_currency(n: Numeric) -> String {
    let Some(value) = n.value() else {
        return NOT_AVAILABLE.to_string();
    };

    // f64::round rounds half away from zero, matching en-US currency formatting.
    let rounded = value.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Normalizes a `;` or `, ` delimited tag list into `"Title Case, Title Case"` form.
///
/// Input without any delimiter is treated as a single tag; empty input stays empty.
pub fn normalize_tag_list(raw: &str) -> String {
    raw.replace(';', ", ")
        .split(", ")
        .map(|segment| {
            segment
                .to_lowercase()
                .split(' ')
                .map(capitalize_word)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Numeric value of a column for ordering. Text columns have no numeric value.
pub fn numeric_value(record: &Record, column: Column) -> Numeric {
    match column {
        Column::Amount => parse_scalar_or_range_midpoint(&record.amount),
        Column::RoundValuationUsd => parse_scalar_or_range_midpoint(&record.round_valuation_usd),
        Column::LaunchYear => record
            .launch_year
            .map_or(Numeric::NotANumber, |y| Numeric::Value(f64::from(y))),
        Column::Name | Column::Industries | Column::Round | Column::GrowthStage => {
            Numeric::NotANumber
        }
    }
}

/// Display string for one cell of a record.
pub fn display_cell(record: &Record, column: Column) -> String {
    match column {
        Column::Name => normalize_tag_list(&record.name),
        Column::Industries => normalize_tag_list(&record.industries),
        Column::Round => normalize_tag_list(&record.round),
        Column::GrowthStage => normalize_tag_list(&record.growth_stage),
        Column::Amount | Column::RoundValuationUsd => {
            format_currency(numeric_value(record, column))
        }
        Column::LaunchYear => record
            .launch_year
            .map_or_else(|| NOT_AVAILABLE.to_string(), |y| y.to_string()),
    }
}
