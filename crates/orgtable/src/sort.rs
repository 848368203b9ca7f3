//! # Sorter
//!
//! Orders a (filtered) record sequence by one column.
//!
//! ## Keys
//!
//! - **Numeric columns** (`amount`, `round_valuation_usd`, `launch_year`) compare by the
//!   value the [`crate::derive`] module derives, never by raw text. `"9"` sorts below
//!   `"10"`, and `"10-20"` sorts as `15`.
//! - **Text columns** (`name`, `industries`, `round`, `growth_stage`) compare
//!   lexicographically after Unicode lower-casing.
//!
//! ## NotANumber Sorts Last
//!
//! A record whose numeric key is `NotANumber` always lands after every record with a
//! value, in ascending **and** descending order. Only value-to-value comparisons honor
//! the direction.
//!
//! ## Stability
//!
//! Keys are derived once per record and the sequence is ordered with a stable sort whose
//! comparator is direction-aware. Records with equal keys therefore keep their input order
//! in both directions: descending is *not* "ascending, then reversed", which would flip
//! every tie group.
//!
//! `SortDirection::Unsorted` returns the input order untouched.

use std::cmp::Ordering;

use crate::derive::{numeric_value, Numeric};
use crate::model::{Column, ColumnKind, Record, SortDirection};

pub fn sort<'a>(records: &[&'a Record], column: Column, direction: SortDirection) -> Vec<&'a Record> {
    if direction == SortDirection::Unsorted {
        return records.to_vec();
    }

    match column.kind() {
        ColumnKind::Numeric => {
            let mut keyed: Vec<(Numeric, &'a Record)> = records
                .iter()
                .map(|record| (numeric_value(record, column), *record))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_numeric(*a, *b, direction));
            keyed.into_iter().map(|(_, record)| record).collect()
        }
        ColumnKind::Text => {
            let mut keyed: Vec<(String, &'a Record)> = records
                .iter()
                .map(|record| {
                    let key = record.text(column).unwrap_or_default().to_lowercase();
                    (key, *record)
                })
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), direction));
            keyed.into_iter().map(|(_, record)| record).collect()
        }
    }
}

fn compare_numeric(a: Numeric, b: Numeric, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Numeric::Value(x), Numeric::Value(y)) => {
            directed(x.partial_cmp(&y).unwrap_or(Ordering::Equal), direction)
        }
        (Numeric::Value(_), Numeric::NotANumber) => Ordering::Less,
        (Numeric::NotANumber, Numeric::Value(_)) => Ordering::Greater,
        (Numeric::NotANumber, Numeric::NotANumber) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Descending => ordering.reverse(),
        SortDirection::Ascending | SortDirection::Unsorted => ordering,
    }
}
