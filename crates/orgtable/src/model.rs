//! # Domain Model: Records, Columns and Sort Directions
//!
//! A [`Record`] is one organization entry as delivered by the record service. The service
//! is loose about types: any field may arrive as a JSON string, a number or `null`, and
//! the two money fields may hold either a single literal (`"1500000"`) or a range
//! (`"1000000-2000000"`).
//!
//! ## Fixed Schema
//!
//! Rather than threading a `string | number` union through every consumer, decoding
//! normalizes each field once:
//!
//! - Text fields (`name`, `industries`, `round`, `growth_stage`) become `String`.
//!   Numbers are rendered to their decimal text, `null` or a missing key becomes `""`.
//! - `amount` and `round_valuation_usd` keep their **raw text**. Their numeric meaning is
//!   derived on demand by [`crate::derive::parse_scalar_or_range_midpoint`], so the
//!   range/scalar duality lives in exactly one parse step.
//! - `launch_year` becomes `Option<i32>`: integers and numeric strings decode, anything
//!   else decodes to `None` ("unknown").
//!
//! Decoding never fails on a malformed field; only a payload that is not an array of
//! objects is rejected (by the fetch collaborator).
//!
//! ## Columns
//!
//! [`Column`] enumerates the seven displayed columns in their display order. Each column
//! is either [`ColumnKind::Text`] (compared case-insensitively) or
//! [`ColumnKind::Numeric`] (compared by derived value).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::OrgTableError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub industries: String,
    pub round: String,
    pub amount: String,
    pub round_valuation_usd: String,
    pub growth_stage: String,
    pub launch_year: Option<i32>,
}

// Every field is decoded leniently through a JSON value so that a single
// oddly-typed field never rejects the whole record.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = RecordHelper::deserialize(deserializer)?;

        Ok(Record {
            name: text_of(helper.name),
            industries: text_of(helper.industries),
            round: text_of(helper.round),
            amount: text_of(helper.amount),
            round_valuation_usd: text_of(helper.round_valuation_usd),
            growth_stage: text_of(helper.growth_stage),
            launch_year: year_of(&helper.launch_year),
        })
    }
}

#[derive(Deserialize)]
struct RecordHelper {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    industries: Value,
    #[serde(default)]
    round: Value,
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    round_valuation_usd: Value,
    #[serde(default)]
    growth_stage: Value,
    #[serde(default)]
    launch_year: Value,
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn year_of(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_industries(mut self, industries: impl Into<String>) -> Self {
        self.industries = industries.into();
        self
    }

    pub fn with_round(mut self, round: impl Into<String>) -> Self {
        self.round = round.into();
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_valuation(mut self, valuation: impl Into<String>) -> Self {
        self.round_valuation_usd = valuation.into();
        self
    }

    pub fn with_growth_stage(mut self, stage: impl Into<String>) -> Self {
        self.growth_stage = stage.into();
        self
    }

    pub fn with_launch_year(mut self, year: i32) -> Self {
        self.launch_year = Some(year);
        self
    }

    /// Raw text of a text-bearing field. `launch_year` has no text form and yields `None`.
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Name => Some(&self.name),
            Column::Industries => Some(&self.industries),
            Column::Amount => Some(&self.amount),
            Column::Round => Some(&self.round),
            Column::RoundValuationUsd => Some(&self.round_valuation_usd),
            Column::GrowthStage => Some(&self.growth_stage),
            Column::LaunchYear => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Industries,
    Amount,
    Round,
    RoundValuationUsd,
    GrowthStage,
    LaunchYear,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Column; 7] = [
        Column::Name,
        Column::Industries,
        Column::Amount,
        Column::Round,
        Column::RoundValuationUsd,
        Column::GrowthStage,
        Column::LaunchYear,
    ];

    /// Wire/field name of the column.
    pub fn field(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Industries => "industries",
            Column::Amount => "amount",
            Column::Round => "round",
            Column::RoundValuationUsd => "round_valuation_usd",
            Column::GrowthStage => "growth_stage",
            Column::LaunchYear => "launch_year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Company Name",
            Column::Industries => "Industry",
            Column::Amount => "Total Funding",
            Column::Round => "Last Funding Round",
            Column::RoundValuationUsd => "Valuation",
            Column::GrowthStage => "Growth Stage",
            Column::LaunchYear => "Launch Year",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Amount | Column::RoundValuationUsd | Column::LaunchYear => ColumnKind::Numeric,
            Column::Name | Column::Industries | Column::Round | Column::GrowthStage => {
                ColumnKind::Text
            }
        }
    }

    /// Direction a column takes the first time it is toggled: text reads best A→Z,
    /// money and years read best largest-first.
    pub fn first_direction(self) -> SortDirection {
        match self.kind() {
            ColumnKind::Text => SortDirection::Ascending,
            ColumnKind::Numeric => SortDirection::Descending,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for Column {
    type Err = OrgTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" | "company" => Ok(Column::Name),
            "industries" | "industry" => Ok(Column::Industries),
            "amount" | "funding" => Ok(Column::Amount),
            "round" => Ok(Column::Round),
            "round_valuation_usd" | "valuation" => Ok(Column::RoundValuationUsd),
            "growth_stage" | "stage" => Ok(Column::GrowthStage),
            "launch_year" | "year" => Ok(Column::LaunchYear),
            _ => Err(OrgTableError::UnknownColumn(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[serde(rename = "none")]
    Unsorted,
}

impl SortDirection {
    pub fn opposite(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
            SortDirection::Unsorted => SortDirection::Unsorted,
        }
    }
}

impl FromStr for SortDirection {
    type Err = OrgTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "none" | "off" | "unsorted" => Ok(SortDirection::Unsorted),
            other => Err(OrgTableError::Input(format!(
                "unknown sort direction \"{}\"",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_strings() {
        let json = r#"{
            "name": "acme robotics",
            "industries": "robotics;ai",
            "round": "series a",
            "amount": "10-20",
            "round_valuation_usd": "1500000",
            "growth_stage": "early growth",
            "launch_year": 2015
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "acme robotics");
        assert_eq!(record.amount, "10-20");
        assert_eq!(record.round_valuation_usd, "1500000");
        assert_eq!(record.launch_year, Some(2015));
    }

    #[test]
    fn test_decode_numbers_as_text() {
        let json = r#"{"name": "n", "amount": 2500000, "round_valuation_usd": 1.5, "launch_year": "2019"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, "2500000");
        assert_eq!(record.round_valuation_usd, "1.5");
        assert_eq!(record.launch_year, Some(2019));
    }

    #[test]
    fn test_decode_nulls_and_missing_fields() {
        let json = r#"{"name": null, "amount": null, "launch_year": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.industries, "");
        assert_eq!(record.amount, "");
        assert_eq!(record.launch_year, None);
    }

    #[test]
    fn test_decode_unparsable_year_is_unknown() {
        let json = r#"{"name": "n", "launch_year": "circa 2010"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.launch_year, None);

        let json = r#"{"name": "n", "launch_year": 2010.0}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.launch_year, Some(2010));
    }

    #[test]
    fn test_serialized_record_decodes_back() {
        let record = Record::new("Acme")
            .with_amount("1-2")
            .with_launch_year(2001);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_column_from_str_aliases() {
        assert_eq!("valuation".parse::<Column>().unwrap(), Column::RoundValuationUsd);
        assert_eq!(
            "round_valuation_usd".parse::<Column>().unwrap(),
            Column::RoundValuationUsd
        );
        assert_eq!("Growth-Stage".parse::<Column>().unwrap(), Column::GrowthStage);
        assert_eq!("company".parse::<Column>().unwrap(), Column::Name);
        assert!(matches!(
            "revenue".parse::<Column>(),
            Err(OrgTableError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_column_kinds_and_first_direction() {
        assert_eq!(Column::Amount.kind(), ColumnKind::Numeric);
        assert_eq!(Column::LaunchYear.kind(), ColumnKind::Numeric);
        assert_eq!(Column::Round.kind(), ColumnKind::Text);
        assert_eq!(Column::Name.first_direction(), SortDirection::Ascending);
        assert_eq!(
            Column::RoundValuationUsd.first_direction(),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_sort_direction_parse_and_serde() {
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("none".parse::<SortDirection>().unwrap(), SortDirection::Unsorted);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(
            serde_json::to_string(&SortDirection::Unsorted).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&Column::RoundValuationUsd).unwrap(),
            "\"round_valuation_usd\""
        );
    }
}
