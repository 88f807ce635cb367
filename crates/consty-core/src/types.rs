//! Common value types used throughout Consty RS

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A salary month key in `YYYY-MM` form.
///
/// Ordered so the UI can present unpaid months sorted; which months block
/// a payment is decided remotely, not from this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayMonth {
    pub year: i32,
    pub month: u32,
}

impl PayMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month key: {0:?} (expected YYYY-MM)")]
pub struct ParsePayMonthError(String);

impl FromStr for PayMonth {
    type Err = ParsePayMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePayMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        PayMonth::new(year, month).ok_or_else(err)
    }
}

impl Serialize for PayMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PayMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A start/deadline date pair, used for progress interpolation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct DateSpan {
    pub start: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
}

impl DateSpan {
    pub fn new(start: Option<NaiveDate>, deadline: Option<NaiveDate>) -> Self {
        Self { start, deadline }
    }

    /// Fraction of the span elapsed at `today`, clamped to [0, 1].
    ///
    /// Returns `None` unless both dates are present and the deadline is
    /// strictly after the start.
    pub fn fraction_elapsed(&self, today: NaiveDate) -> Option<f64> {
        let (start, deadline) = (self.start?, self.deadline?);
        let total = (deadline - start).num_days();
        if total <= 0 {
            return None;
        }
        let elapsed = (today - start).num_days();
        Some((elapsed as f64 / total as f64).clamp(0.0, 1.0))
    }
}

/// Deserialize a number the PHP API may emit as either a JSON number or a
/// numeric string (`10.5` or `"10.5"`). Absent/null becomes 0 via
/// `#[serde(default)]` on the field.
pub fn de_f64_flex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid number: {:?}", s))),
    }
}

/// Optional variant of [`de_f64_flex`]; null and absent both map to `None`.
pub fn de_opt_f64_flex<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Str(s)) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid number: {:?}", s))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_month_parse_and_display() {
        let month: PayMonth = "2025-03".parse().unwrap();
        assert_eq!(month, PayMonth::new(2025, 3).unwrap());
        assert_eq!(month.to_string(), "2025-03");

        assert!("2025-13".parse::<PayMonth>().is_err());
        assert!("march".parse::<PayMonth>().is_err());
    }

    #[test]
    fn test_pay_month_ordering() {
        let jan: PayMonth = "2025-01".parse().unwrap();
        let feb: PayMonth = "2025-02".parse().unwrap();
        let dec_prev: PayMonth = "2024-12".parse().unwrap();
        assert!(dec_prev < jan);
        assert!(jan < feb);
    }

    #[test]
    fn test_fraction_elapsed() {
        let span = DateSpan::new(
            NaiveDate::from_ymd_opt(2025, 1, 1),
            NaiveDate::from_ymd_opt(2025, 1, 11),
        );

        let halfway = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(span.fraction_elapsed(halfway), Some(0.5));

        let before = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(span.fraction_elapsed(before), Some(0.0));

        let after = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(span.fraction_elapsed(after), Some(1.0));
    }

    #[test]
    fn test_fraction_elapsed_invalid_span() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

        let missing = DateSpan::new(None, NaiveDate::from_ymd_opt(2025, 1, 11));
        assert_eq!(missing.fraction_elapsed(today), None);

        let inverted = DateSpan::new(
            NaiveDate::from_ymd_opt(2025, 1, 11),
            NaiveDate::from_ymd_opt(2025, 1, 1),
        );
        assert_eq!(inverted.fraction_elapsed(today), None);
    }

    #[derive(Deserialize)]
    struct FlexRow {
        #[serde(default, deserialize_with = "de_f64_flex")]
        amount: f64,
        #[serde(default, deserialize_with = "de_opt_f64_flex")]
        progress: Option<f64>,
    }

    #[test]
    fn test_flexible_numbers() {
        let row: FlexRow = serde_json::from_str(r#"{"amount": "12.5", "progress": 40}"#).unwrap();
        assert_eq!(row.amount, 12.5);
        assert_eq!(row.progress, Some(40.0));

        let row: FlexRow = serde_json::from_str(r#"{"amount": 3, "progress": null}"#).unwrap();
        assert_eq!(row.amount, 3.0);
        assert_eq!(row.progress, None);

        let row: FlexRow = serde_json::from_str(r#"{"amount": 1, "progress": ""}"#).unwrap();
        assert_eq!(row.progress, None);
    }
}
