//! Row shape shared by the CSV and JSON loaders.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use feature_extractor::PricePoint;
use serde::{Deserialize, Deserializer};

/// One daily row as found in spreadsheet exports (`Date,Open,High,Low,Close,Volume`)
/// or JSON dumps (`date, open, ...`). Unknown columns are ignored.
///
/// JSON keys may be lowercase, capitalized or uppercase. The CSV loader
/// lowercases its header row first, so any casing works there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    #[serde(alias = "Date", alias = "DATE", deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    #[serde(alias = "Open", alias = "OPEN")]
    pub open: f64,
    #[serde(alias = "High", alias = "HIGH")]
    pub high: f64,
    #[serde(alias = "Low", alias = "LOW")]
    pub low: f64,
    #[serde(alias = "Close", alias = "CLOSE")]
    pub close: f64,
    #[serde(alias = "Volume", alias = "VOLUME")]
    pub volume: f64,
}

impl From<PriceRecord> for PricePoint {
    fn from(r: PriceRecord) -> Self {
        PricePoint::new(r.date, r.open, r.high, r.low, r.close, r.volume)
    }
}

/// Accepts `2024-01-31`, `2024-01-31 00:00:00` and RFC 3339 timestamps; the
/// time of day is dropped.
fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(raw.trim()).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
}

pub(crate) fn parse_day(s: &str) -> Option<NaiveDate> {
    s.parse::<NaiveDate>()
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_date_shapes() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(parse_day("2024-01-31"), Some(day));
        assert_eq!(parse_day("2024-01-31 16:00:00"), Some(day));
        assert_eq!(parse_day("2024-01-31T16:00:00Z"), Some(day));
        assert_eq!(parse_day("31/01/2024"), None);
    }

    #[test]
    fn json_field_names_in_either_case() {
        let lower: PriceRecord = serde_json::from_str(
            r#"{"date":"2024-02-01","open":1,"high":2,"low":0.5,"close":1.5,"volume":10}"#,
        )
        .unwrap();
        let upper: PriceRecord = serde_json::from_str(
            r#"{"Date":"2024-02-01","Open":1,"High":2,"Low":0.5,"Close":1.5,"Volume":10}"#,
        )
        .unwrap();
        assert_eq!(lower, upper);

        let point = PricePoint::from(lower);
        assert_eq!(point.close, 1.5);
        assert_eq!(point.volume, 10.0);
    }
}
