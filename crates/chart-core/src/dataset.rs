// File: crates/chart-core/src/dataset.rs
// Summary: DataPoint and Dataset models for the quarterly GDP series.
// Notes:
// - Each point keeps the date string exactly as delivered so rendered
//   `data-date` attributes round-trip without reformatting.

use chrono::{DateTime, NaiveDate};

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    date: NaiveDate,
    value: f64,
    raw_date: String,
}

impl DataPoint {
    /// Build a point from the source's `[dateString, value]` pair.
    /// `row` is only used for error reporting.
    pub fn try_new(row: usize, raw_date: &str, value: f64) -> Result<Self> {
        let date = parse_date(raw_date).ok_or_else(|| ChartError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidValue { row, value });
        }
        Ok(Self { date, value, raw_date: raw_date.to_string() })
    }

    pub fn date(&self) -> NaiveDate { self.date }

    pub fn value(&self) -> f64 { self.value }

    /// The date string as it appeared in the source document.
    pub fn raw_date(&self) -> &str { &self.raw_date }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (calendar date is kept).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Ordered, non-empty sequence of points in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { points })
    }

    /// Build from `(date, value)` pairs, validating each row.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, f64)]) -> Result<Self> {
        let points = pairs
            .iter()
            .enumerate()
            .map(|(i, (d, v))| DataPoint::try_new(i, d.as_ref(), *v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn points(&self) -> &[DataPoint] { &self.points }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }

    /// Earliest and latest date. The source is chronological but this
    /// does not rely on it.
    pub fn date_extent(&self) -> (NaiveDate, NaiveDate) {
        let first = self.points[0].date;
        self.points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.date), hi.max(p.date)))
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_negative() {
        assert!(matches!(Dataset::new(Vec::new()), Err(ChartError::EmptyDataset)));
        let err = Dataset::from_pairs(&[("1950-01-01", -1.0)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue { row: 0, .. }));
    }

    #[test]
    fn point_accessors_agree_with_source_row() {
        let p = DataPoint::try_new(3, "1950-04-01T00:00:00Z", 290.7).unwrap();
        assert_eq!(p.date(), NaiveDate::from_ymd_opt(1950, 4, 1).unwrap());
        assert_eq!(p.value(), 290.7);
        assert_eq!(p.raw_date(), "1950-04-01T00:00:00Z");
    }

    #[test]
    fn parses_rfc3339_dates() {
        let d = parse_date("1950-04-01T00:00:00Z").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(1950, 4, 1).unwrap());
        assert!(parse_date("April 1950").is_none());
    }

    #[test]
    fn extent_and_max() {
        let ds = Dataset::from_pairs(&[("1951-01-01", 5.0), ("1950-01-01", 9.5)]).unwrap();
        let (lo, hi) = ds.date_extent();
        assert_eq!(lo.to_string(), "1950-01-01");
        assert_eq!(hi.to_string(), "1951-01-01");
        assert_eq!(ds.max_value(), 9.5);
        assert_eq!(ds.points()[0].raw_date(), "1951-01-01");
    }
}
