use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated reading of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Chronologically ascending history of one (patient, test) pair.
///
/// The constructor sorts by acquisition date (stable, so same-day readings
/// keep their insertion order), which is the ordering the forecaster
/// assumes. Caller-owned; the core never persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<ObservedValue>,
}

impl TimeSeries {
    pub fn from_points(mut points: Vec<ObservedValue>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn latest(&self) -> Option<ObservedValue> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn points_are_ordered_by_date() {
        let series = TimeSeries::from_points(vec![
            ObservedValue { date: date("2026-03-10"), value: 104.0 },
            ObservedValue { date: date("2026-01-05"), value: 100.0 },
            ObservedValue { date: date("2026-02-11"), value: 102.0 },
        ]);
        assert_eq!(series.values(), vec![100.0, 102.0, 104.0]);
        assert_eq!(series.latest().unwrap().value, 104.0);
    }

    #[test]
    fn empty_series() {
        let series = TimeSeries::from_points(vec![]);
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }
}
