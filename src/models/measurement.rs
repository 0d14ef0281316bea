use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::TestId;

/// One (test, value, unit) triple extracted from report text.
///
/// `value` is strictly positive: extraction drops zero or unparsable
/// candidates, so a `Measurement` never carries a placeholder value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub test: TestId,
    pub value: f64,
    pub unit: String,
}

/// Latest known value per test for one patient, keys unique.
///
/// Built by the caller from persisted history on every invocation; the
/// core never stores one between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabSnapshot {
    readings: HashMap<TestId, f64>,
}

impl LabSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the latest reading for a test. Overwrites any prior value.
    pub fn insert(&mut self, test: TestId, value: f64) {
        self.readings.insert(test, value);
    }

    /// None when the patient has no recorded reading for this test.
    pub fn get(&self, test: TestId) -> Option<f64> {
        self.readings.get(&test).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }
}

impl FromIterator<(TestId, f64)> for LabSnapshot {
    fn from_iter<I: IntoIterator<Item = (TestId, f64)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}
