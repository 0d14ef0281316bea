//! Reference catalog: the fixed, declarative table describing every test
//! the core recognizes — recognition synonyms, reporting unit, and the
//! clinical normal range.
//!
//! Adding a test type is a data change to [`TEST_DESCRIPTORS`], not a
//! logic change: the extractor, interpreter, and vocabulary all derive
//! from this one table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::TestId;

/// Static description of one recognized test.
///
/// Synonyms are matched case-insensitively as substrings of a report line
/// and must be listed in lowercase. At least two language variants per
/// test (reports arrive in both Latin- and Cyrillic-script layouts).
pub struct TestDescriptor {
    pub test: TestId,
    pub synonyms: &'static [&'static str],
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

/// One entry per [`TestId`] variant, in declaration order.
pub const TEST_DESCRIPTORS: &[TestDescriptor] = &[
    TestDescriptor {
        test: TestId::Hemoglobin,
        synonyms: &["hemoglobin", "гемоглобин"],
        unit: "g/L",
        min: 120.0,
        max: 160.0,
    },
    TestDescriptor {
        test: TestId::Glucose,
        synonyms: &["glucose", "глюкоза"],
        unit: "mmol/L",
        min: 3.3,
        max: 5.5,
    },
    TestDescriptor {
        test: TestId::Leukocytes,
        synonyms: &["leukocytes", "лейкоциты"],
        unit: "x10^9/L",
        min: 4.0,
        max: 9.0,
    },
];

/// Clinical normal range for one test, `min < max`, boundaries inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub test: TestId,
    pub min: f64,
    pub max: f64,
}

/// Immutable lookup of normal ranges, built once at startup and shared by
/// reference into the interpreter. Absence of an entry is a normal
/// outcome (unknown test), not a fault.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    ranges: HashMap<TestId, ReferenceRange>,
}

impl ReferenceCatalog {
    /// Catalog populated from [`TEST_DESCRIPTORS`].
    pub fn builtin() -> Self {
        Self::from_ranges(TEST_DESCRIPTORS.iter().map(|d| ReferenceRange {
            test: d.test,
            min: d.min,
            max: d.max,
        }))
    }

    /// Catalog over an arbitrary set of ranges. Lets tests (and future
    /// per-deployment configuration) control which tests are known.
    pub fn from_ranges<I: IntoIterator<Item = ReferenceRange>>(ranges: I) -> Self {
        Self {
            ranges: ranges.into_iter().map(|r| (r.test, r)).collect(),
        }
    }

    pub fn lookup(&self, test: TestId) -> Option<&ReferenceRange> {
        self.ranges.get(&test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_test_id() {
        let catalog = ReferenceCatalog::builtin();
        for &test in TestId::ALL {
            let range = catalog.lookup(test).unwrap();
            assert!(range.min < range.max, "{test:?} range must be ordered");
        }
    }

    #[test]
    fn builtin_ranges_match_clinical_bounds() {
        let catalog = ReferenceCatalog::builtin();
        let hb = catalog.lookup(TestId::Hemoglobin).unwrap();
        assert_eq!((hb.min, hb.max), (120.0, 160.0));
        let glu = catalog.lookup(TestId::Glucose).unwrap();
        assert_eq!((glu.min, glu.max), (3.3, 5.5));
        let leu = catalog.lookup(TestId::Leukocytes).unwrap();
        assert_eq!((leu.min, leu.max), (4.0, 9.0));
    }

    #[test]
    fn descriptors_carry_two_language_variants() {
        for d in TEST_DESCRIPTORS {
            assert!(d.synonyms.len() >= 2, "{:?} needs >= 2 synonyms", d.test);
            for syn in d.synonyms {
                assert_eq!(*syn, syn.to_lowercase(), "synonyms must be lowercase");
            }
        }
    }

    #[test]
    fn lookup_misses_for_absent_entry() {
        let catalog = ReferenceCatalog::from_ranges([ReferenceRange {
            test: TestId::Glucose,
            min: 3.3,
            max: 5.5,
        }]);
        assert!(catalog.lookup(TestId::Hemoglobin).is_none());
    }
}
