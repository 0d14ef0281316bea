//! Rule-based correlation of reported symptoms with latest lab values.
//!
//! Rules are an ordered data table, evaluated first-match-wins, so
//! extending the rule set is a data change. Thresholds intentionally
//! duplicate the catalog bounds for the tests they reference (an explicit
//! design constraint: keep them in sync when the catalog changes).

use crate::models::{Finding, LabSnapshot, Symptom, TestId};

/// Direction of the lab comparison in a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Above,
    Below,
}

/// `(required symptom present) AND (lab comparison true) → finding`.
struct CorrelationRule {
    symptom: Symptom,
    test: TestId,
    comparison: Comparison,
    threshold: f64,
    finding: Finding,
}

impl CorrelationRule {
    /// A rule only matches when the snapshot actually holds a reading for
    /// its test; an absent reading never satisfies the comparison.
    fn matches(&self, symptoms: &[Symptom], labs: &LabSnapshot) -> bool {
        if !symptoms.contains(&self.symptom) {
            return false;
        }
        let Some(reading) = labs.get(self.test) else {
            return false;
        };
        match self.comparison {
            Comparison::Above => reading > self.threshold,
            Comparison::Below => reading < self.threshold,
        }
    }
}

/// Priority-ordered rule set.
const CORRELATION_RULES: &[CorrelationRule] = &[
    CorrelationRule {
        symptom: Symptom::Fever,
        test: TestId::Leukocytes,
        comparison: Comparison::Above,
        threshold: 9.0,
        finding: Finding::BacterialInfection,
    },
    CorrelationRule {
        symptom: Symptom::Weakness,
        test: TestId::Hemoglobin,
        comparison: Comparison::Below,
        threshold: 120.0,
        finding: Finding::IronDeficiencyAnemia,
    },
];

/// Surface a candidate explanation linking symptoms to abnormal labs.
///
/// Evaluates [`CORRELATION_RULES`] in order and returns the first finding
/// whose conditions all hold; [`Finding::NoCorrelation`] is the normal
/// outcome when none do. Duplicate symptoms and their order are
/// irrelevant.
pub fn correlate(symptoms: &[Symptom], labs: &LabSnapshot) -> Finding {
    for rule in CORRELATION_RULES {
        if rule.matches(symptoms, labs) {
            tracing::debug!(
                symptom = rule.symptom.as_str(),
                test = rule.test.as_str(),
                finding = rule.finding.as_str(),
                "correlation rule matched"
            );
            return rule.finding;
        }
    }
    Finding::NoCorrelation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(readings: &[(TestId, f64)]) -> LabSnapshot {
        readings.iter().copied().collect()
    }

    #[test]
    fn fever_with_high_leukocytes_suggests_infection() {
        let labs = snapshot(&[(TestId::Leukocytes, 10.0)]);
        assert_eq!(
            correlate(&[Symptom::Fever], &labs),
            Finding::BacterialInfection
        );
    }

    #[test]
    fn fever_with_normal_leukocytes_finds_nothing() {
        let labs = snapshot(&[(TestId::Leukocytes, 8.0)]);
        assert_eq!(correlate(&[Symptom::Fever], &labs), Finding::NoCorrelation);
    }

    #[test]
    fn weakness_with_low_hemoglobin_suggests_anemia() {
        let labs = snapshot(&[(TestId::Hemoglobin, 110.0)]);
        assert_eq!(
            correlate(&[Symptom::Weakness], &labs),
            Finding::IronDeficiencyAnemia
        );
    }

    #[test]
    fn weakness_with_normal_hemoglobin_finds_nothing() {
        let labs = snapshot(&[(TestId::Hemoglobin, 130.0)]);
        assert_eq!(
            correlate(&[Symptom::Weakness], &labs),
            Finding::NoCorrelation
        );
    }

    #[test]
    fn symptom_without_matching_reading_finds_nothing() {
        // Weakness alone, no hemoglobin reading on file: the comparison
        // cannot be evaluated, so the rule does not fire.
        let labs = snapshot(&[(TestId::Glucose, 4.5)]);
        assert_eq!(
            correlate(&[Symptom::Weakness], &labs),
            Finding::NoCorrelation
        );
    }

    #[test]
    fn abnormal_labs_without_the_symptom_find_nothing() {
        let labs = snapshot(&[(TestId::Leukocytes, 12.0), (TestId::Hemoglobin, 95.0)]);
        assert_eq!(correlate(&[], &labs), Finding::NoCorrelation);
    }

    #[test]
    fn infection_rule_has_priority_when_both_match() {
        let labs = snapshot(&[(TestId::Leukocytes, 11.0), (TestId::Hemoglobin, 100.0)]);
        assert_eq!(
            correlate(&[Symptom::Weakness, Symptom::Fever], &labs),
            Finding::BacterialInfection
        );
    }

    #[test]
    fn duplicate_symptoms_are_harmless() {
        let labs = snapshot(&[(TestId::Hemoglobin, 110.0)]);
        assert_eq!(
            correlate(&[Symptom::Weakness, Symptom::Weakness], &labs),
            Finding::IronDeficiencyAnemia
        );
    }
}
