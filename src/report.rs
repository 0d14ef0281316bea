//! Report analysis orchestrator: extraction followed by per-measurement
//! interpretation, the path an OCR'd report takes after upload.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::extract::extract_measurements;
use crate::interpret::interpret;
use crate::models::{Measurement, Verdict};

/// A measurement paired with its reference-range classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedMeasurement {
    pub measurement: Measurement,
    pub verdict: Verdict,
}

/// Extract every recognizable measurement from report text and classify
/// each against the catalog. Returns an empty vec for text with nothing
/// recognizable; measurement order follows the text.
pub fn analyze_report(catalog: &ReferenceCatalog, text: &str) -> Vec<AnnotatedMeasurement> {
    let annotated: Vec<AnnotatedMeasurement> = extract_measurements(text)
        .into_iter()
        .map(|measurement| {
            let verdict = interpret(catalog, measurement.test, measurement.value);
            AnnotatedMeasurement { measurement, verdict }
        })
        .collect();

    tracing::debug!(
        lines = text.lines().count(),
        measurements = annotated.len(),
        "report analyzed"
    );

    annotated
}
