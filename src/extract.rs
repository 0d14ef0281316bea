//! Heuristic measurement extraction from OCR'd report text.
//!
//! This is a best-effort line scanner, not a grammar: a line yields a
//! measurement for every test whose synonym it mentions, valued at the
//! first numeric token found on that line. Lines with no recognized test
//! or no parsable number contribute nothing, and partial results are
//! valid output.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::TEST_DESCRIPTORS;
use crate::models::Measurement;

/// First decimal-looking token on a line. Comma is accepted as a decimal
/// separator and normalized before parsing.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+\.?\d*").unwrap());

/// Scan free text for recognizable test mentions and their values.
///
/// Output preserves input line order; when one line names two tests, both
/// measurements carry the same first numeric token (documented heuristic —
/// ambiguity on a line is always resolved in favor of the first number).
/// Units come from the descriptor table, never from the text. Zero or
/// unparsable values are dropped, so every returned measurement has a
/// strictly positive value.
pub fn extract_measurements(text: &str) -> Vec<Measurement> {
    let mut measurements = Vec::new();

    for line in text.lines() {
        let lower = line.to_lowercase();

        for descriptor in TEST_DESCRIPTORS {
            if !descriptor.synonyms.iter().any(|syn| lower.contains(syn)) {
                continue;
            }

            match first_number(&lower) {
                Some(value) => measurements.push(Measurement {
                    test: descriptor.test,
                    value,
                    unit: descriptor.unit.to_string(),
                }),
                None => {
                    tracing::debug!(
                        test = descriptor.test.as_str(),
                        line = %line.trim(),
                        "test mentioned without a parsable value, skipping"
                    );
                }
            }
        }
    }

    measurements
}

/// First numeric token on the line as a positive float, if any.
fn first_number(line: &str) -> Option<f64> {
    let token = NUMBER_TOKEN.find(line)?.as_str();
    let normalized = token.replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Some(v),
        _ => None,
    }
}
