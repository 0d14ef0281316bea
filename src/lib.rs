//! medai-core — the analysis core of a lab-report assistant.
//!
//! Takes free text produced by an external OCR step and turns it into
//! structured, classified measurements; projects value histories one step
//! forward; and correlates reported symptoms with abnormal readings via a
//! fixed rule table. Everything here is a pure, synchronous function over
//! caller-supplied values — transport (bot/HTTP), persistence, and OCR
//! itself live outside this crate and exchange plain values with it.
//!
//! Not a diagnostic system: classification is pattern matching over a
//! small fixed vocabulary of tests and symptoms.

pub mod catalog;
pub mod correlate;
pub mod extract;
pub mod forecast;
pub mod interpret;
pub mod models;
pub mod report;

pub use catalog::{ReferenceCatalog, ReferenceRange};
pub use correlate::correlate;
pub use extract::extract_measurements;
pub use forecast::{forecast_next, forecast_series, ForecastError};
pub use interpret::interpret;
pub use models::{
    Finding, LabSnapshot, Measurement, ObservedValue, Symptom, TestId, TimeSeries, Verdict,
    VocabularyError,
};
pub use report::{analyze_report, AnnotatedMeasurement};
