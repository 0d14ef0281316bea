//! Plain value types exchanged with the transport and storage layers.
//!
//! Everything here is transient per invocation: measurements and verdicts
//! carry no identity beyond their fields, and snapshots/series are rebuilt
//! by the caller from persisted history each time the core is invoked.

pub mod enums;
pub mod measurement;
pub mod series;

pub use enums::{Finding, Symptom, TestId, Verdict, VocabularyError};
pub use measurement::{LabSnapshot, Measurement};
pub use series::{ObservedValue, TimeSeries};
