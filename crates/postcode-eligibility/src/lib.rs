//! Australian postcode work-eligibility classification.
//!
//! The [`classification`] module holds the reconciliation engine: range
//! expansion, source contributions, the merge engine, invariant repair and the
//! persisted canonical snapshot. The remaining modules carry configuration,
//! logging and error plumbing shared with the HTTP/CLI service.

pub mod classification;
pub mod config;
pub mod error;
pub mod telemetry;
