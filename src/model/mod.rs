//! Data model for the API inventory
//!
//! Records are fully typed at the storage boundary: HTTP method and health
//! status are closed enums, counters and latencies are real numbers. The
//! query engine never coerces untyped values at match time.

mod dashboard;
mod record;

pub use dashboard::{DashboardDocument, DashboardMeta, DASHBOARD_FILE};
pub use record::{ApiRecord, ApiRecordDraft, ApiRecordPatch, ApiStatus, HttpMethod, RecordField};
