//! Query engine for the API inventory
//!
//! Turns a descriptor plus a record snapshot into a filtered, sorted,
//! paginated result. Three ordered stages: filter, sort, paginate.
//!
//! The engine is a pure function of its inputs. It performs no I/O,
//! never mutates the snapshot, and never fails on malformed descriptor
//! input: bad numeric filters match nothing, unknown sort fields are
//! skipped, and out-of-range pagination falls back to defaults.

mod descriptor;
mod engine;
mod filters;
mod result;
mod sorter;

pub use descriptor::{QueryDescriptor, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use engine::QueryEngine;
pub use filters::{CompareOp, FilterPredicate, NumericFilter};
pub use result::QueryResult;
pub use sorter::RecordSorter;
