//! Query descriptor: the per-request input to the engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page used when the supplied value is absent or not a positive integer
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the supplied value is absent or not a positive integer
pub const DEFAULT_LIMIT: usize = 10;

/// One query request: filters, sort spec, pagination spec.
///
/// `page` and `limit` hold whatever the caller decoded; normalization to
/// safe values happens here, not at the transport layer. Filter values
/// stay raw strings because parsing them is the engine's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryDescriptor {
    pub page: Option<i64>,
    pub limit: Option<i64>,

    /// Field name to raw filter string; empty values are no-ops
    pub filters: BTreeMap<String, String>,

    /// Sort field name; anything outside the record's field set skips sorting
    pub sort_by: Option<String>,

    /// "desc" reverses the sort; any other value keeps ascending order
    pub order: Option<String>,
}

impl QueryDescriptor {
    /// Normalized page: positive, defaulting to 1
    pub fn normalized_page(&self) -> usize {
        match self.page {
            Some(page) if page > 0 => page as usize,
            _ => DEFAULT_PAGE,
        }
    }

    /// Normalized limit: positive, defaulting to 10.
    ///
    /// A non-positive limit falls back to the default so page math can
    /// never divide by zero.
    pub fn normalized_limit(&self) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => limit as usize,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Sort direction resolved from the raw `order` value
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.order.as_deref())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact string "desc" selects descending order
    pub fn from_param(raw: Option<&str>) -> SortOrder {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}
