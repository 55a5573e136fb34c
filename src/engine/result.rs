//! Query result: one page of records plus totals

use serde::{Deserialize, Serialize};

use crate::model::ApiRecord;

/// The output of one engine invocation.
///
/// `total` counts records matching the filters before pagination;
/// `total_pages` is `ceil(total / limit)` and is 0 for an empty match set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub data: Vec<ApiRecord>,
}
