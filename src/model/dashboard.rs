//! Persisted dashboard document
//!
//! The dashboard is a single JSON file. The store owns the `apiList`
//! section; every other section (summary, alerts, top consumers, ...)
//! is carried through rewrites untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::ApiRecord;

/// File name of the dashboard document inside the data directory
pub const DASHBOARD_FILE: &str = "dashboard.json";

/// Document-level metadata, refreshed on every rewrite
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMeta {
    pub environment: String,
    pub generated_at: String,
    pub time_range: String,
}

/// The whole persisted dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardDocument {
    pub meta: DashboardMeta,

    /// Monitored APIs keyed by id
    pub api_list: BTreeMap<String, ApiRecord>,

    /// Sections not owned by the store, preserved verbatim
    #[serde(flatten)]
    pub sections: serde_json::Map<String, Value>,
}

impl DashboardDocument {
    /// Records in deterministic (id) order
    pub fn records(&self) -> Vec<ApiRecord> {
        self.api_list.values().cloned().collect()
    }
}
