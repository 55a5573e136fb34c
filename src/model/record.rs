//! Monitored API records and field dispatch
//!
//! `RecordField` is the closed set of queryable field names. Filtering and
//! sorting go through its typed accessors instead of indexing records by
//! arbitrary strings, so an unknown field name is rejected at parse time.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method of a monitored endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
}

impl HttpMethod {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reported health of a monitored endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Healthy,
    Degraded,
    Down,
}

impl ApiStatus {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Healthy => "healthy",
            ApiStatus::Degraded => "degraded",
            ApiStatus::Down => "down",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One monitored API in the inventory
///
/// The (`name`, `method`, `path`) triple is unique within a collection;
/// the store enforces this on insert and update. `id` is assigned by the
/// store at creation time and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecord {
    pub id: String,
    pub name: String,
    pub version: String,
    pub method: HttpMethod,
    pub path: String,
    pub status: ApiStatus,
    pub requests: u64,
    pub error_rate_percent: f64,
    pub p95_latency_ms: f64,
    pub owner_team: String,
}

/// Creation payload: an `ApiRecord` without an id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordDraft {
    pub name: String,
    pub version: String,
    pub method: HttpMethod,
    pub path: String,
    pub status: ApiStatus,
    pub requests: u64,
    pub error_rate_percent: f64,
    pub p95_latency_ms: f64,
    pub owner_team: String,
}

impl ApiRecordDraft {
    /// Materializes the draft into a record with the given id
    pub fn into_record(self, id: String) -> ApiRecord {
        ApiRecord {
            id,
            name: self.name,
            version: self.version,
            method: self.method,
            path: self.path,
            status: self.status,
            requests: self.requests,
            error_rate_percent: self.error_rate_percent,
            p95_latency_ms: self.p95_latency_ms,
            owner_team: self.owner_team,
        }
    }
}

/// Partial update payload; absent fields are left unchanged.
///
/// The stored id is immutable, so the patch carries no id field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiRecordPatch {
    pub name: Option<String>,
    pub version: Option<String>,
    pub method: Option<HttpMethod>,
    pub path: Option<String>,
    pub status: Option<ApiStatus>,
    pub requests: Option<u64>,
    pub error_rate_percent: Option<f64>,
    pub p95_latency_ms: Option<f64>,
    pub owner_team: Option<String>,
}

impl ApiRecordPatch {
    /// Merges the patch into an existing record
    pub fn apply(self, record: &mut ApiRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(version) = self.version {
            record.version = version;
        }
        if let Some(method) = self.method {
            record.method = method;
        }
        if let Some(path) = self.path {
            record.path = path;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(requests) = self.requests {
            record.requests = requests;
        }
        if let Some(error_rate_percent) = self.error_rate_percent {
            record.error_rate_percent = error_rate_percent;
        }
        if let Some(p95_latency_ms) = self.p95_latency_ms {
            record.p95_latency_ms = p95_latency_ms;
        }
        if let Some(owner_team) = self.owner_team {
            record.owner_team = owner_team;
        }
    }
}

/// Closed set of `ApiRecord` field names, as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Id,
    Name,
    Version,
    Method,
    Path,
    Status,
    Requests,
    ErrorRatePercent,
    P95LatencyMs,
    OwnerTeam,
}

impl RecordField {
    /// Every record field, in declaration order
    pub const ALL: [RecordField; 10] = [
        RecordField::Id,
        RecordField::Name,
        RecordField::Version,
        RecordField::Method,
        RecordField::Path,
        RecordField::Status,
        RecordField::Requests,
        RecordField::ErrorRatePercent,
        RecordField::P95LatencyMs,
        RecordField::OwnerTeam,
    ];

    /// Fields that accept a filter value (`id` is sortable but not filterable)
    pub const FILTERABLE: [RecordField; 9] = [
        RecordField::Name,
        RecordField::Version,
        RecordField::Method,
        RecordField::Path,
        RecordField::Status,
        RecordField::Requests,
        RecordField::ErrorRatePercent,
        RecordField::P95LatencyMs,
        RecordField::OwnerTeam,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Name => "name",
            RecordField::Version => "version",
            RecordField::Method => "method",
            RecordField::Path => "path",
            RecordField::Status => "status",
            RecordField::Requests => "requests",
            RecordField::ErrorRatePercent => "errorRatePercent",
            RecordField::P95LatencyMs => "p95LatencyMs",
            RecordField::OwnerTeam => "ownerTeam",
        }
    }

    /// Resolves a wire name; returns None for anything outside the closed set
    pub fn from_name(name: &str) -> Option<RecordField> {
        RecordField::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Whether the field holds a numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            RecordField::Requests | RecordField::ErrorRatePercent | RecordField::P95LatencyMs
        )
    }

    /// String representation of the field's value on a record
    pub fn text_of<'a>(&self, record: &'a ApiRecord) -> Cow<'a, str> {
        match self {
            RecordField::Id => Cow::Borrowed(record.id.as_str()),
            RecordField::Name => Cow::Borrowed(record.name.as_str()),
            RecordField::Version => Cow::Borrowed(record.version.as_str()),
            RecordField::Method => Cow::Borrowed(record.method.as_str()),
            RecordField::Path => Cow::Borrowed(record.path.as_str()),
            RecordField::Status => Cow::Borrowed(record.status.as_str()),
            RecordField::Requests => Cow::Owned(record.requests.to_string()),
            RecordField::ErrorRatePercent => Cow::Owned(record.error_rate_percent.to_string()),
            RecordField::P95LatencyMs => Cow::Owned(record.p95_latency_ms.to_string()),
            RecordField::OwnerTeam => Cow::Borrowed(record.owner_team.as_str()),
        }
    }

    /// Numeric value of the field on a record; None for text fields
    pub fn number_of(&self, record: &ApiRecord) -> Option<f64> {
        match self {
            RecordField::Requests => Some(record.requests as f64),
            RecordField::ErrorRatePercent => Some(record.error_rate_percent),
            RecordField::P95LatencyMs => Some(record.p95_latency_ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ApiRecord {
        ApiRecord {
            id: "api_1".to_string(),
            name: "Users API".to_string(),
            version: "v1".to_string(),
            method: HttpMethod::GET,
            path: "/users".to_string(),
            status: ApiStatus::Healthy,
            requests: 100,
            error_rate_percent: 0.5,
            p95_latency_ms: 120.0,
            owner_team: "identity".to_string(),
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["errorRatePercent"], 0.5);
        assert_eq!(json["p95LatencyMs"], 120.0);
        assert_eq!(json["ownerTeam"], "identity");
        assert_eq!(json["method"], "GET");
        assert_eq!(json["status"], "healthy");
    }

    #[test]
    fn test_field_round_trips_wire_names() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_name(field.name()), Some(field));
        }
        assert_eq!(RecordField::from_name("bogusField"), None);
    }

    #[test]
    fn test_numeric_accessors() {
        let record = sample_record();

        assert_eq!(RecordField::Requests.number_of(&record), Some(100.0));
        assert_eq!(RecordField::Name.number_of(&record), None);
        assert!(RecordField::P95LatencyMs.is_numeric());
        assert!(!RecordField::OwnerTeam.is_numeric());
    }

    #[test]
    fn test_text_accessor_covers_every_field() {
        let record = sample_record();

        assert_eq!(RecordField::Method.text_of(&record), "GET");
        assert_eq!(RecordField::Status.text_of(&record), "healthy");
        assert_eq!(RecordField::Requests.text_of(&record), "100");
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut record = sample_record();
        let patch = ApiRecordPatch {
            status: Some(ApiStatus::Degraded),
            requests: Some(250),
            ..Default::default()
        };

        patch.apply(&mut record);

        assert_eq!(record.status, ApiStatus::Degraded);
        assert_eq!(record.requests, 250);
        assert_eq!(record.name, "Users API");
        assert_eq!(record.id, "api_1");
    }

    #[test]
    fn test_draft_into_record() {
        let draft = ApiRecordDraft {
            name: "Orders API".to_string(),
            version: "v2".to_string(),
            method: HttpMethod::POST,
            path: "/orders".to_string(),
            status: ApiStatus::Healthy,
            requests: 50,
            error_rate_percent: 2.0,
            p95_latency_ms: 300.0,
            owner_team: "commerce".to_string(),
        };

        let record = draft.into_record("api_2".to_string());
        assert_eq!(record.id, "api_2");
        assert_eq!(record.method, HttpMethod::POST);
    }
}
