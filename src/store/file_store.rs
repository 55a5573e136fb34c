//! Dashboard store over a flat JSON file

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::model::{ApiRecord, ApiRecordDraft, ApiRecordPatch, DashboardDocument, DASHBOARD_FILE};
use crate::observability::Logger;

use super::errors::{StoreError, StoreResult};

/// File-backed store for the dashboard document.
///
/// Holds only the file path; every operation reads the document fresh from
/// disk and mutations rewrite it whole.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    path: PathBuf,
}

impl DashboardStore {
    /// Store over an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store over `<data_dir>/dashboard.json`
    pub fn open(data_dir: &Path) -> Self {
        Self::new(data_dir.join(DASHBOARD_FILE))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists
    pub fn is_initialized(&self) -> bool {
        self.path.exists()
    }

    /// Creates the data file with an empty document.
    ///
    /// Fails if the file already exists; `init` must not clobber data.
    pub fn initialize(&self) -> StoreResult<()> {
        if self.is_initialized() {
            return Err(StoreError::Io(format!(
                "refusing to overwrite existing {}",
                self.path.display()
            )));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let mut document = DashboardDocument::default();
        self.save(&mut document)
    }

    /// Reads the whole document from disk
    pub fn load(&self) -> StoreResult<DashboardDocument> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotInitialized(self.path.display().to_string())
            } else {
                StoreError::Io(e.to_string())
            }
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::InvalidDocument(e.to_string()))
    }

    /// Point-in-time record collection, in id order
    pub fn snapshot(&self) -> StoreResult<Vec<ApiRecord>> {
        Ok(self.load()?.records())
    }

    /// Looks up one record by id
    pub fn get(&self, id: &str) -> StoreResult<ApiRecord> {
        self.load()?
            .api_list
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))
    }

    /// Inserts a new record, assigning it a fresh id.
    ///
    /// Rejects a draft whose (name, method, path) triple matches an
    /// existing record.
    pub fn insert(&self, draft: ApiRecordDraft) -> StoreResult<ApiRecord> {
        if draft.name.is_empty() {
            return Err(StoreError::InvalidRecord("name must not be empty".to_string()));
        }

        let mut document = self.load()?;

        let duplicate = document.api_list.values().any(|existing| {
            existing.name == draft.name
                && existing.method == draft.method
                && existing.path == draft.path
        });
        if duplicate {
            return Err(StoreError::DuplicateRecord);
        }

        let id = Uuid::new_v4().to_string();
        let record = draft.into_record(id.clone());
        document.api_list.insert(id.clone(), record.clone());
        self.save(&mut document)?;

        Logger::info(
            "api_record_inserted",
            &[("id", id), ("name", record.name.clone())],
        );

        Ok(record)
    }

    /// Applies a partial update to an existing record.
    ///
    /// The stored id never changes. An update that would collide with
    /// another record's (name, method, path) triple is rejected.
    pub fn update(&self, id: &str, patch: ApiRecordPatch) -> StoreResult<ApiRecord> {
        let mut document = self.load()?;

        let mut record = document
            .api_list
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;
        patch.apply(&mut record);

        if record.name.is_empty() {
            return Err(StoreError::InvalidRecord("name must not be empty".to_string()));
        }

        let collision = document.api_list.values().any(|other| {
            other.id != record.id
                && other.name == record.name
                && other.method == record.method
                && other.path == record.path
        });
        if collision {
            return Err(StoreError::DuplicateRecord);
        }

        document.api_list.insert(id.to_string(), record.clone());
        self.save(&mut document)?;

        Logger::info("api_record_updated", &[("id", id.to_string())]);

        Ok(record)
    }

    /// Removes a record and returns it
    pub fn delete(&self, id: &str) -> StoreResult<ApiRecord> {
        let mut document = self.load()?;

        let removed = document
            .api_list
            .remove(id)
            .ok_or_else(|| StoreError::RecordNotFound(id.to_string()))?;
        self.save(&mut document)?;

        Logger::info("api_record_deleted", &[("id", id.to_string())]);

        Ok(removed)
    }

    /// Rewrites the whole document, refreshing its generation timestamp
    fn save(&self, document: &mut DashboardDocument) -> StoreResult<()> {
        document.meta.generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let content = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| StoreError::Io(e.to_string()))
    }
}
