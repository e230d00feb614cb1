//! App-directory (dock) service contracts and shared wire records.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::Deserialize;
use thiserror::Error;

/// Object-safe boxed future used by [`AppDirectoryService`] async methods.
pub type AppDirectoryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One installed-app entry as returned by the dock service. Extra payload
/// fields (running status and the like) are ignored.
pub struct DockAppRecord {
    /// Stable app identifier.
    pub id: String,
    /// Human-readable launcher name.
    pub name: String,
    /// Icon identifier or path.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// App-directory fetch failures.
pub enum DirectoryError {
    /// The dock service could not be reached.
    #[error("app directory unreachable: {0}")]
    Unreachable(String),
    /// The service answered with a payload that could not be decoded.
    #[error("app directory response malformed: {0}")]
    Decode(String),
}

/// Host service reporting the set of installed applications.
pub trait AppDirectoryService {
    /// Fetches the current installed-app list.
    fn installed_apps(&self) -> AppDirectoryFuture<'_, Result<Vec<DockAppRecord>, DirectoryError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Directory service that treats every call as unreachable.
pub struct NoopDirectoryService;

impl AppDirectoryService for NoopDirectoryService {
    fn installed_apps(&self) -> AppDirectoryFuture<'_, Result<Vec<DockAppRecord>, DirectoryError>> {
        Box::pin(async { Err(DirectoryError::Unreachable("no dock backend".to_string())) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory directory service with a settable record list, used by tests.
pub struct MemoryDirectoryService {
    records: Rc<RefCell<Vec<DockAppRecord>>>,
}

impl MemoryDirectoryService {
    /// Replaces the record list served to callers.
    pub fn set_records(&self, records: Vec<DockAppRecord>) {
        *self.records.borrow_mut() = records;
    }
}

impl AppDirectoryService for MemoryDirectoryService {
    fn installed_apps(&self) -> AppDirectoryFuture<'_, Result<Vec<DockAppRecord>, DirectoryError>> {
        Box::pin(async move { Ok(self.records.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn dock_records_ignore_unknown_payload_fields() {
        let raw = r#"[{"id":"bio","name":"Bio","icon":"id-card","running":true,"unit":"bio.service"}]"#;
        let records: Vec<DockAppRecord> = serde_json::from_str(raw).expect("decode");
        assert_eq!(
            records,
            vec![DockAppRecord {
                id: "bio".to_string(),
                name: "Bio".to_string(),
                icon: "id-card".to_string(),
            }]
        );
    }

    #[test]
    fn memory_directory_serves_the_latest_record_list() {
        let service = MemoryDirectoryService::default();
        service.set_records(vec![DockAppRecord {
            id: "mail".to_string(),
            name: "Mail".to_string(),
            icon: String::new(),
        }]);

        let service_obj: &dyn AppDirectoryService = &service;
        let records = block_on(service_obj.installed_apps()).expect("list");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "mail");
    }
}
