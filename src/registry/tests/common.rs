use std::sync::{Arc, Mutex};

use axum::response::Response;

use crate::registry::domain::{Candidate, VoterId, VoterRecord};
use crate::registry::memory::InMemoryRecordStore;
use crate::registry::repository::{RecordStore, RepositoryError};
use crate::registry::service::RegistryService;

pub(super) fn adult(id: i64) -> Candidate {
    Candidate::new(id, "Ana", 25, true)
}

pub(super) fn build_service() -> (RegistryService<InMemoryRecordStore>, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::default());
    let service = RegistryService::new(store.clone());
    (service, store)
}

/// Arguments passed to `save`, captured for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SaveCall {
    pub(super) id: VoterId,
    pub(super) name: String,
    pub(super) age: u32,
    pub(super) alive: bool,
}

/// Scripted store: answers `exists_by_id` with a fixed value and records every call.
#[derive(Default)]
pub(super) struct ScriptedStore {
    pub(super) exists: bool,
    pub(super) exists_calls: Mutex<Vec<VoterId>>,
    pub(super) saves: Mutex<Vec<SaveCall>>,
}

impl ScriptedStore {
    pub(super) fn reporting_existing() -> Self {
        Self {
            exists: true,
            ..Self::default()
        }
    }

    pub(super) fn saves(&self) -> Vec<SaveCall> {
        self.saves.lock().expect("saves mutex poisoned").clone()
    }

    pub(super) fn exists_calls(&self) -> Vec<VoterId> {
        self.exists_calls
            .lock()
            .expect("exists mutex poisoned")
            .clone()
    }
}

impl RecordStore for ScriptedStore {
    fn init_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn exists_by_id(&self, id: VoterId) -> Result<bool, RepositoryError> {
        self.exists_calls
            .lock()
            .expect("exists mutex poisoned")
            .push(id);
        Ok(self.exists)
    }

    fn save(
        &self,
        id: VoterId,
        name: &str,
        age: u32,
        alive: bool,
    ) -> Result<(), RepositoryError> {
        self.saves.lock().expect("saves mutex poisoned").push(SaveCall {
            id,
            name: name.to_string(),
            age,
            alive,
        });
        Ok(())
    }

    fn find_by_id(&self, _id: VoterId) -> Result<Option<VoterRecord>, RepositoryError> {
        Ok(None)
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn init_schema(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn exists_by_id(&self, _id: VoterId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save(
        &self,
        _id: VoterId,
        _name: &str,
        _age: u32,
        _alive: bool,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_id(&self, _id: VoterId) -> Result<Option<VoterRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Reports ids as free but fails on insert, as a store does when it loses a
/// race or its disk fills up mid-request.
pub(super) struct FailingInsertStore {
    pub(super) error: RepositoryError,
}

impl RecordStore for FailingInsertStore {
    fn init_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn exists_by_id(&self, _id: VoterId) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn save(
        &self,
        _id: VoterId,
        _name: &str,
        _age: u32,
        _alive: bool,
    ) -> Result<(), RepositoryError> {
        Err(self.error.clone())
    }

    fn find_by_id(&self, _id: VoterId) -> Result<Option<VoterRecord>, RepositoryError> {
        Ok(None)
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}
