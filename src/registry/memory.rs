use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{VoterId, VoterRecord};
use super::repository::{RecordStore, RepositoryError};

/// Process-local store. Clones share the same records.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<HashMap<VoterId, VoterRecord>>>,
}

impl InMemoryRecordStore {
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<VoterId, VoterRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store mutex poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn init_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn exists_by_id(&self, id: VoterId) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.contains_key(&id))
    }

    fn save(
        &self,
        id: VoterId,
        name: &str,
        age: u32,
        alive: bool,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict { id });
        }
        guard.insert(
            id,
            VoterRecord {
                id,
                name: name.to_string(),
                age,
                alive,
            },
        );
        Ok(())
    }

    fn find_by_id(&self, id: VoterId) -> Result<Option<VoterRecord>, RepositoryError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    fn delete_all(&self) -> Result<(), RepositoryError> {
        self.lock()?.clear();
        Ok(())
    }
}
